use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use crate::config::{ClientConfig, EP_LOGIN};
use crate::error::{Result, RobinhoodError};
use crate::http::HttpEnvelope;
use crate::models::Detailed;
use crate::wire::null_default;

/// OAuth client id used by the Robinhood web app.
pub const CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";

/// Requested token lifetime.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(72 * 60 * 60);

/// Anything that can produce a bearer token for the trading service.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String>;
}

#[async_trait]
impl<P: TokenProvider + ?Sized> TokenProvider for Arc<P> {
    async fn get_token(&self) -> Result<String> {
        (**self).get_token().await
    }
}

#[async_trait]
impl<P: TokenProvider + ?Sized> TokenProvider for Box<P> {
    async fn get_token(&self) -> Result<String> {
        (**self).get_token().await
    }
}

// ---------------------------------------------------------------------------
// Static token
// ---------------------------------------------------------------------------

/// A token obtained elsewhere, returned as-is.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn get_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// Username / password login
// ---------------------------------------------------------------------------

#[derive(Clone, Serialize)]
struct LoginForm {
    username: String,
    password: String,
    mfa_code: String,
    /// Token lifetime in seconds
    expires_in: u64,
    scope: &'static str,
    client_id: &'static str,
    grant_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginResponse {
    #[serde(deserialize_with = "null_default")]
    access_token: String,
    #[serde(deserialize_with = "null_default")]
    mfa_type: String,
    #[serde(deserialize_with = "null_default")]
    mfa_required: bool,
    #[serde(deserialize_with = "null_default")]
    detail: String,
}

impl Detailed for LoginResponse {
    fn detail(&self) -> &str {
        &self.detail
    }
}

/// Exchanges a username and password for a token via `oauth2/token/`.
///
/// Accounts that demand a second factor fail with
/// [`RobinhoodError::MfaRequired`]; completing the challenge is not supported.
#[derive(Clone)]
pub struct Credentials {
    form: LoginForm,
    config: ClientConfig,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            form: LoginForm {
                username: username.into(),
                password: password.into(),
                mfa_code: String::new(),
                expires_in: TOKEN_LIFETIME.as_secs(),
                // Same values the Robinhood website sends
                scope: "internal",
                client_id: CLIENT_ID,
                grant_type: "password",
            },
            config: ClientConfig::default(),
        }
    }

    /// Attach a one-time code for accounts with two factor enabled.
    pub fn with_mfa(mut self, code: impl Into<String>) -> Self {
        self.form.mfa_code = code.into();
        self
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn username(&self) -> &str {
        &self.form.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.form.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

#[async_trait]
impl TokenProvider for Credentials {
    async fn get_token(&self) -> Result<String> {
        let http = HttpEnvelope::unauthenticated(&self.config)?;
        let response: LoginResponse = http
            .post_and_decode(&self.config.endpoint(EP_LOGIN), &self.form)
            .await?;

        if response.mfa_required {
            return Err(RobinhoodError::MfaRequired(response.mfa_type));
        }

        tracing::info!("Logged in as {}", self.form.username);
        Ok(response.access_token)
    }
}

// ---------------------------------------------------------------------------
// File cache
// ---------------------------------------------------------------------------

/// Caches the token of an inner provider in a file.
///
/// A non-empty file is trusted as-is; there is no expiry check. Otherwise the
/// inner provider is asked once and its token is written to the file.
#[derive(Debug, Clone)]
pub struct CachedToken<P> {
    inner: P,
    path: PathBuf,
}

impl<P: TokenProvider> CachedToken<P> {
    pub fn new(inner: P, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for CachedToken<P> {
    async fn get_token(&self) -> Result<String> {
        let path = self.path.as_path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let mut builder = tokio::fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(0o750);
            builder
                .create(parent)
                .await
                .map_err(|e| RobinhoodError::cache_io(parent, e))?;
        }

        let must_login = match tokio::fs::metadata(path).await {
            Ok(_) => false,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(RobinhoodError::cache_io(path, e)),
        };

        if !must_login {
            let cached = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| RobinhoodError::cache_io(path, e))?;
            if !cached.is_empty() {
                tracing::debug!("Using cached token from {}", path.display());
                return Ok(cached);
            }
        }

        tracing::debug!("No cached token at {}, logging in", path.display());

        let mut options = tokio::fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o640);
        let mut file = options
            .open(path)
            .await
            .map_err(|e| RobinhoodError::cache_io(path, e))?;

        let token = self.inner.get_token().await?;
        if token.is_empty() {
            return Err(RobinhoodError::EmptyToken);
        }

        file.write_all(token.as_bytes())
            .await
            .map_err(|e| RobinhoodError::cache_io(path, e))?;
        file.flush()
            .await
            .map_err(|e| RobinhoodError::cache_io(path, e))?;

        tracing::info!("Cached new token at {}", path.display());
        Ok(token)
    }
}
