use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::US::Eastern;

use crate::models::Quote;

/// Decides whether the regular trading session is open.
pub trait TradingClock {
    fn is_regular_trading_time(&self) -> bool;
}

impl<F: Fn() -> bool> TradingClock for F {
    fn is_regular_trading_time(&self) -> bool {
        self()
    }
}

/// US equity regular session: Monday to Friday, 09:30 to 16:00 Eastern.
///
/// Exchange holidays and early closes are not modelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsEquityHours;

impl UsEquityHours {
    const OPEN_MINUTES: u32 = 9 * 60 + 30;
    const CLOSE_MINUTES: u32 = 16 * 60;

    pub fn is_regular_at(&self, at: DateTime<Utc>) -> bool {
        let now = at.with_timezone(&Eastern);

        if now.weekday() == Weekday::Sat || now.weekday() == Weekday::Sun {
            return false;
        }

        let time_minutes = now.hour() * 60 + now.minute();
        (Self::OPEN_MINUTES..Self::CLOSE_MINUTES).contains(&time_minutes)
    }
}

impl TradingClock for UsEquityHours {
    fn is_regular_trading_time(&self) -> bool {
        self.is_regular_at(Utc::now())
    }
}

impl Quote {
    /// Last trade price during the regular session, last extended-hours price otherwise.
    pub fn price<C: TradingClock + ?Sized>(&self, clock: &C) -> f64 {
        if clock.is_regular_trading_time() {
            self.last_trade_price
        } else {
            self.last_extended_hours_trade_price
        }
    }
}
