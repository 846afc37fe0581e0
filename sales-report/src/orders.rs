//! Order selection
//!
//! Narrows the order set handed to the report down to one state and a range
//! of creation days. Canceled orders never take part in a report.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderState};

use crate::request::ReportRequest;

/// Exclusive creation-time bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
}

/// Midnight at the start of `date` (UTC)
pub fn beginning_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last representable instant of `date` (UTC)
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    beginning_of_day(date) + Duration::days(1) - Duration::nanoseconds(1)
}

impl DateBounds {
    /// Resolve the request's day range against the order set.
    ///
    /// Missing ends default to the earliest / latest completion day found in
    /// `orders`; with no completed orders that end stays open. Only an
    /// explicit range that is inverted is an error. A single explicit end
    /// lying outside the data yields crossed bounds that select nothing.
    pub fn resolve(request: &ReportRequest, orders: &[Order]) -> AppResult<Self> {
        let after = match request.created_after {
            Some(date) => Some(beginning_of_day(date)),
            None => orders
                .iter()
                .filter_map(|o| o.completed_at)
                .min()
                .map(|t| beginning_of_day(t.date_naive())),
        };
        let before = match request.created_before {
            Some(date) => Some(end_of_day(date)),
            None => orders
                .iter()
                .filter_map(|o| o.completed_at)
                .max()
                .map(|t| end_of_day(t.date_naive())),
        };

        if let (Some(start), Some(end)) = (request.created_after, request.created_before)
            && start > end
        {
            return Err(AppError::new(ErrorCode::InvalidDateRange)
                .with_detail("after", start.to_string())
                .with_detail("before", end.to_string()));
        }

        Ok(Self { after, before })
    }

    /// Whether `at` lies strictly inside the bounds
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.after.is_none_or(|a| at > a) && self.before.is_none_or(|b| at < b)
    }
}

/// Orders in `state`, created inside `bounds`, in input order
pub fn select_orders<'a>(
    orders: &'a [Order],
    bounds: &DateBounds,
    state: OrderState,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| o.state == state && o.state != OrderState::Canceled)
        .filter(|o| bounds.contains(o.created_at))
        .collect()
}
