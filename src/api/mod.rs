//! Endpoint groups
//!
//! Each group owns one slice of the API surface and shares the client's
//! request pipeline. Groups are reached through the public fields of
//! [`WalletsAfrica`](crate::WalletsAfrica); they are not constructed
//! directly.

mod account;
mod airtime;
mod identity;
mod payouts;
mod wallets;

#[cfg(test)]
mod tests;

pub use account::Account;
pub use airtime::Airtime;
pub use identity::Identity;
pub use payouts::Payouts;
pub use wallets::Wallets;

use chrono::NaiveDate;

use crate::error::{Result, WalletsError};
use crate::types::constants::DATE_FORMAT;

/// Checks a caller-supplied date against the layout the API expects.
/// Runs before the request is built, so a bad date never leaves the process.
pub(crate) fn validate_date(field: &str, value: &str) -> Result<()> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(_) => Ok(()),
        Err(e) => Err(WalletsError::validation(format!(
            "{} must be a {} date (e.g. 2020-01-23): {}",
            field, DATE_FORMAT, e
        ))),
    }
}
