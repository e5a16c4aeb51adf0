//! Core types for the Wallets Africa client
//!
//! This module defines the configuration types and the typed records every
//! endpoint returns. It is organized as follows:
//! - [`config`] - Environment selection and client configuration
//! - [`currency`] - Currency and transaction-type wire codes
//! - [`wallet`] - Balance, transaction, and wallet records
//! - [`payout`] - Bank listing and bank-transfer records
//! - [`identity`] - BVN identity records
//! - [`airtime`] - Airtime provider records
//! - [`constants`] - Published environment URLs, sandbox keys, defaults
//!
//! # Examples
//!
//! ## Building a configuration
//!
//! ```
//! use std::time::Duration;
//! use wallets_africa::types::Config;
//!
//! # fn example() -> wallets_africa::Result<()> {
//! let config = Config::live("my-public-key", "my-secret-key")
//!     .with_request_timeout(Duration::from_secs(10));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Wire codes
//!
//! ```
//! use wallets_africa::types::{Currency, TransactionType};
//!
//! // Currencies serialize as their ISO code string.
//! assert_eq!(Currency::Ngn.as_str(), "NGN");
//!
//! // Transaction-type filters serialize as the numeric code.
//! assert_eq!(TransactionType::Debit.code(), 2);
//! ```
//!
//! # Result records
//!
//! Records mirror the API's field names (`Serialize` re-emits them in
//! PascalCase). Monetary amounts stay `f64` because that is what the wire
//! carries; see the crate docs for the precision caveat. Optional fields the
//! API sent as `null` or omitted read as `""` (strings) or `0.0` (numbers).

pub mod airtime;
pub mod config;
pub mod constants;
pub mod currency;
pub mod identity;
pub mod payout;
pub mod wallet;

// Re-export commonly used types
pub use airtime::AirtimeProvider;
pub use config::{Config, Environment};
pub use constants::{DATE_FORMAT, DEFAULT_REQUEST_TIMEOUT};
pub use currency::{Currency, TransactionType};
pub use identity::BvnDetails;
pub use payout::{Bank, BankDetail};
pub use wallet::{CheckBalanceResult, CreditWalletResult, Transaction, Wallet};
