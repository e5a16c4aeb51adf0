//! # Wallets Africa Rust Client
//!
//! A typed async client for the [Wallets Africa](https://wallets.africa)
//! financial-wallet API: balances, transaction history, sub wallet creation
//! and funding, bank transfers, BVN identity resolution, and airtime
//! provider lookups.
//!
//! ## Features
//!
//! - 💳 **Full wallet surface**: balance, transactions, wallet generation
//!   and crediting, bank listing, transfer lookups, BVN resolution
//! - 🔒 **Type safety**: every endpoint returns a typed record; credentials
//!   are validated before anything touches the network
//! - 🧹 **Null tolerance**: the API mixes `null` values and absent keys for
//!   optional data; both read as zero values, while mistyped or missing
//!   required fields surface as precise errors
//! - ⏱️ **Bounded requests**: one configurable timeout applied to every call
//! - 🧪 **Mocked end-to-end tests**: the whole pipeline is exercised against
//!   recorded API fixtures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallets_africa::{Currency, TransactionType, WalletsAfrica};
//!
//! #[tokio::main]
//! async fn main() -> wallets_africa::Result<()> {
//!     // The sandbox environment ships with published credentials.
//!     let api = WalletsAfrica::sandbox()?;
//!
//!     let balance = api.account.check_balance(Currency::Ngn).await?;
//!     println!("balance: {} {}", balance.wallet_balance, balance.wallet_currency);
//!
//!     let recent = api
//!         .account
//!         .transactions(Currency::Ngn, TransactionType::All, 20, 0, None, None)
//!         .await?;
//!     for tx in &recent {
//!         println!("{} {:>10.2} {}", tx.date_transacted, tx.amount, tx.narration);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Live credentials go through [`Config`]:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wallets_africa::{Config, WalletsAfrica};
//!
//! # fn example() -> wallets_africa::Result<()> {
//! let config = Config::live("my-public-key", "my-secret-key")
//!     .with_request_timeout(Duration::from_secs(10));
//! let api = WalletsAfrica::new(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T>`]; all failures are
//! [`WalletsError`] variants, so API-level rejections can be told apart
//! from transport problems:
//!
//! ```rust,no_run
//! use wallets_africa::{WalletsAfrica, WalletsError};
//!
//! # async fn example() -> wallets_africa::Result<()> {
//! let api = WalletsAfrica::sandbox()?;
//!
//! match api.identity.resolve_bvn("22231485915").await {
//!     Ok(details) => println!("{} {}", details.first_name, details.last_name),
//!     Err(WalletsError::RequestFailed { code, message }) => {
//!         eprintln!("API rejected the call: {} (code {})", message, code);
//!     }
//!     Err(other) => return Err(other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`client`**: the [`WalletsAfrica`] entry point and the shared request
//!   pipeline (bearer auth, JSON payloads, decode, status handling)
//! - **`api`**: one group per capability (`account`, `wallets`, `payouts`,
//!   `airtime`, `identity`), reached as fields on the client
//! - **`types`**: configuration and the typed records endpoints return
//! - **`error`**: the [`WalletsError`] taxonomy
//!
//! ## A Note on Money
//!
//! The API transmits monetary amounts as JSON numbers and this crate keeps
//! them as `f64` end to end. That matches the wire format exactly, but IEEE
//! doubles are not exact decimal arithmetic; convert before doing math
//! where sub-cent precision matters.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

mod extract;

// Re-exports for convenience
pub use api::{Account, Airtime, Identity, Payouts, Wallets};
pub use client::WalletsAfrica;
pub use error::{Result, WalletsError};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
