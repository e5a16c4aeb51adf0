//! Balance and transaction-history walkthrough
//!
//! Runs against the sandbox with its published credentials by default.
//! Point it at your own account with:
//!
//! ```text
//! WALLETS_ENV=live WALLETS_PUBLIC_KEY=pk WALLETS_SECRET_KEY=sk \
//!     cargo run --example balance
//! ```

use std::env;

use wallets_africa::{Config, Currency, Environment, TransactionType, WalletsAfrica};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let api = WalletsAfrica::new(config_from_env()?)?;

    let balance = api.account.check_balance(Currency::Ngn).await?;
    println!(
        "💰 Balance: {} {}",
        balance.wallet_balance, balance.wallet_currency
    );

    let transactions = api
        .account
        .transactions(Currency::Ngn, TransactionType::All, 10, 0, None, None)
        .await?;
    println!("📋 Last {} transactions:", transactions.len());
    for tx in &transactions {
        println!(
            "   {:<22} {:>12.2} {:<7} {}",
            tx.date_transacted, tx.amount, tx.transaction_type, tx.narration
        );
    }

    Ok(())
}

fn config_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let environment = match env::var("WALLETS_ENV") {
        Ok(name) => name.parse::<Environment>()?,
        Err(_) => Environment::Sandbox,
    };

    let config = match environment {
        Environment::Sandbox => Config::sandbox(),
        Environment::Live => Config::live(
            env::var("WALLETS_PUBLIC_KEY")?,
            env::var("WALLETS_SECRET_KEY")?,
        ),
    };

    Ok(config)
}
