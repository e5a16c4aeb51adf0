//! Wallet, bank, and airtime-provider listings against the sandbox

use wallets_africa::WalletsAfrica;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let api = WalletsAfrica::sandbox()?;

    let wallets = api.account.get_wallets().await?;
    println!("👛 {} wallets under these credentials:", wallets.len());
    for wallet in &wallets {
        println!(
            "   {} {} <{}> {}",
            wallet.first_name, wallet.last_name, wallet.email, wallet.phone_number
        );
    }

    let banks = api.payouts.get_banks().await?;
    println!("🏦 {} banks reachable by transfer", banks.len());

    let providers = api.airtime.get_providers().await?;
    let codes: Vec<&str> = providers.iter().map(|p| p.code.as_str()).collect();
    println!("📱 Airtime providers: {}", codes.join(", "));

    Ok(())
}
