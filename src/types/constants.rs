//! Published constants for the Wallets Africa API

use std::time::Duration;

/// API environments and their base URLs
pub mod environments {
    /// Sandbox environment name
    pub const SANDBOX: &str = "sandbox";
    /// Live environment name
    pub const LIVE: &str = "live";

    /// Sandbox API base URL
    pub const SANDBOX_BASE_URL: &str = "https://sandbox.wallets.africa";
    /// Live API base URL
    pub const LIVE_BASE_URL: &str = "https://api.wallets.africa";
}

/// Credentials published for sandbox use. Live mode rejects them.
pub mod sandbox_keys {
    /// Public key accepted by the sandbox environment
    pub const PUBLIC: &str = "uvjqzm5xl6bw";
    /// Secret key accepted by the sandbox environment
    pub const SECRET: &str = "hfucj5jatq8h";
}

/// Layout every caller-supplied date must follow, e.g. `2020-01-23`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timeout applied to each request unless overridden in the config.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
