//! Client entry point and the shared request pipeline

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::api::{Account, Airtime, Identity, Payouts, Wallets};
use crate::error::{Result, WalletsError};
use crate::extract;
use crate::types::Config;

/// Entry point to the Wallets Africa API.
///
/// Operations are grouped by capability and exposed as public fields, so a
/// call reads like the endpoint it hits:
///
/// ```no_run
/// use wallets_africa::{Currency, WalletsAfrica};
///
/// # async fn example() -> wallets_africa::Result<()> {
/// let api = WalletsAfrica::sandbox()?;
/// let balance = api.account.check_balance(Currency::Ngn).await?;
/// println!("{} {}", balance.wallet_balance, balance.wallet_currency);
/// # Ok(())
/// # }
/// ```
///
/// The client is cheap to clone and safe to share across tasks; all groups
/// point at one connection pool.
#[derive(Debug, Clone)]
pub struct WalletsAfrica {
    /// Operations on the wallet tied to your API credentials
    pub account: Account,
    /// Sub wallet creation and funding
    pub wallets: Wallets,
    /// Bank listing and wallet-to-bank transfer lookups
    pub payouts: Payouts,
    /// Airtime provider lookups
    pub airtime: Airtime,
    /// BVN identity resolution
    pub identity: Identity,
}

impl WalletsAfrica {
    /// Create a client from a configuration.
    ///
    /// The configuration is validated first; nothing touches the network
    /// until an endpoint method is called.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| WalletsError::config(format!("failed to create HTTP client: {}", e)))?;

        let base = Arc::new(Base {
            api_url: config.api_url(),
            public_key: config.public_key,
            secret_key: config.secret_key,
            client,
        });

        Ok(Self {
            account: Account::new(Arc::clone(&base)),
            wallets: Wallets::new(Arc::clone(&base)),
            payouts: Payouts::new(Arc::clone(&base)),
            airtime: Airtime::new(Arc::clone(&base)),
            identity: Identity::new(base),
        })
    }

    /// Create a sandbox client with the published sandbox credentials
    pub fn sandbox() -> Result<Self> {
        Self::new(Config::sandbox())
    }

    /// Create a live client with your own key pair
    pub fn live(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::new(Config::live(public_key, secret_key))
    }
}

/// Shared state and request pipeline behind every endpoint group.
pub(crate) struct Base {
    api_url: String,
    public_key: String,
    secret_key: String,
    client: Client,
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base")
            .field("api_url", &self.api_url)
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Base {
    /// The secret key endpoint payloads must embed.
    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Sends a POST to `path` and returns the decoded body.
    ///
    /// Every request carries the JSON content type and the public key as a
    /// bearer token. The body is decoded before the status check so failure
    /// envelopes can be read; any status other than 200 then becomes a
    /// `RequestFailed` error.
    pub(crate) async fn post(&self, path: &str, payload: Option<Value>) -> Result<Value> {
        let url = format!("{}{}", self.api_url, path);
        // Only the URL is logged. Payloads carry the secret key.
        tracing::debug!("Sending request to: {}", url);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.public_key));

        if let Some(ref payload) = payload {
            let body = serde_json::to_vec(payload).map_err(WalletsError::Serialization)?;
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        let raw_body = response.bytes().await?;
        let decoded: Value =
            serde_json::from_slice(&raw_body).map_err(WalletsError::Decode)?;

        if status != StatusCode::OK {
            let err = extract::failure(status, &decoded);
            tracing::error!("Request to {} failed: {}", url, err);
            return Err(err);
        }

        Ok(decoded)
    }
}
