//! Operations on the wallet tied to your API credentials

use std::sync::Arc;

use serde_json::json;

use crate::client::Base;
use crate::error::{Result, WalletsError};
use crate::extract;
use crate::types::{CheckBalanceResult, Currency, Transaction, TransactionType, Wallet};

/// Operations on the wallet tied to your API credentials: balance,
/// transaction history, and the sub wallets created under it.
#[derive(Debug, Clone)]
pub struct Account {
    base: Arc<Base>,
}

impl Account {
    pub(crate) fn new(base: Arc<Base>) -> Self {
        Self { base }
    }

    /// Retrieves the wallet balance in the provided currency.
    pub async fn check_balance(&self, currency: Currency) -> Result<CheckBalanceResult> {
        let payload = json!({
            "Currency": currency,
            "SecretKey": self.base.secret_key(),
        });

        let body = self.base.post("/self/balance", Some(payload)).await?;
        let data = extract::object(&body, "Data")?;
        CheckBalanceResult::from_json(data)
    }

    /// Gets a page of transaction history, newest first.
    ///
    /// `take` is the page size and must be at least 1; `skip` is the number
    /// of records to pass over. `date_from` and `date_to` bound the window
    /// when given and must be `YYYY-MM-DD` dates.
    pub async fn transactions(
        &self,
        currency: Currency,
        transaction_type: TransactionType,
        take: u32,
        skip: u32,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<Vec<Transaction>> {
        if take < 1 {
            return Err(WalletsError::validation("take cannot be less than 1"));
        }

        let mut payload = json!({
            "Currency": currency,
            "TransactionType": transaction_type,
            "Take": take,
            "Skip": skip,
            "SecretKey": self.base.secret_key(),
        });

        if let Some(date_from) = date_from {
            super::validate_date("date_from", date_from)?;
            payload["DateFrom"] = json!(date_from);
        }

        if let Some(date_to) = date_to {
            super::validate_date("date_to", date_to)?;
            payload["DateTo"] = json!(date_to);
        }

        let body = self.base.post("/self/transactions", Some(payload)).await?;
        let data = extract::object(&body, "Data")?;

        // Order is kept exactly as the API returned it.
        extract::array(data, "Transactions")?
            .iter()
            .map(Transaction::from_json)
            .collect()
    }

    /// Retrieves every sub wallet created under these credentials.
    pub async fn get_wallets(&self) -> Result<Vec<Wallet>> {
        let payload = json!({
            "SecretKey": self.base.secret_key(),
        });

        let body = self.base.post("/self/users", Some(payload)).await?;
        extract::array(&body, "Data")?
            .iter()
            .map(Wallet::from_listed_json)
            .collect()
    }
}
