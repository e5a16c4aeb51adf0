//! Bank listing and wallet-to-bank transfer lookups

use std::sync::Arc;

use serde_json::json;

use crate::client::Base;
use crate::error::Result;
use crate::extract;
use crate::types::{Bank, BankDetail};

/// Bank listing and wallet-to-bank transfer lookups.
#[derive(Debug, Clone)]
pub struct Payouts {
    base: Arc<Base>,
}

impl Payouts {
    pub(crate) fn new(base: Arc<Base>) -> Self {
        Self { base }
    }

    /// Gets the list of banks transfers can reach, with their codes.
    ///
    /// This endpoint answers with a bare JSON array instead of the usual
    /// envelope, so a failure here reports the raw HTTP status.
    pub async fn get_banks(&self) -> Result<Vec<Bank>> {
        let body = self.base.post("/transfer/banks/all", None).await?;
        extract::elements(&body)?
            .iter()
            .map(Bank::from_json)
            .collect()
    }

    /// Looks up a wallet-to-bank transfer by the transaction reference it
    /// was submitted with.
    pub async fn bank_details(&self, transaction_reference: &str) -> Result<BankDetail> {
        let payload = json!({
            "SecretKey": self.base.secret_key(),
            "TransactionReference": transaction_reference,
        });

        let body = self
            .base
            .post("/transfer/bank/details", Some(payload))
            .await?;
        BankDetail::from_json(&body)
    }
}
