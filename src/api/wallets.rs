//! Sub wallet creation and funding

use std::sync::Arc;

use serde_json::json;

use crate::client::Base;
use crate::error::Result;
use crate::extract;
use crate::types::{CreditWalletResult, Currency, Wallet};

/// Sub wallet creation and funding.
#[derive(Debug, Clone)]
pub struct Wallets {
    base: Arc<Base>,
}

impl Wallets {
    pub(crate) fn new(base: Arc<Base>) -> Self {
        Self { base }
    }

    /// Creates a new sub wallet and returns it with its provisioned bank
    /// account and initial password.
    ///
    /// `date_of_birth` is optional; when given it must be a `YYYY-MM-DD`
    /// date.
    pub async fn generate(
        &self,
        currency: Currency,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: Option<&str>,
    ) -> Result<Wallet> {
        let mut payload = json!({
            "SecretKey": self.base.secret_key(),
            "Currency": currency,
            "FirstName": first_name,
            "LastName": last_name,
            "Email": email,
        });

        if let Some(date_of_birth) = date_of_birth {
            super::validate_date("date_of_birth", date_of_birth)?;
            payload["DateOfBirth"] = json!(date_of_birth);
        }

        let body = self.base.post("/wallet/generate", Some(payload)).await?;
        let data = extract::object(&body, "Data")?;
        Wallet::from_generated_json(data)
    }

    /// Moves `amount` from the main wallet into the sub wallet registered
    /// to `phone_number`, tagged with the caller's `transaction_reference`.
    pub async fn credit(
        &self,
        amount: f64,
        transaction_reference: &str,
        phone_number: &str,
    ) -> Result<CreditWalletResult> {
        let payload = json!({
            "TransactionReference": transaction_reference,
            "Amount": amount,
            "PhoneNumber": phone_number,
            "SecretKey": self.base.secret_key(),
        });

        let body = self.base.post("/wallet/credit", Some(payload)).await?;
        let data = extract::object(&body, "Data")?;
        CreditWalletResult::from_json(data)
    }
}
