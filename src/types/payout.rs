//! Bank listing and bank-transfer records

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::extract;

/// A bank reachable by wallet-to-bank transfers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bank {
    pub bank_code: String,
    pub bank_name: String,
    pub bank_sort_code: String,
}

impl Bank {
    pub(crate) fn from_json(item: &Value) -> Result<Self> {
        Ok(Self {
            bank_code: extract::required_str(item, "BankCode")?,
            bank_name: extract::required_str(item, "BankName")?,
            bank_sort_code: extract::required_str(item, "BankSortCode")?,
        })
    }
}

/// Details of one wallet-to-bank transfer, looked up by its transaction
/// reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankDetail {
    pub bank: String,
    pub account_number: String,
    /// Timestamp string as sent by the API, kept opaque
    pub date_transferred: String,
    pub amount: f64,
    pub recipient_name: String,
    /// Settlement session id, empty when the API sends `null`
    pub session_id: String,
    /// Gateway code for the transfer itself, distinct from the HTTP status
    pub response_code: String,
    /// Gateway message, empty when the API sends `null`
    pub message: String,
}

impl BankDetail {
    pub(crate) fn from_json(body: &Value) -> Result<Self> {
        Ok(Self {
            bank: extract::required_str(body, "Bank")?,
            account_number: extract::required_str(body, "AccountNumber")?,
            date_transferred: extract::required_str(body, "DateTransferred")?,
            amount: extract::required_f64(body, "Amount")?,
            recipient_name: extract::required_str(body, "RecipientName")?,
            response_code: extract::required_str(body, "ResponseCode")?,
            session_id: extract::optional_str(body, "SessionId")?,
            message: extract::optional_str(body, "Message")?,
        })
    }
}
