//! Wallet, balance, and transaction records

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::extract;

/// Balance held by the API-key wallet in one currency.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckBalanceResult {
    /// Balance as reported by the API, an IEEE double
    pub wallet_balance: f64,
    /// Currency code the balance is denominated in
    pub wallet_currency: String,
}

impl CheckBalanceResult {
    pub(crate) fn from_json(data: &Value) -> Result<Self> {
        Ok(Self {
            wallet_balance: extract::required_f64(data, "WalletBalance")?,
            wallet_currency: extract::required_str(data, "WalletCurrency")?,
        })
    }
}

/// One entry in the transaction history, as returned by the API
/// (chronologically descending).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub amount: f64,
    pub currency: String,
    pub category: String,
    pub narration: String,
    /// Timestamp string as sent by the API, kept opaque
    pub date_transacted: String,
    pub previous_balance: f64,
    pub new_balance: f64,
    /// Direction label, e.g. `"Credit"` or `"Debit"`
    #[serde(rename = "Type")]
    pub transaction_type: String,
}

impl Transaction {
    pub(crate) fn from_json(item: &Value) -> Result<Self> {
        Ok(Self {
            amount: extract::required_f64(item, "Amount")?,
            currency: extract::required_str(item, "Currency")?,
            category: extract::required_str(item, "Category")?,
            narration: extract::required_str(item, "Narration")?,
            date_transacted: extract::required_str(item, "DateTransacted")?,
            previous_balance: extract::required_f64(item, "PreviousBalance")?,
            new_balance: extract::required_f64(item, "NewBalance")?,
            transaction_type: extract::required_str(item, "Type")?,
        })
    }
}

/// A sub wallet.
///
/// Both the wallet listing and wallet generation produce this record, but
/// they populate it from different key sets: a listed wallet carries profile
/// data, a freshly generated one additionally carries its provisioned bank
/// account and initial password. Fields the responding endpoint does not
/// send are left at their zero values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wallet {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub username: String,
    /// Bank account number provisioned for the wallet
    pub account_number: String,
    #[serde(rename = "BVN")]
    pub bvn: String,
    pub city: String,
    pub country: String,
    pub date_created: String,
    pub date_of_birth: String,
    pub date_signedup: String,
    /// Initial password, only present on generation
    pub password: String,
    /// Bank holding the provisioned account, only present on generation
    pub bank: String,
    pub account_name: String,
    pub available_balance: f64,
}

impl Wallet {
    /// Builds a record from one element of the listing response.
    pub(crate) fn from_listed_json(item: &Value) -> Result<Self> {
        Ok(Self {
            date_created: extract::required_str(item, "DateCreated")?,
            email: extract::required_str(item, "Email")?,
            first_name: extract::required_str(item, "FirstName")?,
            last_name: extract::required_str(item, "LastName")?,
            phone_number: extract::required_str(item, "PhoneNumber")?,
            username: extract::optional_str(item, "Username")?,
            account_number: extract::optional_str(item, "AccountNumber")?,
            bvn: extract::optional_str(item, "BVN")?,
            city: extract::optional_str(item, "City")?,
            country: extract::optional_str(item, "Country")?,
            date_of_birth: extract::optional_str(item, "DateOfBirth")?,
            available_balance: extract::optional_f64(item, "AvailableBalance")?,
            ..Default::default()
        })
    }

    /// Builds a record from the generation response, which uses its own key
    /// set (`AccountNo` rather than the listing's `AccountNumber`).
    pub(crate) fn from_generated_json(data: &Value) -> Result<Self> {
        Ok(Self {
            first_name: extract::required_str(data, "FirstName")?,
            last_name: extract::required_str(data, "LastName")?,
            email: extract::required_str(data, "Email")?,
            phone_number: extract::required_str(data, "PhoneNumber")?,
            bvn: extract::optional_str(data, "BVN")?,
            password: extract::required_str(data, "Password")?,
            date_of_birth: extract::required_str(data, "DateOfBirth")?,
            date_signedup: extract::required_str(data, "DateSignedup")?,
            account_number: extract::required_str(data, "AccountNo")?,
            bank: extract::required_str(data, "Bank")?,
            account_name: extract::required_str(data, "AccountName")?,
            available_balance: extract::required_f64(data, "AvailableBalance")?,
            ..Default::default()
        })
    }
}

/// Result of crediting a sub wallet from the main wallet.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditWalletResult {
    pub amount_credited: f64,
    pub recipient_wallet_balance: f64,
    pub sender_wallet_balance: f64,
}

impl CreditWalletResult {
    pub(crate) fn from_json(data: &Value) -> Result<Self> {
        Ok(Self {
            amount_credited: extract::required_f64(data, "AmountCredited")?,
            recipient_wallet_balance: extract::required_f64(data, "RecipientWalletBalance")?,
            sender_wallet_balance: extract::required_f64(data, "SenderWalletBalance")?,
        })
    }
}
