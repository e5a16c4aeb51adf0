//! Currency and transaction-type codes used in request payloads

use serde::{Serialize, Serializer};

/// Wallet currency accepted by the API.
///
/// Serializes to the ISO code string the API expects (`"NGN"`, `"USD"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian naira
    Ngn,
    /// United States dollar
    Usd,
    /// Ghanaian cedi
    Ghs,
    /// Kenyan shilling
    Kes,
}

impl Currency {
    /// Get the ISO code sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
            Currency::Ghs => "GHS",
            Currency::Kes => "KES",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction-history filter.
///
/// The API expects the numeric code, so this serializes as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Credits only
    Credit = 1,
    /// Debits only
    Debit = 2,
    /// Both directions
    All = 3,
}

impl TransactionType {
    /// Get the numeric code sent on the wire
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}
