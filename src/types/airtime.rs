//! Airtime provider records

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::extract;

/// A mobile network provider airtime can be bought for.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AirtimeProvider {
    /// Short code used when purchasing, e.g. `"mtn"`
    pub code: String,
    pub name: String,
}

impl AirtimeProvider {
    pub(crate) fn from_json(item: &Value) -> Result<Self> {
        Ok(Self {
            code: extract::required_str(item, "Code")?,
            name: extract::required_str(item, "Name")?,
        })
    }
}
