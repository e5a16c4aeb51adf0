//! Airtime provider lookups

use std::sync::Arc;

use crate::client::Base;
use crate::error::Result;
use crate::extract;
use crate::types::AirtimeProvider;

/// Airtime provider lookups.
#[derive(Debug, Clone)]
pub struct Airtime {
    base: Arc<Base>,
}

impl Airtime {
    pub(crate) fn new(base: Arc<Base>) -> Self {
        Self { base }
    }

    /// Returns the mobile network providers airtime can be bought for.
    pub async fn get_providers(&self) -> Result<Vec<AirtimeProvider>> {
        let body = self.base.post("/bills/airtime/providers", None).await?;
        extract::array(&body, "Providers")?
            .iter()
            .map(AirtimeProvider::from_json)
            .collect()
    }
}
