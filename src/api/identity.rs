//! BVN identity resolution

use std::sync::Arc;

use serde_json::json;

use crate::client::Base;
use crate::error::{Result, WalletsError};
use crate::types::BvnDetails;

/// BVN identity resolution.
#[derive(Debug, Clone)]
pub struct Identity {
    base: Arc<Base>,
}

impl Identity {
    pub(crate) fn new(base: Arc<Base>) -> Self {
        Self { base }
    }

    /// Resolves the identity behind a Bank Verification Number.
    pub async fn resolve_bvn(&self, bvn: &str) -> Result<BvnDetails> {
        if bvn.is_empty() {
            return Err(WalletsError::validation("BVN number is required"));
        }

        let payload = json!({
            "BVN": bvn,
            "SecretKey": self.base.secret_key(),
        });

        let body = self.base.post("/account/resolvebvn", Some(payload)).await?;
        BvnDetails::from_json(&body)
    }

    /// Alias of [`resolve_bvn`](Self::resolve_bvn). The API documents both
    /// names for the same result set.
    pub async fn resolve_bvn_details(&self, bvn: &str) -> Result<BvnDetails> {
        self.resolve_bvn(bvn).await
    }
}
