//! Account-level API operations

use serde::Deserialize;

use crate::config::api;
use crate::error::Result;
use crate::heroku::HerokuClient;

/// Remaining request budget of the authenticated account
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RateLimit {
    pub remaining: u32,
}

impl HerokuClient {
    /// Number of API requests the account may still issue
    pub async fn get_rate_limit_remaining(&self) -> Result<u32> {
        let path = format!("/{}", api::RATE_LIMITS);
        let limit: RateLimit = self.fetch_resource(&path, "account rate limit").await?;
        Ok(limit.remaining)
    }
}
