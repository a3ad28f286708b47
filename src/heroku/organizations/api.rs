//! Organization API operations

use crate::config::api;
use crate::error::Result;
use crate::heroku::HerokuClient;

use super::models::Organization;

impl HerokuClient {
    /// Get all organizations the credentials can see
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        let path = format!("/{}", api::ORGANIZATIONS);
        self.fetch_all_pages(&path, "name", "organizations").await
    }
}
