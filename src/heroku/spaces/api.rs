//! Team, space and NAT API operations

use crate::config::api;
use crate::error::Result;
use crate::heroku::HerokuClient;

use super::models::{Space, SpaceNat, Team};

impl HerokuClient {
    /// Get all teams the credentials can see
    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        let path = format!("/{}", api::TEAMS);
        self.fetch_all_pages(&path, "id", "teams").await
    }

    /// Get all spaces the credentials can see, across every team
    pub async fn get_spaces(&self) -> Result<Vec<Space>> {
        let path = format!("/{}", api::SPACES);
        self.fetch_all_pages(&path, "id", "spaces").await
    }

    /// Get the outbound NAT configuration of a space
    pub async fn get_space_nat(&self, space_id: &str) -> Result<SpaceNat> {
        let path = format!(
            "/{}/{}/{}",
            api::SPACES,
            urlencoding::encode(space_id),
            api::NAT
        );
        self.fetch_resource(&path, &format!("NAT info for space '{}'", space_id))
            .await
    }
}
