//! App, dyno, add-on and dyno size API operations

use crate::config::api;
use crate::error::Result;
use crate::heroku::HerokuClient;

use super::models::{AddOn, App, Dyno, DynoSize, DynoSizeTable};

impl HerokuClient {
    /// Get all apps owned by an organization
    pub async fn get_organization_apps(&self, org_id: &str) -> Result<Vec<App>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org_id),
            api::APPS
        );
        let error_context = format!("apps for organization '{}'", org_id);
        self.fetch_all_pages(&path, "name", &error_context).await
    }

    /// Get all dynos of an app
    pub async fn get_dynos(&self, app_id: &str) -> Result<Vec<Dyno>> {
        let path = format!(
            "/{}/{}/{}",
            api::APPS,
            urlencoding::encode(app_id),
            api::DYNOS
        );
        let error_context = format!("dynos for app '{}'", app_id);
        self.fetch_all_pages(&path, "name", &error_context).await
    }

    /// Get all add-ons attached to an app
    pub async fn get_addons(&self, app_id: &str) -> Result<Vec<AddOn>> {
        let path = format!(
            "/{}/{}/{}",
            api::APPS,
            urlencoding::encode(app_id),
            api::ADDONS
        );
        let error_context = format!("add-ons for app '{}'", app_id);
        self.fetch_all_pages(&path, "name", &error_context).await
    }

    /// Get dyno units per dyno size name
    pub async fn get_dyno_sizes(&self) -> Result<DynoSizeTable> {
        let path = format!("/{}", api::DYNO_SIZES);
        let sizes: Vec<DynoSize> = self.fetch_all_pages(&path, "id", "dyno sizes").await?;
        Ok(sizes
            .into_iter()
            .map(|size| (size.name, size.dyno_units))
            .collect())
    }
}
