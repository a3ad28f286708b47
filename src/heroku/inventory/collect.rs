//! Organization → App → {Dyno, AddOn} aggregation

use log::debug;

use crate::error::{HerokuError, Result};
use crate::heroku::traits::sort_by_name;
use crate::heroku::{AggregationPass, App, HerokuClient, Organization, Partial};

use super::models::{AppInventory, OrganizationInventory};

impl HerokuClient {
    /// Collect every organization with its apps, dynos and add-ons
    ///
    /// Fails outright only when the organization listing fails. Any later
    /// failure is reported through [`Partial::error`] next to the records
    /// that were collected.
    pub async fn collect_inventory(&self) -> Result<Partial<Vec<OrganizationInventory>>> {
        let organizations = self.get_organizations().await?;
        Ok(self.collect_inventory_for(organizations).await)
    }

    /// Collect apps, dynos and add-ons for the given organizations
    ///
    /// An organization whose app listing fails is left out. An app whose dyno
    /// or add-on listing fails is left out of its organization. Organizations
    /// and their apps come back sorted by name.
    pub async fn collect_inventory_for(
        &self,
        organizations: Vec<Organization>,
    ) -> Partial<Vec<OrganizationInventory>> {
        debug!("Collecting inventory for {} organizations", organizations.len());

        let pass = AggregationPass::default();
        let pass = &pass;

        let mut inventory = pass
            .for_each_seed(organizations, move |organization| async move {
                let apps = self.get_organization_apps(&organization.id).await?;
                debug!(
                    "Organization '{}' has {} apps",
                    organization.name,
                    apps.len()
                );

                let applications = pass.fan_out(apps, |app| self.collect_app(app)).await;
                Ok::<_, HerokuError>(applications.map(|applications| {
                    OrganizationInventory {
                        organization,
                        applications,
                    }
                }))
            })
            .await;

        sort_by_name(&mut inventory.value);
        for org in &mut inventory.value {
            sort_by_name(&mut org.applications);
        }
        inventory
    }

    async fn collect_app(&self, application: App) -> Result<AppInventory> {
        let dynos = self.get_dynos(&application.id).await?;
        let addons = self.get_addons(&application.id).await?;
        Ok(AppInventory {
            application,
            dynos,
            addons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn app_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "released_at": "2024-01-15T09:30:00Z",
            "updated_at": "2024-02-01T12:00:00Z",
            "stack": {"id": "stack-1", "name": "heroku-22"}
        })
    }

    fn dyno_json(id: &str, size: &str) -> serde_json::Value {
        serde_json::json!({"id": id, "name": format!("web.{}", id), "size": size, "type": "web"})
    }

    fn addon_json(id: &str, service: &str) -> serde_json::Value {
        serde_json::json!({"id": id, "name": format!("{}-{}", service, id), "addon_service": {"name": service}})
    }

    #[tokio::test]
    async fn test_collect_inventory_two_organizations() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        mount_json(
            &server,
            "/organizations",
            serde_json::json!([
                {"id": "org-b", "name": "beta"},
                {"id": "org-a", "name": "alpha"}
            ]),
        )
        .await;
        mount_json(
            &server,
            "/organizations/org-a/apps",
            serde_json::json!([app_json("app-1", "api")]),
        )
        .await;
        mount_json(&server, "/organizations/org-b/apps", serde_json::json!([])).await;
        mount_json(
            &server,
            "/apps/app-1/dynos",
            serde_json::json!([dyno_json("1", "standard-1x"), dyno_json("2", "standard-1x")]),
        )
        .await;
        mount_json(
            &server,
            "/apps/app-1/addons",
            serde_json::json!([addon_json("1", "redis")]),
        )
        .await;

        let inventory = client
            .collect_inventory()
            .await
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].organization.name, "alpha");
        assert_eq!(inventory[1].organization.name, "beta");
        assert!(inventory[1].applications.is_empty());

        let app = &inventory[0].applications[0];
        assert_eq!(app.application.name, "api");
        let dynos = app.dyno_summary();
        assert_eq!(dynos.len(), 1);
        assert_eq!((dynos[0].key.as_str(), dynos[0].count), ("standard-1x", 2));
        let addons = app.addon_summary();
        assert_eq!(addons.len(), 1);
        assert_eq!((addons[0].key.as_str(), addons[0].count), ("redis", 1));
    }

    #[tokio::test]
    async fn test_collect_inventory_no_organizations() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        mount_json(&server, "/organizations", serde_json::json!([])).await;

        let inventory = client.collect_inventory().await.unwrap();
        assert!(inventory.value.is_empty());
        assert!(inventory.is_complete());
    }

    #[tokio::test]
    async fn test_collect_inventory_organization_listing_fails() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        assert!(client.collect_inventory().await.is_err());
    }

    #[tokio::test]
    async fn test_apps_sorted_and_record_count_matches() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        let org = Organization {
            id: "org-1".to_string(),
            name: "acme".to_string(),
            role: None,
        };
        mount_json(
            &server,
            "/organizations/org-1/apps",
            serde_json::json!([
                app_json("app-3", "worker"),
                app_json("app-1", "api"),
                app_json("app-2", "frontend")
            ]),
        )
        .await;
        for id in ["app-1", "app-2", "app-3"] {
            mount_json(
                &server,
                &format!("/apps/{}/dynos", id),
                serde_json::json!([dyno_json(id, "standard-2x")]),
            )
            .await;
            mount_json(&server, &format!("/apps/{}/addons", id), serde_json::json!([])).await;
        }

        let inventory = client.collect_inventory_for(vec![org]).await;
        assert!(inventory.is_complete());

        let apps = &inventory.value[0].applications;
        let names: Vec<&str> = apps.iter().map(|a| a.application.name.as_str()).collect();
        assert_eq!(names, vec!["api", "frontend", "worker"]);
        for app in apps {
            assert_eq!(app.dynos.len(), 1);
            assert_eq!(app.dynos[0].id, app.application.id);
            assert!(app.addons.is_empty());
        }
    }

    #[tokio::test]
    async fn test_failing_app_keeps_other_records() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        let org = Organization {
            id: "org-1".to_string(),
            name: "acme".to_string(),
            role: None,
        };
        mount_json(
            &server,
            "/organizations/org-1/apps",
            serde_json::json!([app_json("app-ok", "healthy"), app_json("app-bad", "broken")]),
        )
        .await;
        mount_json(
            &server,
            "/apps/app-ok/dynos",
            serde_json::json!([dyno_json("1", "standard-1x")]),
        )
        .await;
        mount_json(&server, "/apps/app-ok/addons", serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/apps/app-bad/dynos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_json(&server, "/apps/app-bad/addons", serde_json::json!([])).await;

        let inventory = client.collect_inventory_for(vec![org]).await;

        match &inventory.error {
            Some(HerokuError::Api { status, message }) => {
                assert_eq!(*status, 500);
                assert!(message.contains("app-bad"));
            }
            other => panic!("Expected API error, got {:?}", other),
        }
        assert_eq!(inventory.value.len(), 1);
        let apps = &inventory.value[0].applications;
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].application.name, "healthy");
    }

    #[tokio::test]
    async fn test_failing_app_listing_skips_only_that_organization() {
        let server = MockServer::start().await;
        let client = HerokuClient::test_client(&server.uri());

        let orgs = vec![
            Organization {
                id: "org-ok".to_string(),
                name: "ok".to_string(),
                role: None,
            },
            Organization {
                id: "org-bad".to_string(),
                name: "bad".to_string(),
                role: None,
            },
        ];
        mount_json(&server, "/organizations/org-ok/apps", serde_json::json!([])).await;
        Mock::given(method("GET"))
            .and(path("/organizations/org-bad/apps"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let inventory = client.collect_inventory_for(orgs).await;
        assert!(inventory.error.is_some());
        assert_eq!(inventory.value.len(), 1);
        assert_eq!(inventory.value[0].organization.name, "ok");
    }
}
