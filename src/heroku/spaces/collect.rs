//! Team → Space → NAT aggregation

use log::debug;
use std::collections::HashMap;

use crate::error::{HerokuError, Result};
use crate::heroku::traits::sort_by_name;
use crate::heroku::{AggregationPass, HerokuClient, Partial};

use super::models::{IpList, IpListItem, Space, Team};

/// Pair every enterprise team with the spaces it owns
///
/// Teams of any other type are dropped before any space is looked at, and
/// spaces owned by such teams are never returned.
fn spaces_by_enterprise_team(teams: Vec<Team>, spaces: Vec<Space>) -> Vec<(Team, Vec<Space>)> {
    let mut owned: HashMap<String, Vec<Space>> = teams
        .iter()
        .filter(|team| team.is_enterprise())
        .map(|team| (team.id.clone(), Vec::new()))
        .collect();

    for space in spaces {
        if let Some(team_spaces) = owned.get_mut(&space.team.id) {
            team_spaces.push(space);
        }
    }

    teams
        .into_iter()
        .filter(Team::is_enterprise)
        .map(|team| {
            let team_spaces = owned.remove(&team.id).unwrap_or_default();
            (team, team_spaces)
        })
        .collect()
}

impl HerokuClient {
    /// Collect the egress IPs of every private space owned by an enterprise team
    ///
    /// Fails outright only when the team or space listing fails. NAT lookup
    /// failures are reported through [`Partial::error`] next to the items
    /// that were collected.
    pub async fn collect_ip_list(&self, name: &str, description: &str) -> Result<Partial<IpList>> {
        let teams = self.get_teams().await?;
        if !teams.iter().any(Team::is_enterprise) {
            debug!("No enterprise teams among {} teams", teams.len());
            return Ok(Partial::complete(IpList {
                name: name.to_string(),
                description: description.to_string(),
                items: Vec::new(),
            }));
        }

        let spaces = self.get_spaces().await?;
        Ok(self
            .collect_ip_list_for(teams, spaces, name, description)
            .await)
    }

    /// Collect NAT sources for the spaces of the given teams
    ///
    /// Only enterprise teams are considered. Items come back sorted by name.
    pub async fn collect_ip_list_for(
        &self,
        teams: Vec<Team>,
        spaces: Vec<Space>,
        name: &str,
        description: &str,
    ) -> Partial<IpList> {
        let seeds = spaces_by_enterprise_team(teams, spaces);
        debug!("Collecting NAT sources for {} enterprise teams", seeds.len());

        let pass = AggregationPass::default();
        let pass = &pass;

        let groups = pass
            .for_each_seed(seeds, move |(team, team_spaces)| async move {
                debug!("Team '{}' owns {} spaces", team.name, team_spaces.len());
                let items = pass
                    .fan_out(team_spaces, |space| self.collect_space_ips(space))
                    .await;
                Ok::<_, HerokuError>(items)
            })
            .await;

        groups.map(|groups| {
            let mut items: Vec<IpListItem> = groups.into_iter().flatten().collect();
            sort_by_name(&mut items);
            IpList {
                name: name.to_string(),
                description: description.to_string(),
                items,
            }
        })
    }

    async fn collect_space_ips(&self, space: Space) -> Result<IpListItem> {
        let nat = self.get_space_nat(&space.id).await?;
        Ok(IpListItem::for_space(&space, nat.sources))
    }
}
