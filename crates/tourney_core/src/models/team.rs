use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    /// Standings are computed per division
    pub division_id: String,
}

/// Display name for a team id, falling back to the id itself.
pub fn team_name<'a>(teams: &'a [TeamRecord], team_id: &'a str) -> &'a str {
    teams.iter().find(|t| t.id == team_id).map(|t| t.name.as_str()).unwrap_or(team_id)
}
