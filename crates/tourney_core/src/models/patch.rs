//! Typed partial updates for score entry and status changes.
//!
//! A patch never mutates the stored record: [`MatchPatch::apply`] returns a
//! new [`MatchRecord`] or the reason the merge was refused.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PatchError;
use crate::models::{MatchRecord, MatchStatus};

/// Who is applying a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Authority {
    /// Score table / referee entry. Bound by status transition rules.
    Official,
    /// Tournament desk correction. May rewrite terminal matches.
    Administrative,
}

/// `None` keeps the stored value, `Some` overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchPatch {
    #[serde(default)]
    pub dark_score: Option<u32>,
    #[serde(default)]
    pub light_score: Option<u32>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
}

impl MatchPatch {
    pub fn scores(dark: u32, light: u32) -> Self {
        Self { dark_score: Some(dark), light_score: Some(light), status: None }
    }

    pub fn finalize(dark: u32, light: u32) -> Self {
        Self { dark_score: Some(dark), light_score: Some(light), status: Some(MatchStatus::Final) }
    }

    pub fn status(status: MatchStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn apply(&self, record: &MatchRecord, authority: Authority) -> Result<MatchRecord, PatchError> {
        if authority == Authority::Official {
            if record.status.is_terminal() {
                return Err(PatchError::Locked {
                    match_id: record.id.clone(),
                    status: record.status,
                });
            }
            if let Some(next) = self.status {
                if next != record.status && !record.status.can_transition_to(next) {
                    return Err(PatchError::IllegalTransition { from: record.status, to: next });
                }
            }
        }

        let mut merged = record.clone();
        if let Some(score) = self.dark_score {
            merged.dark_score = Some(score);
        }
        if let Some(score) = self.light_score {
            merged.light_score = Some(score);
        }
        if let Some(status) = self.status {
            merged.status = status;
        }

        if merged.dark_score.is_some() != merged.light_score.is_some() {
            return Err(PatchError::PartialScore);
        }
        if merged.status == MatchStatus::Final && merged.dark_score.is_none() {
            return Err(PatchError::MissingFinalScore);
        }

        tracing::debug!(
            match_id = %merged.id,
            from = ?record.status,
            to = ?merged.status,
            ?authority,
            "match patch applied"
        );
        Ok(merged)
    }
}
