use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{MatchError, Result};
use crate::models::domain::{CandidateItem, CandidateKind, CatalogEntry, Profile, ScoreBreakdown};

/// Request to score two profiles against each other
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub profile_a: Profile,
    pub profile_b: Profile,
}

/// Candidate as supplied by the catalog source
///
/// `tags` is optional on the wire so that a `null` list can be reported as an
/// invalid candidate instead of a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub kind: CandidateKind,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl TryFrom<CandidateRecord> for CandidateItem {
    type Error = MatchError;

    fn try_from(record: CandidateRecord) -> Result<Self> {
        match record.kind {
            CandidateKind::Teammate => record.profile.map(CandidateItem::Teammate).ok_or_else(|| {
                MatchError::invalid(format!("teammate candidate {} has no profile", record.id))
            }),
            kind => {
                let tags = record.tags.ok_or_else(|| {
                    MatchError::invalid(format!("candidate {} has a null tag list", record.id))
                })?;
                let entry = CatalogEntry::new(record.id, record.name, tags);
                Ok(match kind {
                    CandidateKind::Event => CandidateItem::Event(entry),
                    _ => CandidateItem::ProjectIdea(entry),
                })
            }
        }
    }
}

/// Convert a batch of wire candidates, failing on the first invalid record
pub fn into_candidates(records: Vec<CandidateRecord>) -> Result<Vec<CandidateItem>> {
    records.into_iter().map(CandidateItem::try_from).collect()
}

/// Request to rank a candidate pool for one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    pub profile: Profile,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub threshold: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    /// Free-text search applied before scoring
    #[validate(length(max = 200))]
    #[serde(default)]
    pub query: Option<String>,
    /// Keep only candidates carrying at least one of these tags
    #[serde(default)]
    pub required_tags: Vec<String>,
}

/// Request to rank a candidate pool for a whole team
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamRankRequest {
    #[validate(length(min = 1))]
    pub team: Vec<Profile>,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub threshold: Option<f64>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to render a breakdown as a sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub breakdown: ScoreBreakdown,
}

/// Request for a templated project suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSuggestionRequest {
    #[validate(length(min = 1, max = 2000))]
    pub idea: String,
    #[serde(default)]
    pub team_skills: Vec<String>,
}

/// Request for mentor advice on a project in progress
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MentorRequest {
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub progress: String,
    #[serde(default)]
    pub challenges: Vec<String>,
}

/// Request for a review of a code snippet
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CodeReviewRequest {
    #[validate(length(min = 1, max = 100000))]
    pub code: String,
    #[validate(length(min = 1, max = 50))]
    pub language: String,
}

/// Request for a design aesthetic recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AestheticRequest {
    pub profile: Profile,
}
