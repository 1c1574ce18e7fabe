// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    tag_key, CandidateItem, CandidateKind, CatalogEntry, OverlapSets, Profile, PsychographicTrait,
    RankedResult, ScoreBreakdown, ScoreComponents, ScoringWeights, TagSet, TraitMap, TRAIT_MAX,
    TRAIT_MIN,
};
pub use requests::{
    into_candidates, AestheticRequest, CandidateRecord, CodeReviewRequest, ExplainRequest,
    MentorRequest, ProjectSuggestionRequest, RankRequest, ScoreRequest, TeamRankRequest,
};
pub use responses::{ErrorResponse, ExplainResponse, HealthResponse, ScoreResponse};
