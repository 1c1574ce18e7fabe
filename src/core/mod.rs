// Core algorithm exports
pub mod aesthetic;
pub mod engine;
pub mod explain;
pub mod filters;
pub mod overlap;
pub mod ranker;
pub mod scoring;
pub mod team;

pub use aesthetic::{recommend_aesthetic, AestheticRecommendation};
pub use engine::{CompatibilityEngine, EngineConfig};
pub use explain::{explain, FALLBACK_EXPLANATION};
pub use filters::CandidateFilter;
pub use overlap::{mean_similarity, overlap, trait_similarity};
pub use ranker::{rank_candidates, rank_filtered, RankOptions, RankedResults};
pub use scoring::{score_candidate, score_catalog_tags, score_teammates};
pub use team::aggregate_team;
