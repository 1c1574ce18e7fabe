use crate::core::{
    aesthetic::{recommend_aesthetic, AestheticRecommendation},
    explain::explain,
    filters::CandidateFilter,
    ranker::{rank_candidates, rank_filtered, RankOptions, RankedResults},
    scoring::{score_candidate, score_teammates},
    team::aggregate_team,
};
use crate::error::{MatchError, Result};
use crate::models::{CandidateItem, Profile, ScoreBreakdown, ScoringWeights};

/// Shared music + interest tags that count as a perfect taste match
pub const DEFAULT_TASTE_NORMALIZATION: f64 = 10.0;
/// Overlapping tags that count as a perfect event or project match
pub const DEFAULT_EXPECTED_TAG_COUNT: f64 = 4.0;
/// Pool size from which candidates are scored across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Tunable constants of the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    pub taste_normalization: f64,
    pub expected_tag_count: f64,
    pub parallel_threshold: usize,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        for (name, value) in [
            ("taste_normalization", self.taste_normalization),
            ("expected_tag_count", self.expected_tag_count),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MatchError::invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            taste_normalization: DEFAULT_TASTE_NORMALIZATION,
            expected_tag_count: DEFAULT_EXPECTED_TAG_COUNT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Compatibility and recommendation engine
///
/// Holds nothing but validated configuration; every operation is a pure
/// function of its inputs, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    config: EngineConfig,
}

impl CompatibilityEngine {
    /// Build an engine, rejecting malformed configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Teammate compatibility between two profiles
    pub fn score(&self, a: &Profile, b: &Profile) -> Result<ScoreBreakdown> {
        score_teammates(a, b, &self.config)
    }

    /// Fit of a single candidate for a profile
    pub fn score_candidate(&self, profile: &Profile, candidate: &CandidateItem) -> Result<ScoreBreakdown> {
        score_candidate(profile, candidate, &self.config)
    }

    /// Rank a candidate pool, highest score first
    pub fn rank(
        &self,
        profile: &Profile,
        candidates: &[CandidateItem],
        options: RankOptions,
    ) -> Result<RankedResults> {
        rank_candidates(profile, candidates, options, &self.config)
    }

    /// Rank only the candidates that pass `filter`
    pub fn rank_filtered(
        &self,
        profile: &Profile,
        candidates: &[CandidateItem],
        filter: &CandidateFilter,
        options: RankOptions,
    ) -> Result<RankedResults> {
        rank_filtered(profile, candidates, filter, options, &self.config)
    }

    /// Rank a candidate pool against a team's collective taste
    pub fn rank_for_team(
        &self,
        team: &[Profile],
        candidates: &[CandidateItem],
        options: RankOptions,
    ) -> Result<RankedResults> {
        let aggregate = aggregate_team(team)?;
        rank_candidates(&aggregate, candidates, options, &self.config)
    }

    pub fn explain(&self, breakdown: &ScoreBreakdown) -> String {
        explain(breakdown)
    }

    pub fn recommend_aesthetic(&self, profile: &Profile) -> AestheticRecommendation {
        recommend_aesthetic(profile)
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_default_config()
    }
}
