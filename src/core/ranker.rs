use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::engine::EngineConfig;
use crate::core::explain::explain;
use crate::core::filters::CandidateFilter;
use crate::core::scoring::score_candidate;
use crate::error::{MatchError, Result};
use crate::models::{CandidateItem, Profile, RankedResult, ScoreBreakdown};

/// Filtering and truncation applied to a ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Candidates scoring below this are dropped (0 keeps everything)
    pub threshold: f64,
    /// Keep only the top N after scoring the whole pool
    pub limit: Option<usize>,
}

impl RankOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(MatchError::invalid(format!(
                "threshold must be a finite, non-negative score, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Result of ranking a candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResults {
    pub results: Vec<RankedResult>,
    pub total_candidates: usize,
}

/// Rank a candidate pool against a profile
///
/// Same as [`rank_filtered`] with an empty filter.
pub fn rank_candidates(
    profile: &Profile,
    candidates: &[CandidateItem],
    options: RankOptions,
    config: &EngineConfig,
) -> Result<RankedResults> {
    rank_filtered(profile, candidates, &CandidateFilter::default(), options, config)
}

/// Rank the part of a candidate pool that passes a filter
///
/// # Pipeline Stages
/// 1. Drop candidates rejected by the filter (search query, required tags)
/// 2. Score the rest (in parallel for large pools)
/// 3. Drop candidates below the threshold
/// 4. Stable sort by score, descending; ties keep input order
/// 5. Truncate to the limit and attach explanations
///
/// Every filtered candidate is scored before the limit applies, so the cost
/// is proportional to the pool size. The ranked profile and every scored
/// candidate must be valid, otherwise the call fails. `total_candidates`
/// counts the pool as supplied, before filtering.
pub fn rank_filtered(
    profile: &Profile,
    candidates: &[CandidateItem],
    filter: &CandidateFilter,
    options: RankOptions,
    config: &EngineConfig,
) -> Result<RankedResults> {
    options.validate()?;
    profile.validate()?;

    let total_candidates = candidates.len();
    let pool: Vec<&CandidateItem> = if filter.is_empty() {
        candidates.iter().collect()
    } else {
        candidates.iter().filter(|candidate| filter.matches(candidate)).collect()
    };
    let breakdowns = score_pool(profile, &pool, config)?;

    let mut scored: Vec<(&CandidateItem, ScoreBreakdown)> = pool
        .into_iter()
        .zip(breakdowns)
        .filter(|(_, breakdown)| breakdown.overall_score >= options.threshold)
        .collect();

    // sort_by is stable, which gives first-seen candidates priority on ties
    scored.sort_by(|(_, a), (_, b)| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(limit) = options.limit {
        scored.truncate(limit);
    }

    let results: Vec<RankedResult> = scored
        .into_iter()
        .map(|(candidate, breakdown)| RankedResult {
            candidate: candidate.clone(),
            explanation: explain(&breakdown),
            breakdown,
        })
        .collect();

    tracing::debug!(
        "Ranked {} of {} candidates for {}",
        results.len(),
        total_candidates,
        profile.user_id
    );

    Ok(RankedResults {
        results,
        total_candidates,
    })
}

/// Score each candidate, preserving input order
///
/// Results are collected before errors are inspected so the reported error
/// is always the first invalid candidate, parallel or not.
fn score_pool(
    profile: &Profile,
    candidates: &[&CandidateItem],
    config: &EngineConfig,
) -> Result<Vec<ScoreBreakdown>> {
    let outcomes: Vec<Result<ScoreBreakdown>> = if candidates.len() >= config.parallel_threshold {
        candidates
            .par_iter()
            .map(|candidate| score_candidate(profile, candidate, config))
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| score_candidate(profile, candidate, config))
            .collect()
    };

    outcomes.into_iter().collect()
}
