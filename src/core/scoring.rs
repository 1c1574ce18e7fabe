use crate::core::engine::EngineConfig;
use crate::core::overlap::{mean_similarity, overlap, trait_similarity};
use crate::error::Result;
use crate::models::{CandidateItem, OverlapSets, Profile, ScoreBreakdown, ScoreComponents, TagSet};

/// Highest score any component can reach
pub const MAX_SCORE: f64 = 100.0;

/// Calculate teammate compatibility between two profiles
///
/// Scoring formula:
/// score = round(
///     cultural_score * 0.4 +       # shared cultural clusters / larger cluster set
///     taste_score * 0.3 +          # shared music + interests / 10, capped at 100
///     psychographic_score * 0.3    # mean trait similarity
/// )
///
/// Skill and working-style overlaps are reported for display but do not
/// contribute to the score.
pub fn score_teammates(a: &Profile, b: &Profile, config: &EngineConfig) -> Result<ScoreBreakdown> {
    a.validate()?;
    b.validate()?;

    // Cultural clusters
    let cultural = overlap(&a.cultural_clusters, &b.cultural_clusters);
    let largest_clusters = a.cultural_clusters.len().max(b.cultural_clusters.len());
    let cultural_score = ratio_score(cultural.len(), largest_clusters as f64);

    // Taste
    let music = overlap(&a.music, &b.music);
    let interests = overlap(&a.interests, &b.interests);
    let taste_score = ratio_score(music.len() + interests.len(), config.taste_normalization);

    // Psychographic traits
    let similarities = trait_similarity(&a.psychographic_traits, &b.psychographic_traits)?;
    let psychographic_score = mean_similarity(&similarities);

    let weights = &config.weights;
    let overall_score = (cultural_score * weights.cultural
        + taste_score * weights.taste
        + psychographic_score * weights.psychographic)
        .round()
        .clamp(0.0, MAX_SCORE);

    Ok(ScoreBreakdown {
        overall_score,
        components: ScoreComponents::Teammate {
            cultural_score,
            taste_score,
            psychographic_score,
        },
        overlap: OverlapSets {
            cultural,
            music,
            interests,
            skills: overlap(&a.skills, &b.skills),
            working_style: overlap(&a.working_style, &b.working_style),
            tags: TagSet::new(),
        },
    })
}

/// Calculate how well a candidate fits a profile
///
/// Teammates go through [`score_teammates`]. Events and project ideas carry no
/// trait data, so they get a single tag-overlap score instead.
pub fn score_candidate(
    profile: &Profile,
    candidate: &CandidateItem,
    config: &EngineConfig,
) -> Result<ScoreBreakdown> {
    match candidate {
        CandidateItem::Teammate(other) => score_teammates(profile, other, config),
        CandidateItem::Event(entry) | CandidateItem::ProjectIdea(entry) => {
            Ok(score_catalog_tags(profile, &entry.tags, config))
        }
    }
}

/// Score catalog tags against everything the profile carries
///
/// match_score = min(100, |overlap| / expected_tag_count * 100)
pub fn score_catalog_tags(profile: &Profile, tags: &TagSet, config: &EngineConfig) -> ScoreBreakdown {
    let matched = overlap(tags, &profile.all_tags());
    let match_score = ratio_score(matched.len(), config.expected_tag_count);

    ScoreBreakdown {
        overall_score: match_score,
        components: ScoreComponents::Catalog { match_score },
        overlap: OverlapSets {
            cultural: overlap(tags, &profile.cultural_clusters),
            music: overlap(tags, &profile.music),
            interests: overlap(tags, &profile.interests),
            skills: overlap(tags, &profile.skills),
            working_style: TagSet::new(),
            tags: matched,
        },
    }
}

/// `count / denominator * 100`, capped at 100; 0 when the denominator is 0
#[inline]
fn ratio_score(count: usize, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    // Multiply first so exact ratios stay exact (2 / 10 -> 20, not 20.000000000000004)
    (count as f64 * MAX_SCORE / denominator).min(MAX_SCORE)
}
