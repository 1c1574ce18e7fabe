use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use crate::error::{MatchError, Result};

/// Lowest value a psychographic trait may take
pub const TRAIT_MIN: f64 = 0.0;
/// Highest value a psychographic trait may take
pub const TRAIT_MAX: f64 = 100.0;

/// Case-insensitive comparison key for a tag
#[inline]
pub fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Ordered, deduplicated collection of tags
///
/// Membership is case-insensitive. The first spelling of a tag wins and
/// insertion order is kept so that anything rendered from a set (overlaps,
/// explanations) comes out the same on every run. Lowercased keys are indexed
/// alongside the tags, so membership checks and inserts are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
    keys: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning false for blanks and case-insensitive duplicates
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() || !self.keys.insert(tag_key(trimmed)) {
            return false;
        }
        self.tags.push(trimmed.to_string());
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.keys.contains(&tag_key(tag))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Lowercased keys of every tag in the set
    pub fn keys(&self) -> &HashSet<String> {
        &self.keys
    }

    /// Tags of `self` followed by the tags of `other` not already present
    pub fn union(&self, other: &TagSet) -> TagSet {
        let mut merged = self.clone();
        merged.extend(other.iter());
        merged
    }
}

impl<S: AsRef<str>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Fixed set of psychographic traits carried by every profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PsychographicTrait {
    Creativity,
    Innovation,
    Collaboration,
    TechSavviness,
}

impl PsychographicTrait {
    pub const ALL: [PsychographicTrait; 4] = [
        PsychographicTrait::Creativity,
        PsychographicTrait::Innovation,
        PsychographicTrait::Collaboration,
        PsychographicTrait::TechSavviness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PsychographicTrait::Creativity => "creativity",
            PsychographicTrait::Innovation => "innovation",
            PsychographicTrait::Collaboration => "collaboration",
            PsychographicTrait::TechSavviness => "techSavviness",
        }
    }
}

impl std::fmt::Display for PsychographicTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait name to value in [0, 100]
pub type TraitMap = BTreeMap<PsychographicTrait, f64>;

/// Participant profile with taste, skill and trait data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub music: TagSet,
    #[serde(default)]
    pub movies: TagSet,
    #[serde(default, alias = "books")]
    pub interests: TagSet,
    #[serde(default)]
    pub cultural_clusters: TagSet,
    #[serde(default)]
    pub psychographic_traits: TraitMap,
    #[serde(default)]
    pub skills: TagSet,
    #[serde(default)]
    pub working_style: TagSet,
}

impl Profile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn with_music<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.music.extend(tags);
        self
    }

    pub fn with_movies<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.movies.extend(tags);
        self
    }

    pub fn with_interests<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.interests.extend(tags);
        self
    }

    pub fn with_cultural_clusters<S: AsRef<str>>(
        mut self,
        tags: impl IntoIterator<Item = S>,
    ) -> Self {
        self.cultural_clusters.extend(tags);
        self
    }

    pub fn with_skills<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.skills.extend(tags);
        self
    }

    pub fn with_working_style<S: AsRef<str>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.working_style.extend(tags);
        self
    }

    pub fn with_trait(mut self, name: PsychographicTrait, value: f64) -> Self {
        self.psychographic_traits.insert(name, value);
        self
    }

    /// Set all four traits at once, in `PsychographicTrait::ALL` order
    pub fn with_traits(mut self, values: [f64; 4]) -> Self {
        for (name, value) in PsychographicTrait::ALL.into_iter().zip(values) {
            self.psychographic_traits.insert(name, value);
        }
        self
    }

    /// Check the trait invariants: every trait present, finite and in [0, 100]
    pub fn validate(&self) -> Result<()> {
        for name in PsychographicTrait::ALL {
            match self.psychographic_traits.get(&name) {
                None => {
                    return Err(MatchError::invalid(format!(
                        "profile {} is missing trait {}",
                        self.user_id, name
                    )))
                }
                Some(value) if !value.is_finite() || !(TRAIT_MIN..=TRAIT_MAX).contains(value) => {
                    return Err(MatchError::invalid(format!(
                        "profile {} has {} = {}, expected a value in [0, 100]",
                        self.user_id, name, value
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Every tag the profile carries, used when matching against catalog items
    pub fn all_tags(&self) -> TagSet {
        self.music
            .union(&self.movies)
            .union(&self.interests)
            .union(&self.cultural_clusters)
            .union(&self.skills)
    }
}

/// Catalog record for events and project ideas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub tags: TagSet,
}

impl CatalogEntry {
    pub fn new<S: AsRef<str>>(
        id: impl Into<String>,
        name: impl Into<String>,
        tags: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: tags.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateKind {
    Event,
    Teammate,
    ProjectIdea,
}

/// Something a profile can be matched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CandidateItem {
    Event(CatalogEntry),
    Teammate(Profile),
    ProjectIdea(CatalogEntry),
}

impl CandidateItem {
    pub fn id(&self) -> &str {
        match self {
            CandidateItem::Event(entry) | CandidateItem::ProjectIdea(entry) => &entry.id,
            CandidateItem::Teammate(profile) => &profile.user_id,
        }
    }

    /// Display name; teammates are known by their user id
    pub fn name(&self) -> &str {
        match self {
            CandidateItem::Event(entry) | CandidateItem::ProjectIdea(entry) => &entry.name,
            CandidateItem::Teammate(profile) => &profile.user_id,
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            CandidateItem::Event(_) => CandidateKind::Event,
            CandidateItem::Teammate(_) => CandidateKind::Teammate,
            CandidateItem::ProjectIdea(_) => CandidateKind::ProjectIdea,
        }
    }

    /// Tags exposed by the candidate; teammates expose their whole profile
    pub fn tags(&self) -> Cow<'_, TagSet> {
        match self {
            CandidateItem::Event(entry) | CandidateItem::ProjectIdea(entry) => {
                Cow::Borrowed(&entry.tags)
            }
            CandidateItem::Teammate(profile) => Cow::Owned(profile.all_tags()),
        }
    }
}

/// Overlap sets behind a score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSets {
    #[serde(default)]
    pub cultural: TagSet,
    #[serde(default)]
    pub music: TagSet,
    #[serde(default)]
    pub interests: TagSet,
    #[serde(default)]
    pub skills: TagSet,
    #[serde(default)]
    pub working_style: TagSet,
    /// Catalog matches only: candidate tags found anywhere on the profile
    #[serde(default)]
    pub tags: TagSet,
}

/// Component scores, depending on what was compared
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScoreComponents {
    #[serde(rename_all = "camelCase")]
    Teammate {
        cultural_score: f64,
        taste_score: f64,
        psychographic_score: f64,
    },
    #[serde(rename_all = "camelCase")]
    Catalog { match_score: f64 },
}

/// Result of comparing a profile with another profile or a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall_score: f64,
    pub components: ScoreComponents,
    #[serde(default)]
    pub overlap: OverlapSets,
}

/// A scored candidate with its rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub candidate: CandidateItem,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Weights of the teammate compatibility formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub cultural: f64,
    pub taste: f64,
    pub psychographic: f64,
}

/// Allowed drift of the weight sum away from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.cultural + self.taste + self.psychographic
    }

    /// Weights must be finite, non-negative and sum to 1.0
    pub fn validate(&self) -> Result<()> {
        let all = [self.cultural, self.taste, self.psychographic];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MatchError::invalid(format!(
                "scoring weights must be finite and non-negative, got {:?}",
                self
            )));
        }
        if (self.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::invalid(format!(
                "scoring weights must sum to 1.0, got {}",
                self.sum()
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cultural: 0.4,
            taste: 0.3,
            psychographic: 0.3,
        }
    }
}
