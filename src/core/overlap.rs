use crate::error::{MatchError, Result};
use crate::models::{TagSet, TraitMap, TRAIT_MAX, TRAIT_MIN};

/// Case-insensitive intersection of two tag sets
///
/// Exact matches only, no fuzzy matching. The result keeps the spelling and
/// order of `a`.
pub fn overlap(a: &TagSet, b: &TagSet) -> TagSet {
    if a.is_empty() || b.is_empty() {
        return TagSet::new();
    }

    a.iter().filter(|tag| b.contains(tag)).collect()
}

/// Per-trait similarity between two trait mappings
///
/// Each trait scores `100 - |a - b|`, clamped to [0, 100]: a zero difference
/// gives 100 and a 100-point difference gives 0.
///
/// # Errors
/// `InvalidInput` when the two mappings do not share the same key set.
pub fn trait_similarity(a: &TraitMap, b: &TraitMap) -> Result<TraitMap> {
    if !a.keys().eq(b.keys()) {
        let left: Vec<_> = a.keys().map(|k| k.as_str()).collect();
        let right: Vec<_> = b.keys().map(|k| k.as_str()).collect();
        return Err(MatchError::invalid(format!(
            "trait key sets differ: {:?} vs {:?}",
            left, right
        )));
    }

    Ok(a.iter()
        .zip(b.values())
        .map(|((name, left), right)| {
            let similarity = (TRAIT_MAX - (left - right).abs()).clamp(TRAIT_MIN, TRAIT_MAX);
            (*name, similarity)
        })
        .collect())
}

/// Arithmetic mean of per-trait similarities, 0 for an empty mapping
#[inline]
pub fn mean_similarity(similarities: &TraitMap) -> f64 {
    if similarities.is_empty() {
        return 0.0;
    }
    similarities.values().sum::<f64>() / similarities.len() as f64
}
