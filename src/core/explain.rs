use crate::models::{ScoreBreakdown, TagSet};

/// Sentence used when no overlap produced a clause
pub const FALLBACK_EXPLANATION: &str =
    "You have complementary cultural backgrounds that could create interesting collaborations.";

/// Turn a score breakdown into a deterministic sentence
///
/// Clauses, in order: shared music, shared interests, shared cultural
/// clusters. Clauses are joined with commas and the sentence ends with a
/// period. Same breakdown in, same sentence out.
pub fn explain(breakdown: &ScoreBreakdown) -> String {
    let overlap = &breakdown.overlap;
    let mut clauses = Vec::with_capacity(3);

    if !overlap.music.is_empty() {
        clauses.push(format!("You both love {} music", join_items(&overlap.music)));
    }

    if !overlap.interests.is_empty() {
        clauses.push(format!("share interests in {}", join_items(&overlap.interests)));
    }

    if !overlap.cultural.is_empty() {
        clauses.push("belong to similar cultural clusters".to_string());
    }

    if clauses.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }

    format!("{}.", clauses.join(", "))
}

/// "A", "A and B", "A, B, and C"
pub fn join_items(items: &TagSet) -> String {
    match items.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverlapSets, ScoreComponents};

    fn breakdown(music: &[&str], interests: &[&str], cultural: &[&str]) -> ScoreBreakdown {
        ScoreBreakdown {
            overall_score: 0.0,
            components: ScoreComponents::Catalog { match_score: 0.0 },
            overlap: OverlapSets {
                music: music.iter().collect(),
                interests: interests.iter().collect(),
                cultural: cultural.iter().collect(),
                ..OverlapSets::default()
            },
        }
    }

    #[test]
    fn test_all_clauses() {
        let sentence = explain(&breakdown(&["Techno"], &["AI"], &["tech_innovators"]));
        assert_eq!(
            sentence,
            "You both love Techno music, share interests in AI, belong to similar cultural clusters."
        );
    }

    #[test]
    fn test_interests_only() {
        let sentence = explain(&breakdown(&[], &["AI", "Startups"], &[]));
        assert_eq!(sentence, "share interests in AI and Startups.");
    }

    #[test]
    fn test_three_items_use_serial_comma() {
        let sentence = explain(&breakdown(&["Techno", "Jazz", "Synthwave"], &[], &[]));
        assert_eq!(sentence, "You both love Techno, Jazz, and Synthwave music.");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(explain(&breakdown(&[], &[], &[])), FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_skills_do_not_produce_clauses() {
        let mut b = breakdown(&[], &[], &[]);
        b.overlap.skills = ["Rust"].into_iter().collect();
        assert_eq!(explain(&b), FALLBACK_EXPLANATION);
    }
}
