use serde::{Deserialize, Serialize};

use crate::models::{Profile, TagSet};

const ELECTRONIC_MUSIC: &[&str] = &["Electronic", "Synthwave"];
const FUTURIST_MOVIES: &[&str] = &["Cyberpunk", "Sci-Fi"];

/// Design direction derived from a profile's taste
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AestheticRecommendation {
    pub color_palette: Vec<String>,
    pub design_style: String,
    pub typography: String,
    pub reasoning: String,
}

/// Map taste tags to a UI palette and style
///
/// Electronic music together with cyberpunk or sci-fi movies points to a neon
/// look; everything else gets the gradient default.
pub fn recommend_aesthetic(profile: &Profile) -> AestheticRecommendation {
    let electronic = contains_any(&profile.music, ELECTRONIC_MUSIC);
    let futurist = contains_any(&profile.movies, FUTURIST_MOVIES);

    if electronic && futurist {
        return AestheticRecommendation {
            color_palette: palette(&["#8B5CF6", "#06B6D4", "#EC4899", "#10B981"]),
            design_style: "Cyberpunk Neon".to_string(),
            typography: "Futuristic Sans-serif".to_string(),
            reasoning: "Your love for electronic music and cyberpunk aesthetics suggests a neon-futuristic design approach".to_string(),
        };
    }

    AestheticRecommendation {
        color_palette: palette(&["#6366F1", "#8B5CF6", "#EC4899", "#F59E0B"]),
        design_style: "Modern Gradient".to_string(),
        typography: "Clean Sans-serif".to_string(),
        reasoning: "Based on your tech-forward interests and creative preferences".to_string(),
    }
}

#[inline]
fn contains_any(tags: &TagSet, wanted: &[&str]) -> bool {
    wanted.iter().any(|tag| tags.contains(tag))
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}
