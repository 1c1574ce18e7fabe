use crate::error::{MatchError, Result};
use crate::models::{Profile, PsychographicTrait};

/// Fold a team into a single profile representing its collective taste
///
/// Tag sets are unioned in member order. Each trait is the mean of the
/// members' values, so the aggregate stays inside [0, 100].
///
/// # Errors
/// `InvalidInput` for an empty team or any member failing validation.
pub fn aggregate_team(team: &[Profile]) -> Result<Profile> {
    if team.is_empty() {
        return Err(MatchError::invalid("team must contain at least one profile"));
    }

    for member in team {
        member.validate()?;
    }

    let user_id = team
        .iter()
        .map(|member| member.user_id.as_str())
        .collect::<Vec<_>>()
        .join("+");

    let mut aggregate = Profile::new(user_id);
    for member in team {
        aggregate.music.extend(member.music.iter());
        aggregate.movies.extend(member.movies.iter());
        aggregate.interests.extend(member.interests.iter());
        aggregate.cultural_clusters.extend(member.cultural_clusters.iter());
        aggregate.skills.extend(member.skills.iter());
        aggregate.working_style.extend(member.working_style.iter());
    }

    let size = team.len() as f64;
    for name in PsychographicTrait::ALL {
        // validate() guarantees every member carries every trait
        let total: f64 = team
            .iter()
            .filter_map(|member| member.psychographic_traits.get(&name))
            .sum();
        aggregate.psychographic_traits.insert(name, total / size);
    }

    Ok(aggregate)
}
