use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::RankingSettings;
use crate::core::{CandidateFilter, CompatibilityEngine, RankOptions};
use crate::error::MatchError;
use crate::models::{
    into_candidates, AestheticRequest, CodeReviewRequest, ErrorResponse, ExplainRequest, ExplainResponse,
    HealthResponse, MentorRequest, ProjectSuggestionRequest, RankRequest, ScoreRequest, ScoreResponse,
    TeamRankRequest,
};
use crate::services::TextGenerator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: CompatibilityEngine,
    pub generator: Arc<dyn TextGenerator>,
    pub ranking: RankingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compat/score", web::post().to(score))
        .route("/compat/rank", web::post().to(rank))
        .route("/compat/team-rank", web::post().to(team_rank))
        .route("/compat/explain", web::post().to(explain))
        .route("/suggestions/project", web::post().to(suggest_project))
        .route("/suggestions/mentor", web::post().to(mentor_advice))
        .route("/suggestions/review", web::post().to(review_code))
        .route("/suggestions/aesthetic", web::post().to(suggest_aesthetic));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score two profiles as teammates
///
/// POST /api/v1/compat/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "userId": "string", "music": [], "culturalClusters": [], ... },
///   "profileB": { "userId": "string", ... }
/// }
/// ```
async fn score(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    let req = req.into_inner();

    match state.engine.score(&req.profile_a, &req.profile_b) {
        Ok(breakdown) => {
            tracing::info!(
                "Scored {} vs {}: {}",
                req.profile_a.user_id,
                req.profile_b.user_id,
                breakdown.overall_score
            );
            let explanation = state.engine.explain(&breakdown);
            HttpResponse::Ok().json(ScoreResponse { breakdown, explanation })
        }
        Err(e) => invalid_input("Failed to score profiles", e),
    }
}

/// Rank a candidate pool for a profile
///
/// POST /api/v1/compat/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "userId": "string", ... },
///   "candidates": [{ "kind": "event", "id": "string", "name": "string", "tags": [] }],
///   "threshold": 0,
///   "limit": 20,
///   "query": "optional search text",
///   "requiredTags": ["optional", "any-of"]
/// }
/// ```
async fn rank(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let candidates = match into_candidates(req.candidates) {
        Ok(candidates) => candidates,
        Err(e) => return invalid_input("Invalid candidate", e),
    };
    let options = rank_options(&state.ranking, req.threshold, req.limit);
    let filter = CandidateFilter {
        query: req.query,
        required_tags: req.required_tags.into_iter().collect(),
    };

    tracing::info!(
        "Ranking {} candidates for user: {}, limit: {:?}, filtered: {}",
        candidates.len(),
        req.profile.user_id,
        options.limit,
        !filter.is_empty()
    );

    match state.engine.rank_filtered(&req.profile, &candidates, &filter, options) {
        Ok(ranked) => HttpResponse::Ok().json(ranked),
        Err(e) => invalid_input("Failed to rank candidates", e),
    }
}

/// Rank a candidate pool for a team's collective taste
///
/// POST /api/v1/compat/team-rank
async fn team_rank(state: web::Data<AppState>, req: web::Json<TeamRankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for team-rank request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let candidates = match into_candidates(req.candidates) {
        Ok(candidates) => candidates,
        Err(e) => return invalid_input("Invalid candidate", e),
    };
    let options = rank_options(&state.ranking, req.threshold, req.limit);

    tracing::info!(
        "Ranking {} candidates for team of {}",
        candidates.len(),
        req.team.len()
    );

    match state.engine.rank_for_team(&req.team, &candidates, options) {
        Ok(ranked) => HttpResponse::Ok().json(ranked),
        Err(e) => invalid_input("Failed to rank candidates", e),
    }
}

/// Render a score breakdown as a sentence
///
/// POST /api/v1/compat/explain
async fn explain(state: web::Data<AppState>, req: web::Json<ExplainRequest>) -> impl Responder {
    HttpResponse::Ok().json(ExplainResponse {
        explanation: state.engine.explain(&req.breakdown),
    })
}

/// Templated project suggestion
///
/// POST /api/v1/suggestions/project
async fn suggest_project(
    state: web::Data<AppState>,
    req: web::Json<ProjectSuggestionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(state.generator.suggest_project(&req.idea, &req.team_skills))
}

/// Templated mentor advice
///
/// POST /api/v1/suggestions/mentor
async fn mentor_advice(state: web::Data<AppState>, req: web::Json<MentorRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(
        state
            .generator
            .mentor_advice(&req.description, &req.progress, &req.challenges),
    )
}

/// Rule-based code review
///
/// POST /api/v1/suggestions/review
async fn review_code(state: web::Data<AppState>, req: web::Json<CodeReviewRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let review = state.generator.review_code(&req.code, &req.language);
    tracing::info!(
        "Reviewed {} lines of {}: {} remarks",
        req.code.lines().count(),
        req.language,
        review.suggestions.len()
    );
    HttpResponse::Ok().json(review)
}

/// Design aesthetic for a profile
///
/// POST /api/v1/suggestions/aesthetic
async fn suggest_aesthetic(
    state: web::Data<AppState>,
    req: web::Json<AestheticRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(state.engine.recommend_aesthetic(&req.profile))
}

/// Request limit, falling back to the configured default and capped at the maximum
fn rank_options(settings: &RankingSettings, threshold: Option<f64>, limit: Option<u16>) -> RankOptions {
    let limit = limit.unwrap_or(settings.default_limit).min(settings.max_limit);
    RankOptions::new()
        .with_threshold(threshold.unwrap_or(0.0))
        .with_limit(limit as usize)
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn invalid_input(context: &str, err: MatchError) -> HttpResponse {
    tracing::info!("{}: {}", context, err);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}
