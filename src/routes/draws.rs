use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{validate_roster, Matcher};
use crate::models::{Competitor, DrawRequest, DrawResponse, ErrorResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_competitors: usize,
}

/// Configure all draw-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/draws", web::post().to(create_draw))
        .route("/config/pairing", web::get().to(pairing_config));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Effective pairing defaults
///
/// GET /api/v1/config/pairing
async fn pairing_config(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.config())
}

/// Draw endpoint
///
/// POST /api/v1/draws
///
/// Request body:
/// ```json
/// {
///   "competitors": [
///     {"id": 1, "groupId": "string", "frontName": "string", "weightLb": 4.5}
///   ],
///   "mode": "front_aware|convergence|simple",
///   "maxWeightDiffLb": 0.02
/// }
/// ```
///
/// Nothing is persisted; the caller stores the returned draw.
async fn create_draw(
    state: web::Data<AppState>,
    req: web::Json<DrawRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for draw request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Validation failed",
            errors.to_string(),
        ));
    }

    let req = req.into_inner();

    let matcher = match state.matcher.with_overrides(req.mode, req.max_weight_diff_lb) {
        Ok(matcher) => matcher,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
                "Invalid pairing parameters",
                e.to_string(),
            ));
        }
    };

    let competitors: Vec<Competitor> = req.competitors.into_iter().map(Competitor::from).collect();

    if let Err(e) = validate_roster(&competitors, state.max_competitors) {
        tracing::info!("Rejected roster of {} competitors: {}", competitors.len(), e);
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Invalid roster",
            e.to_string(),
        ));
    }

    let result = matcher.draw(&competitors);

    if result.pairs.is_empty() {
        tracing::info!("No valid pairs for a roster of {}", competitors.len());
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "No valid pairs",
            "No valid pairs could be formed. Check that competitors from different groups exist.",
        ));
    }

    let summary = result.summary();
    let response = DrawResponse {
        draw_id: uuid::Uuid::new_v4().to_string(),
        generated_at: chrono::Utc::now(),
        mode: matcher.config().mode,
        pairs: result.pairs,
        leftovers: result.leftovers,
        excluded_fronts: result.excluded_fronts,
        summary,
    };

    tracing::info!(
        "Draw {} produced {} pairs from {} competitors",
        response.draw_id,
        summary.total_pairs,
        summary.total_registered
    );

    HttpResponse::Ok().json(response)
}
