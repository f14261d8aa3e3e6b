use crate::core::{extract_criteria, Recommender};
use crate::models::{ErrorResponse, HealthResponse, Recommendation, RecommendParams, Restaurant};
use crate::services::CatalogStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::get().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.catalog.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend endpoint
///
/// GET /api/v1/recommend?query=vegetarian+italian+open+now
///
/// Parses the free-form query into criteria using the catalog's style
/// vocabulary, then returns the first catalog entry satisfying every
/// specified criterion, or 404 when nothing matches. Either way the
/// query and its serialized outcome are audit-logged off the response
/// path.
async fn recommend(
    state: web::Data<AppState>,
    params: web::Query<RecommendParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = &params.query;

    tracing::info!("Recommending for query: {}", query);

    let styles = match state.catalog.distinct_styles().await {
        Ok(styles) => styles,
        Err(e) => {
            tracing::error!("Failed to load style vocabulary: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load restaurant styles".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let criteria = extract_criteria(query, &styles);

    tracing::debug!("Extracted criteria: {:?}", criteria);

    let catalog = match state.catalog.restaurants().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load restaurants".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let now = chrono::Local::now().naive_local();
    let outcome = state.recommender.recommend(&criteria, catalog, now);

    tracing::info!(
        "Query \"{}\" evaluated against {} candidates, match: {}",
        query,
        outcome.total_candidates,
        outcome.recommendation.is_some()
    );

    match outcome.recommendation {
        Some(restaurant) => {
            let response = Recommendation {
                restaurant_recommendation: restaurant,
            };
            spawn_audit_log(state.catalog.clone(), query.clone(), response.clone());
            HttpResponse::Ok().json(response)
        }
        None => {
            let sentinel = Recommendation {
                restaurant_recommendation: Restaurant::no_match(),
            };
            spawn_audit_log(state.catalog.clone(), query.clone(), sentinel);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "No match".to_string(),
                message: "No restaurant found matching the criteria".to_string(),
                status_code: 404,
            })
        }
    }
}

/// Persist the query and its serialized outcome off the response path
///
/// Fire-and-forget: failures are logged, never propagated, and there is
/// no ordering guarantee relative to the HTTP response.
fn spawn_audit_log(catalog: Arc<CatalogStore>, query: String, response: Recommendation) {
    tokio::spawn(async move {
        let payload = match serde_json::to_string(&response) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize audit response: {}", e);
                return;
            }
        };

        if let Err(e) = catalog.log_query(&query, &payload).await {
            tracing::warn!("Failed to record query log: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_sentinel_serialization() {
        let sentinel = Recommendation {
            restaurant_recommendation: Restaurant::no_match(),
        };
        let json = serde_json::to_string(&sentinel).unwrap();
        assert!(json.contains("\"restaurantRecommendation\""));
        assert!(json.contains("\"No match found\""));
    }
}
