use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::CollaboratorRanker;
use crate::models::{ErrorResponse, HealthResponse, RankCandidatesRequest, RankCollaboratorsRequest, RankCollaboratorsResponse};
use crate::services::ProfileStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub ranker: CollaboratorRanker,
    pub ranking: RankingSettings,
}

/// Configure all collaborator routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/collaborators/rank", web::post().to(rank_collaborators))
        .route("/collaborators/rank/direct", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn error_response(status: u16, error: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    }
}

/// Rank collaborators for a stored user
///
/// POST /api/v1/collaborators/rank
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "excludeUserIds": ["string"]
/// }
/// ```
async fn rank_collaborators(
    state: web::Data<AppState>,
    req: web::Json<RankCollaboratorsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(error_response(
            400,
            "Validation failed",
            errors.to_string(),
        ));
    }

    let user_id = &req.user_id;
    let limit = req
        .limit
        .unwrap_or(state.ranking.default_limit)
        .min(state.ranking.max_limit) as usize;

    tracing::info!("Ranking collaborators for user: {}, limit: {}", user_id, limit);

    // An unknown user ranks like an absent requester
    let requester = match state.store.get_requester(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch requester profile for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(error_response(
                500,
                "Failed to fetch requester profile",
                e.to_string(),
            ));
        }
    };

    if requester.is_none() {
        tracing::debug!("No stored profile for {}, ranking by name only", user_id);
    }

    let candidates = match state
        .store
        .list_candidates(user_id, &req.exclude_user_ids, state.ranking.candidate_pool_size)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to query candidates for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(error_response(
                500,
                "Failed to query candidates",
                e.to_string(),
            ));
        }
    };

    let total_candidates = candidates.len();
    let mut collaborators = state.ranker.rank(candidates, requester.as_ref());
    collaborators.truncate(limit);

    tracing::info!(
        "Returning {} collaborators for user {} (from {} candidates)",
        collaborators.len(),
        user_id,
        total_candidates
    );

    HttpResponse::Ok().json(RankCollaboratorsResponse {
        collaborators,
        total_candidates,
    })
}

/// Rank a caller-supplied candidate list
///
/// POST /api/v1/collaborators/rank/direct
///
/// Request body:
/// ```json
/// {
///   "requester": { "genres": ["jazz"], "location": "Austin, TX" },
///   "candidates": [{ "id": "u1", "displayName": "Amy", "genres": [], "location": null }]
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankCandidatesRequest>,
) -> impl Responder {
    let RankCandidatesRequest { requester, candidates } = req.into_inner();
    let total_candidates = candidates.len();

    let collaborators = state.ranker.rank(candidates, requester.as_ref());

    HttpResponse::Ok().json(RankCollaboratorsResponse {
        collaborators,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateProfile, RequestingUserProfile};
    use crate::services::StoreError;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct FixedStore {
        requester: Option<RequestingUserProfile>,
        candidates: Vec<CandidateProfile>,
        fail: bool,
    }

    #[async_trait]
    impl ProfileStore for FixedStore {
        async fn get_requester(&self, _user_id: &str) -> Result<Option<RequestingUserProfile>, StoreError> {
            if self.fail {
                return Err(StoreError::ApiError("backend unavailable".to_string()));
            }
            Ok(self.requester.clone())
        }

        async fn list_candidates(
            &self,
            _user_id: &str,
            exclude_ids: &[String],
            _limit: usize,
        ) -> Result<Vec<CandidateProfile>, StoreError> {
            Ok(self
                .candidates
                .iter()
                .filter(|c| !exclude_ids.contains(&c.id))
                .cloned()
                .collect())
        }
    }

    fn state(store: FixedStore) -> AppState {
        AppState {
            store: Arc::new(store),
            ranker: CollaboratorRanker::new(),
            ranking: RankingSettings::default(),
        }
    }

    fn pool() -> Vec<CandidateProfile> {
        vec![
            CandidateProfile::new("1", "Zoe").with_location("Miami, FL"),
            CandidateProfile::new("2", "Amy").with_genres(["jazz"]).with_location("Austin, TX"),
            CandidateProfile::new("3", "Mia").with_location("Houston, TX"),
        ]
    }

    #[actix_web::test]
    async fn test_health_check() {
        let store = FixedStore { requester: None, candidates: vec![], fail: false };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_rank_for_stored_user() {
        let store = FixedStore {
            requester: Some(RequestingUserProfile::new(["jazz"], Some("Austin, TX"))),
            candidates: pool(),
            fail: false,
        };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/collaborators/rank")
            .set_json(serde_json::json!({ "userId": "me", "limit": 2 }))
            .to_request();
        let resp: RankCollaboratorsResponse = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = resp.collaborators.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(resp.total_candidates, 3);
    }

    #[actix_web::test]
    async fn test_unknown_user_ranks_by_name() {
        let store = FixedStore { requester: None, candidates: pool(), fail: false };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/collaborators/rank")
            .set_json(serde_json::json!({ "userId": "ghost", "excludeUserIds": ["3"] }))
            .to_request();
        let resp: RankCollaboratorsResponse = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = resp.collaborators.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Zoe"]);
    }

    #[actix_web::test]
    async fn test_rejects_empty_user_id() {
        let store = FixedStore { requester: None, candidates: vec![], fail: false };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/collaborators/rank")
            .set_json(serde_json::json!({ "userId": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_store_failure_is_500() {
        let store = FixedStore { requester: None, candidates: pool(), fail: true };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/collaborators/rank")
            .set_json(serde_json::json!({ "userId": "me" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }

    async fn post_rank(body: test::TestRequest) -> (u16, serde_json::Value) {
        let store = FixedStore { requester: None, candidates: pool(), fail: false };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(store)))
                .app_data(crate::routes::json_config())
                .configure(configure),
        )
        .await;

        let resp = test::call_service(&app, body.uri("/collaborators/rank").to_request()).await;
        let status = resp.status().as_u16();
        let json: serde_json::Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn test_wrongly_typed_user_id_is_json_400() {
        let (status, body) = post_rank(
            test::TestRequest::post().set_json(serde_json::json!({ "userId": 5 })),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "invalid_json");
    }

    #[actix_web::test]
    async fn test_truncated_body_is_json_400() {
        let (status, body) = post_rank(
            test::TestRequest::post()
                .insert_header(("content-type", "application/json"))
                .set_payload("{\"userId\": \"me\""),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["statusCode"], 400);
    }

    #[actix_web::test]
    async fn test_limit_out_of_range_is_400() {
        for limit in [0, 101] {
            let (status, body) = post_rank(
                test::TestRequest::post().set_json(serde_json::json!({ "userId": "me", "limit": limit })),
            )
            .await;

            assert_eq!(status, 400, "limit {}", limit);
            assert_eq!(body["statusCode"], 400);
        }
    }

    #[actix_web::test]
    async fn test_limit_at_bounds_is_accepted() {
        for limit in [1usize, 100] {
            let (status, body) = post_rank(
                test::TestRequest::post().set_json(serde_json::json!({ "userId": "me", "limit": limit })),
            )
            .await;

            assert_eq!(status, 200, "limit {}", limit);
            assert!(body["collaborators"].as_array().map_or(false, |c| c.len() <= limit));
        }
    }

    #[actix_web::test]
    async fn test_direct_ranking() {
        let store = FixedStore { requester: None, candidates: vec![], fail: false };
        let app = test::init_service(
            App::new().app_data(web::Data::new(state(store))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/collaborators/rank/direct")
            .set_json(serde_json::json!({
                "requester": { "genres": ["rock"], "location": null },
                "candidates": [
                    { "id": "a", "displayName": "Amy", "genres": [] },
                    { "id": "b", "displayName": "Bo", "genres": ["Rock"] }
                ]
            }))
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["collaborators"][0]["id"], "b");
        assert_eq!(resp["totalCandidates"], 2);
        assert!(resp["collaborators"][0].get("score").is_none());
    }
}
