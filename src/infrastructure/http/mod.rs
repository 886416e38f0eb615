//! HTTP REST API routes

mod account_routes;
mod character_routes;
mod encounter_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use account_routes::*;
pub use character_routes::*;
pub use encounter_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Account routes
        .route("/api/accounts", post(account_routes::register))
        .route("/api/login", post(account_routes::login))
        .route("/api/logout", post(account_routes::logout))
        // Character routes
        .route(
            "/api/accounts/{username}/characters",
            get(character_routes::list_characters),
        )
        .route(
            "/api/accounts/{username}/characters",
            post(character_routes::create_character),
        )
        .route(
            "/api/accounts/{username}/characters/{id}",
            get(character_routes::get_character),
        )
        .route(
            "/api/accounts/{username}/characters/{id}",
            put(character_routes::update_character),
        )
        .route(
            "/api/accounts/{username}/characters/{id}",
            delete(character_routes::delete_character),
        )
        .route(
            "/api/accounts/{username}/characters/{id}/stats",
            get(character_routes::character_stats),
        )
        // Encounter routes
        .route("/api/monsters", get(encounter_routes::list_monsters))
        .route(
            "/api/encounters/generate",
            post(encounter_routes::generate_encounter),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;

    const FIXTURE_MONSTERS: &str = r#"[
        {"name":"Commoner","challenge_rating":0,"type":"humanoid","size":"medium"},
        {"name":"Bandit","challenge_rating":"1/8","type":"humanoid","size":"medium"},
        {"name":"Goblin","challenge_rating":"1/4","type":"humanoid","size":"small"},
        {"name":"Orc","challenge_rating":"1/2","type":"humanoid","size":"medium"},
        {"name":"Bugbear","challenge_rating":1,"type":"humanoid","size":"medium"},
        {"name":"Ogre","challenge_rating":2,"type":"giant","size":"large"},
        {"name":"Knight","challenge_rating":3,"type":"humanoid","size":"medium"}
    ]"#;

    async fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let monster_data_path = dir.path().join("monsters.json");
        std::fs::write(&monster_data_path, FIXTURE_MONSTERS).unwrap();

        let config = AppConfig {
            accounts_path: dir.path().join("accounts.json"),
            monster_data_path,
            monster_api_url: None,
            autosave_interval_secs: 30,
            server_port: 0,
        };
        let state = Arc::new(AppState::new(config).await.unwrap());
        (create_routes().with_state(state), dir)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_login_flow() {
        let (app, _dir) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/accounts",
                json!({"username": "morgan", "password": "hunter2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Duplicate registration conflicts
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/accounts",
                json!({"username": "morgan", "password": "other"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Login succeeds with the right password and opens a session
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/login",
                json!({"username": "morgan", "password": "hunter2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["session_id"].is_string());
        assert_eq!(body["account"]["username"], "morgan");

        // Wrong password is unauthorized
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/login",
                json!({"username": "morgan", "password": "nope"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_character_sheet_and_stats_endpoint() {
        let (app, _dir) = test_app().await;

        app.clone()
            .oneshot(post_json(
                "/api/accounts",
                json!({"username": "morgan", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/accounts/morgan/characters",
                json!({
                    "name": "Brom",
                    "class": "fighter",
                    "level": 5,
                    "abilities": {
                        "strength": 16, "dexterity": 12, "constitution": 14,
                        "intelligence": 8, "wisdom": 10, "charisma": 10
                    },
                    "skill_proficiencies": ["athletics"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/accounts/morgan/characters/{}/stats", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["max_hit_points"], 44);
        assert_eq!(stats["proficiency_bonus"], 3);
        assert_eq!(stats["melee_attack_bonus"], 6);
        assert_eq!(stats["skills"]["athletics"], 6);
    }

    #[tokio::test]
    async fn test_out_of_range_sheet_is_rejected() {
        let (app, _dir) = test_app().await;

        app.clone()
            .oneshot(post_json(
                "/api/accounts",
                json!({"username": "morgan", "password": "hunter2"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/accounts/morgan/characters",
                json!({
                    "name": "Too Strong",
                    "class": "fighter",
                    "level": 25,
                    "abilities": {
                        "strength": 16, "dexterity": 12, "constitution": 14,
                        "intelligence": 8, "wisdom": 10, "charisma": 10
                    }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_encounter_endpoint() {
        let (app, _dir) = test_app().await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/encounters/generate",
                json!({"party_level": 3, "party_size": 4, "difficulty": "medium"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["xp_budget"], 600);
        assert_eq!(body["win_chance_percent"], 75);
        assert!(!body["entries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_encounter_with_no_match_is_not_found() {
        let (app, _dir) = test_app().await;

        // Fixture catalog tops out at CR 3
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/encounters/generate",
                json!({"party_level": 15, "party_size": 4, "difficulty": "hard"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_monsters() {
        let (app, _dir) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/monsters")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 7);
    }
}
