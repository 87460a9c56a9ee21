//! CampusQA HTTP server
//!
//! One externally meaningful operation: `POST /query` with
//! `{"query": "..."}` answers `{"answer": string|null,
//! "similar_questions": [...]}`. The corpus and index are built once,
//! before the listener binds; request handlers only read.

pub mod routes;
pub mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use campusqa_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Build the application state and run the HTTP server until shutdown.
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::build(config).await?);

    info!(
        "Server starting at {} with {} corpus entries",
        bind_address,
        state.engine.corpus_len()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::query::query)
            .service(routes::system::health)
            .service(routes::system::stats)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use campusqa_corpus::records::{FacultyMember, Record};
    use campusqa_corpus::synthesize;
    use campusqa_embed::HashingEmbedder;
    use campusqa_common::EmbedderBackend;

    async fn test_state() -> Arc<AppState> {
        let config = AppConfig {
            embedder_backend: EmbedderBackend::Hashing,
            ..AppConfig::default()
        };
        let corpus = synthesize(&[Record::Faculty(FacultyMember {
            name: "A Rao".to_string(),
            department: "CSE".to_string(),
        })]);
        Arc::new(
            AppState::from_corpus(config, corpus, Arc::new(HashingEmbedder::new()))
                .await
                .unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_query_route_confident_answer() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .service(routes::query::query),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({ "query": "Who is A Rao?" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["answer"],
            "A Rao is a faculty member in the CSE department."
        );
        assert_eq!(body["similar_questions"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_query_route_rejects_empty_query() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .service(routes::query::query),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({ "query": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_query_route_disambiguates() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .service(routes::query::query),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/query")
            .set_json(serde_json::json!({ "query": "completely unrelated nonsense" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["answer"].is_null());
        assert_eq!(body["similar_questions"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_health_route() {
        let app = test::init_service(App::new().service(routes::system::health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_stats_route() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .service(routes::system::stats),
        )
        .await;
        let req = test::TestRequest::get().uri("/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["corpus_entries"], 15);
        assert_eq!(body["embedding_model"], "token-hashing");
        assert_eq!(body["top_k"], 5);
    }
}
