use actix_web::{get, web, HttpResponse};

use crate::state::AppState;

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/stats")]
pub async fn stats(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    let params = state.engine.params();

    HttpResponse::Ok().json(serde_json::json!({
        "corpus_entries": state.engine.corpus_len(),
        "embedding_model": state.engine.model_name(),
        "top_k": params.top_k,
        "similarity_threshold": params.threshold,
        "built_at": state.built_at,
    }))
}
