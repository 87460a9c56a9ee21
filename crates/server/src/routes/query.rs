use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[post("/query")]
pub async fn query(
    body: web::Json<QueryRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if body.query.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Query cannot be empty"
        })));
    }

    let outcome = state
        .engine
        .answer(&body.query)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(outcome))
}
