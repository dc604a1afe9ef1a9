use crate::page::render_page;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Json, Router,
};
use hackrx_client::{FormController, FormInput, HealthResponse};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<FormController>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/health", get(health))
        .with_state(state)
}

async fn show_form() -> Html<String> {
    Html(render_page(&FormInput::default(), None))
}

// Errors are part of the page, so the response is always 200.
async fn submit_form(State(state): State<AppState>, Form(input): Form<FormInput>) -> Html<String> {
    let outcome = state.controller.submit(&input).await;
    if let Err(e) = &outcome {
        if e.is_validation() {
            log::info!("Rejected submission: {}", e);
        }
    }
    Html(render_page(&input, Some(&outcome)))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
