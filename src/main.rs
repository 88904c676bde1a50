mod api;
mod classifier;
mod engine;
mod model;
mod text;
mod tokenizer;

use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower_http::services::ServeDir;

use engine::SentimentEngine;

#[derive(OpenApi)]
#[openapi(
    paths(api::predict, api::health),
    components(schemas(
        api::PredictForm,
        api::PredictResponse,
        api::PredictError,
        api::HealthResponse
    )),
    tags(
        (name = "sentiment", description = "Sentiment Prediction API")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let tokenizer_path =
        env::var("TOKENIZER_PATH").unwrap_or_else(|_| "tokenizer.json".to_string());
    let model_server_url =
        env::var("MODEL_SERVER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    // Load once before serving. On failure the server still starts but every
    // prediction returns the fixed error payload.
    let engine = match SentimentEngine::load(&tokenizer_path, &model_server_url).await {
        Ok(engine) => Some(engine),
        Err(e) => {
            tracing::error!("failed to load model or tokenizer, serving error state: {e:#}");
            None
        }
    };

    let state = Arc::new(api::AppState { engine });

    let app = Router::new()
        .merge(SwaggerUi::new("/sentiment-api-swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/predict", post(api::predict))
        .route("/health", get(api::health))
        .nest_service("/", ServeDir::new("static")) // Serve the input form
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
