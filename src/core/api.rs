//! HTTP API for Zeta Planets
//!
//! Endpoints:
//! - GET  /health            - Health check
//! - GET  /planet/:fid       - Planet JSON for an fid
//! - GET  /planet/:fid/svg   - Planet SVG for an fid
//! - POST /generate-pfp      - {dna} → {imageUrl}
//! - GET  /pfp/:dna          - Planet SVG for a DNA (".svg" suffix optional)

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::{generate_planet, render_svg, TraitDecoder};
use crate::types::{Digest, DnaError, IdentityValue, Planet};
use crate::{GENERIC_FAILURE, LAYOUT_VERSION, VERSION};

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
    /// Prefix for returned image URLs (empty = relative)
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            public_url: String::new(),
        }
    }
}

/// App state. Read-only: handlers never mutate anything.
pub struct AppState {
    pub config: ServerConfig,
    pub decoder: TraitDecoder,
}

/// Generate pfp request
#[derive(Debug, Deserialize)]
pub struct GeneratePfpRequest {
    pub dna: String,
}

/// Generate pfp response
#[derive(Debug, Serialize)]
pub struct GeneratePfpResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub layout_version: u16,
}

/// Request failure turned into a generic 400. The cause is logged, not sent.
pub enum ApiError {
    /// Identity or DNA failed validation
    Dna(DnaError),
    /// Body was not `{dna: string}` JSON
    Body(JsonRejection),
}

impl From<DnaError> for ApiError {
    fn from(err: DnaError) -> Self {
        Self::Dna(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match self {
            Self::Dna(err) => {
                tracing::info!(code = err.code(), error = %err, "request rejected");
                err.user_message()
            }
            Self::Body(rejection) => {
                tracing::info!(
                    status = %rejection.status(),
                    error = %rejection.body_text(),
                    "request body rejected"
                );
                GENERIC_FAILURE
            }
        };
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: error.to_string() }),
        )
            .into_response()
    }
}

/// Create the API router
pub fn create_router(config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        config,
        decoder: TraitDecoder::new(),
    });

    Router::new()
        .route("/health", get(health))
        .route("/planet/:fid", get(get_planet))
        .route("/planet/:fid/svg", get(get_planet_svg))
        .route("/generate-pfp", post(generate_pfp))
        .route("/pfp/:dna", get(get_pfp))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        layout_version: LAYOUT_VERSION,
    })
}

/// Planet for an fid
async fn get_planet(Path(fid): Path<String>) -> Result<Json<Planet>, ApiError> {
    let identity: IdentityValue = fid.parse()?;
    let planet = generate_planet(identity)?;
    tracing::debug!(fid = %identity, dna = %planet.dna, "planet served");
    Ok(Json(planet))
}

/// Planet SVG for an fid
async fn get_planet_svg(Path(fid): Path<String>) -> Result<Response, ApiError> {
    let identity: IdentityValue = fid.parse()?;
    let planet = generate_planet(identity)?;
    Ok(svg_response(render_svg(&planet.traits)))
}

/// Remote image service contract: validate DNA, hand back where to fetch it
async fn generate_pfp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeneratePfpRequest>, JsonRejection>,
) -> Result<Json<GeneratePfpResponse>, ApiError> {
    let Json(req) = payload?;
    let dna = Digest::parse(&req.dna)?;
    // Decode now so a bad DNA fails here, not when the image is fetched
    state.decoder.decode(&dna)?;

    let image_url = format!(
        "{}/pfp/{}.svg",
        state.config.public_url.trim_end_matches('/'),
        dna.raw_hex()
    );
    tracing::info!(dna = %dna, "pfp generated");

    Ok(Json(GeneratePfpResponse { image_url }))
}

/// SVG for a DNA
async fn get_pfp(
    State(state): State<Arc<AppState>>,
    Path(dna): Path<String>,
) -> Result<Response, ApiError> {
    let dna = Digest::parse(dna.strip_suffix(".svg").unwrap_or(&dna))?;
    let traits = state.decoder.decode(&dna)?;
    Ok(svg_response(render_svg(&traits)))
}

fn svg_response(svg: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

/// Run the API server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.addr.clone();
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "zeta planets API listening");
    println!("🪐 Zeta Planets API running on {}", addr);
    println!("  GET  /health           - Health check");
    println!("  GET  /planet/:fid      - Planet JSON");
    println!("  GET  /planet/:fid/svg  - Planet SVG");
    println!("  POST /generate-pfp     - DNA → image URL");
    println!("  GET  /pfp/:dna         - SVG for a DNA");
    axum::serve(listener, router).await?;
    Ok(())
}
