//! HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router, middleware};
use glyphtone_core::{ConversionParams, convert, convert_input};
use glyphtone_ucd::{BlockMember, CharacterLookup, CharacterRecord};

use crate::api::{ConversionResponse, Example, ExamplesResponse, HealthResponse, parse_hex_code};
use crate::error::ApiError;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub params: Arc<ConversionParams>,
    pub characters: Arc<dyn CharacterLookup>,
}

impl AppState {
    pub fn new(params: ConversionParams, characters: Arc<dyn CharacterLookup>) -> Self {
        Self {
            params: Arc::new(params),
            characters,
        }
    }

    fn respond(&self, result: glyphtone_core::ColorResult) -> ConversionResponse {
        let record = self.characters.lookup(result.code_point);
        ConversionResponse::new(result, record)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/char/:code", get(character_info))
        .route("/api/ascii-to-cmyk/:code", get(ascii_to_cmyk))
        .route("/api/examples", get(examples))
        .route("/api/block/:name", get(block_info))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::map_response(allow_any_origin))
        .with_state(state)
}

/// `GET /api/char/{code}`; `code` is hexadecimal.
pub async fn character_info(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let code = parse_hex_code(&code)?;
    state
        .characters
        .lookup(code)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `GET /api/ascii-to-cmyk/{code}`; `code` is decimal, `0x` hex or `U+` hex.
#[tracing::instrument(skip(state))]
pub async fn ascii_to_cmyk(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let result = convert_input(&code, &state.params)?;
    tracing::debug!(code_point = result.code_point, cmyk = ?result.cmyk, "converted");
    Ok(Json(state.respond(result)))
}

/// `GET /api/examples`
pub async fn examples(State(state): State<AppState>) -> Json<ExamplesResponse> {
    let example = |ch: char| {
        let code = u32::from(ch);
        Example {
            character: ch.to_string(),
            code,
            result: state.respond(convert(i64::from(code), &state.params)),
        }
    };
    Json(ExamplesResponse {
        lowercase: example('a'),
        uppercase: example('A'),
        number: example('1'),
        marathi: example('\u{0905}'),
    })
}

/// `GET /api/block/{name}`
pub async fn block_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<BlockMember>> {
    Json(state.characters.block_members(&name))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Open CORS: every response may be read by any origin.
pub async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
