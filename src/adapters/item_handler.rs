use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::domain::FormError;
use crate::AppState;

/// `POST /test`: build an [`Item`](crate::domain::Item) from multipart parts and echo it back
pub async fn create_item(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, FormError> {
    let multipart = multipart.map_err(|rejection| FormError::Malformed {
        status: rejection.status(),
        reason: rejection.body_text(),
    })?;

    let item = state.items.extract(multipart).await?;
    tracing::info!(token_len = item.token.len(), opts = item.opts.len(), "Accepted item");

    Ok((StatusCode::OK, Json(item)))
}
