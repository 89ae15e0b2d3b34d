//! File upload route: accept a text/markdown file and hand its content
//! back as ordinary description text.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

/// `POST /upload-file` — multipart with a `file` part.
///
/// Returns `{ "full_content": <text> }`; the content feeds the generation
/// request as a system description and nothing downstream depends on this
/// path.
pub async fn upload_file(mut multipart: Multipart) -> Result<Json<serde_json::Value>, StatusCode> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        if field.name() == Some("file") {
            let content = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            return Ok(Json(json!({ "full_content": content })));
        }
    }
    Err(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
