//! Axum route handlers for RPP export.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::paginate::{default_page_layout, paginate};
use crate::export::{ExportFormat, ExportRequest};

/// POST /api/export-rpp
///
/// `txt` returns the text verbatim as an attachment; `layout` returns the
/// paginated document as JSON.
pub async fn handle_export_rpp(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    if request.rpp.trim().is_empty() {
        return Err(AppError::Validation(
            "Tidak ada RPP untuk diekspor".to_string(),
        ));
    }

    let filename = request.metadata.filename(request.format);
    info!(format = ?request.format, %filename, "Exporting RPP");

    match request.format {
        ExportFormat::Txt => {
            let disposition =
                HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("Invalid export filename: {e}"))
                    })?;

            Ok((
                [
                    (
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    ),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                Bytes::from(request.rpp),
            )
                .into_response())
        }
        ExportFormat::Layout => {
            let info_lines = request.metadata.info_lines();
            let rpp = request.rpp;
            // Wrapping measures every glyph; keep it off the async executor.
            let document = tokio::task::spawn_blocking(move || {
                paginate(&rpp, &info_lines, filename, &default_page_layout())
            })
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))?;

            Ok(Json(document).into_response())
        }
    }
}
