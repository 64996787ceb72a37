//! Axum route handlers for the review endpoints.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::extraction::{extract_pdf_text, truncate_chars};
use crate::review::models::{Mode, ReviewOutcome};
use crate::review::pipeline::run_review;
use crate::state::AppState;

/// Character cap on resume text sent upstream from the multi-mode endpoint.
const PROCESS_TEXT_CAP: usize = 10_000;
/// Character cap for the single-mode endpoint.
const ANALYZE_TEXT_CAP: usize = 15_000;
/// Below this many extracted characters the resume is considered unreadable.
const MIN_TEXT_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Envelope for `POST /process`. Pipeline failures past upload validation
/// are the `Failed` variant, returned with HTTP 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    Completed { mode: Mode, data: ReviewOutcome },
    Failed { error: String },
}

/// Envelope for `POST /analyze`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Completed {
        filename: String,
        analysis: ReviewOutcome,
    },
    Failed {
        error: String,
    },
}

struct ResumeUpload {
    filename: String,
    bytes: Bytes,
    job_description: String,
    mode: Mode,
}

/// Collects the multipart fields. Rejects non-PDF filenames before the file
/// body is read; unknown fields are ignored.
async fn read_upload(multipart: &mut Multipart) -> Result<ResumeUpload, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_description = String::new();
    let mut mode = Mode::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if !filename.ends_with(".pdf") {
                    return Err(AppError::Validation("Only PDF files allowed".to_string()));
                }
                let bytes = field.bytes().await?;
                file = Some((filename, bytes));
            }
            "job_description" => job_description = field.text().await?,
            "mode" => mode = Mode::parse(&field.text().await?),
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;

    Ok(ResumeUpload {
        filename,
        bytes,
        job_description,
        mode,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /process
///
/// Multi-mode review: `file` (required PDF), `job_description` (optional),
/// `mode` (optional; unrecognized values fall back to analyze).
pub async fn handle_process(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    info!(filename = %upload.filename, mode = ?upload.mode, "Processing resume upload");

    let text = match extract_pdf_text(upload.bytes).await {
        Ok(text) => text,
        Err(e) => {
            error!("Text extraction failed: {e:#}");
            return Ok(Json(ProcessResponse::Failed {
                error: e.to_string(),
            }));
        }
    };

    let text = truncate_chars(&text, PROCESS_TEXT_CAP);
    let data = run_review(&state.llm, upload.mode, text, &upload.job_description).await;

    Ok(Json(ProcessResponse::Completed {
        mode: upload.mode,
        data,
    }))
}

/// POST /analyze
///
/// Single-mode review: `file` only. Rejects resumes whose extracted text is
/// too short to analyze.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    info!(filename = %upload.filename, "Analyzing resume upload");

    let text = match extract_pdf_text(upload.bytes).await {
        Ok(text) => text,
        Err(e) => {
            error!("Text extraction failed: {e:#}");
            return Ok(Json(AnalyzeResponse::Failed {
                error: e.to_string(),
            }));
        }
    };

    if text.chars().count() < MIN_TEXT_CHARS {
        return Ok(Json(AnalyzeResponse::Failed {
            error: "Resume text too short or unreadable".to_string(),
        }));
    }

    let text = truncate_chars(&text, ANALYZE_TEXT_CAP);
    let analysis = run_review(&state.llm, Mode::Analyze, text, "").await;

    Ok(Json(AnalyzeResponse::Completed {
        filename: upload.filename,
        analysis,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_router() -> axum::Router {
        build_router(AppState {
            llm: LlmClient::new("test-key".to_string()),
        })
    }

    fn multipart_upload(uri: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // The 400 path never reaches extraction or the network, so these run
    // against the real router with a dummy API key.

    #[tokio::test]
    async fn test_process_rejects_non_pdf_with_400() {
        let response = test_router()
            .oneshot(multipart_upload("/process", "resume.txt", b"plain text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("Only PDF files allowed"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf_with_400() {
        let response = test_router()
            .oneshot(multipart_upload("/analyze", "resume.docx", b"doc bytes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("Only PDF files allowed"));
    }

    #[tokio::test]
    async fn test_pdf_extension_check_is_case_sensitive() {
        let response = test_router()
            .oneshot(multipart_upload("/process", "resume.PDF", b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_process_envelope_shape_for_roast() {
        use super::ProcessResponse;
        use crate::review::models::{Mode, ReviewOutcome, RoastReport};

        let response = ProcessResponse::Completed {
            mode: Mode::Roast,
            data: ReviewOutcome::Roast(RoastReport {
                roast_title: "A Bold Career in Buzzwords".to_string(),
                burns: vec!["Eight years of experience, zero numbers.".to_string()],
                overall_verdict: "Needs a rewrite more than a roast.".to_string(),
            }),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mode"], "roast");
        assert!(value["data"]["roast_title"].is_string());
        assert!(value["data"]["burns"].is_array());
        assert!(value["data"]["overall_verdict"].is_string());
    }

    #[test]
    fn test_process_envelope_shape_for_upstream_failure() {
        use super::ProcessResponse;
        use crate::review::models::{Mode, ReviewError, ReviewOutcome};

        let response = ProcessResponse::Completed {
            mode: Mode::Analyze,
            data: ReviewOutcome::Error(ReviewError::unavailable("connection reset")),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mode"], "analyze");
        assert_eq!(value["data"]["error"], "AI Service unavailable");
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected_with_400() {
        let boundary = "test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"mode\"\r\n\r\nroast\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/process")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("resume file is required"));
    }
}
