use serde::Serialize;
use webform_core::validation::FieldIssue;

/// Success envelope returned after a blueprint submission is stored.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub id: i64,
}

impl SubmitResponse {
    pub fn new(id: i64) -> Self {
        Self { ok: true, id }
    }
}

/// Rejection envelope for a blueprint that failed validation.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub ok: bool,
    pub message: String,
    pub issues: Vec<FieldIssue>,
}

impl RejectionResponse {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self {
            ok: false,
            message: "Blueprint validation failed".to_string(),
            issues,
        }
    }
}

/// Success envelope for the submission count endpoint.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub ok: bool,
    pub total: i64,
}

impl CountResponse {
    pub fn new(total: i64) -> Self {
        Self { ok: true, total }
    }
}

/// Success envelope returned after an asset upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub url: String,
    pub filename: String,
}

impl UploadResponse {
    pub fn new(url: String, filename: String) -> Self {
        Self {
            ok: true,
            url,
            filename,
        }
    }
}
