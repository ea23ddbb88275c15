//! This crate contains everything needed to talk to the remote analysis service.

pub mod analysis_result;
pub mod analysis_service;
pub mod config;
pub mod image_upload;
pub mod prefs;

use thiserror::Error;

pub use analysis_result::AnalysisResult;
pub use analysis_service::AnalysisService;
pub use analysis_service::HttpAnalysisService;
pub use config::AnalyzerConfig;
pub use image_upload::ImageUpload;

/// Everything that can go wrong while asking the service to analyze an image.
///
/// The UI does not distinguish between these; they all lead to the demo
/// fallback. They are kept apart for logging.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("service returned status {0}")]
    Status(u16),

    /// The body of a successful response was not JSON.
    #[error("service returned invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The upload's mime type could not be attached to the multipart part.
    #[error("invalid mime type: {0}")]
    InvalidMimeType(String),
}
