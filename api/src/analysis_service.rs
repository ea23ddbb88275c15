//! Defines the trait and the HTTP implementation for the analysis service.

use crate::analysis_result::AnalysisResult;
use crate::config::AnalyzerConfig;
use crate::image_upload::ImageUpload;
use crate::AnalyzeError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use reqwest::multipart::Form;
use reqwest::multipart::Part;

/// A trait for any service that can analyze an uploaded image.
pub trait AnalysisService {
    /// Sends `image` off for analysis and returns whatever the service answered.
    async fn analyze(&self, image: &ImageUpload) -> Result<AnalysisResult, AnalyzeError>;
}

/// Talks to the remote service over HTTP.
///
/// `POST <base>/analyze` with a multipart body whose `file` field carries the
/// image. No authentication.
#[derive(Clone, Debug)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    config: AnalyzerConfig,
}

impl HttpAnalysisService {
    /// Name of the multipart field holding the image.
    pub const FILE_FIELD: &'static str = "file";

    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn form(image: &ImageUpload) -> Result<Form, AnalyzeError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(|_| AnalyzeError::InvalidMimeType(image.mime_type().to_string()))?;
        Ok(Form::new().part(Self::FILE_FIELD, part))
    }
}

impl Default for HttpAnalysisService {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, image: &ImageUpload) -> Result<AnalysisResult, AnalyzeError> {
        let url = self.config.endpoint();
        info!("uploading {:?} to {}", image, url);

        let resp = self
            .client
            .post(&url)
            .multipart(Self::form(image)?)
            .send()
            .await?;

        let status = resp.status();
        debug!("analysis service answered {}", status);
        if !status.is_success() {
            return Err(AnalyzeError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        Ok(AnalysisResult::from_body(&body)?)
    }
}
