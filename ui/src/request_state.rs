//! The lifecycle of one analysis request, as seen by the screen.

use api::AnalysisResult;
use thiserror::Error;

/// The two errors a user can ever see.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum AnalyzerError {
    #[error("Please upload a valid image file.")]
    InvalidFileType,

    #[error("Server connection failed. Showing demo data...")]
    ServiceUnreachable,
}

/// Exactly one of these holds at any time.
///
/// `notice` is an error shown alongside a request rather than instead of it:
/// after a failed request the error is visible while the loading indicator
/// keeps spinning until the demo result lands, and stays visible next to it.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight {
        notice: Option<AnalyzerError>,
    },
    Succeeded {
        result: AnalysisResult,
        notice: Option<AnalyzerError>,
    },
    Failed(AnalyzerError),
}

// `is_in_flight()` comes from `EnumIs` and covers the fallback wait too.
impl RequestState {
    pub fn error(&self) -> Option<AnalyzerError> {
        match self {
            Self::Idle => None,
            Self::InFlight { notice } | Self::Succeeded { notice, .. } => *notice,
            Self::Failed(err) => Some(*err),
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }
}
