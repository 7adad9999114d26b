use thiserror::Error;

use crate::optimize::Platform;

/// Failures raised while turning raw model output into a validated [`crate::survey::types::Survey`].
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Model output was not parseable JSON, even after stripping code fences.
    #[error("failed to parse model response: {message}")]
    Parse { message: String, raw: String },

    /// Parsed, but the top-level survey fields are missing or empty.
    #[error("invalid survey structure")]
    InvalidResponse,

    /// A question entry is missing its text or has an unrecognized type.
    #[error("invalid question structure at index {index}")]
    InvalidQuestion { index: usize },

    /// A choice question has too few options and no donor to borrow from.
    #[error("question \"{question}\" requires at least 2 options")]
    InvalidOptions { index: usize, question: String },
}

impl ValidateError {
    /// Stable machine-readable code for the HTTP layer to branch on.
    pub fn code(&self) -> &'static str {
        match self {
            ValidateError::Parse { .. } => "PARSE_ERROR",
            ValidateError::InvalidResponse => "INVALID_RESPONSE",
            ValidateError::InvalidQuestion { .. } => "INVALID_QUESTION",
            ValidateError::InvalidOptions { .. } => "INVALID_OPTIONS",
        }
    }
}

/// Failures raised while converting a validated survey into a platform document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested platform has no converter. Permanent until one ships.
    #[error("{platform} optimization is not implemented yet")]
    NotImplemented { platform: Platform },

    /// The survey handed to the converter is structurally unusable.
    #[error("invalid survey data: {message}")]
    InvalidSurvey { message: String },
}

impl ConvertError {
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            ConvertError::InvalidSurvey { .. } => "INVALID_SURVEY",
        }
    }
}

/// Failures raised while validating an externally supplied Forms payload.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid survey payload: {}", details.join("; "))]
    InvalidPayload { details: Vec<String> },
}

impl ImportError {
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::InvalidPayload { .. } => "INVALID_IMPORT",
        }
    }
}

/// Either stage of the generate-then-optimize pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl PipelineError {
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Validate(err) => err.code(),
            PipelineError::Convert(err) => err.code(),
        }
    }
}
