//! Centralized error handling for the holdings charts.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Domain(DomainError),
    Infrastructure(InfrastructureError),
    Presentation(PresentationError),
}

/// Domain layer specific errors
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Validation(ValidationError),
    UnknownDataset(String),
}

/// Holdings dataset validation failures
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyYears,
    YearsNotIncreasing { index: usize, previous: i32, current: i32 },
    UnknownSector(String),
    SeriesLengthMismatch { sector: String, expected: usize, actual: usize },
    ShareOutOfRange { sector: String, index: usize, value: f64 },
    MalformedInput(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Rendering(RenderingError),
}

/// Visualization surface failures, always tied to a container id
#[derive(Debug, Clone, PartialEq)]
pub enum RenderingError {
    SerializationFailed { container_id: String, reason: String },
    SurfaceSubmitFailed { container_id: String, reason: String },
    SurfaceResizeFailed { container_id: String, reason: String },
}

impl RenderingError {
    pub fn container_id(&self) -> &str {
        match self {
            RenderingError::SerializationFailed { container_id, .. }
            | RenderingError::SurfaceSubmitFailed { container_id, .. }
            | RenderingError::SurfaceResizeFailed { container_id, .. } => container_id,
        }
    }
}

/// Presentation layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationError {
    ShellSubscriptionFailed(String),
    CoordinatorUnavailable,
    Serialization(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Domain(e) => write!(f, "Domain Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
            AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(e) => write!(f, "Validation: {}", e),
            DomainError::UnknownDataset(key) => write!(f, "Unknown dataset '{}'", key),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::EmptyYears => write!(f, "dataset has no years"),
            ValidationError::YearsNotIncreasing { index, previous, current } => write!(
                f,
                "years must be strictly increasing: {} at index {} follows {}",
                current, index, previous
            ),
            ValidationError::UnknownSector(name) => write!(f, "unknown sector '{}'", name),
            ValidationError::SeriesLengthMismatch { sector, expected, actual } => write!(
                f,
                "sector '{}' has {} values, expected {}",
                sector, actual, expected
            ),
            ValidationError::ShareOutOfRange { sector, index, value } => write!(
                f,
                "sector '{}' share {} at index {} is outside [0, 1]",
                sector, value, index
            ),
            ValidationError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Rendering(e) => write!(f, "Rendering: {}", e),
        }
    }
}

impl Display for RenderingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RenderingError::SerializationFailed { container_id, reason } => {
                write!(f, "figure for '{}' could not be serialized: {}", container_id, reason)
            }
            RenderingError::SurfaceSubmitFailed { container_id, reason } => {
                write!(f, "submit to '{}' failed: {}", container_id, reason)
            }
            RenderingError::SurfaceResizeFailed { container_id, reason } => {
                write!(f, "resize of '{}' failed: {}", container_id, reason)
            }
        }
    }
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresentationError::ShellSubscriptionFailed(msg) => {
                write!(f, "shell subscription failed: {}", msg)
            }
            PresentationError::CoordinatorUnavailable => write!(f, "chart coordinator not initialized"),
            PresentationError::Serialization(msg) => write!(f, "figure serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}

/// Error conversion utilities
impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        DomainError::Validation(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<RenderingError> for InfrastructureError {
    fn from(error: RenderingError) -> Self {
        InfrastructureError::Rendering(error)
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Infrastructure(InfrastructureError::Rendering(error))
    }
}

impl From<PresentationError> for AppError {
    fn from(error: PresentationError) -> Self {
        AppError::Presentation(error)
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RenderingResult<T> = Result<T, RenderingError>;
pub type AppResult<T> = Result<T, AppError>;
