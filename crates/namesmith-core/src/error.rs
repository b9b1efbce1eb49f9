use thiserror::Error;

/// Validation failures for a raw name request.
///
/// This is the only error the pipeline surfaces to callers; every
/// remote-side failure is absorbed by the fallback path instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("variant count {0} is not one of the supported values (5, 10, 15, 20)")]
    UnsupportedVariantCount(u8),

    #[error("custom language must not be empty")]
    EmptyCustomLanguage,

    #[error("custom tone must not be empty")]
    EmptyCustomTone,
}
