//! Error normalization - pure mapping logic only
//!
//! Turns every request failure into the uniform error envelope without any
//! knowledge of the HTTP framework that delivers it.

pub mod error_normalizer;

pub use error_normalizer::{
    describe_target_type, DefaultErrorNormalizer, ErrorKind, ErrorReport, INTERNAL_ERROR_MESSAGE,
};
