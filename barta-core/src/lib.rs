//! Feature extraction engine for the Barta SMS spam filter.
//!
//! Turns a raw SMS string into the fixed 17-element numeric vector the spam
//! classifier was trained on. All rules are hand-authored pattern tables
//! over Latin, Bengali and Assamese text; the engine is a pure function
//! with no per-call state, so concurrent callers need no coordination.

pub mod codes;
pub mod datetime;
pub mod digits;
pub mod features;
pub mod language;
pub mod lexical;
pub mod metrics;
pub mod phone;
pub mod urls;

pub use features::{extract_features, extract_features_batch, FEATURE_COLUMNS, FEATURE_COUNT};
pub use urls::UrlFeatures;
