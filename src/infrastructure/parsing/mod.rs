//! HTML parsing heuristics
//!
//! One extraction engine (`extractor`) parameterized by per-site
//! profiles (`profiles`), over shared pattern data (`patterns`) and text
//! helpers (`text`). Everything here is pure: documents in, records out.

pub mod extractor;
pub mod patterns;
pub mod profiles;
pub mod text;

// Re-export public types
pub use extractor::extract;
pub use profiles::SiteProfile;
