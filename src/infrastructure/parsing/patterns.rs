//! Shared pattern data for the extraction heuristics
//!
//! Compiled once per process and read-only afterwards. Keyword list
//! order is load-bearing: scans take the first entry found, so
//! reordering changes which keyword wins when several appear in the
//! same text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

/// Numeric "length x ring gauge" token, e.g. "6 x 52" or "6.5x52".
pub static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*x\s*(\d+)").expect("size pattern"));

/// Text following a "wrapper:" style label, up to a comma or line break.
pub static WRAPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)wrapper[:\s]+([^,\n]+)").expect("wrapper pattern"));

/// Brand/name separators: " - ", or whitespace-bounded "by".
pub static NAME_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+-\s+|\s+by\s+").expect("name separator pattern"));

// Class-attribute patterns. Retail sites rarely agree on exact class
// names, so these match loosely within each site's observed vocabulary.

pub static ENTRY_TITLE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)entry-title").expect("entry-title class pattern"));

pub static PRODUCT_TITLE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)product|title").expect("product/title class pattern"));

pub static NESTED_PRODUCT_TITLE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)product.*title").expect("nested product title class pattern"));

pub static DETAIL_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)detail|spec|info").expect("detail class pattern"));

pub static SPEC_ATTRIBUTE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)spec|attribute|detail").expect("spec attribute class pattern"));

pub static SPEC_DETAIL_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)spec|detail|attribute").expect("spec detail class pattern"));

// Tag selectors for title lookup and attribute candidates.

pub static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 selector"));

pub static ANY_ELEMENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("*").expect("universal selector"));

pub static PARAGRAPH_BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, div").expect("paragraph block selector"));

pub static LIST_BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li, div, span").expect("list block selector"));

pub static DEFINITION_LIST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("dt, dd, li").expect("definition list selector"));

/// Strength levels, mildest first.
pub const STRENGTHS: &[&str] = &["Mild", "Medium", "Full"];

/// Strength levels for whole-page scans. "Medium-Full" must precede
/// "Medium" or it can never win.
pub const GENERIC_STRENGTHS: &[&str] = &["Mild", "Medium-Full", "Medium", "Full"];

/// Named vitola sizes.
pub const VITOLAS: &[&str] = &["Robusto", "Churchill", "Toro", "Corona", "Torpedo"];

/// Origin countries recognized on review sites.
pub const ORIGINS_FULL: &[&str] = &[
    "Nicaragua",
    "Dominican Republic",
    "Honduras",
    "Cuba",
    "Ecuador",
    "Connecticut",
];

/// Origin countries recognized on retailer sites.
pub const ORIGINS_COMMON: &[&str] = &["Nicaragua", "Dominican Republic", "Honduras", "Cuba"];
