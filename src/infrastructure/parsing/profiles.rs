//! Per-site extraction profiles
//!
//! The supported sites differ only in data: which elements hold the
//! title, which elements are scanned for attributes, and which fields
//! each site exposes. The engine in `extractor` interprets these
//! profiles, so adding a site means adding a profile, not another
//! scraper.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

use super::patterns;

/// One title lookup attempt: elements matched by `selector`, optionally
/// narrowed to those whose class attribute matches `class_pattern`.
pub struct TitleRule {
    pub selector: &'static Lazy<Selector>,
    pub class_pattern: Option<&'static Lazy<Regex>>,
}

/// How a site's attribute information is located.
pub enum ScanStrategy {
    /// Enumerate candidate elements and apply `fields` to each one.
    Elements {
        selector: &'static Lazy<Selector>,
        class_pattern: &'static Lazy<Regex>,
        fields: &'static [FieldRule],
    },
    /// Search the whole document's flattened text for the numeric size
    /// token and a strength keyword.
    FullText,
    /// The site only yields a usable title.
    TitleOnly,
}

/// Field detection rule, applied per candidate element.
pub enum FieldRule {
    /// "size"/"length" label: numeric token, optionally falling back to
    /// named vitolas.
    Size { named_fallback: bool },
    /// "strength" label: keyword scan inside the same element.
    Strength,
    /// "strength" label: keyword scan in the element that follows the
    /// label element. The label's own text is never scanned for a value.
    StrengthFromNext,
    /// "country"/"origin" label: first country from the list.
    Origin(&'static [&'static str]),
    /// "wrapper" label: text after the wrapper marker.
    Wrapper,
}

/// Extraction configuration for one site family.
pub struct SiteProfile {
    pub name: &'static str,
    pub title_rules: &'static [TitleRule],
    pub scan: ScanStrategy,
}

/// Review site: attributes live in spec paragraphs under the article
/// body, including named vitolas and wrapper descriptions.
pub static CIGAR_AFICIONADO: SiteProfile = SiteProfile {
    name: "cigar_aficionado",
    title_rules: &[
        TitleRule {
            selector: &patterns::HEADING_SELECTOR,
            class_pattern: Some(&patterns::ENTRY_TITLE_CLASS_RE),
        },
        TitleRule {
            selector: &patterns::HEADING_SELECTOR,
            class_pattern: None,
        },
    ],
    scan: ScanStrategy::Elements {
        selector: &patterns::PARAGRAPH_BLOCK_SELECTOR,
        class_pattern: &patterns::DETAIL_CLASS_RE,
        fields: &[
            FieldRule::Size {
                named_fallback: true,
            },
            FieldRule::Strength,
            FieldRule::Origin(patterns::ORIGINS_FULL),
            FieldRule::Wrapper,
        ],
    },
};

/// Famous Smoke Shop: spec list items; numeric sizes only and the short
/// origin list.
pub static FAMOUS_SMOKE: SiteProfile = SiteProfile {
    name: "famous_smoke",
    title_rules: &[
        TitleRule {
            selector: &patterns::HEADING_SELECTOR,
            class_pattern: Some(&patterns::PRODUCT_TITLE_CLASS_RE),
        },
        TitleRule {
            selector: &patterns::HEADING_SELECTOR,
            class_pattern: None,
        },
    ],
    scan: ScanStrategy::Elements {
        selector: &patterns::LIST_BLOCK_SELECTOR,
        class_pattern: &patterns::SPEC_ATTRIBUTE_CLASS_RE,
        fields: &[
            FieldRule::Strength,
            FieldRule::Size {
                named_fallback: false,
            },
            FieldRule::Origin(patterns::ORIGINS_COMMON),
            FieldRule::Wrapper,
        ],
    },
};

/// Cigars International: definition-list markup where a label element is
/// immediately followed by its value element.
pub static CIGARS_INTERNATIONAL: SiteProfile = SiteProfile {
    name: "cigars_international",
    title_rules: &[
        TitleRule {
            selector: &patterns::HEADING_SELECTOR,
            class_pattern: None,
        },
        TitleRule {
            selector: &patterns::ANY_ELEMENT_SELECTOR,
            class_pattern: Some(&patterns::NESTED_PRODUCT_TITLE_CLASS_RE),
        },
    ],
    scan: ScanStrategy::Elements {
        selector: &patterns::DEFINITION_LIST_SELECTOR,
        class_pattern: &patterns::SPEC_DETAIL_CLASS_RE,
        fields: &[FieldRule::StrengthFromNext],
    },
};

/// JR Cigars: only the product title is reliably extractable.
pub static JR_CIGARS: SiteProfile = SiteProfile {
    name: "jr_cigars",
    title_rules: &[TitleRule {
        selector: &patterns::HEADING_SELECTOR,
        class_pattern: None,
    }],
    scan: ScanStrategy::TitleOnly,
};

/// Fallback for unrecognized hosts: first heading plus a whole-page
/// text sweep.
pub static GENERIC: SiteProfile = SiteProfile {
    name: "generic",
    title_rules: &[TitleRule {
        selector: &patterns::HEADING_SELECTOR,
        class_pattern: None,
    }],
    scan: ScanStrategy::FullText,
};
