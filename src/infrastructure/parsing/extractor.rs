//! Generic extraction engine
//!
//! Applies a [`SiteProfile`] to a parsed document: resolve a title,
//! split it into brand and name, then run the profile's attribute scan.
//! Field detection is keyword matching over element text. Checks are
//! independent per attribute type (no early exit), and when several
//! candidate elements set the same field, the last match wins.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::patterns::{GENERIC_STRENGTHS, SIZE_RE, STRENGTHS, VITOLAS, WRAPPER_RE};
use super::profiles::{FieldRule, ScanStrategy, SiteProfile, TitleRule};
use super::text::{clean_text, split_brand_and_name};
use crate::domain::cigar::CigarRecord;

/// Extract a cigar record from `document` using `profile`.
///
/// Returns `None` when nothing at all was recognized.
pub fn extract(document: &Html, profile: &SiteProfile) -> Option<CigarRecord> {
    let mut record = CigarRecord::default();

    if let Some(title) = resolve_title(document, profile.title_rules) {
        let (brand, name) = split_brand_and_name(&title);
        record.brand = brand;
        record.name = name.or(Some(title));
    }

    match &profile.scan {
        ScanStrategy::Elements {
            selector,
            class_pattern,
            fields,
        } => scan_elements(document, selector, class_pattern, fields, &mut record),
        ScanStrategy::FullText => scan_full_text(document, &mut record),
        ScanStrategy::TitleOnly => {}
    }

    if record.is_empty() {
        debug!(site = profile.name, "no attributes recognized");
        None
    } else {
        Some(record)
    }
}

/// Walk the title rules in priority order. The first rule that matches
/// any element ends the search, even if that element's text is blank:
/// later rules are fallbacks for absent elements, not for empty ones.
fn resolve_title(document: &Html, rules: &[TitleRule]) -> Option<String> {
    for rule in rules {
        let pattern = rule.class_pattern.map(Lazy::force);
        let mut matches = document
            .select(rule.selector)
            .filter(|element| class_matches(element, pattern));
        if let Some(element) = matches.next() {
            return clean_text(&element_text(element));
        }
    }
    None
}

fn class_matches(element: &ElementRef<'_>, pattern: Option<&Regex>) -> bool {
    match pattern {
        None => true,
        Some(re) => element
            .value()
            .attr("class")
            .is_some_and(|class| re.is_match(class)),
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn scan_elements(
    document: &Html,
    selector: &Selector,
    class_pattern: &Regex,
    fields: &[FieldRule],
    record: &mut CigarRecord,
) {
    let candidates: Vec<ElementRef<'_>> = document
        .select(selector)
        .filter(|element| class_matches(element, Some(class_pattern)))
        .collect();

    for (index, element) in candidates.iter().enumerate() {
        let text = element_text(*element);
        let lower = text.to_lowercase();

        for field in fields {
            match field {
                FieldRule::Size { named_fallback } => {
                    if lower.contains("size") || lower.contains("length") {
                        detect_size(&text, &lower, *named_fallback, record);
                    }
                }
                FieldRule::Strength => {
                    if lower.contains("strength") {
                        if let Some(strength) = first_keyword(&text, STRENGTHS) {
                            record.strength = Some(strength);
                        }
                    }
                }
                FieldRule::StrengthFromNext => {
                    if lower.contains("strength") {
                        if let Some(next) = candidates.get(index + 1) {
                            if let Some(strength) = first_keyword(&element_text(*next), STRENGTHS)
                            {
                                record.strength = Some(strength);
                            }
                        }
                    }
                }
                FieldRule::Origin(countries) => {
                    if lower.contains("country") || lower.contains("origin") {
                        if let Some(origin) = first_keyword(&text, countries) {
                            record.origin = Some(origin);
                        }
                    }
                }
                FieldRule::Wrapper => {
                    if lower.contains("wrapper") {
                        if let Some(caps) = WRAPPER_RE.captures(&text) {
                            if let Some(wrapper) = clean_text(&caps[1]) {
                                record.wrapper = Some(wrapper);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A numeric "L x RG" token beats a named vitola: a match sets the pair
/// and drops any named size, and the named fallback never fires once the
/// pair is set.
fn detect_size(text: &str, lower: &str, named_fallback: bool, record: &mut CigarRecord) {
    if let Some(caps) = SIZE_RE.captures(text) {
        record.length = Some(caps[1].to_string());
        record.ring_gauge = Some(caps[2].to_string());
        record.size = None;
    } else if named_fallback && record.length.is_none() {
        if let Some(vitola) = VITOLAS
            .iter()
            .find(|vitola| lower.contains(&vitola.to_lowercase()))
        {
            record.size = Some((*vitola).to_string());
        }
    }
}

fn scan_full_text(document: &Html, record: &mut CigarRecord) {
    let body = document.root_element().text().collect::<String>();

    if let Some(caps) = SIZE_RE.captures(&body) {
        record.length = Some(caps[1].to_string());
        record.ring_gauge = Some(caps[2].to_string());
    }

    if let Some(strength) = first_keyword(&body, GENERIC_STRENGTHS) {
        record.strength = Some(strength);
    }
}

/// First keyword present in `text`, case-insensitively, in list order.
fn first_keyword(text: &str, keywords: &[&str]) -> Option<String> {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .find(|keyword| lower.contains(&keyword.to_lowercase()))
        .map(|keyword| (*keyword).to_string())
}
