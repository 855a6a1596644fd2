//! URL routing
//!
//! Picks the extraction profile for a product URL from its host.
//! Matching is ordered substring membership over the lower-cased host;
//! anything unrecognized, including unparsable URLs, falls back to the
//! generic profile. Routing never fails.

use url::Url;

use crate::infrastructure::parsing::profiles::{self, SiteProfile};

/// Host fragments tested in priority order; first match wins.
static ROUTES: &[(&[&str], &SiteProfile)] = &[
    (&["cigaraficionado.com"], &profiles::CIGAR_AFICIONADO),
    (&["famous-smoke.com", "famous"], &profiles::FAMOUS_SMOKE),
    (
        &["cigarsinternational.com", "cigars international"],
        &profiles::CIGARS_INTERNATIONAL,
    ),
    (&["jrcigars.com", "jr cigars"], &profiles::JR_CIGARS),
];

/// Select the extraction profile for `url`.
pub fn select(url: &str) -> &'static SiteProfile {
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_lowercase))
        .unwrap_or_default();

    for (fragments, profile) in ROUTES {
        if fragments.iter().any(|fragment| host.contains(fragment)) {
            return profile;
        }
    }

    &profiles::GENERIC
}
