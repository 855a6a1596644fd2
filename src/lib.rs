//! Cigar product scraper
//!
//! Extracts structured cigar attributes (brand, name, dimensions,
//! strength, origin, wrapper) from retailer and review product pages.
//! A router picks a per-site extraction profile from the URL's host; one
//! generic engine applies the profile's selector and keyword heuristics
//! to the parsed document.

// Module declarations
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export the primary entry points
pub use application::scraper::{CigarScraper, scrape_cigar_url};
pub use domain::cigar::CigarRecord;
pub use error::ScrapeError;
