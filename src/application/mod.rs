//! Application layer - scrape orchestration.

pub mod scraper;

pub use scraper::{CigarScraper, scrape_cigar_url};
