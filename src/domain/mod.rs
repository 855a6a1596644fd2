//! Domain module - entities for scraped cigar data.

pub mod cigar;

pub use cigar::CigarRecord;
