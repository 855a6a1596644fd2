//! Infrastructure layer - HTTP transport, HTML parsing heuristics,
//! URL routing and logging.

pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod routing;

// Re-export commonly used items
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::init_logging;
