// ABOUTME: Public API for relnum logging infrastructure using tokio-tracing
// ABOUTME: Environment-driven configuration and a one-shot subscriber install

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, debug, error, info, trace, warn};

pub use config::{ConsoleFormat, LoggingConfig};
pub use performance::{OperationStats, PerfStats, PerfTimer};
pub use subscriber::init_subscriber;
