// ABOUTME: Library half of the relnum binary
// ABOUTME: Exposes the CLI pieces so integration tests can drive them

pub mod app;
pub mod cli;
pub mod config;
pub mod gutter;

pub use app::run;
pub use cli::Cli;
pub use config::Config;
