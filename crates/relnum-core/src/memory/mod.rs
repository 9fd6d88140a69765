// ABOUTME: In-memory host implementation of the capability traits
// ABOUTME: Backs the CLI and the test suite without a real editor

mod settings;
mod view;
mod workspace;

pub use settings::{MemorySettings, SharedSettings};
pub use view::MemoryView;
pub use workspace::{MemoryViews, MemoryWorkspace};
