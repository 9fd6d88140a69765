// ABOUTME: Relative line number overlay for host editor views
// ABOUTME: Capability traits at the host seam, the renderer, and an in-memory host

pub mod capabilities;
pub mod line_numbers;
pub mod memory;
pub mod phantom;
pub mod registry;
pub mod renderer;
pub mod template;

pub use capabilities::{HostError, PhantomHost, Settings, View, ViewHost, ViewQuery};
pub use line_numbers::LineNumber;
pub use memory::{MemorySettings, MemoryView, MemoryWorkspace, SharedSettings};
pub use phantom::{Phantom, PhantomLayout, PhantomSet};
pub use registry::RendererRegistry;
pub use renderer::{OverlayOptions, OverlayRenderer, RenderError, RenderOutcome, ViewObserver};
