pub mod context;

pub use context::{GpuContext, clear_color};
