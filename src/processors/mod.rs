// texture-downscale/src/processors/mod.rs
mod batch;
mod encoder;
mod loader;
mod resizer;

pub use batch::BatchProcessor;
pub use encoder::{keeps_alpha, prepare_for_output, Encoder};
pub use loader::Loader;
pub use resizer::{calculate_dimensions, Resizer};
