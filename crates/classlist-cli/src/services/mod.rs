// crates/classlist-cli/src/services/mod.rs - Service layer modules
pub mod data_dir;
pub mod render;

pub use data_dir::{DataDirService, InitOutcome};
pub use render::{ColorChoice, Renderer};
