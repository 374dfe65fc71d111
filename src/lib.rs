// Icon rendering shared by the generate-icons binary and the integration tests
pub mod batch;
pub mod bitmap_font;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod font;
pub mod render;

pub use batch::{run_batch, BatchReport};
pub use config::{Config, IconSpec};
pub use font::{resolve_font, Font, FontSource};
pub use render::{render, IconRenderer};
