pub mod loader;
pub mod schema;

pub use loader::{DataLoadError, Layout, load_layout, load_layout_file};
