//! tabvi - a modal terminal editor with up to five tabs and a fuzzy
//! directory browser per tab.

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod tabs;
pub mod ui;

pub use config::Config;
pub use editor::EditorSession;
pub use error::{EditorError, Result};
pub use filesystem::DirectoryBrowser;
pub use tabs::TabController;
