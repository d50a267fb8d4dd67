// src/editor/mod.rs
pub mod buffer;
pub mod command;
pub mod cursor;
pub mod keymap;
pub mod mode;
pub mod session;
pub mod viewport;

pub use buffer::{Line, LineBuffer};
pub use cursor::{Column, Cursor};
pub use keymap::{BrowserAction, KeyAction};
pub use mode::{Mode, SessionState};
pub use session::EditorSession;
