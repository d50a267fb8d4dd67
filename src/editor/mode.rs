// src/editor/mode.rs

/// Edit mode: commands in `Normal`, literal text in `Insert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// Where a session currently routes key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    BrowsingFiles,
    EditingNormal,
    EditingInsert,
}

impl SessionState {
    pub fn from_parts(browsing: bool, mode: Mode) -> Self {
        match (browsing, mode) {
            (true, _) => SessionState::BrowsingFiles,
            (false, Mode::Normal) => SessionState::EditingNormal,
            (false, Mode::Insert) => SessionState::EditingInsert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionState::BrowsingFiles => "BROWSE",
            SessionState::EditingNormal => "NORMAL",
            SessionState::EditingInsert => "INSERT",
        }
    }
}
