use serde::{Deserialize, Serialize};

/// Keys the timeline reacts to; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCommand {
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl KeyCommand {
    /// Parses a DOM-style key identifier such as `"ArrowUp"`.
    #[must_use]
    pub fn from_key_identifier(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// Walk direction through the zoomed collection.
    ///
    /// Up/right step forward in time, down/left step backward.
    #[must_use]
    pub fn shift(self) -> isize {
        match self {
            Self::ArrowUp | Self::ArrowRight => 1,
            Self::ArrowDown | Self::ArrowLeft => -1,
            Self::Escape => 0,
        }
    }

    /// Left/right keep the current playcount row.
    #[must_use]
    pub fn keeps_row(self) -> bool {
        matches!(self, Self::ArrowLeft | Self::ArrowRight)
    }
}
