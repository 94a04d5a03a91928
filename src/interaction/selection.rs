use std::sync::Arc;

use crate::core::Scrobble;

/// Selection held by the timeline; variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    GenreHighlighted {
        genre: String,
        genre_group: String,
    },
    ScrobbleSelected(Arc<Scrobble>),
}

impl SelectionState {
    #[must_use]
    pub fn selected_scrobble(&self) -> Option<&Arc<Scrobble>> {
        match self {
            Self::ScrobbleSelected(scrobble) => Some(scrobble),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_artist(&self) -> Option<&str> {
        self.selected_scrobble()
            .map(|scrobble| scrobble.artist.name.as_str())
    }

    #[must_use]
    pub fn highlighted_genre(&self) -> Option<&str> {
        match self {
            Self::GenreHighlighted { genre, .. } => Some(genre),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
