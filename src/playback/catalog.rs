use std::fmt;

use crate::content::Track;

/// Returned when a catalog would not contain any track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog must contain at least one track"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Fixed, non-empty, ordered list of tracks.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `index`, wrapping to the first track.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last track.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.len()
    }
}
