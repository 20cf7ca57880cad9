//! Error type surfaced across the Tauri command boundary

use serde::{Serialize, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("shared {0} state is poisoned")]
    Poisoned(&'static str),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

// Tauri hands command errors to the frontend as serialized values; the
// display string is all the page needs.
impl Serialize for ViewerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
