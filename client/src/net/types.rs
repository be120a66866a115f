//! Wire DTOs for the showcase backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field so listing
//! responses deserialize losslessly. The backend owns all durable state; the
//! client never persists these beyond the current view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operator credentials held for the lifetime of the browser tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// An example category as returned by `/admin/examples/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier used in storage paths (e.g. `"comic-translation"`).
    pub id: String,
    /// Operator-facing display name.
    pub name: String,
    /// Short description shown as a tab tooltip.
    pub description: String,
}

/// Which side of a before/after pair an asset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Before,
    After,
}

impl AssetKind {
    /// The value used in upload forms and deletion paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored before/after media asset (image or short video clip).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Object-store key; the asset's identity.
    pub key: String,
    /// Public URL for display.
    pub url: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last-modified timestamp as an ISO 8601 string.
    pub last_modified: String,
    /// Category id this asset belongs to.
    pub category: String,
    /// Optional subcategory (e.g. `"japanese"` under comic translation).
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Before or after side of the pair.
    #[serde(rename = "image_type")]
    pub kind: AssetKind,
    /// Stored filename; a leading `<digits>.` prefix encodes the ordinal.
    pub filename: String,
}

/// Single- vs multi-speaker audio sample grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerMode {
    Single,
    Multi,
}

impl SpeakerMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }

    /// Operator-facing selector label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single speaker",
            Self::Multi => "Multi speaker",
        }
    }
}

impl fmt::Display for SpeakerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of an audio sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored audio sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioAsset {
    /// Object-store key; the asset's identity.
    pub key: String,
    /// Public URL for playback.
    pub url: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last-modified timestamp as an ISO 8601 string.
    pub last_modified: String,
    pub speaker_mode: SpeakerMode,
    pub language: Language,
    /// Stored filename; a leading `<digits>.` prefix encodes the ordinal.
    pub filename: String,
}

/// Error body shape used by the backend for rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
