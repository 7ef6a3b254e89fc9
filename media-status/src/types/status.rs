use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A closed status enumeration usable as a registry key.
///
/// Every variant has exactly one textual key, which is the form statuses
/// arrive in from templates and upstream payloads.
pub trait StatusKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == key)
    }
}

/// Status derived locally from file-reference presence and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalStatus {
    Downloaded,
    Downloading,
    Wanted
}

impl StatusKey for CanonicalStatus {
    const ALL: &'static [Self] = &[Self::Downloaded, Self::Downloading, Self::Wanted];

    fn as_str(self) -> &'static str {
        match self {
            Self::Downloaded => "Downloaded",
            Self::Downloading => "Downloading",
            Self::Wanted => "Wanted"
        }
    }
}

/// Status resolved by an upstream source of truth.
///
/// Shares three names with [`CanonicalStatus`] but is a separate vocabulary
/// with its own textual keys; the two are never converted into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExternalStatus {
    Downloaded,
    Downloading,
    Wanted,
    Available,
    Missing,
    Ignored
}

impl StatusKey for ExternalStatus {
    const ALL: &'static [Self] = &[
        Self::Downloaded,
        Self::Downloading,
        Self::Wanted,
        Self::Available,
        Self::Missing,
        Self::Ignored
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Downloaded => "DOWNLOADED",
            Self::Downloading => "DOWNLOADING",
            Self::Wanted => "WANTED",
            Self::Available => "AVAILABLE",
            Self::Missing => "MISSING",
            Self::Ignored => "IGNORED"
        }
    }
}

/// Identifies one status registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Canonical,
    Video,
    Ebook
}

impl Vocabulary {
    pub const ALL: [Self; 3] = [Self::Canonical, Self::Video, Self::Ebook];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Video => "video",
            Self::Ebook => "ebook"
        }
    }
}

macro_rules! impl_display_from_str {
    ($ty:ty, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Error::$err(s.to_string()))
            }
        }
    };
}

impl_display_from_str!(CanonicalStatus, UnknownStatus);
impl_display_from_str!(ExternalStatus, UnknownStatus);
impl_display_from_str!(Vocabulary, UnknownVocabulary);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys_are_pascal_case() {
        let keys: Vec<_> = CanonicalStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(keys, vec!["Downloaded", "Downloading", "Wanted"]);
    }

    #[test]
    fn test_external_keys_are_upper_case() {
        assert_eq!(ExternalStatus::from_key("MISSING"), Some(ExternalStatus::Missing));
        assert_eq!(ExternalStatus::from_key("Missing"), None);
    }

    #[test]
    fn test_vocabularies_do_not_share_keys() {
        assert!(CanonicalStatus::from_key("DOWNLOADED").is_none());
        assert!(ExternalStatus::from_key("Downloaded").is_none());
        assert!("DOWNLOADED".parse::<CanonicalStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_textual_keys() {
        assert_eq!(
            serde_json::to_string(&ExternalStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
        assert_eq!(
            serde_json::to_string(&CanonicalStatus::Wanted).unwrap(),
            "\"Wanted\""
        );
        let parsed: Vocabulary = serde_json::from_str("\"ebook\"").unwrap();
        assert_eq!(parsed, Vocabulary::Ebook);
    }

    #[test]
    fn test_vocabulary_parse() {
        assert_eq!("video".parse::<Vocabulary>().unwrap(), Vocabulary::Video);
        assert!(matches!(
            "podcast".parse::<Vocabulary>(),
            Err(Error::UnknownVocabulary(v)) if v == "podcast"
        ));
    }
}
