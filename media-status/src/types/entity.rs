use serde::{Deserialize, Serialize};

use crate::derive::derive_status;
use crate::registry::StatusRegistry;
use crate::types::{CanonicalStatus, ExternalStatus, StatusKey, StatusPresentation, Vocabulary};

/// Raw download signals for one entity, borrowed for the duration of a render.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MediaStatusInput<'a> {
    pub file_reference_id: Option<&'a str>,
    /// Fraction in `[0, 1]`; only meaningful without a file reference.
    pub progress: Option<f64>
}

impl<'a> MediaStatusInput<'a> {
    pub fn new(file_reference_id: Option<&'a str>, progress: Option<f64>) -> Self {
        Self {
            file_reference_id,
            progress
        }
    }

    pub fn status(&self) -> CanonicalStatus {
        derive_status(self.file_reference_id, self.progress)
    }
}

/// An entity whose status is derived from its file reference and progress.
pub trait DerivedStatusSource {
    fn file_reference_id(&self) -> Option<&str>;

    fn progress(&self) -> Option<f64>;

    fn status_input(&self) -> MediaStatusInput<'_> {
        MediaStatusInput::new(self.file_reference_id(), self.progress())
    }

    fn derived_status(&self) -> CanonicalStatus {
        self.status_input().status()
    }
}

/// An entity carrying a status already resolved upstream.
pub trait ResolvedStatusSource {
    fn raw_status(&self) -> &str;

    /// `None` when upstream sent a value this build does not know yet.
    fn resolved_status(&self) -> Option<ExternalStatus> {
        ExternalStatus::from_key(self.raw_status())
    }
}

impl DerivedStatusSource for MediaStatusInput<'_> {
    fn file_reference_id(&self) -> Option<&str> {
        self.file_reference_id
    }

    fn progress(&self) -> Option<f64> {
        self.progress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Episode,
    Track,
    Chapter
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    #[serde(default)]
    pub file_reference_id: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>
}

impl MediaItem {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            file_reference_id: None,
            progress: None
        }
    }

    pub fn with_file_reference(mut self, id: impl Into<String>) -> Self {
        self.file_reference_id = Some(id.into());
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl DerivedStatusSource for MediaItem {
    fn file_reference_id(&self) -> Option<&str> {
        self.file_reference_id.as_deref()
    }

    fn progress(&self) -> Option<f64> {
        self.progress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub vocabulary: Vocabulary,
    pub status: String
}

impl ResolvedItem {
    pub fn new(vocabulary: Vocabulary, status: impl Into<String>) -> Self {
        Self {
            vocabulary,
            status: status.into()
        }
    }

    pub fn presentation(&self, registry: &StatusRegistry) -> StatusPresentation {
        registry.lookup(self.vocabulary, &self.status)
    }
}

impl ResolvedStatusSource for ResolvedItem {
    fn raw_status(&self) -> &str {
        &self.status
    }
}
