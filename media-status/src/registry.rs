use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{
    CanonicalStatus, ColorToken, ExternalStatus, StatusKey, StatusPresentation, Vocabulary
};

/// Default presentation table for derived statuses.
///
/// The global [`StatusRegistry`] borrows this table, so both see the same
/// entries. A registry built with overrides clones it and no longer does.
pub static CANONICAL_STATUS_CONFIG: Lazy<Registry<CanonicalStatus>> =
    Lazy::new(Registry::canonical_defaults);

static DEFAULT_REGISTRY: Lazy<StatusRegistry> = Lazy::new(StatusRegistry::default);

/// Immutable mapping from the statuses of one vocabulary to their presentation.
///
/// Lookups never fail: a key the table does not contain renders with
/// [`ColorToken::Default`] and the key itself as the label.
#[derive(Debug, Clone)]
pub struct Registry<S: StatusKey> {
    entries: HashMap<S, StatusPresentation>
}

impl<S: StatusKey> Registry<S> {
    pub fn from_entries(entries: impl IntoIterator<Item = (S, StatusPresentation)>) -> Self {
        Self {
            entries: entries.into_iter().collect()
        }
    }

    pub fn get(&self, status: S) -> StatusPresentation {
        self.entries
            .get(&status)
            .cloned()
            .unwrap_or_else(|| StatusPresentation::fallback(status.as_str()))
    }

    pub fn lookup(&self, raw: &str) -> StatusPresentation {
        if let Some(presentation) = self.find(raw) {
            return presentation.clone();
        }
        tracing::debug!(status = raw, "unrecognized status, using fallback presentation");
        StatusPresentation::fallback(raw)
    }

    pub fn label_for(&self, raw: &str) -> Cow<'static, str> {
        self.lookup(raw).label
    }

    pub fn color_for(&self, raw: &str) -> ColorToken {
        self.find(raw).map_or(ColorToken::Default, |p| p.color)
    }

    /// Configured entries in the vocabulary's display order.
    pub fn entries(&self) -> impl Iterator<Item = (S, &StatusPresentation)> + '_ {
        S::ALL
            .iter()
            .filter_map(|s| self.entries.get(s).map(|p| (*s, p)))
    }

    fn find(&self, raw: &str) -> Option<&StatusPresentation> {
        S::from_key(raw).and_then(|s| self.entries.get(&s))
    }

    fn apply_overrides(
        &mut self,
        vocabulary: Vocabulary,
        overrides: &BTreeMap<String, PresentationOverride>
    ) -> Result<()> {
        for (key, o) in overrides {
            let status = S::from_key(key).ok_or_else(|| Error::InvalidOverride {
                vocabulary,
                key: key.clone()
            })?;
            let entry = self
                .entries
                .entry(status)
                .or_insert_with(|| StatusPresentation::fallback(status.as_str()));
            if let Some(label) = &o.label {
                entry.label = Cow::Owned(label.clone());
            }
            if let Some(color) = o.color {
                entry.color = color;
            }
            tracing::debug!(%vocabulary, status = %key, "applied presentation override");
        }
        Ok(())
    }
}

impl Registry<CanonicalStatus> {
    pub fn canonical_defaults() -> Self {
        Self::from_entries([
            (
                CanonicalStatus::Downloaded,
                StatusPresentation::new(ColorToken::Success, "Downloaded")
            ),
            (
                CanonicalStatus::Downloading,
                StatusPresentation::new(ColorToken::Primary, "Downloading")
            ),
            (
                CanonicalStatus::Wanted,
                StatusPresentation::new(ColorToken::Warning, "Wanted")
            )
        ])
    }
}

impl Registry<ExternalStatus> {
    pub fn video_defaults() -> Self {
        Self::from_entries([
            (
                ExternalStatus::Downloaded,
                StatusPresentation::new(ColorToken::Success, "Downloaded")
            ),
            (
                ExternalStatus::Downloading,
                StatusPresentation::new(ColorToken::Primary, "Downloading")
            ),
            (
                ExternalStatus::Wanted,
                StatusPresentation::new(ColorToken::Warning, "Wanted")
            ),
            (
                ExternalStatus::Available,
                StatusPresentation::new(ColorToken::Secondary, "Available")
            ),
            (
                ExternalStatus::Missing,
                StatusPresentation::new(ColorToken::Danger, "Missing")
            ),
            (
                ExternalStatus::Ignored,
                StatusPresentation::new(ColorToken::Default, "Ignored")
            )
        ])
    }

    pub fn ebook_defaults() -> Self {
        Self::from_entries([
            (
                ExternalStatus::Downloaded,
                StatusPresentation::new(ColorToken::Success, "In Library")
            ),
            (
                ExternalStatus::Downloading,
                StatusPresentation::new(ColorToken::Primary, "Downloading")
            ),
            (
                ExternalStatus::Wanted,
                StatusPresentation::new(ColorToken::Warning, "Wanted")
            ),
            (
                ExternalStatus::Available,
                StatusPresentation::new(ColorToken::Secondary, "Available")
            ),
            (
                ExternalStatus::Missing,
                StatusPresentation::new(ColorToken::Danger, "Not Found")
            ),
            (
                ExternalStatus::Ignored,
                StatusPresentation::new(ColorToken::Default, "Ignored")
            )
        ])
    }
}

/// Replacement label and/or color for one configured status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationOverride {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<ColorToken>
}

/// Per-vocabulary overrides, keyed by vocabulary name then status key.
///
/// ```json
/// { "canonical": { "Wanted": { "label": "Monitored" } } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RegistryOverrides {
    vocabularies: BTreeMap<String, BTreeMap<String, PresentationOverride>>
}

impl RegistryOverrides {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.values().all(BTreeMap::is_empty)
    }
}

/// Every vocabulary's registry, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    canonical: Cow<'static, Registry<CanonicalStatus>>,
    video: Registry<ExternalStatus>,
    ebook: Registry<ExternalStatus>
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self {
            canonical: Cow::Borrowed(&*CANONICAL_STATUS_CONFIG),
            video: Registry::video_defaults(),
            ebook: Registry::ebook_defaults()
        }
    }
}

impl StatusRegistry {
    /// Process-wide registry with the default tables.
    pub fn global() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    pub fn with_overrides(overrides: &RegistryOverrides) -> Result<Self> {
        let mut registry = Self::default();
        for (name, entries) in &overrides.vocabularies {
            let vocabulary: Vocabulary = name.parse()?;
            match vocabulary {
                Vocabulary::Canonical => {
                    registry.canonical.to_mut().apply_overrides(vocabulary, entries)?;
                }
                Vocabulary::Video => registry.video.apply_overrides(vocabulary, entries)?,
                Vocabulary::Ebook => registry.ebook.apply_overrides(vocabulary, entries)?
            }
        }
        Ok(registry)
    }

    pub fn canonical(&self) -> &Registry<CanonicalStatus> {
        &self.canonical
    }

    pub fn lookup(&self, vocabulary: Vocabulary, raw: &str) -> StatusPresentation {
        match vocabulary {
            Vocabulary::Canonical => self.canonical.lookup(raw),
            Vocabulary::Video => self.video.lookup(raw),
            Vocabulary::Ebook => self.ebook.lookup(raw)
        }
    }

    pub fn label_for(&self, vocabulary: Vocabulary, raw: &str) -> Cow<'static, str> {
        self.lookup(vocabulary, raw).label
    }

    pub fn color_for(&self, vocabulary: Vocabulary, raw: &str) -> ColorToken {
        match vocabulary {
            Vocabulary::Canonical => self.canonical.color_for(raw),
            Vocabulary::Video => self.video.color_for(raw),
            Vocabulary::Ebook => self.ebook.color_for(raw)
        }
    }

    /// `(key, presentation)` pairs of one vocabulary, in display order.
    pub fn table(&self, vocabulary: Vocabulary) -> Vec<(&'static str, &StatusPresentation)> {
        match vocabulary {
            Vocabulary::Canonical => collect_table(self.canonical()),
            Vocabulary::Video => collect_table(&self.video),
            Vocabulary::Ebook => collect_table(&self.ebook)
        }
    }
}

fn collect_table<S: StatusKey>(
    registry: &Registry<S>
) -> Vec<(&'static str, &StatusPresentation)> {
    registry.entries().map(|(s, p)| (s.as_str(), p)).collect()
}

pub fn label_for(vocabulary: Vocabulary, status: &str) -> Cow<'static, str> {
    StatusRegistry::global().label_for(vocabulary, status)
}

pub fn color_for(vocabulary: Vocabulary, status: &str) -> ColorToken {
    StatusRegistry::global().color_for(vocabulary, status)
}

pub fn canonical_label(status: CanonicalStatus) -> Cow<'static, str> {
    CANONICAL_STATUS_CONFIG.get(status).label
}

pub fn canonical_color(status: CanonicalStatus) -> ColorToken {
    CANONICAL_STATUS_CONFIG.get(status).color
}
