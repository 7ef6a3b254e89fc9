//! Download status derivation and presentation registries for media entities.
//!
//! Entities that only know whether a file has been resolved (and how far a
//! download has progressed) get a [`CanonicalStatus`] from [`derive_status`].
//! Entities whose status is resolved upstream carry an [`ExternalStatus`].
//! Either way the status is turned into a color token and label through an
//! immutable [`Registry`]; unknown values degrade to a neutral chip instead
//! of failing.
//!
//! # Example
//!
//! ```
//! use media_status::{
//!     CanonicalStatus, ColorToken, MediaStatusInput, StatusDisplay, StatusRegistry,
//!     Vocabulary, display_for
//! };
//!
//! let input = MediaStatusInput::new(None, Some(0.42));
//! assert_eq!(input.status(), CanonicalStatus::Downloading);
//!
//! let registry = StatusRegistry::global();
//! assert_eq!(
//!     display_for(&input, registry.canonical()),
//!     StatusDisplay::Progress { percent: 42 }
//! );
//!
//! assert_eq!(registry.color_for(Vocabulary::Video, "MISSING"), ColorToken::Danger);
//! assert_eq!(registry.label_for(Vocabulary::Canonical, "SomeFutureStatus"), "SomeFutureStatus");
//! ```

pub mod compat;
mod derive;
pub mod error;
mod progress;
mod registry;
pub mod types;

pub use derive::derive_status;
pub use error::{Error, Result};
pub use progress::{StatusDisplay, display_for, percent, resolve_display};
pub use registry::{
    CANONICAL_STATUS_CONFIG, PresentationOverride, Registry, RegistryOverrides, StatusRegistry,
    canonical_color, canonical_label, color_for, label_for
};
pub use types::{
    CanonicalStatus, ColorToken, DerivedStatusSource, ExternalStatus, MediaItem, MediaKind,
    MediaStatusInput, ResolvedItem, ResolvedStatusSource, StatusKey, StatusPresentation,
    Vocabulary
};
