mod entity;
mod presentation;
mod status;

pub use entity::{
    DerivedStatusSource, MediaItem, MediaKind, MediaStatusInput, ResolvedItem,
    ResolvedStatusSource
};
pub use presentation::{ColorToken, StatusPresentation};
pub use status::{CanonicalStatus, ExternalStatus, StatusKey, Vocabulary};
