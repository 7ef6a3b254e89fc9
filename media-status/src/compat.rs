//! Names from the per-kind status helpers that predate the generic ones.
//!
//! Everything here is a re-export of the generic item, so episodes, tracks
//! and chapters share one implementation and one presentation table. New
//! code should use the crate-root items directly.
//!
//! The label, color and config names are bound to the default canonical
//! table ([`CANONICAL_STATUS_CONFIG`](crate::CANONICAL_STATUS_CONFIG)), which
//! is also what [`StatusRegistry::global`](crate::StatusRegistry::global)
//! reads. A registry built with overrides is not visible through them.

#[deprecated(note = "use `media_status::derive_status` and `media_status::CanonicalStatus`")]
pub mod episode {
    pub use crate::derive::derive_status as derive_episode_status;
    pub use crate::progress::resolve_display as resolve_episode_display;
    pub use crate::registry::{
        CANONICAL_STATUS_CONFIG as EPISODE_STATUS_CONFIG, canonical_color as episode_status_color,
        canonical_label as episode_status_label
    };
    pub use crate::types::{
        CanonicalStatus as EpisodeStatus, MediaStatusInput as EpisodeStatusInput
    };
}

#[deprecated(note = "use `media_status::derive_status` and `media_status::CanonicalStatus`")]
pub mod track {
    pub use crate::derive::derive_status as derive_track_status;
    pub use crate::progress::resolve_display as resolve_track_display;
    pub use crate::registry::{
        CANONICAL_STATUS_CONFIG as TRACK_STATUS_CONFIG, canonical_color as track_status_color,
        canonical_label as track_status_label
    };
    pub use crate::types::{CanonicalStatus as TrackStatus, MediaStatusInput as TrackStatusInput};
}

#[deprecated(note = "use `media_status::derive_status` and `media_status::CanonicalStatus`")]
pub mod chapter {
    pub use crate::derive::derive_status as derive_chapter_status;
    pub use crate::progress::resolve_display as resolve_chapter_display;
    pub use crate::registry::{
        CANONICAL_STATUS_CONFIG as CHAPTER_STATUS_CONFIG, canonical_color as chapter_status_color,
        canonical_label as chapter_status_label
    };
    pub use crate::types::{
        CanonicalStatus as ChapterStatus, MediaStatusInput as ChapterStatusInput
    };
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::{chapter, episode, track};
    use crate::progress::resolve_display;
    use crate::registry::{CANONICAL_STATUS_CONFIG, canonical_color, canonical_label};
    use crate::{
        CanonicalStatus, ColorToken, MediaStatusInput, StatusDisplay, StatusKey, StatusRegistry,
        Vocabulary, color_for, derive_status, label_for
    };

    type DisplayFn = fn(
        CanonicalStatus,
        Option<f64>,
        &crate::Registry<CanonicalStatus>
    ) -> StatusDisplay;
    type LabelFn = fn(CanonicalStatus) -> std::borrow::Cow<'static, str>;
    type ColorFn = fn(CanonicalStatus) -> ColorToken;

    const INPUTS: [(Option<&str>, Option<f64>); 6] = [
        (Some("f1"), Some(0.3)),
        (Some("f1"), None),
        (None, Some(0.42)),
        (None, Some(0.0)),
        (None, None),
        (Some(""), Some(1.0))
    ];

    const DISPLAYS: [DisplayFn; 3] = [
        episode::resolve_episode_display,
        track::resolve_track_display,
        chapter::resolve_chapter_display
    ];

    const LABELS: [LabelFn; 3] = [
        episode::episode_status_label,
        track::track_status_label,
        chapter::chapter_status_label
    ];

    const COLORS: [ColorFn; 3] = [
        episode::episode_status_color,
        track::track_status_color,
        chapter::chapter_status_color
    ];

    #[test]
    fn test_derive_aliases_match_generic() {
        for (file, progress) in INPUTS {
            let expected = derive_status(file, progress);
            assert_eq!(episode::derive_episode_status(file, progress), expected);
            assert_eq!(track::derive_track_status(file, progress), expected);
            assert_eq!(chapter::derive_chapter_status(file, progress), expected);
        }
    }

    #[test]
    fn test_presentation_aliases_match_generic() {
        for status in CanonicalStatus::ALL.iter().copied() {
            for label in LABELS {
                assert_eq!(label(status), canonical_label(status));
                assert_eq!(label(status), label_for(Vocabulary::Canonical, status.as_str()));
            }
            for color in COLORS {
                assert_eq!(color(status), canonical_color(status));
                assert_eq!(color(status), color_for(Vocabulary::Canonical, status.as_str()));
            }
        }
    }

    #[test]
    fn test_display_aliases_match_generic() {
        let configs = [
            &*episode::EPISODE_STATUS_CONFIG,
            &*track::TRACK_STATUS_CONFIG,
            &*chapter::CHAPTER_STATUS_CONFIG
        ];
        for (file, progress) in INPUTS {
            let status = derive_status(file, progress);
            let expected = resolve_display(status, progress, &CANONICAL_STATUS_CONFIG);
            for (display, config) in DISPLAYS.into_iter().zip(configs) {
                assert_eq!(display(status, progress, config), expected);
            }
        }
    }

    #[test]
    fn test_config_aliases_are_the_global_table() {
        let global = StatusRegistry::global().canonical();
        assert!(std::ptr::eq(&*episode::EPISODE_STATUS_CONFIG, global));
        assert!(std::ptr::eq(&*track::TRACK_STATUS_CONFIG, global));
        assert!(std::ptr::eq(&*chapter::CHAPTER_STATUS_CONFIG, global));
    }

    #[test]
    fn test_type_aliases_are_interchangeable() {
        let input: episode::EpisodeStatusInput<'_> = MediaStatusInput::new(None, Some(0.5));
        let status: track::TrackStatus = input.status();
        let generic: CanonicalStatus = status;
        let chapter_status: chapter::ChapterStatus = generic;
        assert_eq!(chapter_status, CanonicalStatus::Downloading);

        let input: chapter::ChapterStatusInput<'_> = input;
        let input: track::TrackStatusInput<'_> = input;
        assert_eq!(input.status(), generic);
    }
}
