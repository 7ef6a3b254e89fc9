use crate::registry::Registry;
use crate::types::{CanonicalStatus, DerivedStatusSource, StatusPresentation};

/// Whole-number percent for a progress fraction.
///
/// Not clamped; callers keep `progress` within `[0, 1]`.
#[allow(clippy::cast_possible_truncation)]
pub fn percent(progress: f64) -> i64 {
    (progress * 100.0).round() as i64
}

/// What a renderer should draw for one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusDisplay {
    Progress { percent: i64 },
    Chip(StatusPresentation)
}

impl StatusDisplay {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Progress { .. } => "progress",
            Self::Chip(_) => "chip"
        }
    }

    pub fn percent(&self) -> Option<i64> {
        match self {
            Self::Progress { percent } => Some(*percent),
            Self::Chip(_) => None
        }
    }
}

/// Picks a progress indicator over the chip while downloading with known progress.
pub fn resolve_display(
    status: CanonicalStatus,
    progress: Option<f64>,
    registry: &Registry<CanonicalStatus>
) -> StatusDisplay {
    match (status, progress) {
        (CanonicalStatus::Downloading, Some(p)) => StatusDisplay::Progress { percent: percent(p) },
        _ => StatusDisplay::Chip(registry.get(status))
    }
}

pub fn display_for<E: DerivedStatusSource + ?Sized>(
    entity: &E,
    registry: &Registry<CanonicalStatus>
) -> StatusDisplay {
    let input = entity.status_input();
    resolve_display(input.status(), input.progress, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CANONICAL_STATUS_CONFIG;
    use crate::types::{ColorToken, MediaStatusInput};

    #[test]
    fn test_percent_rounds_to_whole_number() {
        assert_eq!(percent(0.567), 57);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(0.42), 42);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.005), 1);
    }

    #[test]
    fn test_downloading_with_progress_shows_indicator() {
        let input = MediaStatusInput::new(None, Some(0.42));
        let display = display_for(&input, &CANONICAL_STATUS_CONFIG);
        assert_eq!(display, StatusDisplay::Progress { percent: 42 });
        assert_eq!(display.kind(), "progress");
    }

    #[test]
    fn test_downloading_without_progress_shows_chip() {
        let display = resolve_display(CanonicalStatus::Downloading, None, &CANONICAL_STATUS_CONFIG);
        match display {
            StatusDisplay::Chip(p) => {
                assert_eq!(p.color, ColorToken::Primary);
                assert_eq!(p.label, "Downloading");
            }
            StatusDisplay::Progress { .. } => panic!("expected chip")
        }
    }

    #[test]
    fn test_downloading_with_zero_progress_does_not_panic() {
        let display =
            resolve_display(CanonicalStatus::Downloading, Some(0.0), &CANONICAL_STATUS_CONFIG);
        assert_eq!(display.percent(), Some(0));
    }

    #[test]
    fn test_downloaded_ignores_leftover_progress() {
        let input = MediaStatusInput::new(Some("f1"), Some(0.3));
        let display = display_for(&input, &CANONICAL_STATUS_CONFIG);
        assert_eq!(display.kind(), "chip");
        assert_eq!(display.percent(), None);
    }

    #[test]
    fn test_wanted_shows_chip() {
        let display = display_for(&MediaStatusInput::default(), &CANONICAL_STATUS_CONFIG);
        assert_eq!(
            display,
            StatusDisplay::Chip(StatusPresentation::new(ColorToken::Warning, "Wanted"))
        );
    }
}
