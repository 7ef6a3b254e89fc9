use crate::types::CanonicalStatus;

/// Derives the canonical status from an entity's raw download signals.
///
/// A non-empty file reference always wins, so progress left over from a
/// finished download is ignored. Progress must be strictly positive to count
/// as downloading; everything else is `Wanted`.
pub fn derive_status(file_reference_id: Option<&str>, progress: Option<f64>) -> CanonicalStatus {
    if file_reference_id.is_some_and(|id| !id.is_empty()) {
        return CanonicalStatus::Downloaded;
    }

    match progress {
        Some(p) if p > 0.0 => CanonicalStatus::Downloading,
        _ => CanonicalStatus::Wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_reference_dominates_progress() {
        for progress in [None, Some(0.0), Some(0.3), Some(0.5), Some(1.0), Some(1.7)] {
            assert_eq!(derive_status(Some("f1"), progress), CanonicalStatus::Downloaded);
        }
    }

    #[test]
    fn test_positive_progress_is_downloading() {
        assert_eq!(derive_status(None, Some(0.42)), CanonicalStatus::Downloading);
        assert_eq!(derive_status(None, Some(0.0001)), CanonicalStatus::Downloading);
        assert_eq!(derive_status(None, Some(1.0)), CanonicalStatus::Downloading);
    }

    #[test]
    fn test_zero_or_missing_progress_is_wanted() {
        assert_eq!(derive_status(None, None), CanonicalStatus::Wanted);
        assert_eq!(derive_status(None, Some(0.0)), CanonicalStatus::Wanted);
    }

    #[test]
    fn test_empty_file_reference_counts_as_absent() {
        assert_eq!(derive_status(Some(""), None), CanonicalStatus::Wanted);
        assert_eq!(derive_status(Some(""), Some(0.6)), CanonicalStatus::Downloading);
    }

    #[test]
    fn test_nan_progress_is_wanted() {
        assert_eq!(derive_status(None, Some(f64::NAN)), CanonicalStatus::Wanted);
    }
}
