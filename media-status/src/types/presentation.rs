use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Success,
    Warning,
    Danger,
    #[default]
    Default,
    Primary,
    Secondary
}

impl ColorToken {
    pub const ALL: [Self; 6] = [
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Default,
        Self::Primary,
        Self::Secondary
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary"
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Color and label used to render one status chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresentation {
    pub color: ColorToken,
    pub label: Cow<'static, str>
}

impl StatusPresentation {
    pub const fn new(color: ColorToken, label: &'static str) -> Self {
        Self {
            color,
            label: Cow::Borrowed(label)
        }
    }

    /// Neutral presentation for a status the registry does not know.
    pub fn fallback(raw: &str) -> Self {
        Self {
            color: ColorToken::Default,
            label: Cow::Owned(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_keeps_raw_label() {
        let p = StatusPresentation::fallback("SomeFutureStatus");
        assert_eq!(p.color, ColorToken::Default);
        assert_eq!(p.label, "SomeFutureStatus");
    }

    #[test]
    fn test_color_token_round_trips_through_text() {
        assert_eq!("secondary".parse::<ColorToken>().unwrap(), ColorToken::Secondary);
        assert_eq!(ColorToken::Danger.to_string(), "danger");
        assert!("purple".parse::<ColorToken>().is_err());
        assert_eq!(ColorToken::default(), ColorToken::Default);
    }
}
