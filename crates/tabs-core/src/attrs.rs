//! Derived presentation attributes for the tab list element.
//!
//! Pure functions of list state; the component layer re-reads them on every
//! change through signal tracking.

use serde::{Deserialize, Serialize};

/// Role exposed on the list element: a real tab list while it has tabs, an
/// inert presentation role while empty, so assistive technology is never
/// offered an empty, non-functional widget.
pub fn list_role(interactive: bool) -> &'static str {
    if interactive {
        "tablist"
    } else {
        "presentation"
    }
}

/// Single selection only: reported as `"false"` while the list has tabs and
/// omitted entirely while it is empty.
pub fn multiselectable(interactive: bool) -> Option<&'static str> {
    interactive.then_some("false")
}

/// Which DOM modifications screenreaders should announce.
pub const ARIA_RELEVANT: &str = "all";

/// Politeness of screenreader notifications for DOM changes in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveRegion {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl LiveRegion {
    pub fn as_str(self) -> &'static str {
        match self {
            LiveRegion::Off => "off",
            LiveRegion::Polite => "polite",
            LiveRegion::Assertive => "assertive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_follows_interactivity() {
        assert_eq!(list_role(true), "tablist");
        assert_eq!(list_role(false), "presentation");
    }

    #[test]
    fn test_multiselectable_omitted_when_inert() {
        assert_eq!(multiselectable(true), Some("false"));
        assert_eq!(multiselectable(false), None);
    }

    #[test]
    fn test_live_region_defaults_to_polite() {
        assert_eq!(LiveRegion::default().as_str(), "polite");
        assert_eq!(LiveRegion::Off.as_str(), "off");
        assert_eq!(LiveRegion::Assertive.as_str(), "assertive");
    }
}
