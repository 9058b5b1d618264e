use std::fmt;

use serde::{Serialize, Serializer};

/// What the client should do when the user taps a notification.
///
/// Clients understand `report`, `url` and `none`; any other value is
/// relayed untouched so newer clients can use actions this server
/// does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ActionType {
    /// Open a named report inside the client application
    Report,
    /// Open an external web link
    Url,
    /// Notification is informational only
    #[default]
    None,
    /// Passed through as given
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Report => "report",
            Self::Url => "url",
            Self::None => "none",
            Self::Other(value) => value,
        }
    }
}

/// Empty input means no action
impl From<&str> for ActionType {
    fn from(value: &str) -> Self {
        match value {
            "report" => Self::Report,
            "url" => Self::Url,
            "" | "none" => Self::None,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for ActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
