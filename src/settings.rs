//! Settings shared by the resolver and the outline painter.

use failure::Error;

use crate::outline::OutlineStyle;

/// A structure containing the tunables of this crate. Plugins usually embed it
/// into their own configuration and hand it back on load; missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub outline: OutlineStyle,
    /// Whether operations given a null node log a warning.
    pub log_null_nodes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            outline: OutlineStyle::default(),
            log_null_nodes: true,
        }
    }
}

impl Settings {
    pub fn from_json<T: AsRef<str>>(json: T) -> Result<Self, Error> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
