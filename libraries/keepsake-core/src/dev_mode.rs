//! Developer mode flag
//!
//! Developer mode only gates whether the shell offers add forms. The stores
//! accept new items regardless.

use serde::{Deserialize, Serialize};

/// Query parameter that switches developer mode on
pub const DEV_MODE_PARAM: &str = "dev";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevMode(bool);

impl DevMode {
    pub const DISABLED: DevMode = DevMode(false);
    pub const ENABLED: DevMode = DevMode(true);

    /// Read the flag from a URL query string such as `?dev=true`
    ///
    /// Accepts `true` or `1`; anything else, or no `dev` parameter, is off.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let enabled = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == DEV_MODE_PARAM)
            .any(|(_, value)| matches!(value.as_ref(), "true" | "1"));
        Self(enabled)
    }

    pub fn is_enabled(self) -> bool {
        self.0
    }

    /// Enabled if either flag is enabled
    pub fn or(self, other: DevMode) -> DevMode {
        Self(self.0 || other.0)
    }
}

impl From<bool> for DevMode {
    fn from(enabled: bool) -> Self {
        Self(enabled)
    }
}
