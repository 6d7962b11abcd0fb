use crate::{ImageHost, MAX_DRAW};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_TTL_SECS: u64 = 300;

/// Runtime settings for [`crate::Oracle`]. Every field has a default so a
/// partial JSON file is enough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OracleConfig {
    pub images: ImageHost,
    pub max_draw: usize,
    pub session_ttl_secs: u64,
    pub auto_reshuffle: bool,
    pub seed: Option<u64>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            images: ImageHost::default(),
            max_draw: MAX_DRAW,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            auto_reshuffle: false,
            seed: None,
        }
    }
}
