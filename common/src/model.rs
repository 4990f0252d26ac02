use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Windowing parameters for list operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
pub struct Paginated {
    /// Maximum number of items to return
    #[serde(default = "default::limit")]
    pub limit: u64,
    /// Number of items to skip
    #[serde(default)]
    pub offset: u64,
}

impl Default for Paginated {
    fn default() -> Self {
        Self {
            limit: default::limit(),
            offset: 0,
        }
    }
}

mod default {
    pub(super) fn limit() -> u64 {
        50
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResults<R> {
    pub items: Vec<R>,
    pub total: u64,
}
