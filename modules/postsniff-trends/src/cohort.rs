use serde::Serialize;

use postsniff_common::DEFAULT_TOP_POSTS;

use crate::error::TrendError;

/// How many top-ranked posts a trend query examines.
///
/// Zero is valid and selects no posts. Values arriving from the outside as
/// signed integers go through `TryFrom<i64>`, which rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CohortSize(usize);

impl CohortSize {
    pub const fn new(size: usize) -> Self {
        Self(size)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for CohortSize {
    fn default() -> Self {
        Self(DEFAULT_TOP_POSTS)
    }
}

impl TryFrom<i64> for CohortSize {
    type Error = TrendError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(Self)
            .map_err(|_| TrendError::InvalidCohortSize(raw))
    }
}

impl std::fmt::Display for CohortSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
