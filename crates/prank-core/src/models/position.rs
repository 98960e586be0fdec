use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::errors::ScoringError;

/// Where a candidate falls in the ordering produced by one card.
///
/// Holds an original index followed by any number of adjusted indices
/// (rank within bucket, rank overall, ...). Never empty. Ordering semantics
/// are defined by the card that assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionRepr")]
pub struct Position {
    indices: SmallVec<[u32; 2]>,
}

#[derive(Deserialize)]
struct PositionRepr {
    indices: SmallVec<[u32; 2]>,
}

impl TryFrom<PositionRepr> for Position {
    type Error = ScoringError;

    fn try_from(repr: PositionRepr) -> Result<Self, Self::Error> {
        if repr.indices.is_empty() {
            return Err(ScoringError::InvalidValue {
                field: "position".to_string(),
                reason: "needs at least the original index".to_string(),
            });
        }
        Ok(Self {
            indices: repr.indices,
        })
    }
}

impl Position {
    pub fn new(original: u32) -> Self {
        Self {
            indices: smallvec![original],
        }
    }

    pub fn with_adjusted(original: u32, adjusted: impl IntoIterator<Item = u32>) -> Self {
        let mut indices: SmallVec<[u32; 2]> = smallvec![original];
        indices.extend(adjusted);
        Self { indices }
    }

    /// The index the card originally assigned.
    pub fn original(&self) -> u32 {
        self.indices.first().copied().unwrap_or_default()
    }

    /// Indices after the original (may be empty).
    pub fn adjusted(&self) -> &[u32] {
        self.indices.get(1..).unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Number of dimensions (1 + adjusted count).
    pub fn dimensions(&self) -> usize {
        self.indices.len()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u32> for Position {
    fn from(original: u32) -> Self {
        Self::new(original)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.indices.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join(":"))
    }
}
