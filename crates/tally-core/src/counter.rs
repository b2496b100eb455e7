//! Counter entity.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// A named, monotonically incremented unsigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: String,
    pub value: u64,
}

impl Counter {
    /// Fresh counter starting at zero.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), value: 0 }
    }

    /// Add one. The value is left untouched on overflow.
    pub fn inc(&mut self) -> Result<()> {
        self.value = self
            .value
            .checked_add(1)
            .ok_or_else(|| TallyError::Overflow(self.id.clone()))?;
        Ok(())
    }
}
