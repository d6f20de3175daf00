use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vanityshelf_core::{Entity, ProductId, UsageLogId};

/// One "I used this product" entry. Listed newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLog {
    id: UsageLogId,
    product_id: ProductId,
    used_at: DateTime<Utc>,
    notes: String,
}

impl UsageLog {
    pub fn new(
        id: UsageLogId,
        product_id: ProductId,
        notes: impl Into<String>,
        used_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            used_at,
            notes: notes.into(),
        }
    }

    pub fn log_id(&self) -> UsageLogId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn used_at(&self) -> DateTime<Utc> {
        self.used_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl Entity for UsageLog {
    type Id = UsageLogId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
