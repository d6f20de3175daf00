use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vanityshelf_core::{BrandId, DomainError, Entity};

/// A cosmetics brand.
///
/// Brands are catalog-wide (shared across users) and unique by name; the
/// uniqueness check lives in the store layer since it spans records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    id: BrandId,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl Brand {
    pub fn new(
        id: BrandId,
        name: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("brand name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            created_at,
        })
    }

    pub fn brand_id(&self) -> BrandId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Brand {
    type Id = BrandId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_brand_keeps_fields() {
        let id = BrandId::new();
        let brand = Brand::new(id, "Fenty Beauty", "Makeup line", Utc::now()).unwrap();
        assert_eq!(brand.brand_id(), id);
        assert_eq!(brand.name(), "Fenty Beauty");
        assert_eq!(brand.description(), "Makeup line");
    }

    #[test]
    fn new_brand_rejects_blank_name() {
        let err = Brand::new(BrandId::new(), "   ", "", Utc::now()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
