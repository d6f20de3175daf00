use serde::{Deserialize, Serialize};

use vanityshelf_core::{CategoryId, DomainError, Entity};

/// Broad category families a cosmetics product can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Skincare,
    Makeup,
    Fragrance,
    Hair,
    Body,
    Other,
}

impl CategoryType {
    /// All variants, in display order.
    pub const ALL: [CategoryType; 6] = [
        CategoryType::Skincare,
        CategoryType::Makeup,
        CategoryType::Fragrance,
        CategoryType::Hair,
        CategoryType::Body,
        CategoryType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryType::Skincare => "skincare",
            CategoryType::Makeup => "makeup",
            CategoryType::Fragrance => "fragrance",
            CategoryType::Hair => "hair",
            CategoryType::Body => "body",
            CategoryType::Other => "other",
        }
    }

    /// Human-readable label (form dropdowns, badges).
    pub fn label(self) -> &'static str {
        match self {
            CategoryType::Skincare => "Skincare",
            CategoryType::Makeup => "Makeup",
            CategoryType::Fragrance => "Fragrance",
            CategoryType::Hair => "Hair Care",
            CategoryType::Body => "Body Care",
            CategoryType::Other => "Other",
        }
    }
}

impl core::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CategoryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skincare" => Ok(CategoryType::Skincare),
            "makeup" => Ok(CategoryType::Makeup),
            "fragrance" => Ok(CategoryType::Fragrance),
            "hair" => Ok(CategoryType::Hair),
            "body" => Ok(CategoryType::Body),
            "other" => Ok(CategoryType::Other),
            other => Err(DomainError::validation(format!(
                "unknown category type: {other}"
            ))),
        }
    }
}

/// A named category within a [`CategoryType`] family.
///
/// Unique per `(name, category_type)`; the uniqueness check lives in the store
/// layer since it spans records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    category_type: CategoryType,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        category_type: CategoryType,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            category_type,
        })
    }

    pub fn category_id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category_type(&self) -> CategoryType {
        self.category_type
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.category_type.label(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_type_round_trips_as_str() {
        for ty in CategoryType::ALL {
            let parsed: CategoryType = ty.as_str().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    #[test]
    fn category_type_rejects_unknown_name() {
        assert!("nailcare".parse::<CategoryType>().is_err());
    }

    #[test]
    fn category_displays_family_and_name() {
        let cat = Category::new(CategoryId::new(), "Cleanser", CategoryType::Skincare).unwrap();
        assert_eq!(cat.to_string(), "Skincare - Cleanser");
    }

    #[test]
    fn category_rejects_blank_name() {
        assert!(Category::new(CategoryId::new(), "", CategoryType::Makeup).is_err());
    }
}
