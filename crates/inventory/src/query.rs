//! Filter, pagination, and result types for the product listing.

use serde::{Deserialize, Serialize};

use vanityshelf_catalog::Category;
use vanityshelf_core::CategoryId;
use vanityshelf_products::{CosmeticProduct, ExpirationReport, ExpirationTier};

/// Pagination parameters for product listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: u32,
    /// Offset for pagination (0-based).
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 10, // list page size
            offset: 0,
        }
    }
}

impl Pagination {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(10).min(500), // cap for safety
            offset: offset.unwrap_or(0),
        }
    }

    /// No paging: everything in one page.
    pub fn all() -> Self {
        Self {
            limit: u32::MAX,
            offset: 0,
        }
    }
}

/// Filter criteria for the product listing.
///
/// Every field is optional; a missing field means "no filter". Unknown
/// category ids and whitespace-only search strings are tolerated (the former
/// matches nothing, the latter is ignored), never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Keep only products in this urgency tier.
    pub tier: Option<ExpirationTier>,
    /// Keep only products in this category (exact id match).
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring match across product name, brand name,
    /// category name, and shade.
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn by_tier(tier: ExpirationTier) -> Self {
        Self {
            tier: Some(tier),
            ..Self::default()
        }
    }

    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn matching(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    /// The normalized search needle: lowercased, `None` when blank.
    pub(crate) fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Per-tier product counts over a user's full collection (dashboard badges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub expired: u64,
    pub urgent: u64,
    pub soon: u64,
    pub good: u64,
    pub unknown: u64,
    pub total: u64,
}

impl TierCounts {
    pub(crate) fn record(&mut self, tier: ExpirationTier) {
        match tier {
            ExpirationTier::Expired => self.expired += 1,
            ExpirationTier::Urgent => self.urgent += 1,
            ExpirationTier::Soon => self.soon += 1,
            ExpirationTier::Good => self.good += 1,
            ExpirationTier::Unknown => self.unknown += 1,
        }
        self.total += 1;
    }

    pub fn for_tier(&self, tier: ExpirationTier) -> u64 {
        match tier {
            ExpirationTier::Expired => self.expired,
            ExpirationTier::Urgent => self.urgent,
            ExpirationTier::Soon => self.soon,
            ExpirationTier::Good => self.good,
            ExpirationTier::Unknown => self.unknown,
        }
    }
}

/// One product as it appears in the listing: the record, the resolved catalog
/// names, and its expiration report for the requested day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub product: CosmeticProduct,
    pub brand_name: String,
    pub category_name: Option<String>,
    pub report: ExpirationReport,
}

impl ProductListing {
    pub(crate) fn new(
        product: CosmeticProduct,
        brand_name: String,
        category: Option<&Category>,
        report: ExpirationReport,
    ) -> Self {
        Self {
            product,
            brand_name,
            category_name: category.map(|c| c.name().to_string()),
            report,
        }
    }

    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.product.name().to_lowercase().contains(needle)
            || self.brand_name.to_lowercase().contains(needle)
            || self
                .category_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(needle))
            || self.product.shade().to_lowercase().contains(needle)
    }
}

/// A page of the filtered, ordered product listing plus the unfiltered
/// per-tier counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Records in this page, ordered soonest-expiring first.
    pub items: Vec<ProductListing>,
    /// Counts over the user's full collection (filters do not apply).
    pub counts: TierCounts,
    /// Number of records matching the filter across all pages.
    pub total_matched: u64,
    /// Whether records remain beyond this page.
    pub has_more: bool,
}
