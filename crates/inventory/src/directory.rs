//! The record-access facade composing catalog and per-user product records.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, Utc};

use vanityshelf_catalog::{Brand, Category, CategoryType};
use vanityshelf_core::{
    BrandId, CategoryId, DomainError, DomainResult, ProductId, UsageLogId, UserId,
};
use vanityshelf_products::{CosmeticProduct, ProductSpec, UsageLog, assess};

use crate::query::{Pagination, ProductFilter, ProductListing, ProductPage, TierCounts};
use crate::store::{InMemoryUserStore, UserStore};

/// Record-access facade for the inventory.
///
/// Brands and categories are catalog-wide (shared across users); products and
/// usage logs are user-scoped. The directory owns referential behavior:
/// removing a brand cascade-deletes its products (and their logs), removing a
/// category nulls the reference on products that used it, and removing a
/// product drops its usage history.
#[derive(Debug)]
pub struct ProductDirectory<
    P = InMemoryUserStore<ProductId, CosmeticProduct>,
    L = InMemoryUserStore<UsageLogId, UsageLog>,
> where
    P: UserStore<ProductId, CosmeticProduct>,
    L: UserStore<UsageLogId, UsageLog>,
{
    brands: RwLock<HashMap<BrandId, Brand>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
    products: P,
    logs: L,
}

impl ProductDirectory {
    /// A directory backed by in-memory stores (tests/dev).
    pub fn in_memory() -> Self {
        Self::new(InMemoryUserStore::new(), InMemoryUserStore::new())
    }
}

impl Default for ProductDirectory {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<P, L> ProductDirectory<P, L>
where
    P: UserStore<ProductId, CosmeticProduct>,
    L: UserStore<UsageLogId, UsageLog>,
{
    pub fn new(products: P, logs: L) -> Self {
        Self {
            brands: RwLock::new(HashMap::new()),
            categories: RwLock::new(HashMap::new()),
            products,
            logs,
        }
    }

    // ---- catalog: brands ----

    pub fn add_brand(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Brand> {
        let brand = Brand::new(BrandId::new(), name, description, now)?;
        let mut brands = self
            .brands
            .write()
            .map_err(|_| DomainError::invariant("brand catalog lock poisoned"))?;
        if brands.values().any(|b| b.name() == brand.name()) {
            return Err(DomainError::conflict(format!(
                "brand '{}' already exists",
                brand.name()
            )));
        }
        tracing::debug!(brand_id = %brand.brand_id(), name = brand.name(), "brand added");
        brands.insert(brand.brand_id(), brand.clone());
        Ok(brand)
    }

    pub fn brand(&self, brand_id: BrandId) -> Option<Brand> {
        let brands = self.brands.read().ok()?;
        brands.get(&brand_id).cloned()
    }

    /// All brands, ordered by name.
    pub fn brands(&self) -> Vec<Brand> {
        let brands = match self.brands.read() {
            Ok(b) => b,
            Err(_) => return vec![],
        };
        let mut all: Vec<Brand> = brands.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    /// Remove a brand and cascade-delete every product referencing it
    /// (together with those products' usage logs).
    pub fn remove_brand(&self, brand_id: BrandId) -> DomainResult<()> {
        {
            let mut brands = self
                .brands
                .write()
                .map_err(|_| DomainError::invariant("brand catalog lock poisoned"))?;
            brands.remove(&brand_id).ok_or(DomainError::NotFound)?;
        }

        let removed = self.products.remove_matching(&|p| p.brand_id() == brand_id);
        let removed_ids: HashSet<ProductId> =
            removed.iter().map(|(_, p)| p.product_id()).collect();
        self.logs
            .remove_matching(&|log| removed_ids.contains(&log.product_id()));
        tracing::info!(
            brand_id = %brand_id,
            cascaded_products = removed.len(),
            "brand removed"
        );
        Ok(())
    }

    // ---- catalog: categories ----

    pub fn add_category(
        &self,
        name: impl Into<String>,
        category_type: CategoryType,
    ) -> DomainResult<Category> {
        let category = Category::new(CategoryId::new(), name, category_type)?;
        let mut categories = self
            .categories
            .write()
            .map_err(|_| DomainError::invariant("category catalog lock poisoned"))?;
        if categories
            .values()
            .any(|c| c.name() == category.name() && c.category_type() == category_type)
        {
            return Err(DomainError::conflict(format!(
                "category '{category}' already exists"
            )));
        }
        tracing::debug!(category_id = %category.category_id(), name = category.name(), "category added");
        categories.insert(category.category_id(), category.clone());
        Ok(category)
    }

    pub fn category(&self, category_id: CategoryId) -> Option<Category> {
        let categories = self.categories.read().ok()?;
        categories.get(&category_id).cloned()
    }

    /// All categories, ordered by family then name.
    pub fn categories(&self) -> Vec<Category> {
        let categories = match self.categories.read() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by(|a, b| {
            a.category_type()
                .cmp(&b.category_type())
                .then_with(|| a.name().cmp(b.name()))
        });
        all
    }

    /// Remove a category; products referencing it keep existing with their
    /// category cleared.
    pub fn remove_category(&self, category_id: CategoryId) -> DomainResult<()> {
        {
            let mut categories = self
                .categories
                .write()
                .map_err(|_| DomainError::invariant("category catalog lock poisoned"))?;
            categories.remove(&category_id).ok_or(DomainError::NotFound)?;
        }

        self.products.for_each_mut(&|product| {
            if product.category_id() == Some(category_id) {
                product.clear_category();
            }
        });
        tracing::info!(category_id = %category_id, "category removed, references cleared");
        Ok(())
    }

    // ---- products ----

    pub fn add_product(
        &self,
        user_id: UserId,
        spec: ProductSpec,
        now: DateTime<Utc>,
    ) -> DomainResult<CosmeticProduct> {
        self.check_refs(&spec)?;
        let product = CosmeticProduct::new(ProductId::new(), user_id, spec, now)?;
        tracing::debug!(
            user_id = %user_id,
            product_id = %product.product_id(),
            name = product.name(),
            "product added"
        );
        self.products
            .upsert(user_id, product.product_id(), product.clone());
        Ok(product)
    }

    pub fn update_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
        spec: ProductSpec,
        now: DateTime<Utc>,
    ) -> DomainResult<CosmeticProduct> {
        let mut product = self
            .products
            .get(user_id, &product_id)
            .ok_or(DomainError::NotFound)?;
        self.check_refs(&spec)?;
        product.revise(spec, now)?;
        tracing::debug!(user_id = %user_id, product_id = %product_id, "product updated");
        self.products.upsert(user_id, product_id, product.clone());
        Ok(product)
    }

    /// Fetch one product with its expiration report and resolved catalog
    /// names (the detail view).
    pub fn get_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
        today: NaiveDate,
    ) -> DomainResult<ProductListing> {
        let product = self
            .products
            .get(user_id, &product_id)
            .ok_or(DomainError::NotFound)?;
        Ok(self.listing(product, today))
    }

    /// Remove a product and its usage history.
    pub fn remove_product(&self, user_id: UserId, product_id: ProductId) -> DomainResult<()> {
        self.products
            .remove(user_id, &product_id)
            .ok_or(DomainError::NotFound)?;
        let dropped = self
            .logs
            .remove_matching(&|log| log.product_id() == product_id);
        tracing::info!(
            user_id = %user_id,
            product_id = %product_id,
            dropped_logs = dropped.len(),
            "product removed"
        );
        Ok(())
    }

    // ---- usage logs ----

    pub fn log_usage(
        &self,
        user_id: UserId,
        product_id: ProductId,
        notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<UsageLog> {
        if self.products.get(user_id, &product_id).is_none() {
            return Err(DomainError::NotFound);
        }
        let log = UsageLog::new(UsageLogId::new(), product_id, notes, now);
        self.logs.upsert(user_id, log.log_id(), log.clone());
        Ok(log)
    }

    /// Usage history for a product the user owns, newest first.
    pub fn usage_history(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> DomainResult<Vec<UsageLog>> {
        if self.products.get(user_id, &product_id).is_none() {
            return Err(DomainError::NotFound);
        }
        let mut history: Vec<UsageLog> = self
            .logs
            .list(user_id)
            .into_iter()
            .filter(|log| log.product_id() == product_id)
            .collect();
        history.sort_by(|a, b| {
            b.used_at()
                .cmp(&a.used_at())
                .then_with(|| b.log_id().as_uuid().cmp(a.log_id().as_uuid()))
        });
        Ok(history)
    }

    // ---- listing ----

    /// The filtered, ordered product listing for one user, plus per-tier
    /// counts over the user's full collection.
    ///
    /// Tier filtering, counting, and ordering all use the PAO-adjusted
    /// effective expiration date, the same date source the detail badge uses.
    pub fn query_products(
        &self,
        user_id: UserId,
        filter: &ProductFilter,
        pagination: Pagination,
        today: NaiveDate,
    ) -> ProductPage {
        let mut listings: Vec<ProductListing> = self
            .products
            .list(user_id)
            .into_iter()
            .map(|product| self.listing(product, today))
            .collect();

        let mut counts = TierCounts::default();
        for listing in &listings {
            counts.record(listing.report.tier);
        }

        let needle = filter.search_needle();
        listings.retain(|listing| {
            filter.tier.is_none_or(|tier| listing.report.tier == tier)
                && filter
                    .category_id
                    .is_none_or(|id| listing.product.category_id() == Some(id))
                && needle
                    .as_deref()
                    .is_none_or(|needle| listing.matches_search(needle))
        });

        // Soonest-expiring first, unknown dates last; ties break by brand
        // then product name.
        listings.sort_by(|a, b| {
            cmp_dates_none_last(
                a.report.effective_expiration_date,
                b.report.effective_expiration_date,
            )
            .then_with(|| a.brand_name.cmp(&b.brand_name))
            .then_with(|| a.product.name().cmp(b.product.name()))
        });

        let total_matched = listings.len() as u64;
        let start = pagination.offset as usize;
        let items: Vec<ProductListing> = listings
            .into_iter()
            .skip(start)
            .take(pagination.limit as usize)
            .collect();
        let has_more = (start as u64).saturating_add(items.len() as u64) < total_matched;

        ProductPage {
            items,
            counts,
            total_matched,
            has_more,
        }
    }

    fn listing(&self, product: CosmeticProduct, today: NaiveDate) -> ProductListing {
        let report = assess(&product.expiration_input(), today);
        let brand_name = self
            .brand(product.brand_id())
            .map(|b| b.name().to_string())
            .unwrap_or_default();
        let category = product.category_id().and_then(|id| self.category(id));
        ProductListing::new(product, brand_name, category.as_ref(), report)
    }

    fn check_refs(&self, spec: &ProductSpec) -> DomainResult<()> {
        if self.brand(spec.brand_id).is_none() {
            return Err(DomainError::NotFound);
        }
        if let Some(category_id) = spec.category_id {
            if self.category(category_id).is_none() {
                return Err(DomainError::NotFound);
            }
        }
        Ok(())
    }
}

fn cmp_dates_none_last(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
