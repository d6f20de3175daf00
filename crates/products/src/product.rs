use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vanityshelf_core::{BrandId, CategoryId, DomainError, Entity, ProductId, UserId};

use crate::expiration::ExpirationInput;

/// Open-status lifecycle of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Unopened,
    Opened,
    Finished,
    Discarded,
}

impl OpenStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OpenStatus::Unopened => "unopened",
            OpenStatus::Opened => "opened",
            OpenStatus::Finished => "finished",
            OpenStatus::Discarded => "discarded",
        }
    }

    /// Only opened products are subject to the PAO shelf-life bound.
    pub fn is_opened(self) -> bool {
        self == OpenStatus::Opened
    }
}

impl core::fmt::Display for OpenStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period-after-opening, in months.
///
/// PAO is approximated as 30 days per month. This matches how the printed
/// "12M" jar symbol is commonly interpreted and is intentional; do not switch
/// to calendar-month arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaoMonths(u32);

impl PaoMonths {
    /// The conventional default printed on most products: 12 months.
    pub const DEFAULT: PaoMonths = PaoMonths(12);

    /// Upper bound on accepted PAO values (50 years, well past any real label).
    pub const MAX_MONTHS: u32 = 600;

    pub fn new(months: u32) -> Result<Self, DomainError> {
        if months == 0 {
            return Err(DomainError::validation("PAO must be at least one month"));
        }
        if months > Self::MAX_MONTHS {
            return Err(DomainError::validation(format!(
                "PAO of {months} months exceeds the {} month limit",
                Self::MAX_MONTHS
            )));
        }
        Ok(Self(months))
    }

    pub fn months(self) -> u32 {
        self.0
    }

    /// Shelf life in days under the 30-days-per-month approximation.
    pub fn shelf_days(self) -> i64 {
        i64::from(self.0) * 30
    }
}

/// User rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between 1 and 5, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Form payload for creating or revising a product.
///
/// The owning user and the record id are supplied separately; everything the
/// edit form carries lives here. Defaults mirror the entry form: unopened,
/// 12-month PAO, everything else empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub brand_id: BrandId,
    pub category_id: Option<CategoryId>,
    pub shade: String,
    pub capacity: String,
    pub purchase_date: NaiveDate,
    pub price: Option<Decimal>,
    pub purchase_location: String,
    pub production_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub status: OpenStatus,
    pub opened_date: Option<NaiveDate>,
    pub pao_after_opening: Option<PaoMonths>,
    pub rating: Option<Rating>,
    pub description: String,
    pub ingredients: String,
    pub notes: String,
    /// Opaque reference to an externally stored image. Pass-through only.
    pub image: Option<String>,
}

impl ProductSpec {
    pub fn new(name: impl Into<String>, brand_id: BrandId, purchase_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            brand_id,
            category_id: None,
            shade: String::new(),
            capacity: String::new(),
            purchase_date,
            price: None,
            purchase_location: String::new(),
            production_date: None,
            expiration_date: None,
            status: OpenStatus::Unopened,
            opened_date: None,
            pao_after_opening: Some(PaoMonths::DEFAULT),
            rating: None,
            description: String::new(),
            ingredients: String::new(),
            notes: String::new(),
            image: None,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_shade(mut self, shade: impl Into<String>) -> Self {
        self.shade = shade.into();
        self
    }

    pub fn with_expiration(mut self, expiration_date: NaiveDate) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    pub fn opened_on(mut self, opened_date: NaiveDate) -> Self {
        self.status = OpenStatus::Opened;
        self.opened_date = Some(opened_date);
        self
    }

    pub fn with_pao(mut self, pao: Option<PaoMonths>) -> Self {
        self.pao_after_opening = pao;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        // Opened-date is only meaningful on an opened product; anything else
        // is a form mistake we refuse to persist.
        if self.opened_date.is_some() && !self.status.is_opened() {
            return Err(DomainError::validation(format!(
                "opened_date is only valid when status is opened, got {}",
                self.status
            )));
        }
        Ok(())
    }
}

/// An owned cosmetic product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticProduct {
    id: ProductId,
    user_id: UserId,
    name: String,
    brand_id: BrandId,
    category_id: Option<CategoryId>,
    shade: String,
    capacity: String,
    purchase_date: NaiveDate,
    price: Option<Decimal>,
    purchase_location: String,
    production_date: Option<NaiveDate>,
    expiration_date: Option<NaiveDate>,
    status: OpenStatus,
    opened_date: Option<NaiveDate>,
    pao_after_opening: Option<PaoMonths>,
    rating: Option<Rating>,
    description: String,
    ingredients: String,
    notes: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CosmeticProduct {
    /// Create a product record from a validated spec.
    ///
    /// Rejects malformed specs up front; the expiration calculator never has
    /// to cope with impossible inputs mid-computation.
    pub fn new(
        id: ProductId,
        user_id: UserId,
        spec: ProductSpec,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        spec.validate()?;
        Ok(Self {
            id,
            user_id,
            name: spec.name,
            brand_id: spec.brand_id,
            category_id: spec.category_id,
            shade: spec.shade,
            capacity: spec.capacity,
            purchase_date: spec.purchase_date,
            price: spec.price,
            purchase_location: spec.purchase_location,
            production_date: spec.production_date,
            expiration_date: spec.expiration_date,
            status: spec.status,
            opened_date: spec.opened_date,
            pao_after_opening: spec.pao_after_opening,
            rating: spec.rating,
            description: spec.description,
            ingredients: spec.ingredients,
            notes: spec.notes,
            image: spec.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the form-editable fields, keeping identity and `created_at`.
    pub fn revise(&mut self, spec: ProductSpec, now: DateTime<Utc>) -> Result<(), DomainError> {
        spec.validate()?;
        self.name = spec.name;
        self.brand_id = spec.brand_id;
        self.category_id = spec.category_id;
        self.shade = spec.shade;
        self.capacity = spec.capacity;
        self.purchase_date = spec.purchase_date;
        self.price = spec.price;
        self.purchase_location = spec.purchase_location;
        self.production_date = spec.production_date;
        self.expiration_date = spec.expiration_date;
        self.status = spec.status;
        self.opened_date = spec.opened_date;
        self.pao_after_opening = spec.pao_after_opening;
        self.rating = spec.rating;
        self.description = spec.description;
        self.ingredients = spec.ingredients;
        self.notes = spec.notes;
        self.image = spec.image;
        self.updated_at = now;
        Ok(())
    }

    /// Detach from a deleted category (referential maintenance).
    pub fn clear_category(&mut self) {
        self.category_id = None;
    }

    /// The fields the expiration calculator works from.
    pub fn expiration_input(&self) -> ExpirationInput {
        ExpirationInput {
            expiration_date: self.expiration_date,
            status: self.status,
            opened_date: self.opened_date,
            pao_after_opening: self.pao_after_opening,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn shade(&self) -> &str {
        &self.shade
    }

    pub fn capacity(&self) -> &str {
        &self.capacity
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn purchase_location(&self) -> &str {
        &self.purchase_location
    }

    pub fn production_date(&self) -> Option<NaiveDate> {
        self.production_date
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }

    pub fn status(&self) -> OpenStatus {
        self.status
    }

    pub fn opened_date(&self) -> Option<NaiveDate> {
        self.opened_date
    }

    pub fn pao_after_opening(&self) -> Option<PaoMonths> {
        self.pao_after_opening
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for CosmeticProduct {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn spec() -> ProductSpec {
        ProductSpec::new("Matte Lipstick", BrandId::new(), d(2026, 1, 15))
    }

    #[test]
    fn new_product_applies_form_defaults() {
        let product =
            CosmeticProduct::new(ProductId::new(), UserId::new(), spec(), Utc::now()).unwrap();
        assert_eq!(product.status(), OpenStatus::Unopened);
        assert_eq!(product.pao_after_opening(), Some(PaoMonths::DEFAULT));
        assert_eq!(product.rating(), None);
        assert_eq!(product.created_at(), product.updated_at());
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let mut s = spec();
        s.name = "  ".to_string();
        let err = CosmeticProduct::new(ProductId::new(), UserId::new(), s, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_product_rejects_opened_date_on_unopened_product() {
        let mut s = spec();
        s.opened_date = Some(d(2026, 2, 1));
        let err = CosmeticProduct::new(ProductId::new(), UserId::new(), s, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn opened_date_is_accepted_when_status_is_opened() {
        let s = spec().opened_on(d(2026, 2, 1));
        let product = CosmeticProduct::new(ProductId::new(), UserId::new(), s, Utc::now()).unwrap();
        assert_eq!(product.status(), OpenStatus::Opened);
        assert_eq!(product.opened_date(), Some(d(2026, 2, 1)));
    }

    #[test]
    fn revise_keeps_identity_and_refreshes_updated_at() {
        let id = ProductId::new();
        let user = UserId::new();
        let created = Utc::now();
        let mut product = CosmeticProduct::new(id, user, spec(), created).unwrap();

        let later = created + chrono::Duration::hours(1);
        let mut revised = spec();
        revised.name = "Velvet Lipstick".to_string();
        product.revise(revised, later).unwrap();

        assert_eq!(product.product_id(), id);
        assert_eq!(product.user_id(), user);
        assert_eq!(product.name(), "Velvet Lipstick");
        assert_eq!(product.created_at(), created);
        assert_eq!(product.updated_at(), later);
    }

    #[test]
    fn revise_rejects_invalid_spec_without_mutating() {
        let mut product =
            CosmeticProduct::new(ProductId::new(), UserId::new(), spec(), Utc::now()).unwrap();
        let before = product.clone();

        let mut bad = spec();
        bad.name = String::new();
        assert!(product.revise(bad, Utc::now()).is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn pao_months_bounds() {
        assert!(PaoMonths::new(0).is_err());
        assert!(PaoMonths::new(601).is_err());
        assert_eq!(PaoMonths::new(12).unwrap(), PaoMonths::DEFAULT);
        assert_eq!(PaoMonths::new(3).unwrap().shelf_days(), 90);
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }
}
