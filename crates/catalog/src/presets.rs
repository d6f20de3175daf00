//! Preset category names for bootstrapping an empty catalog.

use crate::category::CategoryType;

/// Preset skincare category names.
pub const SKINCARE: &[&str] = &["Cleanser", "Moisturizer", "Serum", "Sunscreen", "Toner"];

/// Preset makeup category names.
pub const MAKEUP: &[&str] = &["Foundation", "Lipstick", "Mascara", "Eyeshadow", "Blush"];

/// Preset fragrance category names.
pub const FRAGRANCE: &[&str] = &["Perfume", "Cologne", "Body Spray"];

/// Preset hair-care category names.
pub const HAIR: &[&str] = &["Shampoo", "Conditioner", "Hair Mask", "Hair Oil"];

/// Preset body-care category names.
pub const BODY: &[&str] = &["Body Lotion", "Body Wash", "Hand Cream"];

/// Preset names for a category family. `Other` has no presets.
pub fn names_for(category_type: CategoryType) -> &'static [&'static str] {
    match category_type {
        CategoryType::Skincare => SKINCARE,
        CategoryType::Makeup => MAKEUP,
        CategoryType::Fragrance => FRAGRANCE,
        CategoryType::Hair => HAIR,
        CategoryType::Body => BODY,
        CategoryType::Other => &[],
    }
}

/// The full preset catalog as `(family, name)` pairs, in display order.
pub fn preset_catalog() -> impl Iterator<Item = (CategoryType, &'static str)> {
    CategoryType::ALL
        .into_iter()
        .flat_map(|ty| names_for(ty).iter().map(move |name| (ty, *name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_catalog_covers_every_family_with_presets() {
        let pairs: Vec<_> = preset_catalog().collect();
        assert_eq!(pairs.len(), 5 + 5 + 3 + 4 + 3);
        assert!(pairs.contains(&(CategoryType::Skincare, "Cleanser")));
        assert!(pairs.contains(&(CategoryType::Body, "Hand Cream")));
        assert!(!pairs.iter().any(|(ty, _)| *ty == CategoryType::Other));
    }
}
