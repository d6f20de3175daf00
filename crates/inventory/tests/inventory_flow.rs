//! Black-box test of the inventory core through its public API only:
//! bootstrap the preset catalog, record products for two users, and drive the
//! listing, counts, usage history, and cascade behavior end to end.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use vanityshelf_catalog::{CategoryType, presets};
use vanityshelf_core::{DomainError, UserId};
use vanityshelf_inventory::{Pagination, ProductDirectory, ProductFilter};
use vanityshelf_products::{ExpirationTier, OpenStatus, PaoMonths, ProductSpec, Rating};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

#[test]
fn full_shelf_lifecycle() {
    let dir = ProductDirectory::in_memory();

    // Bootstrap the preset catalog.
    for (family, name) in presets::preset_catalog() {
        dir.add_category(name, family).unwrap();
    }
    let categories = dir.categories();
    assert_eq!(categories.len(), 20);
    let lipstick = categories
        .iter()
        .find(|c| c.name() == "Lipstick" && c.category_type() == CategoryType::Makeup)
        .unwrap()
        .category_id();
    let serum = categories
        .iter()
        .find(|c| c.name() == "Serum")
        .unwrap()
        .category_id();

    let mac = dir.add_brand("MAC", "Makeup Art Cosmetics", now()).unwrap();
    let ordinary = dir.add_brand("The Ordinary", "", now()).unwrap();

    let alice = UserId::new();
    let bob = UserId::new();

    // Alice: an opened serum whose PAO window has already closed, a lipstick
    // expiring this week, and an unopened product with no date on record.
    let old_serum = dir
        .add_product(
            alice,
            ProductSpec::new("Niacinamide 10%", ordinary.brand_id(), today() - Duration::days(200))
                .with_category(serum)
                .with_expiration(today() + Duration::days(365))
                .opened_on(today() - Duration::days(100))
                .with_pao(Some(PaoMonths::new(3).unwrap()))
                .with_price(Decimal::new(1250, 2)),
            now(),
        )
        .unwrap();
    let ruby_woo = dir
        .add_product(
            alice,
            ProductSpec::new("Retro Matte", mac.brand_id(), today() - Duration::days(30))
                .with_category(lipstick)
                .with_shade("Ruby Woo")
                .with_expiration(today() + Duration::days(6))
                .with_rating(Rating::new(5).unwrap()),
            now(),
        )
        .unwrap();
    dir.add_product(
        alice,
        ProductSpec::new("Mystery Sample", mac.brand_id(), today()),
        now(),
    )
    .unwrap();

    // Bob's shelf must never surface in Alice's queries.
    dir.add_product(
        bob,
        ProductSpec::new("Lip Glass", mac.brand_id(), today())
            .with_expiration(today() + Duration::days(2)),
        now(),
    )
    .unwrap();

    // Dashboard counts for Alice's full collection.
    let page = dir.query_products(alice, &ProductFilter::default(), Pagination::all(), today());
    assert_eq!(page.counts.total, 3);
    assert_eq!(page.counts.expired, 1); // PAO window closed
    assert_eq!(page.counts.urgent, 1);
    assert_eq!(page.counts.unknown, 1);
    assert_eq!(page.counts.good, 0);

    // Ordering: effectively-expired serum first, dateless record last.
    let names: Vec<&str> = page.items.iter().map(|l| l.product.name()).collect();
    assert_eq!(names, vec!["Niacinamide 10%", "Retro Matte", "Mystery Sample"]);

    // Detail view: the badge reports the PAO-adjusted date.
    let detail = dir.get_product(alice, old_serum.product_id(), today()).unwrap();
    assert_eq!(detail.report.tier, ExpirationTier::Expired);
    assert_eq!(detail.report.days_until_expiration, Some(-10));
    assert_eq!(detail.brand_name, "The Ordinary");
    assert_eq!(detail.category_name.as_deref(), Some("Serum"));
    assert_eq!(detail.report.priority(), 1);

    // Free-text search hits shade and brand fields.
    let by_shade = dir.query_products(
        alice,
        &ProductFilter::matching("ruby"),
        Pagination::all(),
        today(),
    );
    assert_eq!(by_shade.total_matched, 1);
    let by_brand = dir.query_products(
        alice,
        &ProductFilter::matching("the ordinary"),
        Pagination::all(),
        today(),
    );
    assert_eq!(by_brand.total_matched, 1);

    // Usage history, newest first.
    let base = now();
    dir.log_usage(alice, ruby_woo.product_id(), "night out", base).unwrap();
    dir.log_usage(
        alice,
        ruby_woo.product_id(),
        "touch-up",
        base + Duration::minutes(30),
    )
    .unwrap();
    let history = dir.usage_history(alice, ruby_woo.product_id()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].notes(), "touch-up");

    // Bob cannot read or edit Alice's records.
    assert_eq!(
        dir.get_product(bob, ruby_woo.product_id(), today()).unwrap_err(),
        DomainError::NotFound
    );
    assert_eq!(
        dir.remove_product(bob, ruby_woo.product_id()).unwrap_err(),
        DomainError::NotFound
    );

    // Marking the serum discarded lifts the PAO bound; the printed date rules
    // again and the product reads as good.
    let mut revised = ProductSpec::new(
        "Niacinamide 10%",
        ordinary.brand_id(),
        today() - Duration::days(200),
    )
    .with_category(serum)
    .with_expiration(today() + Duration::days(365));
    revised.status = OpenStatus::Discarded;
    dir.update_product(alice, old_serum.product_id(), revised, now()).unwrap();
    let detail = dir.get_product(alice, old_serum.product_id(), today()).unwrap();
    assert_eq!(detail.report.tier, ExpirationTier::Good);

    // Removing the MAC brand takes Alice's two MAC products (and Bob's one)
    // with it, including the lipstick's usage history.
    dir.remove_brand(mac.brand_id()).unwrap();
    let page = dir.query_products(alice, &ProductFilter::default(), Pagination::all(), today());
    assert_eq!(page.counts.total, 1);
    let bob_page = dir.query_products(bob, &ProductFilter::default(), Pagination::all(), today());
    assert_eq!(bob_page.counts.total, 0);
}
