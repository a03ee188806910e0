//! Integration tests for loading fixture sets from disk.

use std::{fs, path::PathBuf};

use rusty_money::{Money, iso::KRW};
use testresult::TestResult;

use trolley::{
    cart::Cart,
    fixtures::{Fixture, FixtureError},
    search::search_products,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

#[test]
fn demo_set_loads_all_three_files() -> TestResult {
    let mut fixture = Fixture::with_base_path(fixtures_dir());

    fixture
        .load_products("demo")?
        .load_memberships("demo")?
        .load_coupons("demo")?;

    let catalog = fixture.catalog()?;

    assert_eq!(catalog.currency(), KRW);
    assert!(catalog.key_for("p1").is_some());
    assert!(!fixture.memberships().is_empty());
    assert!(!fixture.coupons().is_empty());

    Ok(())
}

#[test]
fn demo_set_supports_search_and_totals() -> TestResult {
    let mut fixture = Fixture::with_base_path(fixtures_dir());
    fixture.load_products("demo")?;

    let catalog = fixture.catalog()?;
    let matches = search_products(catalog, "juice");

    assert_eq!(matches.len(), 1);

    let key = catalog.key_for("p1").ok_or("missing p1")?;
    let mut cart = Cart::new();

    cart.add_to_cart(catalog, key)?;
    cart.update_quantity(catalog, key, 10)?;

    assert_eq!(
        cart.calculate_total(catalog)?.total_after_discount,
        Money::from_minor(90_000, KRW)
    );

    Ok(())
}

#[test]
fn custom_base_path_is_respected() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::create_dir_all(dir.path().join("products"))?;
    fs::write(
        dir.path().join("products").join("tiny.yml"),
        "products:\n  - id: only\n    name: \"Only\"\n    price: \"500 KRW\"\n    stock: 1\n",
    )?;

    let mut fixture = Fixture::with_base_path(dir.path());
    fixture.load_products("tiny")?;

    assert_eq!(fixture.catalog()?.len(), 1);

    Ok(())
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let mut fixture = Fixture::with_base_path(fixtures_dir());

    let result = fixture.load_products("does-not-exist");

    assert!(matches!(result, Err(FixtureError::Io(_))));
}
