use proptest::prelude::*;
use shelf_catalog::Product;
use shelf_view::{FilterQuery, ProductList, SortKey};
use std::time::{Duration, Instant};

const FADE: Duration = Duration::from_millis(250);

fn product() -> impl Strategy<Value = Product> {
    ("[A-Za-z ]{0,12}", 0u32..1_000_000)
        .prop_map(|(name, price)| Product::new(name, f64::from(price)))
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::None),
        Just(SortKey::NameAsc),
        Just(SortKey::PriceAsc),
        Just(SortKey::PriceDesc),
    ]
}

fn settle(list: &mut ProductList, query: &FilterQuery) -> Vec<Product> {
    let t0 = Instant::now();
    list.apply(query, t0, FADE);
    list.advance(t0 + FADE);
    list.visible_products().cloned().collect()
}

#[test]
fn test_price_bounds_ignore_unparsable_text() {
    let controls = shelf_view::FilterControls {
        price_min: "cheap".to_string(),
        price_max: String::new(),
        ..Default::default()
    };
    let query = controls.query();
    assert_eq!(query.min, None);
    assert_eq!(query.max, None);
}

#[test]
fn test_filter_leaves_products_untouched() {
    let products = vec![Product::new("Mug", 40_000.0), Product::new("Cup", 20_000.0)];
    let mut list = ProductList::new();
    list.render_all(&products);

    settle(&mut list, &FilterQuery::all().with_keyword("zzz").with_sort(SortKey::PriceAsc));

    let mut seen: Vec<_> = list.items().iter().map(|i| i.product.clone()).collect();
    seen.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(seen, vec![products[1].clone(), products[0].clone()]);
}

proptest! {
    #[test]
    fn prop_keyword_selects_exact_subset(
        products in prop::collection::vec(product(), 0..20),
        keyword in "[A-Za-z]{0,3}",
    ) {
        let mut list = ProductList::new();
        list.render_all(&products);
        let visible = settle(&mut list, &FilterQuery::all().with_keyword(&keyword));

        let needle = keyword.to_lowercase();
        let expected: Vec<Product> = products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn prop_bounds_never_show_out_of_range(
        products in prop::collection::vec(product(), 0..20),
        min in prop::option::of(0u32..1_000_000),
        max in prop::option::of(0u32..1_000_000),
    ) {
        let min = min.map(f64::from);
        let max = max.map(f64::from);
        let mut list = ProductList::new();
        list.render_all(&products);
        let visible = settle(&mut list, &FilterQuery::all().with_bounds(min, max));

        for p in &visible {
            prop_assert!(min.map_or(true, |m| p.price >= m));
            prop_assert!(max.map_or(true, |m| p.price <= m));
        }
        let in_range = products
            .iter()
            .filter(|p| min.map_or(true, |m| p.price >= m) && max.map_or(true, |m| p.price <= m))
            .count();
        prop_assert_eq!(visible.len(), in_range);
    }

    #[test]
    fn prop_sorted_visible_items_are_ordered(
        products in prop::collection::vec(product(), 0..20),
        sort in sort_key(),
    ) {
        let mut list = ProductList::new();
        list.render_all(&products);
        let visible = settle(&mut list, &FilterQuery::all().with_sort(sort));

        for pair in visible.windows(2) {
            match sort {
                SortKey::None => {}
                SortKey::NameAsc => {
                    prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase())
                }
                SortKey::PriceAsc => prop_assert!(pair[0].price <= pair[1].price),
                SortKey::PriceDesc => prop_assert!(pair[0].price >= pair[1].price),
            }
        }
        if sort == SortKey::None {
            prop_assert_eq!(visible, products);
        }
    }

    #[test]
    fn prop_name_sort_is_stable(
        prices in prop::collection::vec(0u32..100, 1..12),
    ) {
        // Same name everywhere: a stable sort must keep render order.
        let products: Vec<Product> =
            prices.iter().map(|p| Product::new("Same", f64::from(*p))).collect();
        let mut list = ProductList::new();
        list.render_all(&products);
        let visible = settle(&mut list, &FilterQuery::all().with_sort(SortKey::NameAsc));
        prop_assert_eq!(visible, products);
    }
}
