//! Whole-inventory snapshot and the views derived from it.
//!
//! A snapshot is replaced wholesale on every reload or push delivery; nothing
//! here mutates one in place. Every derived view is a pure function of the
//! snapshot (plus filter input), recomputed on demand.

use std::collections::HashSet;

use rust_decimal::Decimal;

use stockroom_core::ItemId;

use crate::item::InventoryItem;

/// The complete inventory item set as of the last successful load or push.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    items: Vec<InventoryItem>,
}

/// Aggregate counters computed over a full snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub total_quantity: u64,
    pub total_value: Decimal,
    pub distinct_category_count: usize,
    pub low_stock_count: usize,
}

impl InventorySnapshot {
    /// The empty snapshot the dashboard starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from a delivered item list.
    ///
    /// Item ids are unique per the backend contract; if a delivery violates
    /// that, the first occurrence wins and the duplicate is dropped with a
    /// warning rather than failing the whole reload.
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        let mut deduped = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id.clone()) {
                deduped.push(item);
            } else {
                tracing::warn!(id = %item.id, "duplicate item id in snapshot, keeping first");
            }
        }
        Self { items: deduped }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items matching the search term and category filter, in snapshot order.
    ///
    /// The search term matches case-insensitively against name, category and
    /// color (any of the three). A non-empty `category_filter` additionally
    /// restricts to items of exactly that category. An empty term matches
    /// everything.
    pub fn filtered_view(&self, search_term: &str, category_filter: &str) -> Vec<&InventoryItem> {
        let term = search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                let matches_term = term.is_empty()
                    || item.name.to_lowercase().contains(&term)
                    || item.category.to_lowercase().contains(&term)
                    || item.color.to_lowercase().contains(&term);
                let matches_category =
                    category_filter.is_empty() || item.category == category_filter;
                matches_term && matches_category
            })
            .collect()
    }

    /// Aggregate counters over the full snapshot (never the filtered view).
    pub fn aggregates(&self) -> Aggregates {
        let mut total_quantity: u64 = 0;
        let mut total_value = Decimal::ZERO;
        let mut categories: HashSet<&str> = HashSet::new();
        let mut low_stock_count = 0;

        for item in &self.items {
            total_quantity += u64::from(item.quantity);
            total_value += item.line_value();
            categories.insert(item.category.as_str());
            if item.is_low_stock() {
                low_stock_count += 1;
            }
        }

        Aggregates {
            total_quantity,
            total_value,
            distinct_category_count: categories.len(),
            low_stock_count,
        }
    }

    /// Distinct categories in first-appearance order (the filter vocabulary).
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.category.as_str()))
            .map(|item| item.category.clone())
            .collect()
    }

    /// Summed quantity per category, categories in first-appearance order.
    pub fn category_distribution(&self) -> Vec<(String, u64)> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: Vec<u64> = Vec::new();
        for item in &self.items {
            match order.iter().position(|c| c == &item.category) {
                Some(idx) => totals[idx] += u64::from(item.quantity),
                None => {
                    order.push(item.category.clone());
                    totals.push(u64::from(item.quantity));
                }
            }
        }
        order.into_iter().zip(totals).collect()
    }

    /// The `limit` best-stocked items as (name, quantity), descending.
    ///
    /// Ties keep snapshot order (stable sort).
    pub fn top_stock(&self, limit: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<&InventoryItem> = self.items.iter().collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked
            .into_iter()
            .take(limit)
            .map(|item| (item.name.clone(), item.quantity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, name: &str, category: &str, color: &str, price: Decimal, quantity: u32) -> InventoryItem {
        InventoryItem {
            id: ItemId::new(id).unwrap(),
            name: name.to_string(),
            category: category.to_string(),
            size: "M".to_string(),
            color: color.to_string(),
            price,
            quantity,
            created_at: None,
            created_by: None,
            last_updated: None,
            updated_by: None,
        }
    }

    /// The two-item snapshot from the dashboard's reference walkthrough.
    fn tee_and_jeans() -> InventorySnapshot {
        InventorySnapshot::from_items(vec![
            item("1", "Tee", "Tops", "Red", dec!(10), 5),
            item("2", "Jeans", "Bottoms", "Blue", dec!(40), 20),
        ])
    }

    #[test]
    fn aggregates_match_reference_snapshot() {
        let agg = tee_and_jeans().aggregates();
        assert_eq!(agg.total_quantity, 25);
        assert_eq!(agg.total_value, dec!(850));
        assert_eq!(agg.distinct_category_count, 2);
        assert_eq!(agg.low_stock_count, 1);
    }

    #[test]
    fn empty_snapshot_has_zero_aggregates() {
        let agg = InventorySnapshot::empty().aggregates();
        assert_eq!(agg.total_quantity, 0);
        assert_eq!(agg.total_value, Decimal::ZERO);
        assert_eq!(agg.distinct_category_count, 0);
        assert_eq!(agg.low_stock_count, 0);
    }

    #[test]
    fn search_matches_color_not_just_name() {
        // "re" is not in "Tee" or "Tops" but is in "Red".
        let snapshot = tee_and_jeans();
        let view = snapshot.filtered_view("re", "");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Tee");
    }

    #[test]
    fn search_is_case_insensitive() {
        let snapshot = tee_and_jeans();
        assert_eq!(snapshot.filtered_view("JEANS", "").len(), 1);
        assert_eq!(snapshot.filtered_view("blue", "").len(), 1);
    }

    #[test]
    fn category_filter_restricts_matches() {
        let snapshot = tee_and_jeans();
        assert_eq!(snapshot.filtered_view("", "Tops").len(), 1);
        assert_eq!(snapshot.filtered_view("blue", "Tops").len(), 0);
        assert_eq!(snapshot.filtered_view("", "").len(), 2);
    }

    #[test]
    fn filtered_view_preserves_snapshot_order() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "Red Hat", "Hats", "Red", dec!(5), 1),
            item("2", "Blue Hat", "Hats", "Blue", dec!(5), 2),
            item("3", "Red Scarf", "Scarves", "Red", dec!(7), 3),
        ]);
        let names: Vec<&str> = snapshot
            .filtered_view("red", "")
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Red Hat", "Red Scarf"]);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "First", "Tops", "Red", dec!(10), 5),
            item("1", "Second", "Tops", "Red", dec!(10), 50),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.items()[0].name, "First");
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "a", "Shirts", "Red", dec!(1), 1),
            item("2", "b", "Pants", "Red", dec!(1), 1),
            item("3", "c", "Shirts", "Red", dec!(1), 1),
        ]);
        assert_eq!(snapshot.categories(), vec!["Shirts", "Pants"]);
    }

    #[test]
    fn category_distribution_sums_quantities() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "a", "Shirts", "Red", dec!(1), 10),
            item("2", "b", "Pants", "Red", dec!(1), 4),
            item("3", "c", "Shirts", "Red", dec!(1), 6),
        ]);
        assert_eq!(
            snapshot.category_distribution(),
            vec![("Shirts".to_string(), 16), ("Pants".to_string(), 4)]
        );
    }

    #[test]
    fn top_stock_sorts_descending_and_truncates() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "a", "X", "Red", dec!(1), 3),
            item("2", "b", "X", "Red", dec!(1), 9),
            item("3", "c", "X", "Red", dec!(1), 7),
        ]);
        assert_eq!(
            snapshot.top_stock(2),
            vec![("b".to_string(), 9), ("c".to_string(), 7)]
        );
    }

    #[test]
    fn top_stock_ties_keep_snapshot_order() {
        let snapshot = InventorySnapshot::from_items(vec![
            item("1", "first", "X", "Red", dec!(1), 5),
            item("2", "second", "X", "Red", dec!(1), 5),
            item("3", "third", "X", "Red", dec!(1), 5),
        ]);
        assert_eq!(
            snapshot.top_stock(10),
            vec![
                ("first".to_string(), 5),
                ("second".to_string(), 5),
                ("third".to_string(), 5)
            ]
        );
    }

    #[test]
    fn get_finds_items_by_id() {
        let snapshot = tee_and_jeans();
        let id = ItemId::new("2").unwrap();
        assert_eq!(snapshot.get(&id).unwrap().name, "Jeans");
        assert!(snapshot.get(&ItemId::new("missing").unwrap()).is_none());
    }

    mod proptest_suite {
        use super::*;
        use proptest::prelude::*;

        fn arb_item(tag: usize) -> impl Strategy<Value = InventoryItem> {
            (
                "[a-z]{1,8}",
                prop::sample::select(vec!["Shirts", "Pants", "Hats", "Scarves"]),
                prop::sample::select(vec!["Red", "Blue", "Green", "Magenta"]),
                0u32..1_000,
                0u32..100,
            )
                .prop_map(move |(name, category, color, price, quantity)| InventoryItem {
                    id: ItemId::new(format!("item_{tag}")).unwrap(),
                    // Tag keeps names unique so order assertions can find items.
                    name: format!("{name}{tag}"),
                    category: category.to_string(),
                    size: "M".to_string(),
                    color: color.to_string(),
                    price: Decimal::from(price),
                    quantity,
                    created_at: None,
                    created_by: None,
                    last_updated: None,
                    updated_by: None,
                })
        }

        fn arb_snapshot() -> impl Strategy<Value = InventorySnapshot> {
            prop::collection::vec(any::<u8>(), 0..40)
                .prop_flat_map(|tags| {
                    tags.into_iter()
                        .enumerate()
                        .map(|(i, _)| arb_item(i))
                        .collect::<Vec<_>>()
                })
                .prop_map(InventorySnapshot::from_items)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the filtered view is exactly the naive per-item filter,
            /// in snapshot order.
            #[test]
            fn filtered_view_matches_naive_filter(
                snapshot in arb_snapshot(),
                term in "[a-zA-Z]{0,3}",
                category in prop::sample::select(vec!["", "Shirts", "Pants"]),
            ) {
                let expected: Vec<&InventoryItem> = snapshot
                    .items()
                    .iter()
                    .filter(|item| {
                        let t = term.to_lowercase();
                        (item.name.to_lowercase().contains(&t)
                            || item.category.to_lowercase().contains(&t)
                            || item.color.to_lowercase().contains(&t))
                            && (category.is_empty() || item.category == category)
                    })
                    .collect();
                prop_assert_eq!(snapshot.filtered_view(&term, category), expected);
            }

            /// Property: aggregate totals equal the per-item sums.
            #[test]
            fn aggregates_match_item_sums(snapshot in arb_snapshot()) {
                let agg = snapshot.aggregates();
                let quantity: u64 = snapshot.items().iter().map(|i| u64::from(i.quantity)).sum();
                let value: Decimal = snapshot.items().iter().map(|i| i.line_value()).sum();
                let low = snapshot.items().iter().filter(|i| i.quantity < 10).count();
                prop_assert_eq!(agg.total_quantity, quantity);
                prop_assert_eq!(agg.total_value, value);
                prop_assert_eq!(agg.low_stock_count, low);
            }

            /// Property: top_stock respects the limit, sorts descending, and is
            /// stable with respect to snapshot order on ties.
            #[test]
            fn top_stock_is_bounded_sorted_and_stable(
                snapshot in arb_snapshot(),
                limit in 0usize..20,
            ) {
                let top = snapshot.top_stock(limit);
                prop_assert!(top.len() <= limit);
                for pair in top.windows(2) {
                    prop_assert!(pair[0].1 >= pair[1].1);
                }
                // Stability: equal-quantity neighbors appear in snapshot order.
                let position = |name: &str| {
                    snapshot.items().iter().position(|i| i.name == name)
                };
                for pair in top.windows(2) {
                    if pair[0].1 == pair[1].1 {
                        prop_assert!(position(&pair[0].0) < position(&pair[1].0));
                    }
                }
            }

            /// Property: category distribution totals equal the overall quantity.
            #[test]
            fn distribution_totals_match_aggregate(snapshot in arb_snapshot()) {
                let by_category: u64 = snapshot.category_distribution().iter().map(|(_, q)| q).sum();
                prop_assert_eq!(by_category, snapshot.aggregates().total_quantity);
            }
        }
    }
}
