//! Category weight normalization.
//!
//! Redistributes the 100% budget of a category across its criteria: locked
//! items keep their weight, unlocked items share the remainder evenly, and the
//! rounding residue lands on the last unlocked item so the category adds up to
//! exactly 100.00.

use rust_decimal::Decimal;

use crate::models::WeightedItem;

use super::formatting::round2;

/// The total every category must add up to.
pub const CATEGORY_TOTAL: Decimal = Decimal::ONE_HUNDRED;

/// Largest deviation from [`CATEGORY_TOTAL`] still accepted as balanced (0.01).
pub const WEIGHT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Normalizes one category in place, over the items at `indices`.
fn normalize_indices(items: &mut [WeightedItem], indices: &[usize]) {
    let unlocked: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&i| !items[i].locked)
        .collect();

    let Some(&last_unlocked) = unlocked.last() else {
        return;
    };

    let locked_sum: Decimal = indices
        .iter()
        .filter(|&&i| items[i].locked)
        .map(|&i| items[i].weight)
        .sum();

    // Nothing left to share; keep unlocked weights rather than go negative.
    if locked_sum >= CATEGORY_TOTAL {
        for &i in &unlocked {
            items[i].weight = round2(items[i].weight);
        }
        return;
    }

    let remaining = CATEGORY_TOTAL - locked_sum;
    let share = round2(remaining / Decimal::from(unlocked.len()));
    for &i in &unlocked {
        items[i].weight = share;
    }

    let actual: Decimal = indices.iter().map(|&i| items[i].weight).sum();
    let residue = CATEGORY_TOTAL - actual;
    if !residue.is_zero() {
        items[last_unlocked].weight += residue;
    }
}

/// Normalizes a sequence of items that all belong to one category.
///
/// The category key is not inspected; callers pass only the items of the
/// category being edited. An empty slice, or one where every item is locked,
/// comes back unchanged.
///
/// The residue is added to the last unlocked item even when it is negative.
/// With a small remainder spread over many items the even share rounds up, and
/// the last item can end below zero: a locked 99.95 with ten unlocked items
/// yields nine at 0.01 and the last at -0.04. The category still totals
/// exactly 100.00, but [`check_weighted_items`] rejects the negative weight.
///
/// [`check_weighted_items`]: crate::forms::check_weighted_items
///
/// # Example
///
/// ```
/// use evaluation_admin::calculation::normalize_category;
/// use evaluation_admin::models::WeightedItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     WeightedItem::new(1, Decimal::new(40, 0), "skills").locked(),
///     WeightedItem::new(2, Decimal::ZERO, "skills"),
///     WeightedItem::new(3, Decimal::ZERO, "skills"),
/// ];
///
/// let normalized = normalize_category(&items);
/// assert_eq!(normalized[0].weight, Decimal::new(40, 0));
/// assert_eq!(normalized[1].weight, Decimal::new(30, 0));
/// assert_eq!(normalized[2].weight, Decimal::new(30, 0));
/// ```
pub fn normalize_category(items: &[WeightedItem]) -> Vec<WeightedItem> {
    let mut normalized = items.to_vec();
    let indices: Vec<usize> = (0..normalized.len()).collect();
    normalize_indices(&mut normalized, &indices);
    normalized
}

/// Normalizes only the items of `category_key` inside a mixed list.
///
/// Items of other categories are returned untouched and order is preserved.
pub fn normalize_category_in(items: &[WeightedItem], category_key: &str) -> Vec<WeightedItem> {
    let mut normalized = items.to_vec();
    let indices: Vec<usize> = normalized
        .iter()
        .enumerate()
        .filter(|(_, item)| item.category_key == category_key)
        .map(|(i, _)| i)
        .collect();
    normalize_indices(&mut normalized, &indices);
    normalized
}

/// Runs the normalizer once per category key over a mixed list.
///
/// # Example
///
/// ```
/// use evaluation_admin::calculation::{category_totals, normalize_all};
/// use evaluation_admin::models::WeightedItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     WeightedItem::new(1, Decimal::ZERO, "conduct"),
///     WeightedItem::new(2, Decimal::ZERO, "skills"),
///     WeightedItem::new(3, Decimal::ZERO, "conduct"),
/// ];
///
/// let normalized = normalize_all(&items);
/// for (_, total) in category_totals(&normalized) {
///     assert_eq!(total, Decimal::ONE_HUNDRED);
/// }
/// ```
pub fn normalize_all(items: &[WeightedItem]) -> Vec<WeightedItem> {
    let mut normalized = items.to_vec();
    for key in category_keys(items) {
        let indices: Vec<usize> = normalized
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category_key == key)
            .map(|(i, _)| i)
            .collect();
        normalize_indices(&mut normalized, &indices);
    }
    normalized
}

/// Category keys in order of first appearance.
fn category_keys(items: &[WeightedItem]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for item in items {
        if !keys.contains(&item.category_key) {
            keys.push(item.category_key.clone());
        }
    }
    keys
}

/// Sum of weights per category, in order of first appearance.
pub fn category_totals(items: &[WeightedItem]) -> Vec<(String, Decimal)> {
    category_keys(items)
        .into_iter()
        .map(|key| {
            let total = items
                .iter()
                .filter(|item| item.category_key == key)
                .map(|item| item.weight)
                .sum();
            (key, total)
        })
        .collect()
}

/// Categories whose total is off 100 by more than [`WEIGHT_TOLERANCE`].
pub fn unbalanced_categories(items: &[WeightedItem]) -> Vec<(String, Decimal)> {
    category_totals(items)
        .into_iter()
        .filter(|(_, total)| (CATEGORY_TOTAL - *total).abs() > WEIGHT_TOLERANCE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(id: i64, weight: &str) -> WeightedItem {
        WeightedItem::new(id, dec(weight), "productivity")
    }

    fn total(items: &[WeightedItem]) -> Decimal {
        items.iter().map(|i| i.weight).sum()
    }

    #[test]
    fn test_three_unlocked_items_absorb_residue_on_last() {
        let items = vec![item(1, "0"), item(2, "0"), item(3, "0")];
        let normalized = normalize_category(&items);

        assert_eq!(normalized[0].weight, dec("33.33"));
        assert_eq!(normalized[1].weight, dec("33.33"));
        assert_eq!(normalized[2].weight, dec("33.34"));
        assert_eq!(total(&normalized), dec("100"));
    }

    #[test]
    fn test_single_unlocked_item_gets_remainder_exactly() {
        let items = vec![
            item(1, "12.5").locked(),
            item(2, "30").locked(),
            item(3, "99"),
        ];
        let normalized = normalize_category(&items);
        assert_eq!(normalized[2].weight, dec("57.5"));
        assert_eq!(total(&normalized), dec("100"));
    }

    #[test]
    fn test_locked_items_are_untouched() {
        let items = vec![item(1, "33.333").locked(), item(2, "5"), item(3, "5")];
        let normalized = normalize_category(&items);

        assert_eq!(normalized[0].weight, dec("33.333"));
        assert_eq!(total(&normalized), dec("100"));
    }

    #[test]
    fn test_all_locked_is_noop() {
        let items = vec![item(1, "20").locked(), item(2, "30").locked()];
        assert_eq!(normalize_category(&items), items);
    }

    #[test]
    fn test_empty_category_is_noop() {
        assert!(normalize_category(&[]).is_empty());
    }

    #[test]
    fn test_locked_sum_at_or_above_total_only_rounds_unlocked() {
        let items = vec![item(1, "70").locked(), item(2, "40").locked(), item(3, "12.345")];
        let normalized = normalize_category(&items);

        assert_eq!(normalized[0].weight, dec("70"));
        assert_eq!(normalized[1].weight, dec("40"));
        assert_eq!(normalized[2].weight, dec("12.35"));
    }

    #[test]
    fn test_residue_can_push_last_item_below_zero() {
        let mut items = vec![item(0, "99.95").locked()];
        items.extend((1..=10).map(|id| item(id, "0")));
        let normalized = normalize_category(&items);

        assert_eq!(normalized[0].weight, dec("99.95"));
        for unlocked in &normalized[1..10] {
            assert_eq!(unlocked.weight, dec("0.01"));
        }
        assert_eq!(normalized[10].weight, dec("-0.04"));
        assert_eq!(total(&normalized), dec("100"));
    }

    #[test]
    fn test_even_split_already_at_total_is_unchanged() {
        let items = vec![item(1, "25"), item(2, "25"), item(3, "25"), item(4, "25")];
        assert_eq!(normalize_category(&items), items);
    }

    #[test]
    fn test_renormalizing_is_stable() {
        let items = vec![item(1, "10").locked(), item(2, "0"), item(3, "0"), item(4, "0")];
        let once = normalize_category(&items);
        let twice = normalize_category(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_category_in_leaves_other_categories() {
        let items = vec![
            WeightedItem::new(1, dec("10"), "skills"),
            WeightedItem::new(2, dec("10"), "conduct"),
            WeightedItem::new(3, dec("10"), "skills"),
        ];
        let normalized = normalize_category_in(&items, "skills");

        assert_eq!(normalized[0].weight, dec("50"));
        assert_eq!(normalized[1].weight, dec("10"));
        assert_eq!(normalized[2].weight, dec("50"));
    }

    #[test]
    fn test_normalize_all_balances_each_category() {
        let items = vec![
            WeightedItem::new(1, dec("1"), "skills"),
            WeightedItem::new(2, dec("1"), "conduct"),
            WeightedItem::new(3, dec("1"), "skills"),
            WeightedItem::new(4, dec("60"), "conduct").locked(),
            WeightedItem::new(5, dec("1"), "productivity"),
        ];
        let normalized = normalize_all(&items);

        let ids: Vec<i64> = normalized.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(normalized[1].weight, dec("40"));
        assert_eq!(normalized[3].weight, dec("60"));
        assert!(unbalanced_categories(&normalized).is_empty());
    }

    #[test]
    fn test_category_totals_in_first_appearance_order() {
        let items = vec![
            WeightedItem::new(1, dec("30"), "skills"),
            WeightedItem::new(2, dec("100"), "conduct"),
            WeightedItem::new(3, dec("60"), "skills"),
        ];
        assert_eq!(
            category_totals(&items),
            vec![
                ("skills".to_string(), dec("90")),
                ("conduct".to_string(), dec("100"))
            ]
        );
    }

    #[test]
    fn test_unbalanced_categories_respects_tolerance() {
        let items = vec![
            WeightedItem::new(1, dec("99.99"), "skills"),
            WeightedItem::new(2, dec("99.98"), "conduct"),
        ];
        assert_eq!(
            unbalanced_categories(&items),
            vec![("conduct".to_string(), dec("99.98"))]
        );
    }
}
