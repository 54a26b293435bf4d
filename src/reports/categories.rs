use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::ReportError;
use crate::models::product::ProductStockRecord;

/// Per-category stock aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub product_count: i64,
    pub total_quantity: i64,
    pub total_value: Decimal,
}

/// Accumulates per-category counts, quantities, and stock value in a single
/// pass. Category labels are matched case-sensitively with no normalization;
/// duplicate labels accumulate into the same bucket.
pub fn aggregate(products: &[ProductStockRecord]) -> HashMap<String, CategoryStats> {
    let mut stats: HashMap<String, CategoryStats> = HashMap::new();
    for product in products {
        let entry = stats
            .entry(product.category.clone())
            .or_insert_with(|| CategoryStats {
                category: product.category.clone(),
                product_count: 0,
                total_quantity: 0,
                total_value: Decimal::ZERO,
            });
        entry.product_count += 1;
        entry.total_quantity += i64::from(product.quantity);
        entry.total_value += product.stock_value();
    }
    stats
}

/// All products with `quantity <= threshold`, input order preserved.
///
/// A negative threshold is a configuration error and is rejected here at the
/// entry point rather than surfacing mid-aggregation.
pub fn low_stock(
    products: &[ProductStockRecord],
    threshold: i32,
) -> Result<Vec<&ProductStockRecord>, ReportError> {
    if threshold < 0 {
        return Err(ReportError::Validation(format!(
            "low-stock threshold must be non-negative, got {}",
            threshold
        )));
    }
    Ok(products
        .iter()
        .filter(|p| p.quantity <= threshold)
        .collect())
}

/// Products with nothing left on hand, input order preserved.
pub fn out_of_stock(products: &[ProductStockRecord]) -> Vec<&ProductStockRecord> {
    products.iter().filter(|p| p.quantity == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    fn product(name: &str, category: &str, price: Decimal, quantity: i32) -> ProductStockRecord {
        ProductStockRecord {
            name: name.to_string(),
            category: category.to_string(),
            unit_price: price,
            quantity,
        }
    }

    #[test]
    fn worked_example_accumulates_one_bucket() {
        let products = vec![
            product("lamp", "A", dec!(10), 2),
            product("shade", "A", dec!(5), 8),
        ];
        let stats = aggregate(&products);
        assert_eq!(stats.len(), 1);
        let a = &stats["A"];
        assert_eq!(a.product_count, 2);
        assert_eq!(a.total_quantity, 10);
        assert_eq!(a.total_value, dec!(60));

        let low = low_stock(&products, 5).unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "lamp");
    }

    #[test]
    fn categories_are_case_sensitive() {
        let products = vec![
            product("lamp", "Lighting", dec!(10), 1),
            product("bulb", "lighting", dec!(2), 1),
        ];
        assert_eq!(aggregate(&products).len(), 2);
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn low_stock_is_inclusive_and_order_preserving() {
        let products = vec![
            product("c", "X", dec!(1), 5),
            product("a", "X", dec!(1), 0),
            product("b", "X", dec!(1), 6),
        ];
        let low = low_stock(&products, 5).unwrap();
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "a"]);
    }

    #[test]
    fn zero_threshold_is_valid_and_negative_is_not() {
        let products = vec![product("a", "X", dec!(1), 0)];
        assert_eq!(low_stock(&products, 0).unwrap().len(), 1);
        assert_matches!(low_stock(&products, -1), Err(ReportError::Validation(_)));
    }

    #[test]
    fn out_of_stock_lists_only_zero_quantities() {
        let products = vec![
            product("a", "X", dec!(1), 0),
            product("b", "X", dec!(1), 3),
            product("c", "X", dec!(1), 0),
        ];
        let names: Vec<&str> = out_of_stock(&products)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }
}
