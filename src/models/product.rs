use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A warehouse stock line as materialized by the data-source collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductStockRecord {
    pub name: String,
    pub category: String,
    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,
    #[validate(range(min = 0, message = "quantity on hand must be non-negative"))]
    pub quantity: i32,
}

impl ProductStockRecord {
    /// Monetary value of the stock on hand for this line.
    pub fn stock_value(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("unit_price");
        err.message = Some("unit price must be non-negative".into());
        return Err(err);
    }
    Ok(())
}
