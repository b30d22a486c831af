// Command data type for replacing every mutable field of a product.
//
// Purpose
// - Express a full overwrite of name, price and quantity.
// - Guard it with the version the client last saw.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
    pub expected_version: u64,
}
