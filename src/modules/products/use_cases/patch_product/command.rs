// Command data type for a partial update.
//
// Purpose
// - Express a change to any subset of name, price and quantity; absent fields stay as they are.

use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub expected_version: u64,
}
