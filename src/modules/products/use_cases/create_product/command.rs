// Command data type for creating a product.
//
// Purpose
// - Express the intent to add a new product with its initial name, price and quantity.
//
// Responsibilities
// - Carry raw input for the decider to validate.
// - Stay independent of the transport (not tied to HTTP or GraphQL).

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}
