// Pure decision functions for a partial update.
//
// Purpose
// - Validate the fields that are present, then merge them over the stored product.
//
// Responsibilities
// - Validation happens before the product is fetched, so invalid input never depends on existence.
// - Merging never touches a field the client left out.

use crate::modules::products::core::product::{Product, ProductFields};
use crate::modules::products::core::rules::{
    DecideError, validate_expected_version, validate_name, validate_price, validate_quantity,
};
use crate::modules::products::use_cases::patch_product::command::PatchProduct;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

impl ProductPatch {
    pub fn merge_onto(self, existing: &Product) -> ProductFields {
        ProductFields {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            price: self.price.unwrap_or(existing.price),
            quantity: self.quantity.unwrap_or(existing.quantity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDecision {
    pub patch: ProductPatch,
    pub expected_version: u64,
}

pub fn decide_patch(command: PatchProduct) -> Result<PatchDecision, DecideError> {
    Ok(PatchDecision {
        patch: ProductPatch {
            name: command.name.map(validate_name).transpose()?,
            price: command.price.map(validate_price).transpose()?,
            quantity: command.quantity.map(validate_quantity).transpose()?,
        },
        expected_version: validate_expected_version(command.expected_version)?,
    })
}
