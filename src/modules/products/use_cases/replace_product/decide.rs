use crate::modules::products::core::product::ProductFields;
use crate::modules::products::core::rules::{
    DecideError, validate_expected_version, validate_name, validate_price, validate_quantity,
};
use crate::modules::products::use_cases::replace_product::command::ReplaceProduct;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceDecision {
    pub fields: ProductFields,
    pub expected_version: u64,
}

pub fn decide_replace(command: ReplaceProduct) -> Result<ReplaceDecision, DecideError> {
    Ok(ReplaceDecision {
        fields: ProductFields {
            name: validate_name(command.name)?,
            price: validate_price(command.price)?,
            quantity: validate_quantity(command.quantity)?,
        },
        expected_version: validate_expected_version(command.expected_version)?,
    })
}
