use crate::modules::products::core::product::ProductFields;
use crate::modules::products::core::rules::{
    DecideError, validate_name, validate_price, validate_quantity,
};
use crate::modules::products::use_cases::create_product::command::CreateProduct;

pub fn decide_create(command: CreateProduct) -> Result<ProductFields, DecideError> {
    Ok(ProductFields {
        name: validate_name(command.name)?,
        price: validate_price(command.price)?,
        quantity: validate_quantity(command.quantity)?,
    })
}
