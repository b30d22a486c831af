// Shared test fixture for the CreateProduct command.
// The default values are read from the JSON fixture, which is the same body shape
// the HTTP adapter accepts.

use crate::modules::products::use_cases::create_product::command::CreateProduct;
use rust_decimal::Decimal;
use serde::Deserialize;

pub const CREATE_PRODUCT_JSON: &str = include_str!("json/create_product.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

pub struct CreateProductBuilder {
    inner: CreateProduct,
}

impl Default for CreateProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateProductBuilder {
    pub fn new() -> Self {
        let dto: CreateProductDto = serde_json::from_str(CREATE_PRODUCT_JSON).unwrap();
        Self {
            inner: CreateProduct {
                name: dto.name,
                price: dto.price,
                quantity: dto.quantity,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.inner.price = v;
        self
    }

    pub fn quantity(mut self, v: i64) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn build(self) -> CreateProduct {
        self.inner
    }
}

#[cfg(test)]
mod create_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateProductBuilder::default().build();
        assert_eq!(built.name, "Mechanical Keyboard");
        assert_eq!(built.price, Decimal::new(8_990, 2));
        assert_eq!(built.quantity, 25);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = CreateProductBuilder::new()
            .name("Mouse")
            .price(Decimal::new(15, 0))
            .quantity(4)
            .build();
        assert_eq!(
            built,
            CreateProduct {
                name: "Mouse".into(),
                price: Decimal::new(15, 0),
                quantity: 4,
            }
        );
    }
}
