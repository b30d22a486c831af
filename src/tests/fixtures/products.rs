use crate::modules::products::core::product::{Product, ProductFields, ProductId};
use rust_decimal::Decimal;

pub struct ProductBuilder {
    id: ProductId,
    fields: ProductFields,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: ProductId::generate(),
            fields: ProductFields {
                name: "Keyboard".to_string(),
                price: Decimal::new(100, 0),
                quantity: 10,
            },
        }
    }

    pub fn id(mut self, v: ProductId) -> Self {
        self.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.fields.name = v.into();
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.fields.price = v;
        self
    }

    pub fn quantity(mut self, v: u32) -> Self {
        self.fields.quantity = v;
        self
    }

    pub fn build(self) -> Product {
        Product::new(self.id, self.fields)
    }
}

/// "Product 1".."Product {count}", with price and quantity equal to the number.
pub fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            ProductBuilder::new()
                .name(format!("Product {i}"))
                .price(Decimal::from(i as u64))
                .quantity(i as u32)
                .build()
        })
        .collect()
}
