use crate::modules::products::use_cases::replace_product::command::ReplaceProduct;
use crate::tests::fixtures::commands::create_product::CreateProductBuilder;
use rust_decimal::Decimal;

pub struct ReplaceProductBuilder {
    inner: ReplaceProduct,
}

impl Default for ReplaceProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ReplaceProductBuilder {
    pub fn new() -> Self {
        let create = CreateProductBuilder::new().build();
        Self {
            inner: ReplaceProduct {
                name: create.name,
                price: create.price,
                quantity: create.quantity,
                expected_version: 1,
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

    pub fn expected_version(mut self, v: u64) -> Self {
        self.inner.expected_version = v;
        self
    }

    pub fn build(self) -> ReplaceProduct {
        self.inner
    }
}
