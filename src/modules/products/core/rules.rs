// Field rules shared by every product use case.
//
// Purpose
// - Validate client input before it can reach the store.
//
// Responsibilities
// - Enforce: name present and at most 100 characters, price above zero, quantity not negative,
//   expected version at least 1, paging and sort direction within their allowed ranges.
// - Never perform input or output.

use rust_decimal::Decimal;

pub const MAX_NAME_LENGTH: usize = 100;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("name is required")]
    EmptyName,

    #[error("name must be at most 100 characters, got {length}")]
    NameTooLong { length: usize },

    #[error("price must be greater than zero")]
    NonPositivePrice,

    #[error("quantity cannot be negative")]
    NegativeQuantity,

    #[error("quantity is too large")]
    QuantityOutOfRange,

    #[error("version must be at least 1")]
    InvalidExpectedVersion,

    #[error("page must be at least 1")]
    InvalidPage,

    #[error("pageSize must be between 1 and 100")]
    InvalidPageSize,

    #[error("sortDirection must be 'asc' or 'desc', got '{0}'")]
    InvalidSortDirection(String),
}

pub fn validate_name(name: String) -> Result<String, DecideError> {
    if name.trim().is_empty() {
        return Err(DecideError::EmptyName);
    }
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(DecideError::NameTooLong { length });
    }
    Ok(name)
}

pub fn validate_price(price: Decimal) -> Result<Decimal, DecideError> {
    if price <= Decimal::ZERO {
        return Err(DecideError::NonPositivePrice);
    }
    Ok(price)
}

pub fn validate_quantity(quantity: i64) -> Result<u32, DecideError> {
    if quantity < 0 {
        return Err(DecideError::NegativeQuantity);
    }
    u32::try_from(quantity).map_err(|_| DecideError::QuantityOutOfRange)
}

pub fn validate_page(page: u32) -> Result<u32, DecideError> {
    if page == 0 {
        return Err(DecideError::InvalidPage);
    }
    Ok(page)
}

pub fn validate_page_size(page_size: u32) -> Result<u32, DecideError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(DecideError::InvalidPageSize);
    }
    Ok(page_size)
}

pub fn validate_expected_version(version: u64) -> Result<u64, DecideError> {
    if version == 0 {
        return Err(DecideError::InvalidExpectedVersion);
    }
    Ok(version)
}
