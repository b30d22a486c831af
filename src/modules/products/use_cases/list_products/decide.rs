// Validate list parameters and fill in defaults.
//
// An unknown sort field is not an error: it falls back to name ascending, whatever direction was
// asked for. An unknown sort direction is an error.

use crate::modules::products::core::rules::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DecideError, validate_page, validate_page_size,
};
use crate::modules::products::use_cases::list_products::query::{
    ListProducts, ProductQuery, SortDirection, SortField,
};

pub fn decide_query(params: ListProducts) -> Result<ProductQuery, DecideError> {
    let page = validate_page(params.page.unwrap_or(DEFAULT_PAGE))?;
    let page_size = validate_page_size(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE))?;

    let sort_direction = match params.sort_direction.as_deref() {
        None => SortDirection::Asc,
        Some(raw) => SortDirection::parse(raw)
            .ok_or_else(|| DecideError::InvalidSortDirection(raw.to_string()))?,
    };

    let (sort_field, sort_direction) = match params.sort_by.as_deref() {
        None => (SortField::Name, sort_direction),
        Some(raw) => match SortField::parse(raw) {
            Some(field) => (field, sort_direction),
            None => (SortField::Name, SortDirection::Asc),
        },
    };

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(ProductQuery {
        page,
        page_size,
        search,
        sort_field,
        sort_direction,
    })
}
