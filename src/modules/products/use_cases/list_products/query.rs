// Query data types for listing products.
//
// Purpose
// - ListProducts carries the raw, optional parameters as a client sent them.
// - ProductQuery is the validated form the pipeline runs on.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProducts {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Quantity,
}

impl SortField {
    /// Allow-list lookup. Returns None for anything outside name, price and quantity.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "quantity" => Some(Self::Quantity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    pub page_size: u32,
    /// Trimmed; None when the client sent nothing or only whitespace.
    pub search: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}
