// Filter, sort and paginate one snapshot of the store.
//
// Purpose
// - Turn a full snapshot into one page of external views.
//
// Responsibilities
// - Work on the snapshot it is given only; the total and the page always come from the same data.
// - Keep equal keys in their snapshot order (stable sort).

use crate::modules::products::core::product::Product;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::list_products::query::{
    ProductQuery, SortDirection, SortField,
};
use crate::shared::core::paging::PagedResult;
use std::cmp::Ordering;

pub fn run_query(snapshot: Vec<Product>, query: &ProductQuery) -> PagedResult<ProductView> {
    let mut products: Vec<Product> = match &query.search {
        Some(search) => {
            let needle = search.to_lowercase();
            snapshot
                .into_iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => snapshot,
    };

    products.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_field);
        match query.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total_items = products.len() as u64;
    let offset = (query.page as usize - 1).saturating_mul(query.page_size as usize);

    let items = products
        .into_iter()
        .skip(offset)
        .take(query.page_size as usize)
        .map(ProductView::from)
        .collect();

    PagedResult::new(items, query.page, query.page_size, total_items)
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
    }
}

/// Case-insensitive first; names equal apart from case fall back to ordinal order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
