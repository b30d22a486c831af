use crate::modules::products::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::list_products::handler::ListProductsHandler;
use crate::modules::products::use_cases::list_products::query::ListProducts;
use crate::tests::fixtures::commands::create_product::CreateProductBuilder;
use rust_decimal::Decimal;
use std::sync::Arc;

#[tokio::test]
async fn lists_the_second_page_of_thirty_products() {
    let store = Arc::new(InMemoryProductRepository::new());
    let create = CreateProductHandler::new(store.clone());
    let list = ListProductsHandler::new(store);

    for i in 1..=30 {
        create
            .handle(
                CreateProductBuilder::new()
                    .name(format!("Product {i:02}"))
                    .price(Decimal::from(i))
                    .quantity(i)
                    .build(),
            )
            .await
            .unwrap();
    }

    let page = list
        .handle(ListProducts {
            page: Some(2),
            page_size: Some(10),
            ..ListProducts::default()
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_items, 30);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
    assert_eq!(page.items[0].name, "Product 11");
    assert_eq!(page.items[9].name, "Product 20");
}

#[tokio::test]
async fn searches_and_sorts_by_price_descending() {
    let store = Arc::new(InMemoryProductRepository::new());
    let create = CreateProductHandler::new(store.clone());
    let list = ListProductsHandler::new(store);

    for (name, cents) in [
        ("Wireless Mouse", 2_500),
        ("Mouse Pad", 900),
        ("Keyboard", 10_000),
        ("Gaming MOUSE", 6_000),
    ] {
        create
            .handle(
                CreateProductBuilder::new()
                    .name(name)
                    .price(Decimal::new(cents, 2))
                    .build(),
            )
            .await
            .unwrap();
    }

    let page = list
        .handle(ListProducts {
            search: Some(" mouse ".into()),
            sort_by: Some("price".into()),
            sort_direction: Some("DESC".into()),
            ..ListProducts::default()
        })
        .await
        .unwrap();

    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gaming MOUSE", "Wireless Mouse", "Mouse Pad"]);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn an_unknown_sort_field_falls_back_to_name_ascending() {
    let store = Arc::new(InMemoryProductRepository::new());
    let create = CreateProductHandler::new(store.clone());
    let list = ListProductsHandler::new(store);

    for name in ["Charlie", "Alpha", "Bravo"] {
        create
            .handle(CreateProductBuilder::new().name(name).build())
            .await
            .unwrap();
    }

    let page = list
        .handle(ListProducts {
            sort_by: Some("createdAt".into()),
            sort_direction: Some("desc".into()),
            ..ListProducts::default()
        })
        .await
        .unwrap();

    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
}

#[tokio::test]
async fn an_empty_store_lists_no_pages() {
    let list = ListProductsHandler::new(Arc::new(InMemoryProductRepository::new()));
    let page = list.handle(ListProducts::default()).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 0);
}
