use crate::modules::products::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use crate::modules::products::core::product::ProductId;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::get_product::handler::GetProductHandler;
use crate::modules::products::use_cases::patch_product::handler::PatchProductHandler;
use crate::modules::products::use_cases::replace_product::handler::ReplaceProductHandler;
use crate::tests::fixtures::commands::create_product::CreateProductBuilder;
use crate::tests::fixtures::commands::patch_product::PatchProductBuilder;
use crate::tests::fixtures::commands::replace_product::ReplaceProductBuilder;
use rust_decimal::Decimal;
use std::sync::Arc;

#[tokio::test]
async fn creates_replaces_and_deletes_a_product() {
    let store = Arc::new(InMemoryProductRepository::new());
    let create = CreateProductHandler::new(store.clone());
    let get = GetProductHandler::new(store.clone());
    let replace = ReplaceProductHandler::new(store.clone());
    let delete = DeleteProductHandler::new(store.clone());

    let created = create
        .handle(
            CreateProductBuilder::new()
                .name("Keyboard")
                .price(Decimal::new(100, 0))
                .quantity(10)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(created.version, 1);
    assert!(!created.id.to_string().is_empty());

    let replaced = replace
        .handle(
            created.id,
            ReplaceProductBuilder::new()
                .name("Keyboard Pro")
                .price(Decimal::new(12_000, 2))
                .quantity(8)
                .expected_version(1)
                .build(),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.version, 2);
    assert_eq!(replaced.name, "Keyboard Pro");

    let stale = replace
        .handle(
            created.id,
            ReplaceProductBuilder::new().expected_version(1).build(),
        )
        .await;
    assert_eq!(stale, Err(ApplicationError::Conflict { current_version: 2 }));
    assert_eq!(get.handle(created.id).await.unwrap(), Some(replaced));

    assert_eq!(
        delete.handle(created.id, 1).await,
        Err(ApplicationError::Conflict { current_version: 2 })
    );
    assert!(delete.handle(created.id, 2).await.unwrap());
    assert_eq!(get.handle(created.id).await.unwrap(), None);
    assert!(!delete.handle(created.id, 2).await.unwrap());
}

#[tokio::test]
async fn patches_keep_untouched_fields_across_versions() {
    let store = Arc::new(InMemoryProductRepository::new());
    let create = CreateProductHandler::new(store.clone());
    let patch = PatchProductHandler::new(store.clone());

    let created = create.handle(CreateProductBuilder::new().build()).await.unwrap();

    let priced = patch
        .handle(
            created.id,
            PatchProductBuilder::new()
                .price(Decimal::new(4_999, 2))
                .expected_version(1)
                .build(),
        )
        .await
        .unwrap()
        .unwrap();
    let renamed = patch
        .handle(
            created.id,
            PatchProductBuilder::new()
                .name("Renamed")
                .expected_version(2)
                .build(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(renamed.version, 3);
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.price, Decimal::new(4_999, 2));
    assert_eq!(renamed.quantity, created.quantity);
    assert_eq!(priced.name, created.name);
}

#[tokio::test]
async fn operations_on_an_unknown_product_report_absence() {
    let store = Arc::new(InMemoryProductRepository::new());
    let unknown = ProductId::generate();

    assert_eq!(
        GetProductHandler::new(store.clone()).handle(unknown).await,
        Ok(None)
    );
    assert_eq!(
        ReplaceProductHandler::new(store.clone())
            .handle(unknown, ReplaceProductBuilder::new().build())
            .await,
        Ok(None)
    );
    assert_eq!(
        PatchProductHandler::new(store.clone())
            .handle(unknown, PatchProductBuilder::new().build())
            .await,
        Ok(None)
    );
    assert_eq!(
        DeleteProductHandler::new(store).handle(unknown, 1).await,
        Ok(false)
    );
}
