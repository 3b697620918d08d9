use pantry_domain::stock::StockKind;
use pantry_inventory::error::InventoryError;
use pantry_inventory::usecase::item::{
    CreateItemInput, CreateItemUseCase, GetItemUseCase, ListItemsUseCase,
};

use crate::helpers::{MockItemRepo, quantity_item};

fn create_input() -> CreateItemInput {
    CreateItemInput {
        product_id: Some("beans".to_owned()),
        product_name: Some("Black Beans".to_owned()),
        description: Some("Canned black beans".to_owned()),
        item_type: Some("canned".to_owned()),
        vendor_id: Some(1),
        price_per_unit: Some(1.5),
        order_quantity: Some(24),
        weight_amount: None,
        max_signout_quantity: Some(3),
        max_signout_weight: None,
    }
}

#[tokio::test]
async fn should_create_quantity_tracked_item() {
    let repo = MockItemRepo::empty();
    let items = repo.items_handle();
    let uc = CreateItemUseCase { repo };

    let item = uc.execute(create_input()).await.unwrap();

    assert_eq!(item.stock, StockKind::Quantity(24));
    assert_eq!(items.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_trim_the_product_id() {
    let uc = CreateItemUseCase {
        repo: MockItemRepo::empty(),
    };

    let item = uc
        .execute(CreateItemInput {
            product_id: Some("  beans  ".to_owned()),
            ..create_input()
        })
        .await
        .unwrap();

    assert_eq!(item.product_id, "beans");
}

#[tokio::test]
async fn should_reject_blank_product_id() {
    let uc = CreateItemUseCase {
        repo: MockItemRepo::empty(),
    };

    let result = uc
        .execute(CreateItemInput {
            product_id: Some("   ".to_owned()),
            ..create_input()
        })
        .await;

    assert!(matches!(
        result,
        Err(InventoryError::MissingField("Product ID"))
    ));
}

#[tokio::test]
async fn should_reject_missing_price() {
    let uc = CreateItemUseCase {
        repo: MockItemRepo::empty(),
    };

    let result = uc
        .execute(CreateItemInput {
            price_per_unit: None,
            ..create_input()
        })
        .await;

    assert!(matches!(
        result,
        Err(InventoryError::MissingField("Price per unit"))
    ));
}

#[tokio::test]
async fn should_reject_item_with_both_stock_representations() {
    let uc = CreateItemUseCase {
        repo: MockItemRepo::empty(),
    };

    let result = uc
        .execute(CreateItemInput {
            order_quantity: Some(5),
            weight_amount: Some(2.0),
            ..create_input()
        })
        .await;

    assert!(
        matches!(result, Err(InventoryError::InvalidInput(_))),
        "an item must never carry both positive stock columns, got {result:?}"
    );
}

#[tokio::test]
async fn should_404_fetching_missing_item() {
    let uc = GetItemUseCase {
        repo: MockItemRepo::empty(),
    };

    let result = uc.execute("ghost").await;

    assert!(matches!(result, Err(InventoryError::ItemNotFound)));
}

#[tokio::test]
async fn should_filter_item_list_by_vendor() {
    let mut other = quantity_item("rice", 3);
    other.vendor_id = 2;
    let uc = ListItemsUseCase {
        repo: MockItemRepo::new(vec![quantity_item("beans", 5), other]),
    };

    let all = uc.execute(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = uc.execute(Some(2)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].product_id, "rice");
}
