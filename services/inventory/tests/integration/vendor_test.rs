use pantry_inventory::error::InventoryError;
use pantry_inventory::usecase::vendor::{
    CreateVendorUseCase, DeleteVendorUseCase, GetVendorUseCase, ListVendorItemsUseCase,
    UpdateVendorUseCase, VendorInput,
};

use crate::helpers::{MockItemRepo, MockVendorRepo, quantity_item, test_vendor};

fn vendor_input(name: Option<&str>) -> VendorInput {
    VendorInput {
        vendor_name: name.map(str::to_owned),
        contact_person: None,
        address: None,
        phone: None,
        email: None,
    }
}

#[tokio::test]
async fn should_create_vendor_with_generated_id() {
    let uc = CreateVendorUseCase {
        repo: MockVendorRepo::new(vec![]),
    };

    let (id, fields) = uc.execute(vendor_input(Some("Acme Foods"))).await.unwrap();

    assert_eq!(id, 1);
    assert_eq!(fields.vendor_name, "Acme Foods");
}

#[tokio::test]
async fn should_reject_vendor_without_name() {
    let uc = CreateVendorUseCase {
        repo: MockVendorRepo::new(vec![]),
    };

    let result = uc.execute(vendor_input(Some("   "))).await;

    assert!(matches!(
        result,
        Err(InventoryError::MissingField("Vendor name"))
    ));
}

#[tokio::test]
async fn should_block_delete_while_vendor_owns_items() {
    let vendors = MockVendorRepo::new(vec![test_vendor(1, "Acme Foods")]);
    let handle = vendors.vendors_handle();
    let uc = DeleteVendorUseCase {
        vendors,
        items: MockItemRepo::new(vec![quantity_item("beans", 5)]),
    };

    let result = uc.execute(1).await;

    assert!(
        matches!(result, Err(InventoryError::VendorHasItems(1))),
        "expected VendorHasItems(1), got {result:?}"
    );
    assert_eq!(handle.lock().unwrap().len(), 1, "vendor must not be deleted");
}

#[tokio::test]
async fn should_delete_vendor_after_items_are_gone_then_404_on_repeat() {
    let vendors = MockVendorRepo::new(vec![test_vendor(1, "Acme Foods")]);
    let items = MockItemRepo::new(vec![quantity_item("beans", 5)]);
    items.items_handle().lock().unwrap().clear(); // items reassigned/deleted

    let uc = DeleteVendorUseCase { vendors, items };

    uc.execute(1).await.unwrap();

    let second = uc.execute(1).await;
    assert!(matches!(second, Err(InventoryError::VendorNotFound)));
}

#[tokio::test]
async fn should_404_when_updating_missing_vendor() {
    let uc = UpdateVendorUseCase {
        repo: MockVendorRepo::new(vec![]),
    };

    let result = uc.execute(9, vendor_input(Some("Acme Foods"))).await;

    assert!(matches!(result, Err(InventoryError::VendorNotFound)));
}

#[tokio::test]
async fn should_404_when_fetching_missing_vendor() {
    let uc = GetVendorUseCase {
        repo: MockVendorRepo::new(vec![]),
    };

    let result = uc.execute(9).await;

    assert!(matches!(result, Err(InventoryError::VendorNotFound)));
}

#[tokio::test]
async fn should_list_only_the_vendors_items() {
    let mut other = quantity_item("rice", 3);
    other.vendor_id = 2;
    let uc = ListVendorItemsUseCase {
        vendors: MockVendorRepo::new(vec![test_vendor(1, "Acme Foods")]),
        items: MockItemRepo::new(vec![quantity_item("beans", 5), other]),
    };

    let items = uc.execute(1).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "beans");
}

#[tokio::test]
async fn should_404_listing_items_of_missing_vendor() {
    let uc = ListVendorItemsUseCase {
        vendors: MockVendorRepo::new(vec![]),
        items: MockItemRepo::empty(),
    };

    let result = uc.execute(9).await;

    assert!(matches!(result, Err(InventoryError::VendorNotFound)));
}
