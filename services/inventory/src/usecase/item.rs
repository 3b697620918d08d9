//! Item CRUD.

use pantry_domain::stock::StockKind;

use crate::domain::repository::ItemRepository;
use crate::domain::types::{Item, ItemPatch};
use crate::error::InventoryError;

// ── CreateItem ───────────────────────────────────────────────────────────────

pub struct CreateItemInput {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub price_per_unit: Option<f64>,
    pub order_quantity: Option<i32>,
    pub weight_amount: Option<f64>,
    pub max_signout_quantity: Option<i32>,
    pub max_signout_weight: Option<f64>,
}

pub struct CreateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> CreateItemUseCase<R> {
    pub async fn execute(&self, input: CreateItemInput) -> Result<Item, InventoryError> {
        let product_id = required(input.product_id, "Product ID")?;
        let product_name = required(input.product_name, "Product name")?;
        let description = required(input.description, "Description")?;
        let item_type = required(input.item_type, "Type")?;
        let vendor_id = input
            .vendor_id
            .ok_or(InventoryError::MissingField("Vendor ID"))?;
        let price_per_unit = input
            .price_per_unit
            .ok_or(InventoryError::MissingField("Price per unit"))?;

        if input.order_quantity.is_some_and(|q| q > 0)
            && input.weight_amount.is_some_and(|w| w > 0.0)
        {
            return Err(InventoryError::InvalidInput(
                "An item is tracked by quantity or by weight, not both",
            ));
        }

        let item = Item {
            product_id,
            product_name,
            description,
            item_type,
            vendor_id,
            price_per_unit,
            stock: StockKind::from_columns(input.order_quantity, input.weight_amount),
            max_signout_quantity: input.max_signout_quantity,
            max_signout_weight: input.max_signout_weight,
        };
        self.repo.create(&item).await?;
        Ok(item)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, InventoryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_owned()),
        _ => Err(InventoryError::MissingField(field)),
    }
}

// ── GetItem / ListItems ──────────────────────────────────────────────────────

pub struct GetItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> GetItemUseCase<R> {
    pub async fn execute(&self, product_id: &str) -> Result<Item, InventoryError> {
        self.repo
            .find_by_id(product_id)
            .await?
            .ok_or(InventoryError::ItemNotFound)
    }
}

pub struct ListItemsUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> ListItemsUseCase<R> {
    pub async fn execute(&self, vendor_id: Option<i32>) -> Result<Vec<Item>, InventoryError> {
        self.repo.list(vendor_id).await
    }
}

pub struct ListTypesUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> ListTypesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<String>, InventoryError> {
        self.repo.list_types().await
    }
}

// ── UpdateItem / DeleteItem ──────────────────────────────────────────────────

pub struct UpdateItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> UpdateItemUseCase<R> {
    // Blind partial update, legacy semantics: touching zero rows is not an
    // error.
    pub async fn execute(&self, product_id: &str, patch: ItemPatch) -> Result<(), InventoryError> {
        self.repo.update_fields(product_id, &patch).await?;
        Ok(())
    }
}

pub struct DeleteItemUseCase<R: ItemRepository> {
    pub repo: R,
}

impl<R: ItemRepository> DeleteItemUseCase<R> {
    pub async fn execute(&self, product_id: &str) -> Result<(), InventoryError> {
        self.repo.delete(product_id).await?;
        Ok(())
    }
}
