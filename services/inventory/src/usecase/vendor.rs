//! Vendor CRUD, including the owns-items delete guard.

use crate::domain::repository::{ItemRepository, VendorRepository};
use crate::domain::types::{Item, Vendor, VendorFields};
use crate::error::InventoryError;

pub struct VendorInput {
    pub vendor_name: Option<String>,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl VendorInput {
    fn into_fields(self) -> Result<VendorFields, InventoryError> {
        let vendor_name = match self.vendor_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(InventoryError::MissingField("Vendor name")),
        };
        Ok(VendorFields {
            vendor_name,
            contact_person: self.contact_person,
            address: self.address,
            phone: self.phone,
            email: self.email,
        })
    }
}

// ── Reads ────────────────────────────────────────────────────────────────────

pub struct ListVendorsUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> ListVendorsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Vendor>, InventoryError> {
        self.repo.list().await
    }
}

pub struct GetVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> GetVendorUseCase<R> {
    pub async fn execute(&self, vendor_id: i32) -> Result<Vendor, InventoryError> {
        self.repo
            .find_by_id(vendor_id)
            .await?
            .ok_or(InventoryError::VendorNotFound)
    }
}

/// Items owned by one vendor; 404 when the vendor itself is missing.
pub struct ListVendorItemsUseCase<V: VendorRepository, I: ItemRepository> {
    pub vendors: V,
    pub items: I,
}

impl<V: VendorRepository, I: ItemRepository> ListVendorItemsUseCase<V, I> {
    pub async fn execute(&self, vendor_id: i32) -> Result<Vec<Item>, InventoryError> {
        self.vendors
            .find_by_id(vendor_id)
            .await?
            .ok_or(InventoryError::VendorNotFound)?;
        self.items.list(Some(vendor_id)).await
    }
}

// ── Writes ───────────────────────────────────────────────────────────────────

pub struct CreateVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> CreateVendorUseCase<R> {
    /// Returns the generated vendor id and the stored fields.
    pub async fn execute(&self, input: VendorInput) -> Result<(i32, VendorFields), InventoryError> {
        let fields = input.into_fields()?;
        let id = self.repo.create(&fields).await?;
        Ok((id, fields))
    }
}

pub struct UpdateVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> UpdateVendorUseCase<R> {
    pub async fn execute(&self, vendor_id: i32, input: VendorInput) -> Result<(), InventoryError> {
        let fields = input.into_fields()?;
        let touched = self.repo.update(vendor_id, &fields).await?;
        if touched == 0 {
            return Err(InventoryError::VendorNotFound);
        }
        Ok(())
    }
}

pub struct DeleteVendorUseCase<V: VendorRepository, I: ItemRepository> {
    pub vendors: V,
    pub items: I,
}

impl<V: VendorRepository, I: ItemRepository> DeleteVendorUseCase<V, I> {
    pub async fn execute(&self, vendor_id: i32) -> Result<(), InventoryError> {
        let item_count = self.items.count_by_vendor(vendor_id).await?;
        if item_count > 0 {
            return Err(InventoryError::VendorHasItems(item_count));
        }
        let deleted = self.vendors.delete(vendor_id).await?;
        if deleted == 0 {
            return Err(InventoryError::VendorNotFound);
        }
        Ok(())
    }
}
