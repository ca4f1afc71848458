use crate::shared::api_utils::{api_item_url, api_url, delete, get_json, post_json, put_json, ApiError};
use contracts::domain::a005_supplier::aggregate::{Supplier, SupplierDto};

const COLLECTION: &str = "proveedores";

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    get_json(&api_url("/api/proveedores/")).await
}

pub async fn update_supplier(id: &str, dto: &SupplierDto) -> Result<Supplier, ApiError> {
    put_json(&api_item_url(COLLECTION, id), dto).await
}

pub async fn create_supplier(dto: &SupplierDto) -> Result<Supplier, ApiError> {
    post_json(&api_url("/api/proveedores/"), dto).await
}

pub async fn delete_supplier(id: &str) -> Result<(), ApiError> {
    delete(&api_item_url(COLLECTION, id)).await
}
