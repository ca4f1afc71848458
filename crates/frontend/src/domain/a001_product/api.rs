use crate::shared::api_utils::{api_item_url, api_url, delete, get_json, patch_json, post_json, ApiError};
use contracts::domain::a001_product::aggregate::{Product, ProductCreateDto, ProductUpdateDto};

const COLLECTION: &str = "productos";

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json(&api_url("/api/productos/")).await
}

/// PATCH with the editable subset; returns the stored product.
pub async fn update_product(id: &str, dto: &ProductUpdateDto) -> Result<Product, ApiError> {
    patch_json(&api_item_url(COLLECTION, id), dto).await
}

pub async fn create_product(dto: &ProductCreateDto) -> Result<Product, ApiError> {
    post_json(&api_url("/api/productos/"), dto).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    delete(&api_item_url(COLLECTION, id)).await
}
