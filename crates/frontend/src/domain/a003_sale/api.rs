use crate::shared::api_utils::{api_item_url, api_url, delete, get_json, post_json, put_json, ApiError};
use contracts::domain::a003_sale::aggregate::{Sale, SaleCreateDto, SaleLineItem, SaleUpdateDto};

const COLLECTION: &str = "ventas";

pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    get_json(&api_url("/api/ventas/")).await
}

/// Line items of one sale. Never cached.
pub async fn fetch_line_items(sale_id: &str) -> Result<Vec<SaleLineItem>, ApiError> {
    get_json(&api_item_url("detalle-ventas", sale_id)).await
}

pub async fn update_sale(id: &str, dto: &SaleUpdateDto) -> Result<Sale, ApiError> {
    put_json(&api_item_url(COLLECTION, id), dto).await
}

pub async fn create_sale(dto: &SaleCreateDto) -> Result<Sale, ApiError> {
    post_json(&api_url("/api/ventas/"), dto).await
}

pub async fn delete_sale(id: &str) -> Result<(), ApiError> {
    delete(&api_item_url(COLLECTION, id)).await
}
