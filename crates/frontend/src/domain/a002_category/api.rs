use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::domain::a002_category::aggregate::Category;

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json(&api_url("/api/categorias/")).await
}
