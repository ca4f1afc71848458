use crate::domain::common::wire::{de_amount, de_id, de_text};
use crate::domain::common::Identified;
use crate::shared::validation::{parse_decimal, parse_integer};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Minimum stock sent with every new product; the backend derives
/// `bajo_stock` from it.
pub const DEFAULT_MIN_STOCK: i64 = 5;

/// Stock status, computed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    InStock,
    LowStock,
    #[default]
    OutOfStock,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "en_stock",
            ProductStatus::LowStock => "bajo_stock",
            ProductStatus::OutOfStock => "sin_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "En Stock",
            ProductStatus::LowStock => "Bajo Stock",
            ProductStatus::OutOfStock => "Sin Stock",
        }
    }

    /// Anything the server sends besides `en_stock`/`bajo_stock` is shown as
    /// out of stock.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en_stock" => ProductStatus::InStock,
            "bajo_stock" => ProductStatus::LowStock,
            _ => ProductStatus::OutOfStock,
        }
    }
}

impl From<String> for ProductStatus {
    fn from(code: String) -> Self {
        ProductStatus::from_code(&code)
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.code().to_string()
    }
}

/// Product as returned by `/api/productos/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub nombre: String,
    pub sku: String,
    #[serde(deserialize_with = "de_amount")]
    pub precio: f64,
    pub stock: i64,
    /// Display-only; the category itself is referenced by id on creation
    #[serde(default, deserialize_with = "de_text")]
    pub categoria_nombre: String,
    #[serde(default)]
    pub estado: ProductStatus,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// PATCH body: the editable subset of a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductUpdateDto {
    pub nombre: String,
    pub sku: String,
    pub precio: f64,
    pub stock: i64,
}

/// POST body for a new product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreateDto {
    pub nombre: String,
    pub sku: String,
    pub precio: f64,
    pub stock: i64,
    pub stock_minimo: i64,
    /// Category id as chosen in the selector
    pub categoria: String,
}

/// Edit dialog form.
///
/// Numeric inputs keep the raw text for display and the parsed value for
/// validation; use the `set_*` methods so both stay in sync.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductEditForm {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    #[validate(length(min = 3, message = "El SKU debe tener al menos 3 caracteres."))]
    pub sku: String,
    pub precio_text: String,
    #[validate(
        required(message = "El precio debe ser un número válido."),
        range(min = 0.0, message = "El precio no puede ser negativo.")
    )]
    pub precio: Option<f64>,
    pub stock_text: String,
    #[validate(
        required(message = "El stock debe ser un número entero."),
        range(min = 0, message = "El stock no puede ser negativo.")
    )]
    pub stock: Option<i64>,
}

impl ProductEditForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            nombre: product.nombre.clone(),
            sku: product.sku.clone(),
            precio_text: product.precio.to_string(),
            precio: Some(product.precio),
            stock_text: product.stock.to_string(),
            stock: Some(product.stock),
        }
    }

    pub fn set_precio(&mut self, text: String) {
        self.precio = parse_decimal(&text);
        self.precio_text = text;
    }

    pub fn set_stock(&mut self, text: String) {
        self.stock = parse_integer(&text);
        self.stock_text = text;
    }

    /// Only meaningful after the form has passed validation.
    pub fn to_dto(&self) -> ProductUpdateDto {
        ProductUpdateDto {
            nombre: self.nombre.clone(),
            sku: self.sku.clone(),
            precio: self.precio.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
        }
    }
}

/// Creation dialog form
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductCreateForm {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    #[validate(length(min = 3, message = "El SKU debe tener al menos 3 caracteres."))]
    pub sku: String,
    pub precio_text: String,
    #[validate(
        required(message = "El precio debe ser un número válido."),
        range(min = 0.0, message = "El precio no puede ser negativo.")
    )]
    pub precio: Option<f64>,
    pub stock_text: String,
    #[validate(
        required(message = "El stock debe ser un número entero."),
        range(min = 0, message = "El stock no puede ser negativo.")
    )]
    pub stock: Option<i64>,
    #[validate(required(message = "Por favor seleccione una categoría."))]
    pub categoria: Option<String>,
}

impl ProductCreateForm {
    pub fn set_precio(&mut self, text: String) {
        self.precio = parse_decimal(&text);
        self.precio_text = text;
    }

    pub fn set_stock(&mut self, text: String) {
        self.stock = parse_integer(&text);
        self.stock_text = text;
    }

    /// An empty selector value clears the choice.
    pub fn set_categoria(&mut self, value: String) {
        self.categoria = if value.is_empty() { None } else { Some(value) };
    }

    /// Only meaningful after the form has passed validation.
    pub fn to_dto(&self) -> ProductCreateDto {
        ProductCreateDto {
            nombre: self.nombre.clone(),
            sku: self.sku.clone(),
            precio: self.precio.unwrap_or_default(),
            stock: self.stock.unwrap_or_default(),
            stock_minimo: DEFAULT_MIN_STOCK,
            categoria: self.categoria.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{validate_form, validate_then};
    use serde_json::json;

    fn valid_create_form() -> ProductCreateForm {
        let mut form = ProductCreateForm {
            nombre: "Laptop Dell XPS 13".to_string(),
            sku: "LAP-001".to_string(),
            ..Default::default()
        };
        form.set_precio("999.99".to_string());
        form.set_stock("10".to_string());
        form.set_categoria("3".to_string());
        form
    }

    #[test]
    fn test_decode_example_product() {
        let products: Vec<Product> = serde_json::from_value(json!([{
            "id": "1",
            "nombre": "Mouse",
            "sku": "MS-1",
            "precio": 9.99,
            "stock": 5,
            "categoria_nombre": "Perifericos",
            "estado": "en_stock"
        }]))
        .unwrap();

        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.id(), "1");
        assert_eq!(p.precio, 9.99);
        assert_eq!(p.estado, ProductStatus::InStock);
    }

    #[test]
    fn test_decode_backend_shapes() {
        let p: Product = serde_json::from_value(json!({
            "id": 12,
            "nombre": "Teclado",
            "sku": "TK-12",
            "precio": "45.50",
            "stock": 0,
            "categoria_nombre": null,
            "estado": "agotado"
        }))
        .unwrap();

        assert_eq!(p.id, "12");
        assert_eq!(p.precio, 45.5);
        assert_eq!(p.categoria_nombre, "");
        assert_eq!(p.estado, ProductStatus::OutOfStock);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProductStatus::from_code("en_stock").display_name(), "En Stock");
        assert_eq!(ProductStatus::from_code("bajo_stock").display_name(), "Bajo Stock");
        assert_eq!(ProductStatus::from_code("sin_stock").display_name(), "Sin Stock");
        assert_eq!(ProductStatus::from_code("").display_name(), "Sin Stock");
        assert_eq!(String::from(ProductStatus::LowStock), "bajo_stock");
    }

    #[test]
    fn test_create_form_valid() {
        let form = valid_create_form();
        assert!(validate_form(&form).is_ok());

        let dto = form.to_dto();
        assert_eq!(dto.precio, 999.99);
        assert_eq!(dto.stock, 10);
        assert_eq!(dto.stock_minimo, DEFAULT_MIN_STOCK);
        assert_eq!(dto.categoria, "3");
    }

    #[test]
    fn test_create_form_short_name_never_submits() {
        let mut form = valid_create_form();
        form.nombre = "M".to_string();

        let mut sent = Vec::new();
        let res = validate_then(&form, |f| sent.push(f.to_dto()));

        let errors = res.unwrap_err();
        assert_eq!(
            errors.get("nombre"),
            Some("El nombre debe tener al menos 2 caracteres.")
        );
        assert!(sent.is_empty());
    }

    #[test]
    fn test_create_form_rules() {
        let mut form = valid_create_form();
        form.sku = "AB".to_string();
        form.set_precio("abc".to_string());
        form.set_stock("-1".to_string());
        form.set_categoria(String::new());

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("sku"), Some("El SKU debe tener al menos 3 caracteres."));
        assert_eq!(errors.get("precio"), Some("El precio debe ser un número válido."));
        assert_eq!(errors.get("stock"), Some("El stock no puede ser negativo."));
        assert_eq!(errors.get("categoria"), Some("Por favor seleccione una categoría."));
        assert_eq!(errors.get("nombre"), None);
        // the raw text is kept for the input even when it does not parse
        assert_eq!(form.precio_text, "abc");
    }

    #[test]
    fn test_edit_form_from_product() {
        let product = Product {
            id: "1".to_string(),
            nombre: "Mouse".to_string(),
            sku: "MS-1".to_string(),
            precio: 9.99,
            stock: 5,
            categoria_nombre: "Perifericos".to_string(),
            estado: ProductStatus::InStock,
        };
        let mut form = ProductEditForm::from_product(&product);
        assert_eq!(form.precio_text, "9.99");
        assert!(validate_form(&form).is_ok());

        form.set_precio("-0.01".to_string());
        form.set_stock("2.5".to_string());
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("precio"), Some("El precio no puede ser negativo."));
        assert_eq!(errors.get("stock"), Some("El stock debe ser un número entero."));
    }

    #[test]
    fn test_update_dto_carries_only_editable_fields() {
        let mut form = ProductEditForm {
            nombre: "Mouse Pro".to_string(),
            sku: "MS-2".to_string(),
            ..Default::default()
        };
        form.set_precio("12".to_string());
        form.set_stock("7".to_string());

        let body = serde_json::to_value(form.to_dto()).unwrap();
        assert_eq!(
            body,
            json!({"nombre": "Mouse Pro", "sku": "MS-2", "precio": 12.0, "stock": 7})
        );
    }
}
