use crate::domain::common::wire::{de_amount, de_id, de_text};
use crate::domain::common::Identified;
use crate::shared::validation::parse_decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sale status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleStatus {
    #[default]
    Pending,
    Completed,
}

impl SaleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pendiente",
            SaleStatus::Completed => "completado",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pendiente",
            SaleStatus::Completed => "Completado",
        }
    }

    pub fn all() -> Vec<SaleStatus> {
        vec![SaleStatus::Pending, SaleStatus::Completed]
    }

    /// Only `completado` counts as completed.
    pub fn from_code(code: &str) -> Self {
        match code {
            "completado" => SaleStatus::Completed,
            _ => SaleStatus::Pending,
        }
    }
}

impl From<String> for SaleStatus {
    fn from(code: String) -> Self {
        SaleStatus::from_code(&code)
    }
}

impl From<SaleStatus> for String {
    fn from(status: SaleStatus) -> Self {
        status.code().to_string()
    }
}

/// Payment method.
///
/// Codes the client does not know are kept verbatim so they round-trip
/// through an edit unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
    Other(String),
}

impl PaymentMethod {
    pub fn code(&self) -> &str {
        match self {
            PaymentMethod::Cash => "efectivo",
            PaymentMethod::Card => "tarjeta",
            PaymentMethod::Transfer => "transferencia",
            PaymentMethod::Other(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Other(code) => code,
        }
    }

    /// Methods offered by the selectors
    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Transfer,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "efectivo" => PaymentMethod::Cash,
            "tarjeta" => PaymentMethod::Card,
            "transferencia" => PaymentMethod::Transfer,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(code: String) -> Self {
        PaymentMethod::from_code(&code)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.code().to_string()
    }
}

/// Sale as returned by `/api/ventas/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Calendar date (YYYY-MM-DD)
    pub fecha: String,
    #[serde(default, deserialize_with = "de_text")]
    pub cliente_nombre: String,
    #[serde(deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default)]
    pub estado: SaleStatus,
    #[serde(default)]
    pub metodo_pago: PaymentMethod,
    /// Free-text notes
    #[serde(default, deserialize_with = "de_text")]
    pub detalles: String,
}

impl Identified for Sale {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Line of a sale, from `/api/detalle-ventas/{saleId}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub producto: String,
    pub cantidad: i64,
    /// Unit price
    #[serde(deserialize_with = "de_amount")]
    pub precio: f64,
    #[serde(deserialize_with = "de_amount")]
    pub subtotal: f64,
}

impl Identified for SaleLineItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// PUT body: the editable subset of a sale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleUpdateDto {
    pub cliente_nombre: String,
    pub metodo_pago: String,
    pub detalles: String,
}

/// POST body for a new sale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleCreateDto {
    pub fecha: String,
    pub cliente_nombre: String,
    pub total: f64,
    pub estado: String,
    pub metodo_pago: String,
    pub detalles: String,
}

/// Edit dialog form
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SaleEditForm {
    #[validate(length(min = 2, message = "El cliente debe tener al menos 2 caracteres."))]
    pub cliente_nombre: String,
    pub metodo_pago: PaymentMethod,
    pub detalles: String,
}

impl SaleEditForm {
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            cliente_nombre: sale.cliente_nombre.clone(),
            metodo_pago: sale.metodo_pago.clone(),
            detalles: sale.detalles.clone(),
        }
    }

    pub fn to_dto(&self) -> SaleUpdateDto {
        SaleUpdateDto {
            cliente_nombre: self.cliente_nombre.clone(),
            metodo_pago: self.metodo_pago.code().to_string(),
            detalles: self.detalles.clone(),
        }
    }
}

/// Creation dialog form
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SaleCreateForm {
    #[validate(length(min = 1, message = "La fecha es obligatoria."))]
    pub fecha: String,
    #[validate(length(min = 2, message = "El cliente debe tener al menos 2 caracteres."))]
    pub cliente_nombre: String,
    pub total_text: String,
    #[validate(
        required(message = "El total debe ser un número válido."),
        range(min = 0.0, message = "El total no puede ser negativo.")
    )]
    pub total: Option<f64>,
    pub estado: SaleStatus,
    pub metodo_pago: PaymentMethod,
    pub detalles: String,
}

impl SaleCreateForm {
    pub fn set_total(&mut self, text: String) {
        self.total = parse_decimal(&text);
        self.total_text = text;
    }

    /// Only meaningful after the form has passed validation.
    pub fn to_dto(&self) -> SaleCreateDto {
        SaleCreateDto {
            fecha: self.fecha.clone(),
            cliente_nombre: self.cliente_nombre.clone(),
            total: self.total.unwrap_or_default(),
            estado: self.estado.code().to_string(),
            metodo_pago: self.metodo_pago.code().to_string(),
            detalles: self.detalles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;
    use serde_json::json;

    #[test]
    fn test_decode_sale() {
        let sale: Sale = serde_json::from_value(json!({
            "id": 4,
            "fecha": "2024-03-15",
            "cliente_nombre": "Ana Pérez",
            "total": "120.50",
            "estado": "completado",
            "metodo_pago": "tarjeta",
            "detalles": null
        }))
        .unwrap();

        assert_eq!(sale.id(), "4");
        assert_eq!(sale.total, 120.5);
        assert_eq!(sale.estado, SaleStatus::Completed);
        assert_eq!(sale.metodo_pago, PaymentMethod::Card);
        assert_eq!(sale.detalles, "");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(SaleStatus::from_code("anulado"), SaleStatus::Pending);

        let method = PaymentMethod::from_code("cheque");
        assert_eq!(method.display_name(), "cheque");
        assert_eq!(String::from(method), "cheque");
    }

    #[test]
    fn test_decode_line_items() {
        let items: Vec<SaleLineItem> = serde_json::from_value(json!([
            {"id": 1, "producto": "Mouse", "cantidad": 2, "precio": "9.99", "subtotal": "19.98"}
        ]))
        .unwrap();
        assert_eq!(items[0].cantidad, 2);
        assert_eq!(items[0].subtotal, 19.98);
    }

    #[test]
    fn test_edit_dto() {
        let sale = Sale {
            id: "4".to_string(),
            fecha: "2024-03-15".to_string(),
            cliente_nombre: "Ana".to_string(),
            total: 10.0,
            estado: SaleStatus::Pending,
            metodo_pago: PaymentMethod::Transfer,
            detalles: "entregar lunes".to_string(),
        };
        let form = SaleEditForm::from_sale(&sale);
        assert!(validate_form(&form).is_ok());
        assert_eq!(
            serde_json::to_value(form.to_dto()).unwrap(),
            json!({
                "cliente_nombre": "Ana",
                "metodo_pago": "transferencia",
                "detalles": "entregar lunes"
            })
        );
    }

    #[test]
    fn test_create_form() {
        let mut form = SaleCreateForm::default();
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("fecha"), Some("La fecha es obligatoria."));
        assert_eq!(errors.get("total"), Some("El total debe ser un número válido."));

        form.fecha = "2024-03-15".to_string();
        form.cliente_nombre = "Luis".to_string();
        form.set_total("250".to_string());
        assert!(validate_form(&form).is_ok());

        let dto = form.to_dto();
        assert_eq!(dto.estado, "pendiente");
        assert_eq!(dto.metodo_pago, "efectivo");
        assert_eq!(dto.total, 250.0);
    }
}
