use crate::domain::common::wire::{de_amount, de_id};
use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

/// Purchase order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PurchaseStatus {
    #[default]
    Pending,
    Received,
}

impl PurchaseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pendiente",
            PurchaseStatus::Received => "recibido",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "Pendiente",
            PurchaseStatus::Received => "Recibido",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "recibido" | "received" => PurchaseStatus::Received,
            _ => PurchaseStatus::Pending,
        }
    }
}

impl From<String> for PurchaseStatus {
    fn from(code: String) -> Self {
        PurchaseStatus::from_code(&code)
    }
}

impl From<PurchaseStatus> for String {
    fn from(status: PurchaseStatus) -> Self {
        status.code().to_string()
    }
}

/// Purchase order (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub fecha: String,
    /// Supplier display name
    pub proveedor: String,
    #[serde(deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default)]
    pub estado: PurchaseStatus,
    /// e.g. "PO-001"
    pub numero_orden: String,
}

impl Identified for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_accepts_both_spellings() {
        assert_eq!(PurchaseStatus::from_code("received"), PurchaseStatus::Received);
        assert_eq!(PurchaseStatus::from_code("recibido"), PurchaseStatus::Received);
        assert_eq!(PurchaseStatus::from_code("pending"), PurchaseStatus::Pending);
    }

    #[test]
    fn test_decode_order() {
        let order: PurchaseOrder = serde_json::from_value(json!({
            "id": 1,
            "fecha": "2024-03-15",
            "proveedor": "TechCorp",
            "total": "5299.99",
            "estado": "recibido",
            "numero_orden": "PO-001"
        }))
        .unwrap();
        assert_eq!(order.id(), "1");
        assert_eq!(order.estado.display_name(), "Recibido");
    }
}
