use crate::domain::common::wire::{de_amount, de_id};
use serde::{Deserialize, Serialize};

/// Counters from `/api/dashboard/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "de_amount")]
    pub ventas_totales: f64,
    pub total_productos: i64,
    #[serde(deserialize_with = "de_amount")]
    pub compras_totales: f64,
    #[serde(deserialize_with = "de_amount")]
    pub ganancias: f64,
}

/// Envelope of `/api/dashboard/transacciones-recientes/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransactionsResponse {
    #[serde(default)]
    pub transacciones: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Sale,
    Purchase,
    /// Any other `tipo`, kept as sent
    Other(String),
}

impl TransactionKind {
    pub fn code(&self) -> &str {
        match self {
            TransactionKind::Sale => "Venta",
            TransactionKind::Purchase => "Compra",
            TransactionKind::Other(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        self.code()
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "Venta" | "venta" => TransactionKind::Sale,
            "Compra" | "compra" => TransactionKind::Purchase,
            other => TransactionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionKind {
    fn from(code: String) -> Self {
        TransactionKind::from_code(&code)
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.code().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Completed,
    #[default]
    Processing,
}

impl TransactionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Processing => "processing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completado",
            TransactionStatus::Processing => "Procesando",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "completed" => TransactionStatus::Completed,
            _ => TransactionStatus::Processing,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(code: String) -> Self {
        TransactionStatus::from_code(&code)
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.code().to_string()
    }
}

/// One entry of the recent-activity feed, as sent by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub tipo: TransactionKind,
    pub producto: String,
    #[serde(deserialize_with = "de_amount")]
    pub monto: f64,
    /// Timestamp or date, normalised to a calendar day before display
    pub fecha: String,
    #[serde(default)]
    pub estado: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_summary() {
        let s: DashboardSummary = serde_json::from_value(json!({
            "ventas_totales": "1520.40",
            "total_productos": 42,
            "compras_totales": 830.0,
            "ganancias": "690.40"
        }))
        .unwrap();
        assert_eq!(s.ventas_totales, 1520.4);
        assert_eq!(s.total_productos, 42);
        assert_eq!(s.ganancias, 690.4);
    }

    #[test]
    fn test_decode_feed() {
        let r: RecentTransactionsResponse = serde_json::from_value(json!({
            "transacciones": [
                {"id": 9, "tipo": "Venta", "producto": "Mouse", "monto": 19.98,
                 "fecha": "2024-03-15T14:02:26Z", "estado": "completed"},
                {"id": 10, "tipo": "Compra", "producto": "Monitor", "monto": "300",
                 "fecha": "2024-03-14", "estado": "processing"}
            ]
        }))
        .unwrap();
        assert_eq!(r.transacciones.len(), 2);
        assert_eq!(r.transacciones[0].id, "9");
        assert_eq!(r.transacciones[1].tipo, TransactionKind::Purchase);
        assert_eq!(r.transacciones[1].estado.display_name(), "Procesando");
    }

    #[test]
    fn test_unknown_kind_keeps_the_feed() {
        let r: RecentTransactionsResponse = serde_json::from_value(json!({
            "transacciones": [
                {"id": 11, "tipo": "Devolución", "producto": "Teclado", "monto": 25,
                 "fecha": "2024-03-13", "estado": "completed"},
                {"id": 12, "tipo": "Venta", "producto": "Mouse", "monto": 9.99,
                 "fecha": "2024-03-13", "estado": "completed"}
            ]
        }))
        .unwrap();
        assert_eq!(r.transacciones.len(), 2);
        assert_eq!(r.transacciones[0].tipo, TransactionKind::Other("Devolución".to_string()));
        assert_eq!(r.transacciones[0].tipo.display_name(), "Devolución");
        assert_eq!(r.transacciones[1].tipo, TransactionKind::Sale);
    }

    #[test]
    fn test_missing_feed_is_empty() {
        let r: RecentTransactionsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(r.transacciones.is_empty());
    }
}
