//! Purchase orders shown until the backend exposes a purchases endpoint.

use contracts::domain::a004_purchase_order::aggregate::{PurchaseOrder, PurchaseStatus};

fn order(
    id: &str,
    fecha: &str,
    proveedor: &str,
    total: f64,
    estado: PurchaseStatus,
    numero_orden: &str,
) -> PurchaseOrder {
    PurchaseOrder {
        id: id.to_string(),
        fecha: fecha.to_string(),
        proveedor: proveedor.to_string(),
        total,
        estado,
        numero_orden: numero_orden.to_string(),
    }
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        order("1", "2024-03-15", "TechCorp", 5299.99, PurchaseStatus::Received, "PO-001"),
        order("2", "2024-03-14", "Electronics Inc", 3899.99, PurchaseStatus::Pending, "PO-002"),
        order("3", "2024-03-13", "Global Supplies", 2599.99, PurchaseStatus::Received, "PO-003"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let orders = purchase_orders();
        let ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), orders.len());
        assert_eq!(orders[0].numero_orden, "PO-001");
    }
}
