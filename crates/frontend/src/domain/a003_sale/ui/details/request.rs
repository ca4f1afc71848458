use contracts::domain::a003_sale::aggregate::{Sale, SaleLineItem};

/// Content of the details modal
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDetails {
    pub sale: Sale,
    pub items: Vec<SaleLineItem>,
}

/// Tracks the latest line-items request so that a slow response for an
/// earlier click cannot overwrite the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineItemsRequest {
    latest: u64,
}

impl LineItemsRequest {
    /// Start a request; the returned ticket supersedes all earlier ones.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// `None` when a newer request has been started since `ticket`.
    pub fn resolve(&self, ticket: u64, sale: Sale, items: Vec<SaleLineItem>) -> Option<SaleDetails> {
        self.is_current(ticket).then(|| SaleDetails { sale, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud_state::CrudList;
    use contracts::domain::a003_sale::aggregate::{PaymentMethod, SaleStatus};

    fn sale(id: &str, cliente: &str) -> Sale {
        Sale {
            id: id.to_string(),
            fecha: "2024-03-15".to_string(),
            cliente_nombre: cliente.to_string(),
            total: 10.0,
            estado: SaleStatus::Pending,
            metodo_pago: PaymentMethod::Cash,
            detalles: String::new(),
        }
    }

    fn item(id: &str, producto: &str) -> SaleLineItem {
        SaleLineItem {
            id: id.to_string(),
            producto: producto.to_string(),
            cantidad: 1,
            precio: 10.0,
            subtotal: 10.0,
        }
    }

    #[test]
    fn test_latest_request_wins() {
        let mut req = LineItemsRequest::default();
        let first = req.begin();
        let second = req.begin();

        let shown = req.resolve(second, sale("2", "Bea"), vec![item("20", "Teclado")]);
        assert_eq!(shown.map(|d| d.sale.id), Some("2".to_string()));

        // the earlier response arrives late
        assert!(req.resolve(first, sale("1", "Ana"), vec![item("10", "Mouse")]).is_none());
    }

    #[test]
    fn test_creation_does_not_leak_into_details() {
        let mut list = CrudList::default();
        list.apply_loaded(vec![sale("1", "Ana"), sale("2", "Bea")]);
        let mut req = LineItemsRequest::default();

        // a sale is created, then details are requested for another one
        list.apply_created(sale("3", "Nuevo"));
        let ticket = req.begin();
        let Some(target) = list.find("2").cloned() else {
            panic!("sale 2 missing");
        };

        let details = req
            .resolve(ticket, target, vec![item("20", "Teclado"), item("21", "Monitor")])
            .unwrap();
        assert_eq!(details.sale.id, "2");
        let productos: Vec<&str> = details.items.iter().map(|i| i.producto.as_str()).collect();
        assert_eq!(productos, vec!["Teclado", "Monitor"]);
    }
}
