use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Sales,
    Purchases,
    Suppliers,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Products,
        Page::Sales,
        Page::Purchases,
        Page::Suppliers,
    ];

    /// Key used in `?active=`
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "d001_overview",
            Page::Products => "a001_product",
            Page::Sales => "a003_sale",
            Page::Purchases => "a004_purchase_order",
            Page::Suppliers => "a005_supplier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Panel",
            Page::Products => "Inventario",
            Page::Sales => "Ventas",
            Page::Purchases => "Compras",
            Page::Suppliers => "Proveedores",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Sales => "sales",
            Page::Purchases => "purchases",
            Page::Suppliers => "suppliers",
        }
    }

    /// Unknown keys land on the dashboard.
    pub fn from_key(key: &str) -> Self {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

/// Reads the `active` parameter of a query string (with or without `?`).
fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").map(|key| Page::from_key(key))
}

fn query_for(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), page.key().to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Syncs the active page with `?active=` in both directions: the URL
    /// picks the initial page, later changes are written back with
    /// `history.replaceState`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            log::debug!("restoring page '{}' from url", page.key());
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_page(&self, page: Page) {
        log::debug!("open_page: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_key("a999_missing"), Page::Dashboard);
        assert_eq!(page_from_query("?active=nope"), Some(Page::Dashboard));
    }

    #[test]
    fn test_query_parsing() {
        assert_eq!(page_from_query("?active=a005_supplier"), Some(Page::Suppliers));
        assert_eq!(page_from_query("active=a003_sale&x=1"), Some(Page::Sales));
        assert_eq!(page_from_query(""), None);
        assert_eq!(query_for(Page::Purchases), "?active=a004_purchase_order");
    }
}
