use crate::domain::common::wire::de_id;
use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

/// Product category, read-only on the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub nombre: String,
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_categories() {
        let list: Vec<Category> = serde_json::from_value(json!([
            {"id": 1, "nombre": "Perifericos"},
            {"id": "2", "nombre": "Laptops"}
        ]))
        .unwrap();
        assert_eq!(list[0].id(), "1");
        assert_eq!(list[1].nombre, "Laptops");
    }
}
