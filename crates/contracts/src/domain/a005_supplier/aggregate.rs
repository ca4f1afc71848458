use crate::domain::common::wire::{de_id, de_text};
use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

/// Supplier as returned by `/api/proveedores/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub nombre: String,
    #[serde(default, deserialize_with = "de_text")]
    pub email: String,
    #[serde(default, deserialize_with = "de_text")]
    pub telefono: String,
    #[serde(default, deserialize_with = "de_text")]
    pub direccion: String,
    /// Tax ID (RUC)
    #[serde(default, deserialize_with = "de_text")]
    pub ruc: String,
}

impl Identified for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
}

/// POST/PUT body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierDto {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub ruc: String,
}

/// Editable supplier field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierField {
    Nombre,
    Email,
    Telefono,
    Direccion,
    Ruc,
}

impl SupplierField {
    /// Wire/form key, also the key of validation errors
    pub fn key(&self) -> &'static str {
        match self {
            SupplierField::Nombre => "nombre",
            SupplierField::Email => "email",
            SupplierField::Telefono => "telefono",
            SupplierField::Direccion => "direccion",
            SupplierField::Ruc => "ruc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: SupplierField,
    pub label: &'static str,
}

/// Rendered by both the add and the edit dialog.
pub const SUPPLIER_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        field: SupplierField::Nombre,
        label: "Nombre",
    },
    FieldDescriptor {
        field: SupplierField::Email,
        label: "Email",
    },
    FieldDescriptor {
        field: SupplierField::Telefono,
        label: "Teléfono",
    },
    FieldDescriptor {
        field: SupplierField::Direccion,
        label: "Dirección",
    },
    FieldDescriptor {
        field: SupplierField::Ruc,
        label: "RUC",
    },
];

/// Add/edit form. `id` is set only when editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SupplierForm {
    pub id: Option<String>,
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    /// Optional; checked only when filled in
    #[validate(custom(function = "email_if_present"))]
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub ruc: String,
}

/// Suppliers stored without an email decode to `""` and must stay editable.
fn email_if_present(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed("Ingrese un email válido.")))
    }
}

impl SupplierForm {
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            id: Some(supplier.id.clone()),
            nombre: supplier.nombre.clone(),
            email: supplier.email.clone(),
            telefono: supplier.telefono.clone(),
            direccion: supplier.direccion.clone(),
            ruc: supplier.ruc.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn get(&self, field: SupplierField) -> &str {
        match field {
            SupplierField::Nombre => &self.nombre,
            SupplierField::Email => &self.email,
            SupplierField::Telefono => &self.telefono,
            SupplierField::Direccion => &self.direccion,
            SupplierField::Ruc => &self.ruc,
        }
    }

    pub fn set(&mut self, field: SupplierField, value: String) {
        match field {
            SupplierField::Nombre => self.nombre = value,
            SupplierField::Email => self.email = value,
            SupplierField::Telefono => self.telefono = value,
            SupplierField::Direccion => self.direccion = value,
            SupplierField::Ruc => self.ruc = value,
        }
    }

    pub fn to_dto(&self) -> SupplierDto {
        SupplierDto {
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            direccion: self.direccion.clone(),
            ruc: self.ruc.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate_form;
    use serde_json::json;

    fn supplier() -> Supplier {
        serde_json::from_value(json!({
            "id": 3,
            "nombre": "TechCorp",
            "email": "ventas@techcorp.ec",
            "telefono": "0991234567",
            "direccion": "Av. Amazonas",
            "ruc": "1790012345001"
        }))
        .unwrap()
    }

    #[test]
    fn test_descriptor_keys_cover_every_field_once() {
        let keys: Vec<&str> = SUPPLIER_FIELDS.iter().map(|d| d.field.key()).collect();
        assert_eq!(keys, vec!["nombre", "email", "telefono", "direccion", "ruc"]);
    }

    #[test]
    fn test_form_get_set_through_descriptors() {
        let mut form = SupplierForm::default();
        for d in SUPPLIER_FIELDS.iter() {
            form.set(d.field, format!("{}-value", d.field.key()));
        }
        for d in SUPPLIER_FIELDS.iter() {
            assert_eq!(form.get(d.field), format!("{}-value", d.field.key()));
        }
        assert!(!form.is_edit());
    }

    #[test]
    fn test_edit_form_prefilled() {
        let s = supplier();
        let form = SupplierForm::from_supplier(&s);
        assert!(form.is_edit());
        assert_eq!(form.id.as_deref(), Some("3"));
        assert_eq!(form.get(SupplierField::Ruc), "1790012345001");
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_supplier_without_email_stays_editable() {
        let s: Supplier = serde_json::from_value(json!({
            "id": 5,
            "nombre": "Global Supplies",
            "email": null,
            "telefono": "022345678",
            "direccion": null,
            "ruc": "1790099999001"
        }))
        .unwrap();
        assert_eq!(s.email, "");

        let mut form = SupplierForm::from_supplier(&s);
        form.set(SupplierField::Telefono, "0998765432".to_string());
        assert!(validate_form(&form).is_ok());

        form.set(SupplierField::Email, "   ".to_string());
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_validation() {
        let mut form = SupplierForm::from_supplier(&supplier());
        form.set(SupplierField::Nombre, "T".to_string());
        form.set(SupplierField::Email, "no-es-email".to_string());

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(
            errors.get(SupplierField::Nombre.key()),
            Some("El nombre debe tener al menos 2 caracteres.")
        );
        assert_eq!(errors.get(SupplierField::Email.key()), Some("Ingrese un email válido."));
    }
}
