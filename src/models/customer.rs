// src/models/customer.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::{
        error::{AppError, LineErrorReason},
        validation::validate_flat_field,
    },
    db::flat_file::FlatRecord,
};

// --- CLIENTE ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[validate(
        length(min = 1, message = "O ID do cliente é obrigatório."),
        custom(function = "validate_flat_field")
    )]
    pub id: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub name: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub phone: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn modify_info(&mut self, changes: CustomerChanges) -> bool {
        let mut modified = false;

        if let Some(name) = changes.name {
            self.name = name;
            modified = true;
        }

        if let Some(phone) = changes.phone {
            self.phone = phone;
            modified = true;
        }

        if let Some(email) = changes.email {
            self.email = email;
            modified = true;
        }

        modified
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.id)?;
        writeln!(f, "Nome: {}", self.name)?;
        writeln!(f, "Telefone: {}", self.phone)?;
        write!(f, "Email: {}", self.email)
    }
}

// Formato: customer_id|nome|telefone|email
impl FlatRecord for Customer {
    const ENTITY: &'static str = "cliente";
    const FIELD_COUNT: usize = 4;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, LineErrorReason> {
        Ok(Self::new(fields[0], fields[1], fields[2], fields[3]))
    }

    fn not_found(key: &str) -> AppError {
        AppError::CustomerNotFound(key.to_string())
    }
}
