// src/db/customer_repo.rs

use std::path::PathBuf;

use validator::Validate;

use crate::{
    common::error::AppError,
    db::flat_file::{FlatFileStore, LoadOutcome},
    models::customer::{Customer, CustomerChanges},
};

#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: FlatFileStore<Customer>,
}

impl CustomerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: FlatFileStore::new(path),
        }
    }

    pub fn load_all(&self) -> Result<LoadOutcome<Customer>, AppError> {
        self.store.load_all()
    }

    pub fn save_all(&self, customers: &[Customer]) -> Result<(), AppError> {
        self.store.save_all(customers)
    }

    pub fn create(&self, customer: Customer) -> Result<(), AppError> {
        self.store.create(customer)
    }

    // Não mexe nas reservas do cliente
    pub fn delete(&self, customer_id: &str) -> Result<(), AppError> {
        self.store.delete_by_key(customer_id)
    }

    pub fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, AppError> {
        self.store.find_by_key(customer_id)
    }

    pub fn modify(&self, customer_id: &str, changes: CustomerChanges) -> Result<bool, AppError> {
        let mut customers = self.load_all()?.records;
        let customer = customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| AppError::CustomerNotFound(customer_id.to_string()))?;

        if !customer.modify_info(changes) {
            return Ok(false);
        }
        customer.validate()?;

        self.save_all(&customers)?;
        tracing::info!("[cliente] '{}' atualizado", customer_id);
        Ok(true)
    }
}
