// src/db/hotel_repo.rs

use std::path::PathBuf;

use validator::Validate;

use crate::{
    common::error::AppError,
    db::flat_file::{FlatFileStore, LoadOutcome},
    models::hotel::{Hotel, HotelChanges},
};

// O repositório de hotéis, responsável por todas as interações com o arquivo de hotéis
#[derive(Debug, Clone)]
pub struct HotelRepository {
    store: FlatFileStore<Hotel>,
}

impl HotelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: FlatFileStore::new(path),
        }
    }

    pub fn load_all(&self) -> Result<LoadOutcome<Hotel>, AppError> {
        self.store.load_all()
    }

    pub fn save_all(&self, hotels: &[Hotel]) -> Result<(), AppError> {
        self.store.save_all(hotels)
    }

    pub fn create(&self, hotel: Hotel) -> Result<(), AppError> {
        self.store.create(hotel)
    }

    pub fn delete(&self, hotel_id: &str) -> Result<(), AppError> {
        self.store.delete_by_key(hotel_id)
    }

    pub fn find_by_id(&self, hotel_id: &str) -> Result<Option<Hotel>, AppError> {
        self.store.find_by_key(hotel_id)
    }

    /// Aplica `changes` ao hotel e regrava o arquivo se algo mudou.
    pub fn modify(&self, hotel_id: &str, changes: HotelChanges) -> Result<bool, AppError> {
        let mut hotels = self.load_all()?.records;
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id == hotel_id)
            .ok_or_else(|| AppError::HotelNotFound(hotel_id.to_string()))?;

        if !hotel.modify_info(changes) {
            return Ok(false);
        }
        hotel.validate()?;

        self.save_all(&hotels)?;
        tracing::info!("[hotel] '{}' atualizado", hotel_id);
        Ok(true)
    }
}
