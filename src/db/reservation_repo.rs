// src/db/reservation_repo.rs

use std::path::PathBuf;

use crate::{
    common::error::AppError,
    db::flat_file::{FlatFileStore, LoadOutcome},
    models::reservation::Reservation,
};

// Sem `create`/`delete` públicos: reservas só nascem e morrem pelo ReservationService.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    store: FlatFileStore<Reservation>,
}

impl ReservationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: FlatFileStore::new(path),
        }
    }

    pub fn load_all(&self) -> Result<LoadOutcome<Reservation>, AppError> {
        self.store.load_all()
    }

    pub fn save_all(&self, reservations: &[Reservation]) -> Result<(), AppError> {
        self.store.save_all(reservations)
    }

    pub fn find_by_id(&self, reservation_id: &str) -> Result<Option<Reservation>, AppError> {
        self.store.find_by_key(reservation_id)
    }
}
