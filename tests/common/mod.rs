#![allow(dead_code)]

use std::path::{Path, PathBuf};

use hotel_reservas::{AppConfig, AppState};
use uuid::Uuid;

// Cada teste ganha seu próprio diretório de dados
pub struct TestEnv {
    dir: PathBuf,
    pub state: AppState,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("hotel-reservas-it-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("falha ao criar diretório temporário");
        let state = AppState::from_config(AppConfig::in_dir(&dir));
        Self { dir, state }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn hotels_file(&self) -> &Path {
        &self.state.config.hotels_file
    }

    pub fn reservations_file(&self) -> &Path {
        &self.state.config.reservations_file
    }

    pub fn rooms_available(&self, hotel_id: &str) -> u32 {
        self.state
            .hotel_repo
            .find_by_id(hotel_id)
            .unwrap()
            .expect("hotel deveria existir")
            .rooms_available()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Lê o arquivo, ou `None` se ele não existir.
pub fn snapshot(path: &Path) -> Option<Vec<u8>> {
    std::fs::read(path).ok()
}
