// src/config.rs

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    db::{CustomerRepository, HotelRepository, ReservationRepository},
    services::ReservationService,
};

const DEFAULT_DATA_DIR: &str = "data";

/// Caminhos dos três arquivos de dados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub hotels_file: PathBuf,
    pub customers_file: PathBuf,
    pub reservations_file: PathBuf,
}

impl AppConfig {
    /// Layout padrão dentro de `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            hotels_file: dir.join("hotels_data.txt"),
            customers_file: dir.join("customers_data.txt"),
            reservations_file: dir.join("reservations_data.txt"),
        }
    }

    /// Lê o `.env` (se existir) e as variáveis HOTEL_DATA_DIR, HOTELS_FILE,
    /// CUSTOMERS_FILE e RESERVATIONS_FILE. O que faltar cai no layout padrão.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var_os("HOTEL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let defaults = Self::in_dir(&data_dir);

        Self {
            hotels_file: path_from_env("HOTELS_FILE").unwrap_or(defaults.hotels_file),
            customers_file: path_from_env("CUSTOMERS_FILE").unwrap_or(defaults.customers_file),
            reservations_file: path_from_env("RESERVATIONS_FILE")
                .unwrap_or(defaults.reservations_file),
        }
    }

    fn files(&self) -> [&Path; 3] {
        [
            self.hotels_file.as_path(),
            self.customers_file.as_path(),
            self.reservations_file.as_path(),
        ]
    }
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

// O estado compartilhado: repositórios e o coordenador de reservas
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub hotel_repo: HotelRepository,
    pub customer_repo: CustomerRepository,
    pub reservation_repo: ReservationRepository,
    pub reservation_service: ReservationService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        for file in config.files() {
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Falha ao criar o diretório de dados {}", parent.display())
                })?;
            }
        }

        tracing::info!(
            "Arquivos de dados: {}, {}, {}",
            config.hotels_file.display(),
            config.customers_file.display(),
            config.reservations_file.display()
        );

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: AppConfig) -> Self {
        // --- Monta o gráfico de dependências ---
        let hotel_repo = HotelRepository::new(&config.hotels_file);
        let customer_repo = CustomerRepository::new(&config.customers_file);
        let reservation_repo = ReservationRepository::new(&config.reservations_file);
        let reservation_service = ReservationService::new(
            hotel_repo.clone(),
            customer_repo.clone(),
            reservation_repo.clone(),
        );

        Self {
            config,
            hotel_repo,
            customer_repo,
            reservation_repo,
            reservation_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_under_dir() {
        let cfg = AppConfig::in_dir("/tmp/hoteis");
        assert_eq!(cfg.hotels_file, PathBuf::from("/tmp/hoteis/hotels_data.txt"));
        assert_eq!(cfg.customers_file, PathBuf::from("/tmp/hoteis/customers_data.txt"));
        assert_eq!(
            cfg.reservations_file,
            PathBuf::from("/tmp/hoteis/reservations_data.txt")
        );
    }
}
