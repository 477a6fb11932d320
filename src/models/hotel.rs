// src/models/hotel.rs

use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{AppError, LineErrorReason},
        validation::validate_flat_field,
    },
    db::flat_file::FlatRecord,
};

// --- HOTEL ---
// Invariante: 0 <= rooms_available <= rooms_total.
// Por isso os contadores só mudam pelos métodos abaixo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_room_counts"))]
pub struct Hotel {
    #[validate(
        length(min = 1, message = "O ID do hotel é obrigatório."),
        custom(function = "validate_flat_field")
    )]
    pub id: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub name: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub location: String,

    rooms_total: u32,
    rooms_available: u32,
}

/// Alterações parciais: só os campos `Some` são aplicados.
#[derive(Debug, Clone, Default)]
pub struct HotelChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms_total: Option<u32>,
}

impl Hotel {
    /// Hotel novo: todos os quartos livres.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_total: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            rooms_total,
            rooms_available: rooms_total,
        }
    }

    pub fn rooms_total(&self) -> u32 {
        self.rooms_total
    }

    pub fn rooms_available(&self) -> u32 {
        self.rooms_available
    }

    /// Ocupa um quarto. Retorna `false` (sem alterar nada) se não houver quarto livre.
    pub fn reserve_room(&mut self) -> bool {
        if self.rooms_available > 0 {
            self.rooms_available -= 1;
            return true;
        }
        false
    }

    /// Libera um quarto, sem nunca passar do total.
    pub fn cancel_reservation(&mut self) {
        if self.rooms_available < self.rooms_total {
            self.rooms_available += 1;
        }
    }

    /// Aplica as alterações informadas. Mudar o total desloca os disponíveis pela
    /// mesma diferença (os quartos ocupados continuam ocupados), com piso em 0.
    pub fn modify_info(&mut self, changes: HotelChanges) -> bool {
        let mut modified = false;

        if let Some(name) = changes.name {
            self.name = name;
            modified = true;
        }

        if let Some(location) = changes.location {
            self.location = location;
            modified = true;
        }

        if let Some(new_total) = changes.rooms_total {
            let delta = i64::from(new_total) - i64::from(self.rooms_total);
            let available = (i64::from(self.rooms_available) + delta).max(0);
            self.rooms_total = new_total;
            // 0 <= available <= rooms_total antigo + delta == new_total
            self.rooms_available = available as u32;
            modified = true;
        }

        modified
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel ID: {}", self.id)?;
        writeln!(f, "Nome: {}", self.name)?;
        writeln!(f, "Localização: {}", self.location)?;
        writeln!(f, "Quartos totais: {}", self.rooms_total)?;
        write!(f, "Quartos disponíveis: {}", self.rooms_available)
    }
}

// Formato: hotel_id|nome|localizacao|rooms_total|rooms_available
impl FlatRecord for Hotel {
    const ENTITY: &'static str = "hotel";
    const FIELD_COUNT: usize = 5;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.location.clone(),
            self.rooms_total.to_string(),
            self.rooms_available.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, LineErrorReason> {
        let rooms_total = parse_count("rooms_total", fields[3])?;
        let rooms_available = parse_count("rooms_available", fields[4])?;

        if rooms_available > rooms_total {
            return Err(LineErrorReason::AvailabilityExceedsTotal {
                available: rooms_available,
                total: rooms_total,
            });
        }

        Ok(Self {
            id: fields[0].to_string(),
            name: fields[1].to_string(),
            location: fields[2].to_string(),
            rooms_total,
            rooms_available,
        })
    }

    fn not_found(key: &str) -> AppError {
        AppError::HotelNotFound(key.to_string())
    }
}

fn validate_room_counts(hotel: &Hotel) -> Result<(), ValidationError> {
    if hotel.rooms_available > hotel.rooms_total {
        let mut err = ValidationError::new("room_counts");
        err.message = Some(
            format!(
                "Quartos disponíveis ({}) excedem o total ({}).",
                hotel.rooms_available, hotel.rooms_total
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, LineErrorReason> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| LineErrorReason::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}
