// src/models/reservation.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::{
        error::{AppError, LineErrorReason},
        validation::validate_flat_field,
    },
    db::flat_file::FlatRecord,
};

// --- RESERVA ---
// hotel_id e customer_id são só referências (sem cascata).
// As datas são texto livre: nenhum formato é validado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[validate(
        length(min = 1, message = "O ID da reserva é obrigatório."),
        custom(function = "validate_flat_field")
    )]
    pub id: String,

    #[validate(
        length(min = 1, message = "O ID do hotel é obrigatório."),
        custom(function = "validate_flat_field")
    )]
    pub hotel_id: String,

    #[validate(
        length(min = 1, message = "O ID do cliente é obrigatório."),
        custom(function = "validate_flat_field")
    )]
    pub customer_id: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub check_in: String,

    #[validate(custom(function = "validate_flat_field"))]
    pub check_out: String,
}

impl Reservation {
    pub fn new(
        id: impl Into<String>,
        hotel_id: impl Into<String>,
        customer_id: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            customer_id: customer_id.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }
}

// Formato: reservation_id|hotel_id|customer_id|check_in|check_out
impl FlatRecord for Reservation {
    const ENTITY: &'static str = "reserva";
    const FIELD_COUNT: usize = 5;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.hotel_id.clone(),
            self.customer_id.clone(),
            self.check_in.clone(),
            self.check_out.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, LineErrorReason> {
        Ok(Self::new(fields[0], fields[1], fields[2], fields[3], fields[4]))
    }

    fn not_found(key: &str) -> AppError {
        AppError::ReservationNotFound(key.to_string())
    }
}
