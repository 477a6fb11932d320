use thiserror::Error;

// Categorias de falha. Cada variante de AppError cai em exatamente uma delas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DuplicateKey,
    CapacityExceeded,
    Validation,
    Storage,
}

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O texto do `#[error]` é a mensagem que o chamador mostra ao usuário.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("O hotel '{0}' não existe.")]
    HotelNotFound(String),

    #[error("O cliente '{0}' não existe.")]
    CustomerNotFound(String),

    #[error("Reserva '{0}' não encontrada.")]
    ReservationNotFound(String),

    // Criação direta em um repositório com ID já usado
    #[error("Já existe um registro de {entity} com ID '{id}'.")]
    DuplicateKey { entity: &'static str, id: String },

    // Criação de reserva pelo coordenador com ID já usado
    #[error("A reserva '{0}' já existe.")]
    DuplicateReservation(String),

    #[error("Não há quartos disponíveis no hotel '{0}'.")]
    NoRoomsAvailable(String),

    #[error("Erro de validação: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    // Falha de leitura/escrita dos arquivos
    #[error("Erro de armazenamento: {0}")]
    StorageError(#[from] std::io::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::HotelNotFound(_)
            | AppError::CustomerNotFound(_)
            | AppError::ReservationNotFound(_) => ErrorKind::NotFound,
            AppError::DuplicateKey { .. } | AppError::DuplicateReservation(_) => {
                ErrorKind::DuplicateKey
            }
            AppError::NoRoomsAvailable(_) => ErrorKind::CapacityExceeded,
            AppError::ValidationError(_) => ErrorKind::Validation,
            AppError::StorageError(_) => ErrorKind::Storage,
        }
    }
}

// ---
// Erros de linha (não fatais)
// ---

/// Uma linha do arquivo que não pôde ser convertida em registro.
/// A carga continua; a linha é pulada e este diagnóstico é devolvido ao chamador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{entity}] linha {line_number} inválida: '{content}'. {reason}")]
pub struct LineError {
    pub entity: &'static str,
    pub line_number: usize,
    pub content: String,
    pub reason: LineErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorReason {
    #[error("Esperados {expected} campos, encontrados {found}.")]
    FieldCount { expected: usize, found: usize },

    #[error("O campo '{field}' não é um inteiro válido: '{value}'.")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Quartos disponíveis ({available}) excedem o total ({total}).")]
    AvailabilityExceedsTotal { available: u32, total: u32 },
}
