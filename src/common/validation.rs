use validator::ValidationError;

use crate::db::flat_file::DELIMITER;

// ---
// Validação Customizada
// ---
// Um campo gravado no arquivo não pode conter o separador nem quebra de linha,
// senão a linha não volta a ser lida com o mesmo número de campos.
pub fn validate_flat_field(value: &str) -> Result<(), ValidationError> {
    if value.contains(DELIMITER) || value.contains(['\n', '\r']) {
        let mut err = ValidationError::new("flat_field");
        err.message = Some(
            format!("O valor não pode conter '{}' nem quebras de linha.", DELIMITER).into(),
        );
        return Err(err);
    }
    Ok(())
}
