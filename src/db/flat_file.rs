// src/db/flat_file.rs

use std::{
    fs, io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use validator::Validate;

use crate::common::error::{AppError, LineError, LineErrorReason};

/// Separador de campos em todos os arquivos de dados.
pub const DELIMITER: char = '|';

/// Mapeamento entre um registro e uma linha do arquivo.
///
/// Cada tipo de entidade (hotel, cliente, reserva) implementa este trait;
/// o `FlatFileStore` cuida do resto (carregar, gravar, criar, remover).
pub trait FlatRecord: Sized + Validate {
    /// Nome usado em logs e diagnósticos.
    const ENTITY: &'static str;
    /// Quantidade exata de campos por linha.
    const FIELD_COUNT: usize;

    fn key(&self) -> &str;

    fn to_fields(&self) -> Vec<String>;

    /// Recebe exatamente `FIELD_COUNT` campos.
    fn from_fields(fields: &[&str]) -> Result<Self, LineErrorReason>;

    /// Erro devolvido quando uma chave não existe no arquivo.
    fn not_found(key: &str) -> AppError;
}

/// Resultado de uma carga: os registros válidos e as linhas puladas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome<R> {
    pub records: Vec<R>,
    pub diagnostics: Vec<LineError>,
}

impl<R> LoadOutcome<R> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

/// Repositório genérico sobre um único arquivo texto, um registro por linha.
/// Toda escrita reescreve o arquivo inteiro.
#[derive(Debug, Clone)]
pub struct FlatFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: FlatRecord> FlatFileStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Carrega todos os registros. Arquivo ausente = lista vazia.
    pub fn load_all(&self) -> Result<LoadOutcome<R>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::empty()),
            Err(e) => return Err(e.into()),
        };

        let outcome = parse_lines::<R>(&content);
        tracing::debug!(
            "[{}] {} registros carregados de {} ({} linhas puladas)",
            R::ENTITY,
            outcome.records.len(),
            self.path.display(),
            outcome.diagnostics.len()
        );
        Ok(outcome)
    }

    /// Sobrescreve o arquivo com `records`.
    /// Grava num arquivo temporário ao lado e renomeia por cima do original.
    pub fn save_all(&self, records: &[R]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let separator = DELIMITER.to_string();
        let mut body = String::new();
        for record in records {
            body.push_str(&record.to_fields().join(&separator));
            body.push('\n');
        }

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            "[{}] {} registros gravados em {}",
            R::ENTITY,
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Acrescenta `record` se a chave ainda não existir.
    /// Em caso de duplicata o arquivo não é tocado.
    pub fn create(&self, record: R) -> Result<(), AppError> {
        record.validate()?;

        let mut records = self.load_all()?.records;
        if records.iter().any(|r| r.key() == record.key()) {
            return Err(AppError::DuplicateKey {
                entity: R::ENTITY,
                id: record.key().to_string(),
            });
        }

        tracing::info!("[{}] '{}' criado", R::ENTITY, record.key());
        records.push(record);
        self.save_all(&records)
    }

    /// Remove o registro com a chave `key`.
    /// Se nada casar, devolve o erro "não encontrado" e o arquivo fica intacto.
    pub fn delete_by_key(&self, key: &str) -> Result<(), AppError> {
        let records = self.load_all()?.records;
        let before = records.len();
        let remaining: Vec<R> = records.into_iter().filter(|r| r.key() != key).collect();

        if remaining.len() == before {
            tracing::warn!("[{}] '{}' não encontrado para remoção", R::ENTITY, key);
            return Err(R::not_found(key));
        }

        self.save_all(&remaining)?;
        tracing::info!("[{}] '{}' removido", R::ENTITY, key);
        Ok(())
    }

    pub fn find_by_key(&self, key: &str) -> Result<Option<R>, AppError> {
        Ok(self
            .load_all()?
            .records
            .into_iter()
            .find(|r| r.key() == key))
    }
}

/// Converte o conteúdo do arquivo linha a linha.
/// Linhas em branco são ignoradas; linhas inválidas viram diagnóstico e a carga segue.
/// Só o terminador de linha é removido: espaços nas bordas fazem parte dos campos.
pub fn parse_lines<R: FlatRecord>(content: &str) -> LoadOutcome<R> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .fold(LoadOutcome::empty(), |mut acc, (line_number, line)| {
            match parse_line::<R>(line) {
                Ok(record) => acc.records.push(record),
                Err(reason) => {
                    let err = LineError {
                        entity: R::ENTITY,
                        line_number,
                        content: line.to_string(),
                        reason,
                    };
                    tracing::warn!("{}", err);
                    acc.diagnostics.push(err);
                }
            }
            acc
        })
}

fn parse_line<R: FlatRecord>(line: &str) -> Result<R, LineErrorReason> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != R::FIELD_COUNT {
        return Err(LineErrorReason::FieldCount {
            expected: R::FIELD_COUNT,
            found: fields.len(),
        });
    }
    R::from_fields(&fields)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
