use std::path::PathBuf;

use uuid::Uuid;

// Diretório temporário único por teste (removido pelo guard no Drop)
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("hotel-reservas-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("falha ao criar diretório temporário");
        Self(dir)
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}
