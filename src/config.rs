// src/config.rs

use std::env;
use std::path::PathBuf;

/// Configuração da aplicação, carregada do ambiente (.env opcional).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Documento JSON único com todo o acervo.
    pub data_file: PathBuf,
    /// Diretório onde os backups datados são gravados.
    pub backup_dir: PathBuf,
}

impl AppConfig {
    // A assinatura retorna um Result: se a configuração falhar no futuro
    // (diretório inválido, por exemplo), o chamador decide o que fazer.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_file = env::var("FLUCTUS_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("fluctus-data.json"));

        let backup_dir = env::var("FLUCTUS_BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        tracing::info!("📁 Arquivo de dados: {}", data_file.display());

        Ok(Self {
            data_file,
            backup_dir,
        })
    }
}
