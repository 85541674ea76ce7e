// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As funções de cálculo puras nunca falham (entradas degeneradas degradam
// para valores seguros); estas variantes cobrem validação e persistência.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Viagem de compras não encontrada")]
    TripNotFound,

    #[error("Nota de compra não encontrada")]
    InvoiceNotFound,

    #[error("Backup inválido: {0}")]
    BackupParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}
