// src/store.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use crate::common::error::AppError;
use crate::models::data::FluctusData;
use crate::services::finance_service::recompute_fund;
use crate::services::shopping_service::recompute_trip;

/// Persistência do acervo completo num único documento JSON.
///
/// A gravação é melhor-esforço: falha de E/S é registrada no log e nunca
/// corrompe o estado em memória nem interrompe a operação que a disparou.
pub struct JsonStore {
    path: PathBuf,
}

// Migração de backups antigos: chave ausente assume o valor padrão (feito
// pelo serde na desserialização) e os totais de viagens/fundo são refeitos
// — eles são desnormalizações puras das próprias linhas. As fotografias de
// produtos e kits NÃO são recalculadas aqui: a defasagem delas é
// proposital e só um recálculo explícito as atualiza.
fn migrate(mut data: FluctusData) -> FluctusData {
    for trip in &mut data.shopping_trips {
        recompute_trip(trip);
    }
    recompute_fund(&mut data.logistics_fund, &data.shopping_trips);
    data
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Carrega o acervo. Arquivo ausente vale acervo vazio.
    pub fn load(&self) -> Result<FluctusData, AppError> {
        if !self.path.exists() {
            return Ok(FluctusData::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let data: FluctusData = serde_json::from_str(&raw)?;
        Ok(migrate(data))
    }

    /// Grava o acervo completo, com indentação de 2 espaços. Falha vira
    /// log de erro; o chamador segue com o estado em memória intacto.
    pub fn save(&self, data: &FluctusData) {
        match serde_json::to_string_pretty(data) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::error!(
                        "Falha ao persistir os dados em {}: {}",
                        self.path.display(),
                        e
                    );
                }
            }
            Err(e) => tracing::error!("Falha ao serializar os dados: {}", e),
        }
    }

    /// Exporta um backup datado (fluctus-backup-<data ISO>.json) e devolve
    /// o caminho gravado.
    pub fn backup(&self, data: &FluctusData, dir: &Path) -> Result<PathBuf, AppError> {
        let file = dir.join(format!("fluctus-backup-{}.json", Utc::now().date_naive()));
        let json = serde_json::to_string_pretty(data)?;
        fs::create_dir_all(dir)
            .and_then(|_| fs::write(&file, &json))
            .with_context(|| format!("falha ao gravar o backup em {}", file.display()))?;
        Ok(file)
    }

    /// Restaura um backup. O arquivo é interpretado por inteiro ANTES de
    /// qualquer coisa: JSON inválido devolve erro e o estado corrente do
    /// chamador permanece como estava.
    pub fn restore(path: &Path) -> Result<FluctusData, AppError> {
        let raw = fs::read_to_string(path)?;
        let data: FluctusData = serde_json::from_str(&raw).map_err(AppError::BackupParse)?;
        Ok(migrate(data))
    }
}
