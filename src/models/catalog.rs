// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Cotações ---

/// Preço ofertado por um fornecedor para um insumo ou embalagem.
/// Pertence exclusivamente ao item pai, nunca é compartilhada.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub id: Uuid,
    pub supplier_id: Uuid,
    /// Custo por unidade de COMPRA junto a este fornecedor.
    pub price: Decimal,
    pub obs: Option<String>,
}

// --- Insumos (Materiais) ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    /// Unidade em que o item é comprado (kg, rolo, milheiro...).
    pub buy_unit: String,
    /// Unidade em que o item é consumido na produção (m, un...).
    pub use_unit: String,
    /// Rendimento: unidades de uso obtidas de 1 unidade de compra.
    #[serde(rename = "yield")]
    pub yield_factor: Decimal,
    /// Composição do tecido ("92% poliamida, 8% elastano").
    pub composition: Option<String>,
    /// Preço base de fallback quando não há cotações.
    pub price: Option<Decimal>,
    pub quotes: Vec<Quote>,
    /// Cotação escolhida para os cálculos; ausente = a mais barata vale.
    pub selected_quote_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

// --- Embalagens (Extras) ---

// Mesma forma de precificação dos insumos: cotações, rendimento e
// preço base. A diferença é só o papel no produto (embalagem/acabamento).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extra {
    pub id: Uuid,
    pub name: String,
    pub buy_unit: String,
    pub use_unit: String,
    #[serde(rename = "yield")]
    pub yield_factor: Decimal,
    pub price: Option<Decimal>,
    pub quotes: Vec<Quote>,
    pub selected_quote_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

// --- Fornecedores e Polos ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub contact: Option<String>,
    pub phone: Option<String>,
    /// Polo de compras ao qual o fornecedor pertence (Brás, Bom Retiro...).
    pub polo_id: Option<Uuid>,
    pub cep: Option<String>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Polo {
    pub id: Uuid,
    pub name: String,
    pub cep: Option<String>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
}
