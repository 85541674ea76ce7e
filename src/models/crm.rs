// src/models/crm.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Etiquetas padrão do sistema para classificação de clientes.
pub const SYSTEM_TAGS: [&str; 8] = [
    "VIP",
    "Atacado",
    "Revenda",
    "Influencer",
    "Amigo",
    "Black Friday",
    "Novo",
    "Problemático",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientComment {
    pub id: Uuid,
    pub text: String,
    pub date: Option<NaiveDate>,
}

/// Cupom concedido a um cliente a partir de uma promoção.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDiscount {
    pub id: Uuid,
    pub promotion_id: Uuid,
    pub code: String,
    pub description: String,
    pub valid_until: Option<NaiveDate>,
    pub date_given: Option<NaiveDate>,
    pub used: bool,
    pub used_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cep: Option<String>,
    pub rua: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub notes: Option<String>,
    pub rating: Option<String>,
    pub gender: Option<String>,
    pub tags: Vec<String>,
    /// Histórico de compras, forma livre (legado do acervo).
    pub purchases: Vec<serde_json::Value>,
    pub comments: Vec<ClientComment>,
    pub discounts: Vec<ClientDiscount>,
}

// --- Promoções ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PromotionType {
    /// Leve X, pague Y.
    TakeXPayY,
    /// Cupom com limite de tempo.
    TimeCoupon,
    /// Frete grátis com valor mínimo.
    FreeShipping,
    /// Desconto ao adicionar outro produto.
    CrossSelling,
    Seasonal,
    /// Desconto progressivo (mais compra = mais desconto).
    Progressive,
    FirstPurchase,
    /// Desconto simples em %.
    #[default]
    Percentage,
    FixedValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromotionTarget {
    #[default]
    All,
    Tags,
    Individual,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressiveTier {
    pub min_qty: Decimal,
    pub discount: Decimal,
}

// Registro completo da campanha. A AVALIAÇÃO de promoções num pedido fica
// fora do motor de precificação; aqui a campanha é cadastrada, direcionada
// e contabilizada.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PromotionType,
    pub description: String,
    /// Código do cupom (opcional).
    pub code: Option<String>,

    pub discount_percent: Option<Decimal>,
    pub discount_value: Option<Decimal>,

    // Leve X pague Y
    pub take_quantity: Option<u32>,
    pub pay_quantity: Option<u32>,

    // Frete grátis
    pub min_order_value: Option<Decimal>,

    pub progressive_tiers: Option<Vec<ProgressiveTier>>,

    // Venda cruzada
    pub required_product_id: Option<Uuid>,
    pub discount_product_id: Option<Uuid>,

    // Direcionamento
    pub target_type: PromotionTarget,
    pub target_tags: Option<Vec<String>>,
    pub target_client_ids: Option<Vec<Uuid>>,

    // Vigência
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,

    // Limites de uso
    pub max_uses_total: Option<u32>,
    pub max_uses_per_client: Option<u32>,

    // Contadores
    pub total_given: u32,
    pub total_used: u32,

    pub created_at: Option<DateTime<Utc>>,
}
