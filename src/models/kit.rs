// src/models/kit.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KitItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub qty: Decimal,
    /// Vende sem a embalagem própria do produto: o custo de extras sai
    /// tanto do preço quanto do custo de produção do item.
    pub without_packaging: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KitExtra {
    pub id: Uuid,
    pub extra_id: Uuid,
    pub qty: Decimal,
}

// rawTotal, totalProductionCost, displayPrice e margin são fotografias do
// último recálculo, como nos produtos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kit {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<KitItem>,
    /// Embalagens cobradas no nível do kit (caixa, laço...).
    pub kit_extras: Vec<KitExtra>,
    /// Desconto (%) sobre a soma cheia dos produtos.
    pub discount: Decimal,
    /// Preço fechado do kit; 0 = usar rawTotal com desconto.
    pub final_price: Decimal,

    // Derivados
    /// Soma dos preços cheios dos produtos (antes do desconto).
    pub raw_total: Decimal,
    pub total_production_cost: Decimal,
    pub display_price: Decimal,
    pub margin: Decimal,
}
