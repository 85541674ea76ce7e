// src/models/shopping.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Logística da viagem ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogisticsType {
    #[default]
    Transport,
    Food,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogisticsItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: LogisticsType,
    pub desc: String,
    pub value: Decimal,
}

// --- Notas de compra ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceItemKind {
    #[default]
    Material,
    Extra,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: InvoiceItemKind,
    /// Referência ao insumo/embalagem do catálogo, quando houver.
    pub item_id: Option<Uuid>,
    pub qty: Decimal,
    /// Preço unitário pago nesta compra.
    pub price: Decimal,
    /// Descrição livre para itens do tipo "other".
    pub description: Option<String>,
    /// Fora do total: o item aparece na nota mas não soma em totalGoods.
    pub include_in_total: bool,
}

// `includeInTotal` ausente no JSON vale true.
impl Default for InvoiceItem {
    fn default() -> Self {
        Self {
            id: Uuid::default(),
            kind: InvoiceItemKind::default(),
            item_id: None,
            qty: Decimal::ZERO,
            price: Decimal::ZERO,
            description: None,
            include_in_total: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Value,
    #[default]
    Percent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub id: Uuid,
    pub supplier_id: Uuid,
    /// Desconto único da nota: percentual ou valor, conforme discountType.
    pub discount: Decimal,
    /// Valor absoluto do desconto, normalizado a cada recálculo da viagem.
    pub discount_value: Decimal,
    pub discount_type: DiscountType,
    pub items: Vec<InvoiceItem>,
}

// --- Viagem de compras ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Open,
    Completed,
}

// totalLogistics/totalGoods/grandTotal são recalculados e gravados junto
// com QUALQUER mutação de logística ou notas, nunca de forma preguiçosa.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShoppingTrip {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub status: TripStatus,
    pub logistics: Vec<LogisticsItem>,
    pub invoices: Vec<Invoice>,
    pub total_logistics: Decimal,
    pub total_goods: Decimal,
    pub grand_total: Decimal,
    /// Despesa de logística já abatida do fundo? Ortogonal ao status da
    /// viagem; só viagens confirmadas entram no totalSpent do fundo.
    pub logistics_confirmed: bool,
}
