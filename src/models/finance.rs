// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Custos fixos ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedCostItem {
    pub id: Uuid,
    pub name: String,
    pub value: Decimal,
}

/// Custos fixos mensais e a estimativa de vendas usada no rateio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedCosts {
    /// Soma de items[].value, mantida junto com cada mutação da lista.
    pub total: Decimal,
    /// Volume mensal estimado de unidades vendidas.
    pub estimated_sales: Decimal,
    pub items: Vec<FixedCostItem>,
}

impl Default for FixedCosts {
    fn default() -> Self {
        Self {
            total: Decimal::ZERO,
            estimated_sales: Decimal::ONE_HUNDRED,
            items: Vec::new(),
        }
    }
}

// --- Fundo de logística ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogisticsFundDeposit {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub value: Decimal,
    pub description: Option<String>,
}

/// Caixa reservado para transporte e alimentação das viagens de compra.
/// Saldo negativo é um estado válido e exibido: sinaliza que o fundo
/// precisa de novo aporte.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogisticsFund {
    pub deposits: Vec<LogisticsFundDeposit>,
    pub total_deposited: Decimal,
    /// Soma do totalLogistics das viagens CONFIRMADAS.
    pub total_spent: Decimal,
    pub balance: Decimal,
}
