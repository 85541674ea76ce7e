// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::models::data::FluctusData;
use crate::models::shopping::TripStatus;

/// Números da visão geral, calculados ao vivo sobre a raiz de dados.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub product_count: usize,
    pub kit_count: usize,
    pub client_count: usize,
    pub supplier_count: usize,
    pub open_trips: usize,
    /// Soma dos grandTotal de todas as viagens de compra.
    pub total_purchases: Decimal,
    /// Soma dos preços finais dos produtos do catálogo.
    pub catalog_value: Decimal,
    /// Média da margem real fotografada nos produtos.
    pub average_margin: Decimal,
    pub fund_balance: Decimal,
}

pub fn summarize(data: &FluctusData) -> DashboardSummary {
    let average_margin = if data.products.is_empty() {
        Decimal::ZERO
    } else {
        data.products.iter().map(|p| p.real_margin).sum::<Decimal>()
            / Decimal::from(data.products.len() as u64)
    };

    DashboardSummary {
        product_count: data.products.len(),
        kit_count: data.kits.len(),
        client_count: data.clients.len(),
        supplier_count: data.suppliers.len(),
        open_trips: data
            .shopping_trips
            .iter()
            .filter(|t| t.status == TripStatus::Open)
            .count(),
        total_purchases: data.shopping_trips.iter().map(|t| t.grand_total).sum(),
        catalog_value: data.products.iter().map(|p| p.final_price).sum(),
        average_margin,
        fund_balance: data.logistics_fund.balance,
    }
}
