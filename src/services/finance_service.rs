// src/services/finance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;
use crate::models::finance::{FixedCostItem, FixedCosts, LogisticsFund, LogisticsFundDeposit};
use crate::models::shopping::ShoppingTrip;

// ---
// Validação Customizada
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// --- Custos fixos ---

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewFixedCostPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(custom(function = "validate_not_negative"))]
    pub value: Decimal,
}

fn recompute_fixed_total(fixed_costs: &mut FixedCosts) {
    fixed_costs.total = fixed_costs.items.iter().map(|i| i.value).sum();
}

/// Adiciona um custo fixo mensal e atualiza o total na mesma operação.
pub fn add_fixed_cost_item(
    fixed_costs: &mut FixedCosts,
    payload: NewFixedCostPayload,
) -> Result<FixedCostItem, AppError> {
    payload.validate()?;

    let item = FixedCostItem {
        id: Uuid::new_v4(),
        name: payload.name,
        value: payload.value,
    };
    fixed_costs.items.push(item.clone());
    recompute_fixed_total(fixed_costs);
    Ok(item)
}

pub fn remove_fixed_cost_item(fixed_costs: &mut FixedCosts, item_id: Uuid) {
    fixed_costs.items.retain(|i| i.id != item_id);
    recompute_fixed_total(fixed_costs);
}

pub fn set_estimated_sales(fixed_costs: &mut FixedCosts, estimated_sales: Decimal) {
    fixed_costs.estimated_sales = estimated_sales;
}

// --- Fundo de logística ---

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDepositPayload {
    pub date: Option<NaiveDate>,

    #[validate(custom(function = "validate_not_negative"))]
    pub value: Decimal,

    pub description: Option<String>,
}

/// Refaz os agregados do fundo. Só viagens com a despesa CONFIRMADA
/// entram no totalSpent; o saldo pode ficar negativo (estado válido, que
/// sinaliza a necessidade de novo aporte).
pub fn recompute_fund(fund: &mut LogisticsFund, trips: &[ShoppingTrip]) {
    fund.total_deposited = fund.deposits.iter().map(|d| d.value).sum();
    fund.total_spent = trips
        .iter()
        .filter(|t| t.logistics_confirmed)
        .map(|t| t.total_logistics)
        .sum();
    fund.balance = fund.total_deposited - fund.total_spent;
}

pub fn record_deposit(
    fund: &mut LogisticsFund,
    trips: &[ShoppingTrip],
    payload: NewDepositPayload,
) -> Result<LogisticsFundDeposit, AppError> {
    payload.validate()?;

    let deposit = LogisticsFundDeposit {
        id: Uuid::new_v4(),
        date: payload.date,
        value: payload.value,
        description: payload.description,
    };
    fund.deposits.push(deposit.clone());
    recompute_fund(fund, trips);
    Ok(deposit)
}

pub fn remove_deposit(fund: &mut LogisticsFund, trips: &[ShoppingTrip], deposit_id: Uuid) {
    fund.deposits.retain(|d| d.id != deposit_id);
    recompute_fund(fund, trips);
}

/// Marca a despesa de logística da viagem como abatida do fundo.
/// Confirmar de novo não duplica nada: o gasto é recomputado por soma
/// filtrada, nunca por acumulação.
pub fn confirm_expense(
    trips: &mut [ShoppingTrip],
    fund: &mut LogisticsFund,
    trip_id: Uuid,
) -> Result<(), AppError> {
    {
        let trip = trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(AppError::TripNotFound)?;
        trip.logistics_confirmed = true;
    }
    recompute_fund(fund, trips);
    Ok(())
}

/// Válvula de escape: desfaz a confirmação e devolve o valor ao saldo.
pub fn unconfirm_expense(
    trips: &mut [ShoppingTrip],
    fund: &mut LogisticsFund,
    trip_id: Uuid,
) -> Result<(), AppError> {
    {
        let trip = trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(AppError::TripNotFound)?;
        trip.logistics_confirmed = false;
    }
    recompute_fund(fund, trips);
    Ok(())
}
