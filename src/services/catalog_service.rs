// src/services/catalog_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;
use crate::models::catalog::{Extra, Material, Quote};
use crate::models::data::FluctusData;
use crate::services::quote_service::Quotable;

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

fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("exclusiveMin".into(), &0.0);
        err.message = Some("O rendimento deve ser maior que zero.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: insumos e embalagens (mesma forma de precificação)
// ---
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceableItemPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A unidade de compra é obrigatória."))]
    pub buy_unit: String,

    #[validate(length(min = 1, message = "A unidade de uso é obrigatória."))]
    pub use_unit: String,

    #[validate(custom(function = "validate_positive"))]
    #[serde(rename = "yield")]
    pub yield_factor: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub price: Option<Decimal>,

    pub composition: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotePayload {
    pub supplier_id: Uuid,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Decimal,

    pub obs: Option<String>,
}

pub fn create_material(
    data: &mut FluctusData,
    payload: NewPriceableItemPayload,
) -> Result<Material, AppError> {
    payload.validate()?;

    let material = Material {
        id: Uuid::new_v4(),
        name: payload.name,
        buy_unit: payload.buy_unit,
        use_unit: payload.use_unit,
        yield_factor: payload.yield_factor,
        composition: payload.composition,
        price: payload.price,
        quotes: Vec::new(),
        selected_quote_id: None,
        created_at: Some(Utc::now()),
    };
    data.materials.push(material.clone());
    Ok(material)
}

pub fn create_extra(
    data: &mut FluctusData,
    payload: NewPriceableItemPayload,
) -> Result<Extra, AppError> {
    payload.validate()?;

    let extra = Extra {
        id: Uuid::new_v4(),
        name: payload.name,
        buy_unit: payload.buy_unit,
        use_unit: payload.use_unit,
        yield_factor: payload.yield_factor,
        price: payload.price,
        quotes: Vec::new(),
        selected_quote_id: None,
        created_at: Some(Utc::now()),
    };
    data.extras.push(extra.clone());
    Ok(extra)
}

/// Anexa uma cotação a um insumo ou embalagem. As cotações pertencem ao
/// item pai e são acrescentadas/removidas de forma independente.
pub fn add_quote_for<T: Quotable>(item: &mut T, payload: NewQuotePayload) -> Result<Quote, AppError> {
    payload.validate()?;

    let quote = Quote {
        id: Uuid::new_v4(),
        supplier_id: payload.supplier_id,
        price: payload.price,
        obs: payload.obs,
    };
    item.quotes_mut().push(quote.clone());
    Ok(quote)
}
