// src/services/shopping_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::shopping::{DiscountType, Invoice, InvoiceItem, LogisticsItem, ShoppingTrip};

#[derive(Debug, Clone, PartialEq)]
pub struct TripTotals {
    pub total_logistics: Decimal,
    pub total_goods: Decimal,
    pub grand_total: Decimal,
}

/// Soma dos itens da nota que contam para o total (includeInTotal).
pub fn invoice_items_total(invoice: &Invoice) -> Decimal {
    invoice
        .items
        .iter()
        .filter(|item| item.include_in_total)
        .map(|item| item.qty * item.price)
        .sum()
}

/// Valor absoluto do desconto da nota, percentual ou fixo.
pub fn invoice_discount_amount(invoice: &Invoice) -> Decimal {
    let items_total = invoice_items_total(invoice);
    match invoice.discount_type {
        DiscountType::Percent => items_total * invoice.discount / Decimal::ONE_HUNDRED,
        DiscountType::Value => invoice.discount,
    }
}

pub fn invoice_total(invoice: &Invoice) -> Decimal {
    invoice_items_total(invoice) - invoice_discount_amount(invoice)
}

/// Totais da viagem, função pura sobre o estado atual.
pub fn trip_totals(trip: &ShoppingTrip) -> TripTotals {
    let total_logistics = trip.logistics.iter().map(|l| l.value).sum::<Decimal>();
    let total_goods = trip.invoices.iter().map(invoice_total).sum::<Decimal>();
    TripTotals {
        total_logistics,
        total_goods,
        grand_total: total_logistics + total_goods,
    }
}

/// Recalcula e GRAVA os totais na viagem, normalizando o discountValue de
/// cada nota. Toda mutação de logística/notas passa por aqui na mesma
/// operação — os totais armazenados nunca ficam defasados dentro do
/// próprio caminho de mutação da viagem.
pub fn recompute_trip(trip: &mut ShoppingTrip) {
    for invoice in &mut trip.invoices {
        invoice.discount_value = invoice_discount_amount(invoice);
    }
    let totals = trip_totals(trip);
    trip.total_logistics = totals.total_logistics;
    trip.total_goods = totals.total_goods;
    trip.grand_total = totals.grand_total;
}

// --- Mutações (sempre com recálculo junto) ---

pub fn add_logistics_item(trip: &mut ShoppingTrip, item: LogisticsItem) {
    trip.logistics.push(item);
    recompute_trip(trip);
}

pub fn remove_logistics_item(trip: &mut ShoppingTrip, item_id: Uuid) {
    trip.logistics.retain(|l| l.id != item_id);
    recompute_trip(trip);
}

pub fn add_invoice(trip: &mut ShoppingTrip, invoice: Invoice) {
    trip.invoices.push(invoice);
    recompute_trip(trip);
}

pub fn remove_invoice(trip: &mut ShoppingTrip, invoice_id: Uuid) {
    trip.invoices.retain(|i| i.id != invoice_id);
    recompute_trip(trip);
}

pub fn add_invoice_item(
    trip: &mut ShoppingTrip,
    invoice_id: Uuid,
    item: InvoiceItem,
) -> Result<(), AppError> {
    let invoice = trip
        .invoices
        .iter_mut()
        .find(|i| i.id == invoice_id)
        .ok_or(AppError::InvoiceNotFound)?;
    invoice.items.push(item);
    recompute_trip(trip);
    Ok(())
}

pub fn remove_invoice_item(
    trip: &mut ShoppingTrip,
    invoice_id: Uuid,
    item_id: Uuid,
) -> Result<(), AppError> {
    let invoice = trip
        .invoices
        .iter_mut()
        .find(|i| i.id == invoice_id)
        .ok_or(AppError::InvoiceNotFound)?;
    invoice.items.retain(|item| item.id != item_id);
    recompute_trip(trip);
    Ok(())
}

/// Fecha o desconto da nota (percentual ou valor fixo).
pub fn set_invoice_discount(
    trip: &mut ShoppingTrip,
    invoice_id: Uuid,
    discount: Decimal,
    discount_type: DiscountType,
) -> Result<(), AppError> {
    let invoice = trip
        .invoices
        .iter_mut()
        .find(|i| i.id == invoice_id)
        .ok_or(AppError::InvoiceNotFound)?;
    invoice.discount = discount;
    invoice.discount_type = discount_type;
    recompute_trip(trip);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shopping::{InvoiceItemKind, LogisticsType, TripStatus};

    fn item(qty: i64, price: Decimal) -> InvoiceItem {
        InvoiceItem {
            id: Uuid::new_v4(),
            kind: InvoiceItemKind::Material,
            qty: Decimal::from(qty),
            price,
            ..InvoiceItem::default()
        }
    }

    fn trip_com_nota(items: Vec<InvoiceItem>) -> (ShoppingTrip, Uuid) {
        let invoice = Invoice {
            id: Uuid::new_v4(),
            supplier_id: Uuid::new_v4(),
            items,
            ..Invoice::default()
        };
        let invoice_id = invoice.id;
        let mut trip = ShoppingTrip {
            id: Uuid::new_v4(),
            status: TripStatus::Open,
            invoices: vec![invoice],
            ..ShoppingTrip::default()
        };
        recompute_trip(&mut trip);
        (trip, invoice_id)
    }

    #[test]
    fn totais_da_viagem_de_demonstracao() {
        let mut trip = crate::models::FluctusData::seed().shopping_trips[0].clone();
        recompute_trip(&mut trip);

        // 25.00 + 18.50 + 28.00
        assert_eq!(trip.total_logistics, Decimal::new(7150, 2));
        // 20 x 44.00 - 10.00 de desconto fixo
        assert_eq!(trip.total_goods, Decimal::from(870));
        assert_eq!(trip.grand_total, Decimal::new(94150, 2));
    }

    #[test]
    fn item_fora_do_total_aparece_na_nota_mas_nao_soma() {
        let mut fora = item(5, Decimal::from(100));
        fora.include_in_total = false;
        let (trip, _) = trip_com_nota(vec![item(2, Decimal::from(30)), fora]);

        assert_eq!(trip.invoices[0].items.len(), 2);
        assert_eq!(trip.total_goods, Decimal::from(60));
    }

    #[test]
    fn desconto_percentual_incide_sobre_os_itens_contados() {
        let (mut trip, invoice_id) = trip_com_nota(vec![item(10, Decimal::from(20))]);
        set_invoice_discount(&mut trip, invoice_id, Decimal::from(10), DiscountType::Percent)
            .unwrap();

        // 200 - 10% = 180; discountValue normalizado para 20.00
        assert_eq!(trip.total_goods, Decimal::from(180));
        assert_eq!(trip.invoices[0].discount_value, Decimal::from(20));
    }

    #[test]
    fn desconto_em_valor_abate_direto() {
        let (mut trip, invoice_id) = trip_com_nota(vec![item(10, Decimal::from(20))]);
        set_invoice_discount(&mut trip, invoice_id, Decimal::new(1550, 2), DiscountType::Value)
            .unwrap();

        assert_eq!(trip.total_goods, Decimal::new(18450, 2));
        assert_eq!(trip.invoices[0].discount_value, Decimal::new(1550, 2));
    }

    #[test]
    fn mutacoes_recalculam_os_totais_na_hora() {
        let (mut trip, invoice_id) = trip_com_nota(vec![item(2, Decimal::from(30))]);

        add_logistics_item(
            &mut trip,
            LogisticsItem {
                id: Uuid::new_v4(),
                kind: LogisticsType::Transport,
                desc: "Uber".into(),
                value: Decimal::from(25),
            },
        );
        assert_eq!(trip.grand_total, Decimal::from(85));

        let novo = item(1, Decimal::from(15));
        let novo_id = novo.id;
        add_invoice_item(&mut trip, invoice_id, novo).unwrap();
        assert_eq!(trip.total_goods, Decimal::from(75));

        remove_invoice_item(&mut trip, invoice_id, novo_id).unwrap();
        assert_eq!(trip.total_goods, Decimal::from(60));

        remove_invoice(&mut trip, invoice_id);
        assert_eq!(trip.total_goods, Decimal::ZERO);
        assert_eq!(trip.grand_total, Decimal::from(25));
    }

    #[test]
    fn nota_inexistente_devolve_erro() {
        let (mut trip, _) = trip_com_nota(vec![]);
        let result = add_invoice_item(&mut trip, Uuid::new_v4(), item(1, Decimal::ONE));
        assert!(matches!(result, Err(AppError::InvoiceNotFound)));
    }
}
