// src/services/kit_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::catalog::Extra;
use crate::models::data::FluctusData;
use crate::models::kit::{Kit, KitExtra};
use crate::models::product::Product;
use crate::services::quote_service::use_unit_cost;

#[derive(Debug, Clone, PartialEq)]
pub struct KitFinancials {
    /// Soma dos preços cheios dos produtos, antes do desconto.
    pub raw_total: Decimal,
    pub total_production_cost: Decimal,
    pub display_price: Decimal,
    pub margin: Decimal,
}

/// Composição financeira do kit a partir das fotografias dos produtos.
///
/// Com `withoutPackaging`, o custo de embalagem do produto sai do preço E
/// do custo na mesma proporção — regra herdada do negócio, que assume que
/// o preço avulso embute a embalagem 1:1 com o custo dela.
pub fn compose_kit(kit: &Kit, products: &[Product], extras: &[Extra]) -> KitFinancials {
    let mut raw_total = Decimal::ZERO;
    let mut production_cost = Decimal::ZERO;

    for item in &kit.items {
        // Produto apagado do catálogo: o item não soma nada.
        let Some(product) = products.iter().find(|p| p.id == item.product_id) else {
            continue;
        };
        let mut unit_price = if product.final_price > Decimal::ZERO {
            product.final_price
        } else {
            product.suggested_price
        };
        let mut unit_cost = product.total_cost;
        if item.without_packaging {
            unit_price -= product.extras_cost;
            unit_cost -= product.extras_cost;
        }
        raw_total += unit_price * item.qty;
        production_cost += unit_cost * item.qty;
    }

    for kit_extra in &kit.kit_extras {
        if let Some(extra) = extras.iter().find(|e| e.id == kit_extra.extra_id) {
            production_cost += use_unit_cost(extra) * kit_extra.qty;
        }
    }

    let display_price = if kit.final_price > Decimal::ZERO {
        kit.final_price
    } else {
        raw_total * (Decimal::ONE - kit.discount / Decimal::ONE_HUNDRED)
    };
    let margin = if display_price > Decimal::ZERO {
        (display_price - production_cost) / display_price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    KitFinancials {
        raw_total,
        total_production_cost: production_cost,
        display_price,
        margin,
    }
}

/// Recalcula e grava os derivados do kit. `finalPrice` não é tocado: zero
/// continua significando "usar rawTotal com desconto".
pub fn recalculate_kit(kit: &mut Kit, products: &[Product], extras: &[Extra]) {
    let financials = compose_kit(kit, products, extras);
    kit.raw_total = financials.raw_total;
    kit.total_production_cost = financials.total_production_cost;
    kit.display_price = financials.display_price;
    kit.margin = financials.margin;
}

pub fn recalculate_all_kits(data: &mut FluctusData) {
    let (kits, products, extras) = (&mut data.kits, &data.products, &data.extras);
    for kit in kits.iter_mut() {
        recalculate_kit(kit, products, extras);
    }
}

/// Reúne as embalagens dos próprios produtos do kit (selectedExtras x
/// quantidade do item), somando quantidades por embalagem. Ação pontual de
/// conveniência para preencher kitExtras — NÃO é um vínculo vivo.
pub fn sync_extras_from_products(kit: &Kit, products: &[Product]) -> Vec<KitExtra> {
    let mut totals: Vec<(Uuid, Decimal)> = Vec::new();
    for item in &kit.items {
        let Some(product) = products.iter().find(|p| p.id == item.product_id) else {
            continue;
        };
        for product_extra in &product.selected_extras {
            let qty = product_extra.quantity * item.qty;
            match totals.iter_mut().find(|(id, _)| *id == product_extra.extra_id) {
                Some((_, total)) => *total += qty,
                None => totals.push((product_extra.extra_id, qty)),
            }
        }
    }

    totals
        .into_iter()
        .map(|(extra_id, qty)| KitExtra {
            id: Uuid::new_v4(),
            extra_id,
            qty,
        })
        .collect()
}

/// Duplica um kit mantendo as referências a produtos e embalagens, com
/// identidade nova e nome marcado como cópia.
pub fn duplicate_kit(kit: &Kit) -> Kit {
    let mut copy = kit.clone();
    copy.id = Uuid::new_v4();
    copy.name = format!("{} (Cópia)", kit.name);
    for item in &mut copy.items {
        item.id = Uuid::new_v4();
    }
    for kit_extra in &mut copy.kit_extras {
        kit_extra.id = Uuid::new_v4();
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::kit::KitItem;

    // Kit de exemplo: 2x Sunga (final 69.90) + Caixa Padrão, desconto 5%.
    fn seed_kit() -> (FluctusData, Kit) {
        let data = FluctusData::seed();
        let kit = data.kits[0].clone();
        (data, kit)
    }

    #[test]
    fn desconto_aplica_sobre_o_total_cheio() {
        let (data, mut kit) = seed_kit();
        kit.final_price = Decimal::ZERO; // sem preço fechado

        let financials = compose_kit(&kit, &data.products, &data.extras);
        // 2 x 69.90 = 139.80; com 5% de desconto = 132.81
        assert_eq!(financials.raw_total, Decimal::new(13980, 2));
        assert_eq!(financials.display_price.round_dp(2), Decimal::new(13281, 2));
    }

    #[test]
    fn preco_fechado_sempre_vence_o_desconto() {
        let (data, kit) = seed_kit();
        assert_eq!(kit.final_price, Decimal::new(12990, 2));

        let financials = compose_kit(&kit, &data.products, &data.extras);
        assert_eq!(financials.display_price, Decimal::new(12990, 2));
    }

    #[test]
    fn custo_de_producao_soma_extras_do_kit() {
        let (data, kit) = seed_kit();
        let financials = compose_kit(&kit, &data.products, &data.extras);
        // 2 x 24.55 + Caixa Padrão 1.50 = 50.60
        assert_eq!(financials.total_production_cost, Decimal::new(5060, 2));
    }

    #[test]
    fn sem_embalagem_tira_o_custo_dos_dois_lados() {
        let (data, mut kit) = seed_kit();
        kit.final_price = Decimal::ZERO;
        kit.discount = Decimal::ZERO;
        kit.items[0].without_packaging = true;

        // extrasCost da Sunga = 0.30 por unidade
        let financials = compose_kit(&kit, &data.products, &data.extras);
        // preço: 2 x (69.90 - 0.30) = 139.20
        assert_eq!(financials.raw_total, Decimal::new(13920, 2));
        // custo: 2 x (24.55 - 0.30) + 1.50 da caixa = 50.00
        assert_eq!(financials.total_production_cost, Decimal::new(5000, 2));
    }

    #[test]
    fn produto_apagado_nao_soma_nada() {
        let (data, mut kit) = seed_kit();
        kit.items.push(KitItem {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(), // não existe
            qty: Decimal::from(3),
            without_packaging: false,
        });

        let financials = compose_kit(&kit, &data.products, &data.extras);
        assert_eq!(financials.raw_total, Decimal::new(13980, 2));
    }

    #[test]
    fn margem_com_preco_zerado_vale_zero() {
        let (data, mut kit) = seed_kit();
        kit.final_price = Decimal::ZERO;
        kit.items.clear(); // rawTotal zera

        let financials = compose_kit(&kit, &data.products, &data.extras);
        assert_eq!(financials.margin, Decimal::ZERO);
    }

    #[test]
    fn sincronizacao_une_quantidades_por_embalagem() {
        let (data, kit) = seed_kit();
        // A Sunga leva 1 Tag da Marca; o kit tem 2 sungas.
        let synced = sync_extras_from_products(&kit, &data.products);

        assert_eq!(synced.len(), 1);
        assert_eq!(synced[0].extra_id, data.extras[1].id);
        assert_eq!(synced[0].qty, Decimal::TWO);
    }

    #[test]
    fn duplicar_gera_identidade_nova_e_mantem_referencias() {
        let (_, kit) = seed_kit();
        let copy = duplicate_kit(&kit);

        assert_ne!(copy.id, kit.id);
        assert_eq!(copy.name, "Kit Pai e Filho Verão (Cópia)");
        assert_eq!(copy.items[0].product_id, kit.items[0].product_id);
        assert_ne!(copy.items[0].id, kit.items[0].id);
        assert_eq!(copy.discount, kit.discount);
    }

    #[test]
    fn recalculo_fotografa_os_derivados() {
        let (data, mut kit) = seed_kit();
        kit.raw_total = Decimal::ZERO;
        kit.margin = Decimal::ZERO;

        recalculate_kit(&mut kit, &data.products, &data.extras);
        assert_eq!(kit.raw_total, Decimal::new(13980, 2));
        assert!(kit.margin > Decimal::ZERO);
        // Preço fechado intocado pelo recálculo.
        assert_eq!(kit.final_price, Decimal::new(12990, 2));
    }
}
