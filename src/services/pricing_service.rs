// src/services/pricing_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::catalog::{Extra, Material};
use crate::models::data::FluctusData;
use crate::models::finance::FixedCosts;
use crate::models::product::{
    combination_key, Product, ProductExtra, ProductMaterial, Variation, VariationOption,
    VariationType,
};
use crate::services::quote_service::use_unit_cost;

// --- Rateio de custos fixos ---

/// Rateio: custo fixo mensal dividido pela estimativa de vendas. Exibido
/// ao vivo nas telas e FOTOGRAFADO em cada produto no salvamento, para que
/// produtos antigos reflitam o rateio da época.
pub fn fixed_cost_per_unit(fixed_costs: &FixedCosts) -> Decimal {
    if fixed_costs.estimated_sales > Decimal::ZERO {
        fixed_costs.total / fixed_costs.estimated_sales
    } else {
        Decimal::ZERO
    }
}

// --- Composição de custo do produto ---

#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub material_cost: Decimal,
    pub extras_cost: Decimal,
    pub total_cost: Decimal,
}

// Referência pendurada (insumo apagado do catálogo) contribui com custo
// zero; a tela mostra o marcador de "não encontrado", nunca um erro.
fn materials_cost(list: &[ProductMaterial], catalog: &[Material]) -> Decimal {
    list.iter()
        .map(|pm| {
            catalog
                .iter()
                .find(|m| m.id == pm.material_id)
                .map(|m| use_unit_cost(m) * pm.quantity)
                .unwrap_or(Decimal::ZERO)
        })
        .sum()
}

fn extras_cost(list: &[ProductExtra], catalog: &[Extra]) -> Decimal {
    list.iter()
        .map(|pe| {
            catalog
                .iter()
                .find(|e| e.id == pe.extra_id)
                .map(|e| use_unit_cost(e) * pe.quantity)
                .unwrap_or(Decimal::ZERO)
        })
        .sum()
}

/// Custo completo do produto: insumos + embalagens + mão de obra + rateio.
/// Função pura, usada tanto na prévia de edição quanto na fotografia de
/// salvamento.
pub fn compose_cost(
    product: &Product,
    materials: &[Material],
    extras: &[Extra],
    fixed_per_unit: Decimal,
) -> CostBreakdown {
    let material_cost = materials_cost(&product.materials, materials);
    let extras_total = extras_cost(&product.selected_extras, extras);
    CostBreakdown {
        material_cost,
        extras_cost: extras_total,
        total_cost: material_cost + extras_total + product.labor_cost + fixed_per_unit,
    }
}

/// Mesma fórmula do produto base, substituindo as listas pelas da variação
/// quando ela tiver personalização própria (ausente = herda do base).
pub fn variation_cost(
    product: &Product,
    variation: &Variation,
    materials: &[Material],
    extras: &[Extra],
    fixed_per_unit: Decimal,
) -> CostBreakdown {
    let var_materials = variation.materials.as_deref().unwrap_or(&product.materials);
    let var_extras = variation
        .selected_extras
        .as_deref()
        .unwrap_or(&product.selected_extras);

    let material_cost = materials_cost(var_materials, materials);
    let extras_total = extras_cost(var_extras, extras);
    CostBreakdown {
        material_cost,
        extras_cost: extras_total,
        total_cost: material_cost + extras_total + product.labor_cost + fixed_per_unit,
    }
}

// --- Solver de preço ---

/// Inverte a estrutura de margem desejada num preço sugerido: acha o preço
/// P tal que, descontados imposto, comissão e taxa da plataforma (todos
/// percentuais de P), sobra o custo mais a margem desejada (também % de P).
///
/// Deduções somando 100% ou mais são uma entrada degenerada porém
/// alcançável: o fallback é 2x o custo, nunca um preço negativo/infinito.
pub fn suggest_price(
    total_cost: Decimal,
    tax: Decimal,
    commission: Decimal,
    platform_fee: Decimal,
    margin: Decimal,
) -> Decimal {
    let divisor = Decimal::ONE - (tax + commission + platform_fee + margin) / Decimal::ONE_HUNDRED;
    if divisor <= Decimal::ZERO {
        return total_cost * Decimal::TWO;
    }
    total_cost / divisor
}

/// Margem real obtida com o preço efetivamente praticado. Pode ficar
/// abaixo da margem alvo — é exatamente isso que a tela destaca.
pub fn realized_margin(
    total_cost: Decimal,
    tax: Decimal,
    commission: Decimal,
    platform_fee: Decimal,
    final_price: Decimal,
) -> Decimal {
    if final_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let costs_at_price =
        total_cost + final_price * (tax + commission + platform_fee) / Decimal::ONE_HUNDRED;
    (final_price - costs_at_price) / final_price * Decimal::ONE_HUNDRED
}

// --- Fotografia de salvamento ---

/// Recalcula e grava os campos derivados do produto. Operação EXPLÍCITA:
/// editar o catálogo depois não mexe em produtos já salvos (a defasagem é
/// proposital, para preservar o histórico de decisões de preço).
pub fn recalculate_product(
    product: &mut Product,
    materials: &[Material],
    extras: &[Extra],
    fixed_per_unit: Decimal,
) {
    let costs = compose_cost(product, materials, extras, fixed_per_unit);
    product.material_cost = costs.material_cost;
    product.extras_cost = costs.extras_cost;
    product.fixed_cost_per_unit = fixed_per_unit;
    product.total_cost = costs.total_cost;
    product.suggested_price = suggest_price(
        costs.total_cost,
        product.tax,
        product.commission,
        product.platform_fee,
        product.margin,
    );
    if product.final_price <= Decimal::ZERO {
        product.final_price = product.suggested_price;
    }
    product.real_margin = realized_margin(
        costs.total_cost,
        product.tax,
        product.commission,
        product.platform_fee,
        product.final_price,
    );
}

/// Recalcula todos os produtos com o rateio vigente.
pub fn recalculate_all_products(data: &mut FluctusData) {
    let fixed = fixed_cost_per_unit(&data.fixed_costs);
    let (products, materials, extras) = (&mut data.products, &data.materials, &data.extras);
    for product in products.iter_mut() {
        recalculate_product(product, materials, extras, fixed);
    }
}

// --- Variações ---

/// Gera uma variação por combinação do cartesiano dos eixos, preservando
/// personalizações (ativa/inativa, listas próprias) das variações antigas
/// cuja combinação ainda existe — o casamento é pela chave estável das
/// opções, então renomear um rótulo não perde nada. Combinações que
/// deixaram de existir são descartadas.
pub fn generate_variations(types: &[VariationType], previous: &[Variation]) -> Vec<Variation> {
    if types.is_empty() {
        return Vec::new();
    }

    let mut combos: Vec<Vec<&VariationOption>> = vec![Vec::new()];
    for variation_type in types {
        let mut next = Vec::with_capacity(combos.len() * variation_type.options.len());
        for combo in &combos {
            for option in &variation_type.options {
                let mut extended = combo.clone();
                extended.push(option);
                next.push(extended);
            }
        }
        combos = next;
    }

    combos
        .into_iter()
        .map(|combo| {
            let key = combination_key(&combo);
            let name = combo
                .iter()
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(" / ");
            let combination: Vec<String> = combo.iter().map(|o| o.label.clone()).collect();
            match previous.iter().find(|v| v.key == key) {
                Some(prev) => Variation {
                    id: prev.id,
                    key,
                    name,
                    combination,
                    active: prev.active,
                    materials: prev.materials.clone(),
                    selected_extras: prev.selected_extras.clone(),
                },
                None => Variation {
                    id: Uuid::new_v4(),
                    key,
                    name,
                    combination,
                    active: true,
                    materials: None,
                    selected_extras: None,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(total: i64, sales: i64) -> FixedCosts {
        FixedCosts {
            total: Decimal::from(total),
            estimated_sales: Decimal::from(sales),
            items: Vec::new(),
        }
    }

    #[test]
    fn rateio_divide_pelo_volume_estimado() {
        assert_eq!(fixed_cost_per_unit(&fixed(2500, 500)), Decimal::from(5));
    }

    #[test]
    fn rateio_sem_estimativa_vale_zero() {
        assert_eq!(fixed_cost_per_unit(&fixed(2500, 0)), Decimal::ZERO);
    }

    #[test]
    fn custo_do_produto_de_demonstracao() {
        let data = FluctusData::seed();
        let sunga = &data.products[0];

        // Suplex 45.50/3.5 = 13.00 x 0.3 + Elástico 25/50 = 0.50 x 0.7
        let costs = compose_cost(sunga, &data.materials, &data.extras, Decimal::from(5));
        assert_eq!(costs.material_cost, Decimal::new(425, 2));
        // Tag da Marca 300/1000 = 0.30
        assert_eq!(costs.extras_cost, Decimal::new(30, 2));
        // 4.25 + 0.30 + 15.00 + 5.00
        assert_eq!(costs.total_cost, Decimal::new(2455, 2));
    }

    #[test]
    fn insumo_apagado_contribui_custo_zero() {
        let data = FluctusData::seed();
        let mut sunga = data.products[0].clone();
        sunga.materials[0].material_id = Uuid::new_v4(); // não existe mais

        let costs = compose_cost(&sunga, &data.materials, &data.extras, Decimal::ZERO);
        // Sobra só o Elástico: 0.50 x 0.7
        assert_eq!(costs.material_cost, Decimal::new(35, 2));
    }

    #[test]
    fn preco_sugerido_inverte_a_margem() {
        // divisor = 1 - 0.12 - 0.10 - 0.30 = 0.48 -> 100/0.48 = 208.33
        let price = suggest_price(
            Decimal::ONE_HUNDRED,
            Decimal::from(12),
            Decimal::from(10),
            Decimal::ZERO,
            Decimal::from(30),
        );
        assert_eq!(price.round_dp(2), Decimal::new(20833, 2));

        // Cobrando exatamente o sugerido, a margem real volta à margem alvo.
        let margin = realized_margin(
            Decimal::ONE_HUNDRED,
            Decimal::from(12),
            Decimal::from(10),
            Decimal::ZERO,
            price,
        );
        assert_eq!(margin.round_dp(2), Decimal::from(30));
    }

    #[test]
    fn deducoes_acima_de_cem_por_cento_caem_no_fallback() {
        // 40 + 30 + 10 + 20 = 100% -> preço = 2x o custo, exato
        let price = suggest_price(
            Decimal::from(80),
            Decimal::from(40),
            Decimal::from(30),
            Decimal::from(10),
            Decimal::from(20),
        );
        assert_eq!(price, Decimal::from(160));
    }

    #[test]
    fn margem_real_sem_preco_vale_zero() {
        let margin = realized_margin(
            Decimal::ONE_HUNDRED,
            Decimal::from(12),
            Decimal::from(10),
            Decimal::ZERO,
            Decimal::ZERO,
        );
        assert_eq!(margin, Decimal::ZERO);
    }

    #[test]
    fn margem_real_abaixo_da_alvo_com_preco_menor() {
        // Preço abaixo do sugerido: a margem realizada fica aquém dos 30%.
        let margin = realized_margin(
            Decimal::ONE_HUNDRED,
            Decimal::from(12),
            Decimal::from(10),
            Decimal::ZERO,
            Decimal::from(180),
        );
        assert!(margin < Decimal::from(30));
        assert!(margin > Decimal::ZERO);
    }

    #[test]
    fn recalculo_fotografa_custos_e_rateio() {
        let mut data = FluctusData::seed();
        recalculate_all_products(&mut data);

        let sunga = &data.products[0];
        assert_eq!(sunga.fixed_cost_per_unit, Decimal::from(5));
        assert_eq!(sunga.total_cost, Decimal::new(2455, 2));
        // Margem alvo de 100% é degenerada: sugerido = 2x custo.
        assert_eq!(sunga.suggested_price, Decimal::new(4910, 2));
        // Preço final explícito (69.90) é preservado pelo recálculo.
        assert_eq!(sunga.final_price, Decimal::new(6990, 2));
    }

    fn eixo(name: &str, labels: &[&str]) -> VariationType {
        VariationType {
            id: Uuid::new_v4(),
            name: name.into(),
            options: labels
                .iter()
                .map(|l| VariationOption {
                    id: Uuid::new_v4(),
                    label: (*l).into(),
                })
                .collect(),
        }
    }

    #[test]
    fn gera_o_cartesiano_dos_eixos() {
        let types = vec![eixo("Cor", &["Preta", "Azul"]), eixo("Tamanho", &["P", "M", "G"])];
        let variations = generate_variations(&types, &[]);

        assert_eq!(variations.len(), 6);
        assert_eq!(variations[0].name, "Preta / P");
        assert!(variations.iter().all(|v| v.active));
        assert!(variations.iter().all(|v| v.materials.is_none()));
    }

    #[test]
    fn renomear_opcao_preserva_personalizacao() {
        let mut types = vec![eixo("Cor", &["Preta", "Azul"])];
        let mut variations = generate_variations(&types, &[]);

        // Personaliza a variação "Azul": desativa e dá lista própria.
        variations[1].active = false;
        variations[1].materials = Some(vec![ProductMaterial {
            id: Uuid::new_v4(),
            material_id: Uuid::new_v4(),
            quantity: Decimal::ONE,
        }]);

        // Renomeia o rótulo sem trocar a identidade da opção.
        types[0].options[1].label = "Azul Marinho".into();
        let regenerated = generate_variations(&types, &variations);

        assert_eq!(regenerated.len(), 2);
        assert_eq!(regenerated[1].name, "Azul Marinho");
        assert!(!regenerated[1].active);
        assert!(regenerated[1].materials.is_some());
        assert_eq!(regenerated[1].id, variations[1].id);
    }

    #[test]
    fn remover_opcao_descarta_combinacoes_orfas() {
        let mut types = vec![eixo("Cor", &["Preta", "Azul"]), eixo("Tamanho", &["P", "M"])];
        let variations = generate_variations(&types, &[]);
        assert_eq!(variations.len(), 4);

        types[1].options.pop(); // some o "M"
        let regenerated = generate_variations(&types, &variations);

        assert_eq!(regenerated.len(), 2);
        assert!(regenerated.iter().all(|v| !v.name.ends_with("/ M")));
    }

    #[test]
    fn sem_eixos_nao_ha_variacoes() {
        assert!(generate_variations(&[], &[]).is_empty());
    }

    #[test]
    fn variacao_sem_personalizacao_herda_as_listas_do_base() {
        let data = FluctusData::seed();
        let sunga = &data.products[0];
        let variation = &sunga.variations[0];

        let base = compose_cost(sunga, &data.materials, &data.extras, Decimal::from(5));
        let var = variation_cost(sunga, variation, &data.materials, &data.extras, Decimal::from(5));
        assert_eq!(var, base);
    }

    #[test]
    fn variacao_personalizada_usa_a_propria_lista() {
        let data = FluctusData::seed();
        let sunga = &data.products[0];
        let mut variation = sunga.variations[0].clone();

        // Variação só com o Suplex (0.3m): 13.00 x 0.3 = 3.90
        variation.materials = Some(vec![sunga.materials[0].clone()]);
        let costs = variation_cost(sunga, &variation, &data.materials, &data.extras, Decimal::ZERO);
        assert_eq!(costs.material_cost, Decimal::new(390, 2));
        // Embalagens continuam herdadas do base.
        assert_eq!(costs.extras_cost, Decimal::new(30, 2));
    }
}
