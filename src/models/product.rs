// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Variações ---

/// Opção de um eixo de variação ("Preta", "P"...). Carrega identidade
/// própria para que renomear o rótulo não perca personalizações feitas
/// nas variações geradas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariationOption {
    pub id: Uuid,
    pub label: String,
}

/// Eixo de variação de um produto ("Cor", "Tamanho"), com opções ordenadas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariationType {
    pub id: Uuid,
    pub name: String,
    pub options: Vec<VariationOption>,
}

/// Uma combinação concreta de opções (produto do cartesiano dos eixos).
/// `key` é a identidade estável da combinação (ids das opções), usada para
/// preservar personalizações quando a lista é regenerada; `name` é só
/// exibição ("Preta / P").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variation {
    pub id: Uuid,
    pub key: String,
    pub name: String,
    pub combination: Vec<String>,
    pub active: bool,
    /// Listas próprias desta variação. Ausente = herda as do produto base.
    pub materials: Option<Vec<ProductMaterial>>,
    pub selected_extras: Option<Vec<ProductExtra>>,
}

/// Chave estável de uma combinação de opções, independente dos rótulos.
pub fn combination_key(options: &[&VariationOption]) -> String {
    options
        .iter()
        .map(|o| o.id.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

// --- Composição do produto ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductMaterial {
    pub id: Uuid,
    pub material_id: Uuid,
    /// Quantidade consumida, em unidades de USO do insumo.
    pub quantity: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductExtra {
    pub id: Uuid,
    pub extra_id: Uuid,
    pub quantity: Decimal,
}

// --- Produto ---

// Os campos derivados (materialCost, totalCost, suggestedPrice, realMargin,
// fixedCostPerUnit) são FOTOGRAFIAS gravadas no salvamento/recálculo; não
// acompanham mudanças posteriores no catálogo. O recálculo é sempre uma
// operação explícita.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,

    // Entradas de custo
    pub labor_cost: Decimal,
    /// Imposto (%) sobre o preço de venda.
    pub tax: Decimal,
    /// Comissão (%) sobre o preço de venda.
    pub commission: Decimal,
    /// Taxa do sistema/site (%) sobre o preço de venda.
    pub platform_fee: Decimal,
    /// Margem desejada (%).
    pub margin: Decimal,

    // Saídas derivadas (fotografia do último recálculo)
    pub material_cost: Decimal,
    pub extras_cost: Decimal,
    /// Custo fixo rateado por unidade, congelado no salvamento.
    pub fixed_cost_per_unit: Decimal,
    pub total_cost: Decimal,
    pub suggested_price: Decimal,
    pub real_margin: Decimal,
    /// Preço efetivamente praticado; 0 = usar o sugerido.
    pub final_price: Decimal,

    // Composição
    pub materials: Vec<ProductMaterial>,
    pub selected_extras: Vec<ProductExtra>,
    pub variation_types: Vec<VariationType>,
    pub variations: Vec<Variation>,
}
