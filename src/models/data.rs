// src/models/data.rs

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{Extra, Material, Polo, Quote, Supplier};
use super::crm::{
    Client, ClientComment, Promotion, PromotionTarget, PromotionType, SYSTEM_TAGS,
};
use super::finance::{FixedCostItem, FixedCosts, LogisticsFund};
use super::kit::{Kit, KitExtra, KitItem};
use super::product::{
    combination_key, Product, ProductExtra, ProductMaterial, Variation, VariationOption,
    VariationType,
};
use super::shopping::{
    DiscountType, Invoice, InvoiceItem, InvoiceItemKind, LogisticsItem, LogisticsType,
    ShoppingTrip, TripStatus,
};

/// Raiz única de dados: todo o acervo vive neste agregado em memória,
/// espelhado 1:1 no documento JSON persistido. Não há integridade
/// referencial entre as coleções; referências penduradas degradam para
/// custo zero nos agregadores.
///
/// Toda chave ausente num backup antigo assume o valor padrão — esta é a
/// etapa de migração, aplicada em toda carga, não só no restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluctusData {
    pub materials: Vec<Material>,
    pub extras: Vec<Extra>,
    pub suppliers: Vec<Supplier>,
    pub polos: Vec<Polo>,
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub kits: Vec<Kit>,
    pub shopping_trips: Vec<ShoppingTrip>,
    pub fixed_costs: FixedCosts,
    pub logistics_fund: LogisticsFund,
    pub promotions: Vec<Promotion>,
}

impl FluctusData {
    /// Acervo de demonstração: um recorte realista da operação (confecção
    /// de moda praia) para o primeiro uso e para os testes. Os campos
    /// derivados são fotografias como qualquer acervo salvo; o chamador
    /// pode recalculá-los explicitamente.
    pub fn seed() -> Self {
        let polo_bras = Polo {
            id: Uuid::new_v4(),
            name: "Polo Brás".into(),
            cep: Some("03001000".into()),
            rua: Some("Rua Miller".into()),
            numero: Some("500".into()),
            bairro: Some("Brás".into()),
            cidade: Some("São Paulo".into()),
            estado: Some("SP".into()),
            ..Polo::default()
        };

        let textil_santos = Supplier {
            id: Uuid::new_v4(),
            name: "Têxtil Santos".into(),
            contact: Some("Carlos".into()),
            phone: Some("11999998888".into()),
            polo_id: Some(polo_bras.id),
            cep: Some("03001000".into()),
            rua: Some("Rua Miller".into()),
            numero: Some("500".into()),
            bairro: Some("Brás".into()),
            cidade: Some("São Paulo".into()),
            estado: Some("SP".into()),
            ..Supplier::default()
        };
        let aviamentos_silva = Supplier {
            id: Uuid::new_v4(),
            name: "Aviamentos Silva".into(),
            contact: Some("Ana".into()),
            phone: Some("21988887777".into()),
            cep: Some("25685100".into()),
            rua: Some("Rua Teresa".into()),
            numero: Some("150".into()),
            bairro: Some("Alto da Serra".into()),
            cidade: Some("Petrópolis".into()),
            estado: Some("RJ".into()),
            ..Supplier::default()
        };

        let suplex = Material {
            id: Uuid::new_v4(),
            name: "Suplex Poliamida".into(),
            buy_unit: "kg".into(),
            use_unit: "m".into(),
            yield_factor: Decimal::new(35, 1),
            quotes: vec![Quote {
                id: Uuid::new_v4(),
                supplier_id: textil_santos.id,
                price: Decimal::new(4550, 2),
                obs: Some("Preço à vista".into()),
            }],
            created_at: Some(Utc::now()),
            ..Material::default()
        };
        let elastico = Material {
            id: Uuid::new_v4(),
            name: "Elástico 30mm".into(),
            buy_unit: "rolo".into(),
            use_unit: "m".into(),
            yield_factor: Decimal::from(50),
            quotes: vec![Quote {
                id: Uuid::new_v4(),
                supplier_id: aviamentos_silva.id,
                price: Decimal::new(2500, 2),
                obs: Some("Rolo fechado".into()),
            }],
            created_at: Some(Utc::now()),
            ..Material::default()
        };

        let caixa = Extra {
            id: Uuid::new_v4(),
            name: "Caixa Padrão".into(),
            buy_unit: "un".into(),
            use_unit: "un".into(),
            yield_factor: Decimal::ONE,
            price: Some(Decimal::new(150, 2)),
            quotes: vec![Quote {
                id: Uuid::new_v4(),
                supplier_id: aviamentos_silva.id,
                price: Decimal::new(150, 2),
                obs: Some("Padrão".into()),
            }],
            created_at: Some(Utc::now()),
            ..Extra::default()
        };
        let tag_marca = Extra {
            id: Uuid::new_v4(),
            name: "Tag da Marca".into(),
            buy_unit: "milheiro".into(),
            use_unit: "un".into(),
            yield_factor: Decimal::from(1000),
            price: Some(Decimal::new(30, 2)),
            quotes: vec![Quote {
                id: Uuid::new_v4(),
                supplier_id: aviamentos_silva.id,
                price: Decimal::from(300),
                obs: Some("Milheiro".into()),
            }],
            created_at: Some(Utc::now()),
            ..Extra::default()
        };

        // Eixos Cor x Tamanho; a combinação Azul / M começa desativada.
        let cores: Vec<VariationOption> = ["Preta", "Azul"]
            .into_iter()
            .map(|label| VariationOption {
                id: Uuid::new_v4(),
                label: label.into(),
            })
            .collect();
        let tamanhos: Vec<VariationOption> = ["P", "M", "G"]
            .into_iter()
            .map(|label| VariationOption {
                id: Uuid::new_v4(),
                label: label.into(),
            })
            .collect();

        let mut variations = Vec::new();
        for cor in &cores {
            for tamanho in &tamanhos {
                variations.push(Variation {
                    id: Uuid::new_v4(),
                    key: combination_key(&[cor, tamanho]),
                    name: format!("{} / {}", cor.label, tamanho.label),
                    combination: vec![cor.label.clone(), tamanho.label.clone()],
                    active: !(cor.label == "Azul" && tamanho.label == "M"),
                    materials: None,
                    selected_extras: None,
                });
            }
        }

        let sunga = Product {
            id: Uuid::new_v4(),
            name: "Sunga Boxer Clássica".into(),
            description: Some("Modelo tradicional".into()),
            labor_cost: Decimal::from(15),
            tax: Decimal::from(4),
            commission: Decimal::ZERO,
            platform_fee: Decimal::ZERO,
            margin: Decimal::ONE_HUNDRED,
            final_price: Decimal::new(6990, 2),
            material_cost: Decimal::new(425, 2),
            extras_cost: Decimal::new(30, 2),
            fixed_cost_per_unit: Decimal::from(5),
            total_cost: Decimal::new(2455, 2),
            suggested_price: Decimal::from(65),
            real_margin: Decimal::new(605, 1),
            materials: vec![
                ProductMaterial {
                    id: Uuid::new_v4(),
                    material_id: suplex.id,
                    quantity: Decimal::new(3, 1),
                },
                ProductMaterial {
                    id: Uuid::new_v4(),
                    material_id: elastico.id,
                    quantity: Decimal::new(7, 1),
                },
            ],
            selected_extras: vec![ProductExtra {
                id: Uuid::new_v4(),
                extra_id: tag_marca.id,
                quantity: Decimal::ONE,
            }],
            variation_types: vec![
                VariationType {
                    id: Uuid::new_v4(),
                    name: "Cor".into(),
                    options: cores,
                },
                VariationType {
                    id: Uuid::new_v4(),
                    name: "Tamanho".into(),
                    options: tamanhos,
                },
            ],
            variations,
            ..Product::default()
        };

        let kit_verao = Kit {
            id: Uuid::new_v4(),
            name: "Kit Pai e Filho Verão".into(),
            items: vec![KitItem {
                id: Uuid::new_v4(),
                product_id: sunga.id,
                qty: Decimal::TWO,
                without_packaging: false,
            }],
            kit_extras: vec![KitExtra {
                id: Uuid::new_v4(),
                extra_id: caixa.id,
                qty: Decimal::ONE,
            }],
            discount: Decimal::from(5),
            final_price: Decimal::new(12990, 2),
            total_production_cost: Decimal::new(5060, 2),
            display_price: Decimal::new(12990, 2),
            margin: Decimal::new(610, 1),
            raw_total: Decimal::new(13980, 2),
        };

        let joao = Client {
            id: Uuid::new_v4(),
            name: "João da Silva".into(),
            phone: Some("21999991234".into()),
            email: Some("joao@teste.com".into()),
            cpf: Some("123.456.789-00".into()),
            birth_date: Some(Utc::now().date_naive()),
            cep: Some("20000-000".into()),
            rua: Some("Rua Teste".into()),
            numero: Some("123".into()),
            bairro: Some("Centro".into()),
            cidade: Some("Rio".into()),
            estado: Some("RJ".into()),
            tags: vec![SYSTEM_TAGS[0].into()],
            comments: vec![ClientComment {
                id: Uuid::new_v4(),
                text: "Cliente indicado pela Ana.".into(),
                date: Some(Utc::now().date_naive()),
            }],
            ..Client::default()
        };

        let black_friday = Promotion {
            id: Uuid::new_v4(),
            name: "Black Friday".into(),
            kind: PromotionType::Percentage,
            description: "10% para clientes com a etiqueta Black Friday".into(),
            code: Some("BF10".into()),
            discount_percent: Some(Decimal::from(10)),
            target_type: PromotionTarget::Tags,
            target_tags: Some(vec![SYSTEM_TAGS[5].into()]),
            start_date: Some(Utc::now().date_naive()),
            end_date: Utc::now().date_naive().checked_add_days(chrono::Days::new(30)),
            active: true,
            created_at: Some(Utc::now()),
            ..Promotion::default()
        };

        let viagem_bras = ShoppingTrip {
            id: Uuid::new_v4(),
            date: Some(Utc::now().date_naive()),
            status: TripStatus::Completed,
            logistics: vec![
                LogisticsItem {
                    id: Uuid::new_v4(),
                    kind: LogisticsType::Transport,
                    desc: "Uber Ida".into(),
                    value: Decimal::from(25),
                },
                LogisticsItem {
                    id: Uuid::new_v4(),
                    kind: LogisticsType::Food,
                    desc: "Lanche".into(),
                    value: Decimal::new(1850, 2),
                },
                LogisticsItem {
                    id: Uuid::new_v4(),
                    kind: LogisticsType::Transport,
                    desc: "Uber Volta".into(),
                    value: Decimal::from(28),
                },
            ],
            invoices: vec![Invoice {
                id: Uuid::new_v4(),
                supplier_id: textil_santos.id,
                discount: Decimal::from(10),
                discount_value: Decimal::from(10),
                discount_type: DiscountType::Value,
                items: vec![InvoiceItem {
                    id: Uuid::new_v4(),
                    kind: InvoiceItemKind::Material,
                    item_id: Some(suplex.id),
                    qty: Decimal::from(20),
                    price: Decimal::from(44),
                    ..InvoiceItem::default()
                }],
            }],
            total_logistics: Decimal::new(7150, 2),
            total_goods: Decimal::from(870),
            grand_total: Decimal::new(94150, 2),
            logistics_confirmed: false,
        };

        let fixed_costs = FixedCosts {
            total: Decimal::from(2500),
            estimated_sales: Decimal::from(500),
            items: vec![
                FixedCostItem {
                    id: Uuid::new_v4(),
                    name: "Aluguel".into(),
                    value: Decimal::from(1500),
                },
                FixedCostItem {
                    id: Uuid::new_v4(),
                    name: "Energia e Internet".into(),
                    value: Decimal::from(1000),
                },
            ],
        };

        Self {
            materials: vec![suplex, elastico],
            extras: vec![caixa, tag_marca],
            suppliers: vec![textil_santos, aviamentos_silva],
            polos: vec![polo_bras],
            clients: vec![joao],
            products: vec![sunga],
            kits: vec![kit_verao],
            shopping_trips: vec![viagem_bras],
            fixed_costs,
            logistics_fund: LogisticsFund::default(),
            promotions: vec![black_friday],
        }
    }
}
