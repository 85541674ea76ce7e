//src/main.rs

use fluctus::common::money::format_brl;
use fluctus::config::AppConfig;
use fluctus::models::data::FluctusData;
use fluctus::services::{dashboard_service, kit_service, pricing_service};
use fluctus::store::JsonStore;

fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let config = AppConfig::new().expect("Falha ao carregar a configuração.");

    let store = JsonStore::new(&config.data_file);
    let data = if config.data_file.exists() {
        store
            .load()
            .expect("Falha ao carregar o arquivo de dados.")
    } else {
        tracing::info!("Arquivo de dados não encontrado; gerando acervo de demonstração.");
        let mut seeded = FluctusData::seed();
        // Primeiro uso: alinha as fotografias com o motor de cálculo.
        pricing_service::recalculate_all_products(&mut seeded);
        kit_service::recalculate_all_kits(&mut seeded);
        seeded
    };

    let summary = dashboard_service::summarize(&data);
    tracing::info!(
        "🧵 Produtos: {} | Kits: {} | Clientes: {} | Fornecedores: {}",
        summary.product_count,
        summary.kit_count,
        summary.client_count,
        summary.supplier_count
    );
    tracing::info!(
        "🛒 Compras acumuladas: {} | Viagens abertas: {}",
        format_brl(summary.total_purchases),
        summary.open_trips
    );
    tracing::info!(
        "💰 Valor de catálogo: {} | Fundo de logística: {}",
        format_brl(summary.catalog_value),
        format_brl(summary.fund_balance)
    );

    // Persistência melhor-esforço: falha vira log, nunca derruba o estado.
    store.save(&data);

    // Backup diário automático (o arquivo do dia é sobrescrito).
    match store.backup(&data, &config.backup_dir) {
        Ok(file) => tracing::info!("🗄️ Backup atualizado em {}", file.display()),
        Err(e) => tracing::error!("Falha ao gravar o backup: {}", e),
    }
}
