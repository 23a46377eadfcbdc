//! Loads the first page of leads and reports the dashboard numbers.

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use pushkind_leads::api::http::HttpLeadsApi;
use pushkind_leads::models::config::load_config;
use pushkind_leads::services::export::export_leads_to_path;
use pushkind_leads::services::leads::LeadsService;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match load_config(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let api = match HttpLeadsApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to build leads API client: {err}");
            std::process::exit(1);
        }
    };

    let service = LeadsService::from_config(api, &config);

    if let Err(err) = service.fetch_leads().await {
        log::error!("Failed to load leads: {err}");
        std::process::exit(1);
    }

    let stats = service.stats();
    let window = service.store().page_window();
    log::info!(
        "Total leads: {}, qualified: {}, average score: {}, conversion rate: {}% (page {} of {})",
        stats.total_leads,
        stats.qualified_leads,
        stats.avg_score,
        stats.conversion_rate,
        window.page,
        window.total_pages
    );

    if let Some(path) = &config.export_path {
        let store = service.store();
        if let Err(err) = export_leads_to_path(store.leads(), Path::new(path)) {
            log::error!("Failed to export leads: {err}");
            std::process::exit(1);
        }
    }
}
