use std::env;

use config::{Config, Environment, File};
use dotenvy::dotenv;

use pushkind_leads::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) if !server_config.database_url.trim().is_empty() => server_config,
        Ok(_) => {
            log::error!("database_url is not set");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = pushkind_leads::run(server_config).await {
        log::error!("Failed to start server: {e}");
        std::process::exit(1);
    }

    Ok(())
}
