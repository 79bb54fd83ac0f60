pub mod settings;

use dotenvy::dotenv;
use tokio::sync::OnceCell;

use settings::ServerConfig;

#[derive(Debug)]
pub struct Config {
    server: ServerConfig,
}

impl Config {
    pub fn server_host(&self) -> &str {
        &self.server.host
    }

    pub fn server_port(&self) -> u16 {
        self.server.port
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::const_new();

async fn init_config() -> Config {
    dotenv().ok();

    let server_config = envy::from_env::<ServerConfig>().unwrap_or_default();

    Config {
        server: server_config,
    }
}

pub async fn config() -> &'static Config {
    CONFIG.get_or_init(init_config).await
}
