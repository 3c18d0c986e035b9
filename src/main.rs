use anyhow::Context;
use ktp_narasi_server::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid server configuration. Please check your .env file. Error: {}", e);
            return Err(e.into());
        }
    };

    ktp_narasi_server::run(config)
        .await
        .context("HTTP server stopped with an error")
}
