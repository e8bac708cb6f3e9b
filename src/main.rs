use anyhow::Context;

use scanlink::config::init_config;
use scanlink::runtime::server::run_server;
use scanlink::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = init_config().context("Failed to load configuration")?;

    // Guard must stay alive so buffered log writes are flushed on exit
    let _log_guard = init_logging(config);

    run_server().await
}
