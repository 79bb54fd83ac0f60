use timestamp_node::config::config;
use timestamp_node::server::run_api_server;
use timestamp_node::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing().expect("could not initialize tracing");

    let config = config().await;
    run_api_server(config).await;
}
