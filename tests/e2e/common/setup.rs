use timestamp_node::server::app;

/// Main structure that we carry around for our tests.
/// Contains some useful fields & functions attached to make testing easier.
pub struct TestHelper {
    node_base_url: String,
    client: reqwest::Client,
}

impl TestHelper {
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.node_base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.endpoint(path))
            .send()
            .await
            .expect("request to the node failed")
    }
}

/// Serves the full application router on an ephemeral local port and hands
/// back a helper pointed at it.
#[rstest::fixture]
pub async fn setup_node() -> TestHelper {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("could not bind an ephemeral port");
    let addr = listener.local_addr().expect("listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, app().into_make_service())
            .await
            .expect("node server stopped unexpectedly");
    });

    TestHelper {
        node_base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}
