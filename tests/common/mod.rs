// Test helpers are intentionally partially used
#![allow(dead_code)]

use contoso_sales_metrics::{build_router, create_prom_metrics};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    /// Start a server with its own Prometheus registry.
    pub async fn new() -> Self {
        // ---
        let metrics = create_prom_metrics().expect("Should be able to create metrics");
        Self::with_router(build_router(metrics)).await
    }

    pub async fn with_router(app: axum::Router) -> Self {
        // ---
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// POST a sale and return the response.
    pub async fn post_sale(&self, sale: &Value) -> reqwest::Response {
        // ---
        self.client
            .post(self.url("/complete-sale"))
            .json(sale)
            .send()
            .await
            .expect("Failed to post sale")
    }

    /// Fetch the current metrics exposition.
    pub async fn scrape(&self) -> String {
        // ---
        self.client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("Failed to scrape metrics")
            .text()
            .await
            .expect("Failed to read metrics body")
    }
}

pub fn sale(product: &str, quantity: i32, age: i32, location: &str) -> Value {
    // ---
    json!({
        "productName": product,
        "quantitySold": quantity,
        "age": age,
        "location": location,
    })
}

/// Value of the series `name{labels}` in a rendered exposition, if present.
pub fn sample(body: &str, name: &str, labels: &str) -> Option<f64> {
    // ---
    let prefix = format!("{name}{{{labels}}} ");
    body.lines()
        .find_map(|line| line.strip_prefix(&prefix))
        .and_then(|value| value.trim().parse().ok())
}
