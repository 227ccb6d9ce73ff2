#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use anyhow::Result;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, info};

mod response;
use response::Response;

#[derive(Deserialize, Debug)]
struct Event {
    key1: Option<Value>,
    key2: Option<Value>,
    key3: Option<Value>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time() // CloudWatch adds the ingestion time
        .init();

    info!("Loading function");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Event>| async {
        let response = handler(event).await.map_err(|e| {
            error!("{:?}", e); // log error chain to CloudWatch
            e
        })?;
        Ok(response) as Result<Response>
    }))
    .await?;

    Ok(())
}

// The response never depends on the input; the keys are read for logging only.
async fn handler(event: LambdaEvent<Event>) -> Result<Response> {
    let (event, _context) = event.into_parts();

    debug!("Got event: {:?}", event);

    info!("value1 = {}", event.key1.unwrap_or(serde_json::Value::Null));
    info!("value2 = {}", event.key2.unwrap_or(serde_json::Value::Null));
    info!("value3 = {}", event.key3.unwrap_or(serde_json::Value::Null));

    Response::fixed()
}
