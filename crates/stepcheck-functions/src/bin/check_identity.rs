//! Identity step function

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use stepcheck_functions::{bootstrap, check_identity};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = bootstrap();
    tracing::info!(redact_pii = config.redact_pii(), "Starting check-identity function");

    let config = &config;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        check_identity(event, config).await.map_err(Error::from)
    }))
    .await
}
