//! Address step function

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use stepcheck_functions::{bootstrap, check_address};

#[tokio::main]
async fn main() -> Result<(), Error> {
    bootstrap();
    tracing::info!("Starting check-address function");

    run(service_fn(|event: LambdaEvent<Value>| async move {
        check_address(event).await.map_err(Error::from)
    }))
    .await
}
