use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;
use tts_relay::api::handler;
use tts_relay::core::RelayContext;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tts_relay::setup_logging();

    let ctx = RelayContext::from_env().await.map_err(|e| {
        error!("Startup error: {}", e);
        Error::from(e)
    })?;
    let ctx = &ctx;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(ctx, event).await
    }))
    .await
}
