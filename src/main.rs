use kinesis_tailer::{tailer, Client, Config, Error};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Records go to stdout, so logs are kept on stderr.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::from_env()?;
    let client = Client::connect(config.region(), config.endpoint_url()).await;

    let mut tailer = tailer::builder()
        .client(client)
        .config(&config)
        .build()?;

    tailer.run().await
}
