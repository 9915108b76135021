use anyhow::{anyhow, Result};
use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

pub fn get_subscriber<Sink>(filter: EnvFilter, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Registry::default()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(sink),
        )
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

/// stderr にログを出す。stdout は出力行列用
///
/// level = trace|debug|info|warn|error|off, RUST_LOG が優先
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    init_subscriber(get_subscriber(filter, std::io::stderr))
}
