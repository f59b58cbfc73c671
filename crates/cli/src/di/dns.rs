use dns_transport_domain::Config;
use dns_transport_infrastructure::dns::{
    HijackTransport, TracingLogger, Transport, TransportOptions, TransportRegistry,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct TransportServices {
    pub registry: TransportRegistry,
    pub transports: Vec<Arc<dyn Transport>>,
    shutdown: CancellationToken,
}

impl TransportServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Self::build_registry();
        let shutdown = CancellationToken::new();

        info!(schemes = ?registry.schemes(), "Transport registry ready");

        let mut transports: Vec<Arc<dyn Transport>> = Vec::with_capacity(config.transports.len());
        for entry in &config.transports {
            let options = TransportOptions::from_config(entry)?
                .with_context(shutdown.clone())
                .with_logger(TracingLogger::shared(entry.tag.as_str()));

            let transport = registry.create(options)?;
            transport.start().await?;

            info!(transport = %entry.tag, address = %entry.address, "Transport started");
            transports.push(transport);
        }

        Ok(Self {
            registry,
            transports,
            shutdown,
        })
    }

    fn build_registry() -> TransportRegistry {
        let mut registry = TransportRegistry::new();
        HijackTransport::register(&mut registry);
        registry
    }

    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Transport>> {
        self.transports.iter().find(|t| t.name() == tag)
    }

    /// Closes every transport, then cancels the root scope.
    pub fn shutdown(&self) {
        for transport in &self.transports {
            if let Err(e) = transport.close() {
                warn!(transport = %transport.name(), error = %e, "Failed to close transport");
            }
        }
        self.shutdown.cancel();
    }
}
