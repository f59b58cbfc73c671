//! Scheme → factory table used to turn [`TransportOptions`] into transports.
//!
//! The registry is a plain value: the application builds one at startup and
//! registers every backend it wants explicitly. Nothing is registered
//! implicitly.

use super::{Transport, TransportOptions};
use dns_transport_domain::TransportError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub type TransportFactory =
    Arc<dyn Fn(TransportOptions) -> Result<Arc<dyn Transport>, TransportError> + Send + Sync>;

#[derive(Default)]
pub struct TransportRegistry {
    factories: HashMap<String, TransportFactory>,
}

impl TransportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates every scheme in `schemes` with `factory`.
    ///
    /// A scheme registered twice keeps the last factory.
    pub fn register<F>(&mut self, schemes: &[&str], factory: F)
    where
        F: Fn(TransportOptions) -> Result<Arc<dyn Transport>, TransportError>
            + Send
            + Sync
            + 'static,
    {
        let factory: TransportFactory = Arc::new(factory);
        for scheme in schemes {
            if self
                .factories
                .insert(scheme.to_string(), Arc::clone(&factory))
                .is_some()
            {
                debug!(scheme = %scheme, "Replacing transport factory");
            }
        }
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.factories.contains_key(scheme)
    }

    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        schemes.sort_unstable();
        schemes
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Builds a transport for `options`.
    ///
    /// The factory is looked up by the exact address first, then by the
    /// address' URL scheme.
    pub fn create(&self, options: TransportOptions) -> Result<Arc<dyn Transport>, TransportError> {
        let factory = self
            .factories
            .get(options.address.as_str())
            .or_else(|| options.scheme().and_then(|s| self.factories.get(s)))
            .cloned()
            .ok_or_else(|| TransportError::UnknownTransport(options.address.clone()))?;

        let name = options.name.clone();
        let address = options.address.clone();
        let transport = factory(options)?;

        debug!(transport = %name, address = %address, "Transport created");
        Ok(transport)
    }
}

impl std::fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}
