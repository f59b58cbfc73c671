pub mod logger;
pub mod transport;

pub use logger::{ContextLogger, LogField, TracingLogger, TransportLogger};
pub use transport::{
    HijackTransport, Transport, TransportFactory, TransportOptions, TransportRegistry,
    DEFAULT_TTL,
};
