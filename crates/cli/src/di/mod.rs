mod dns;

pub use dns::TransportServices;
