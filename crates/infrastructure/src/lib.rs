//! DNS Transport Infrastructure Layer
pub mod dns;
