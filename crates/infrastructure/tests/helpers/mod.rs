#![allow(unused_imports)]
pub mod builders;
pub mod recording_logger;

pub use builders::{HijackBuilder, QueryBuilder};
pub use recording_logger::RecordingLogger;
