pub mod models;

pub use models::timestamp::{Timestamp, UnixTimestamp, NATURAL_FORMAT};
pub use models::timestamp_error::TimestampError;
