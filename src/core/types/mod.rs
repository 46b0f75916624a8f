pub mod conv;
mod record;
mod value;

pub use conv::ConversionError;
pub use record::{Record, TIME_KEY};
pub use value::Value;
