mod safe_string;
mod value;

pub use safe_string::SafeString;
pub use value::{Params, Value};
