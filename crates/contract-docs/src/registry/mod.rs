mod parser;
mod types;
mod validator;

pub use parser::{parse_registry, parse_registry_str};
pub use types::*;
pub use validator::validate_registry;
