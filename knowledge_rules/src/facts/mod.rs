//! Facts - named propositions with a tri-state truth value.
//!
//! - **TriState**: UNKNOWN, FALSE or TRUE
//! - **Fact**: a named proposition as it appears in a knowledge base document
//! - **FactStore**: keyed, declaration-ordered storage of every fact value

mod store;
mod value;

pub use store::*;
pub use value::*;
