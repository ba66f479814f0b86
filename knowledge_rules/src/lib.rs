//! # Knowledge Rules
//!
//! The knowledge base crate - holds every fact, rule, question and goal of an
//! expert system session. This crate is the single source of truth for fact
//! values and does not contain any inference logic.

pub mod error;
pub mod facts;
pub mod knowledge_base;
pub mod questions;
pub mod rules;

pub use error::*;
pub use facts::*;
pub use knowledge_base::*;
pub use questions::*;
pub use rules::*;
