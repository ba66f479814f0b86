//! # Inference Core (Deduce)
//!
//! The engine of the expert system. This crate drives a `knowledge_rules`
//! knowledge base: it derives new fact values by forward chaining and, once
//! nothing more can be derived, asks questions to resolve unknown facts.
//!
//! ## Core Components
//!
//! - **evaluator**: Rule applicability and fixpoint application
//! - **selector**: Picks the next question that can still add information
//! - **controller**: The session state machine tying both together
//! - **ask**: The contract for whatever presents questions to a user
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: Rules fire and questions are chosen in declaration order
//! - **Presentation-free**: Rendering and input live behind [`AskCollaborator`]
//! - **One session, one owner**: Each controller exclusively owns its knowledge base

pub mod ask;
pub mod controller;
pub mod error;
pub mod evaluator;
pub mod selector;

pub use ask::*;
pub use controller::*;
pub use error::*;
pub use evaluator::*;
pub use selector::*;
