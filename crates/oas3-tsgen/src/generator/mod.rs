pub mod context;
pub mod description;
pub mod errors;
pub mod imports;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod operation;
pub mod operation_registry;
pub mod options;
pub mod orchestrator;
pub mod pruner;
pub mod resolver;
pub mod service;
pub mod type_synth;
pub mod unit;
pub mod variants;

pub use errors::GenerationError;
pub use options::{EnumStyle, GeneratorOptions};

#[cfg(test)]
mod tests;
