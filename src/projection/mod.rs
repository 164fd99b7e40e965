//! Compound-growth projection of goals over their horizon

mod state;
mod engine;
mod points;
pub mod growth;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use points::{ProjectionPoint, ProjectionResult};
