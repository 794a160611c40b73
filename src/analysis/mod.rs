//! Analysis leaves consumed by the pipeline stages
//!
//! - [`deadline`] - deadline spacing and free-text deadline parsing
//! - [`matrix`] - Eisenhower matrix prioritization
//! - [`integrations`] - keyword-driven external action suggestions
//! - [`dependencies`] - cycle detection over depends-on lists

pub mod deadline;
pub mod dependencies;
pub mod integrations;
pub mod matrix;

pub use deadline::{calculate_deadline, parse_deadline};
pub use dependencies::has_circular_dependencies;
pub use integrations::{Integration, IntegrationAction, IntegrationKind, suggest_integrations};
pub use matrix::{MatrixPosition, Quadrant, assign_matrix_positions};
