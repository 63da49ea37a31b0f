//! Domain types shared by the dispatcher, the form models and the wire layer.

mod constraint;
mod selection;

pub use constraint::{BandwidthUnit, ConstraintProfile, CostType};
pub use selection::Selection;
