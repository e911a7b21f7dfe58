#[macro_use]
mod shape;

pub mod enums;
pub mod error;
pub mod operation;
pub mod requests;
pub mod types;

pub use enums::{RecipeProvider, Status, TrainingMode};
pub use error::PersonalizeError;
pub use operation::{Direction, Inspection, Operation, OperationRequest};
