//! Client-side data model of the Amazon Personalize service.
//!
//! Resource descriptors live in [`personalize::types`], the request and
//! result shapes of every operation in [`personalize::requests`], and the
//! operation catalogue in [`personalize::operation`].

pub mod personalize;

pub use personalize::{
    Direction, Inspection, Operation, OperationRequest, PersonalizeError, RecipeProvider, Status,
    TrainingMode,
};
