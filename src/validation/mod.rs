pub mod fields;
pub mod files;
pub mod steps;

pub use fields::FieldError;
pub use steps::{LoginForm, StepValidation};
