pub mod comparison;
pub mod estimation;
pub mod inputs;
pub mod parameter;
pub mod session;
