pub mod display;
pub mod error;
pub mod input;
pub mod logger;
pub mod validation;
