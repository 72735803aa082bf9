//! Order Validation Engine Module
//!
//! This module contains the core order entry functionality:
//! - `amount` - Decimal parsing and fixed-point scaling
//! - `errors` - Error types for order validation
//! - `validation` - Order validation pipeline
//! - `validator` - Registry-bound validator used by the API

pub mod amount;
pub mod errors;
pub mod validation;
pub mod validator;

// Re-export commonly used types for convenience
pub use errors::ValidationError;
pub use validation::validate_order;
pub use validator::OrderValidator;
