/// Utility modules for common functionality
pub mod datetime;
pub mod validation;
