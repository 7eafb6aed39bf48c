/// Utility modules for common functionality
pub mod messages;
pub mod timezone;
pub mod validation;
