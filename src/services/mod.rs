/// Business logic services
pub mod qotd_service;
