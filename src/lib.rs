pub mod config;
pub mod error;
pub mod error_utils;
pub mod report;
pub mod validation;
