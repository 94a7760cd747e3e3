// Main library entry point for Enumsmith.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
