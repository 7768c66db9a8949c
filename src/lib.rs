//! User Management API Library
//!
//! Core library modules for the user management web service.

pub mod api;
pub mod cli;
pub mod config;
pub mod logger;
pub mod server;
