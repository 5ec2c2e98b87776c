//! Application services

pub mod scope;

pub use scope::ScopeService;
