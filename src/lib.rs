//! campus-api: accounts, profiles, messaging, courses and blog posts over HTTP,
//! guarded by `campus-auth` bearer tokens.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
