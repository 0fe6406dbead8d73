pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod job_postings;
pub mod latex;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod workflow;
