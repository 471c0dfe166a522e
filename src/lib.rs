pub mod app;
pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod github;
pub mod platform;
pub mod presenter;
pub mod state;
pub mod store;
pub mod types;
