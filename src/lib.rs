pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod flows;
pub mod form;
pub mod http_client;
pub mod logging;
pub mod model;
pub mod provider;
pub mod state;
pub mod view;
