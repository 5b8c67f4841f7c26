pub mod carousel;
pub mod config;
pub mod content;
pub mod football_data;
pub mod http_client;
pub mod logging;
pub mod navbar;
pub mod provider;
pub mod state;
pub mod stats;
pub mod ui;
