pub mod article;
pub mod cli;
pub mod client;
pub mod config;
pub mod generation;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod review;
pub mod service;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use service::ArticleService;
