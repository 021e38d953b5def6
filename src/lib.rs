pub mod constants;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod types;
