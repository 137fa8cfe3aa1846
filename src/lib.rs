pub mod app_config;
pub mod domain;
pub mod extractor;
pub mod history;
pub mod narration;
pub mod openai;
pub mod planner;
pub mod replicate;
pub mod route;
pub mod server;
pub mod upstream;
