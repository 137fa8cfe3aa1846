mod chat_model;
pub mod domain;

pub use chat_model::{ChatModel, OpenAiChat};
