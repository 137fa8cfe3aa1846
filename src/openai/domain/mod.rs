mod chat_completion;
mod chat_request;

pub use chat_completion::{ChatCompletion, Choice, ChoiceMessage};
pub use chat_request::{ChatRequest, Message, ResponseFormat, Role};
