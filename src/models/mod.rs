pub mod business;
pub mod demo;

pub use business::{
    Business,
    Chatbot,
    CreateBusinessRequest,
    CreateBusinessResponse,
    Pack,
    DEFAULT_BOT_DESCRIPTION,
};
pub use demo::{ReplyRequest, ReplyResponse};
