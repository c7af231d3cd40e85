pub mod ask_handler;
pub mod post_handler;

pub use ask_handler::AskHandler;
pub use post_handler::PostHandler;
