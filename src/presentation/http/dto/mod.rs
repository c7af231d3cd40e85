pub mod ask_dto;
pub mod post_dto;
pub mod response_dto;

pub use ask_dto::*;
pub use post_dto::*;
pub use response_dto::*;
