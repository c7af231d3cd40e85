pub mod ask_routes;
pub mod health_routes;
pub mod post_routes;

pub use ask_routes::*;
pub use health_routes::*;
pub use post_routes::*;
