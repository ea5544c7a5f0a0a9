pub mod frontend;
pub mod health;
pub mod hello;

pub use frontend::frontend_handler;
pub use health::health_handler;
pub use hello::hello_handler;
