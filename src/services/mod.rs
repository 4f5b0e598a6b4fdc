pub mod cart_service;
pub mod random_service;

pub use cart_service::*;
pub use random_service::*;
