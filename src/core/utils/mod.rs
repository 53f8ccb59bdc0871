#[macro_use]
pub mod safety;
pub mod alloc;
pub mod console_logger;
