pub mod interrupt;
pub mod logger;
