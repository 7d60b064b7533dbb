pub mod codec;
pub mod derived;
pub mod models;
