pub mod defaults;
pub mod device;
