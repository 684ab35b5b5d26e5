pub mod codec;
pub mod plugin;
pub mod registrar;
