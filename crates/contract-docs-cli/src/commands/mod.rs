pub mod build;
pub mod render;
pub mod status;
pub mod validate;
