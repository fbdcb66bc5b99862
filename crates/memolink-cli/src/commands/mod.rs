pub mod build_url;
pub mod decrypt;
pub mod dispatch;
pub mod encrypt;
pub mod render;
pub mod validate;
