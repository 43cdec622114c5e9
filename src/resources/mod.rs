//! API resources

pub use files::Files;

mod files;
