//! Authentication primitives

pub mod session;

pub use session::Session;
