//! Command implementations

pub mod inspect;
pub mod lookup;
mod session;

pub use session::Session;
