//!
//! Module with all dtos that are passed between server and operators
//!

pub mod input;
pub mod output;

mod service_type;

pub use service_type::*;
