mod broadcast_message;
mod service_message;

pub use broadcast_message::*;
pub use service_message::*;
