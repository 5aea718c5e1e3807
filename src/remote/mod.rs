//! Remote note gateway: trait, wire envelopes, HTTP and in-memory backends.

mod envelope;
mod gateway;
mod http;
mod memory;

pub use gateway::{Ack, GatewayError, GatewayResult, NoteGateway, Saved};
pub use http::HttpGateway;
pub use memory::{CallCounts, MemoryGateway};
