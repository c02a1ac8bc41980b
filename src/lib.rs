//! `n2k-node` library: primitives and protocols required to run an NMEA 2000
//! node in a `no_std` environment. The crate exposes the infrastructure
//! modules (bit-level codec), protocol logic (address management, transport,
//! messages), and the top-level synchronous [`protocol::node::Node`] state
//! machine.
#![no_std]
//==================================================================================
/// Domain and low-level errors (CAN identifier construction, serialization,
/// deserialization, configuration, and related issues).
pub mod error;
/// Representation of a raw NMEA 2000 frame as it is read from the CAN bus.
pub mod infra;
/// NMEA 2000 protocol implementation: CAN transport, fast packets,
/// address management, and lookup tables.
pub mod protocol;
//==================================================================================
pub use error::NodeError;
pub use protocol::message::Message;
pub use protocol::node::{Node, NodeConfig};
//==================================================================================
