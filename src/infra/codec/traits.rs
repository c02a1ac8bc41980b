//! Contract implemented by every hand-authored PGN structure: a pair of pure
//! functions converting between a typed record and a raw NMEA 2000 payload.
use crate::error::{DeserializationError, SerializationError};

/// Implemented by every PGN structure in [`crate::protocol::messages`].
/// Encoders and decoders are pure functions over byte buffers (no hidden
/// state, no I/O) per the PGN payload codec's state-machine-free contract.
pub trait PgnData: Sized {
    /// Decode a payload (as received on the bus, or reassembled by the Fast
    /// Packet layer) into this structure.
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError>;

    /// Encode this structure into `buffer`, returning the number of bytes
    /// written.
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError>;
}
