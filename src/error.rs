//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (CAN ID construction,
//! address management, serialization/deserialization, node configuration,
//! etc.).
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur while building a 29-bit CAN identifier.
pub enum CanIdBuildError {
    /// Provided parameters do not produce a valid identifier.
    #[error("Invalid data")]
    InvalidData,
    /// The destination address violates protocol constraints.
    #[error("Invalid destination")]
    InvalidDestination,
    /// Attempt to build a broadcast message (PDU2) with PF < 240.
    #[error("Invalid for broadcast message: PF is too low")]
    InvalidForBroadcast,
    /// Attempt to send an addressed message (PDU1) with PF ≥ 240.
    #[error("Invalid for addressed message: PF is too high: {pgn}")]
    InvalidForFocusedMessage { pgn: u8 },
    /// In PDU1 the lower 8 bits of the PGN must remain zero.
    #[error("PDU1 PGNs require PS = 0")]
    PsFocusMessageMustBeNull,
    /// No payload available to build the frame.
    #[error("Payload is empty: unable to build")]
    EmptyPayload,
}

//================================================================================CODEC_ERROR

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Issues encountered while serializing a PGN into a buffer.
pub enum SerializationError {
    /// Provided buffer is too small for the payload (`BufferFull`: encode
    /// would exceed the 223-byte PGN limit).
    #[error("Buffer too small")]
    BufferTooSmall,
    /// Data does not satisfy field constraints (e.g. a string too long for
    /// its fixed slot).
    #[error("Invalid data")]
    InvalidData,
    /// A repeating group has more entries than the PGN can carry within the
    /// 223-byte Fast Packet limit.
    #[error("Too many repetitions for {pgn}: {requested} requested, {fits} fit")]
    TooManyRepetitions {
        pgn: u32,
        requested: usize,
        fits: usize,
    },
    /// Failed while writing bits into the output buffer.
    #[error("BitWrite error: {err}")]
    BitWriteError { err: BitWriterError },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised while deserializing a CAN buffer into a PGN structure.
/// Per the error handling policy, these never propagate to user handlers —
/// the frame is dropped and the occurrence counted.
pub enum DeserializationError {
    /// Fewer bytes were available than the field requires (`DecodeShort`).
    #[error("Decode short: not enough bytes for field")]
    DecodeShort,
    /// Reserved bits were inconsistent or a length prefix was invalid
    /// (`DecodeMalformed`).
    #[error("Decode malformed: inconsistent reserved bits or length prefix")]
    DecodeMalformed,
    /// Bit-level access on the buffer failed (out of bounds,
    /// misalignment…).
    #[error("BitReader error: {err}")]
    BitReaderError { err: BitReaderError },
}

impl From<BitReaderError> for DeserializationError {
    fn from(err: BitReaderError) -> Self {
        match err {
            BitReaderError::OutOfBounds { .. } => DeserializationError::DecodeShort,
            other => DeserializationError::BitReaderError { err: other },
        }
    }
}

//==================================================================================SEND_ERROR
#[derive(Debug, Error)]
/// Errors encountered when sending a PGN (build + transmit).
pub enum SendPgnError<E: core::fmt::Debug> {
    /// PGN serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(SerializationError),
    /// CAN identifier could not be built (`InvalidPGN`).
    #[error("Frame build failed: {0:?}")]
    Build(CanIdBuildError),
    /// CAN layer refused or failed to send the frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}

//==================================================================================NODE_ERROR
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Construction-time configuration errors for [`crate::protocol::node::Node`].
pub enum ConfigError {
    /// NAME must not be zero.
    #[error("NAME must not be zero")]
    ZeroName,
    /// Heartbeat interval outside the valid 10..655_320 ms range.
    #[error("Heartbeat interval {millis} ms out of range (10..655320)")]
    HeartbeatIntervalOutOfRange { millis: u32 },
    /// A product/configuration info string exceeds its maximum length.
    #[error("Product/configuration info string too long: {len} > {max}")]
    StringTooLong { len: usize, max: usize },
}

/// Node-level runtime errors surfaced to the host application. Decode
/// failures are intentionally absent: per the error handling policy they
/// are dropped silently and only counted, never surfaced here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NodeError<E: core::fmt::Debug + Clone + Copy + PartialEq + Eq> {
    /// The internal send queue overflowed; the oldest pending frame was
    /// evicted to make room.
    #[error("Send queue backpressure: frame dropped")]
    Backpressure,
    /// No free address could be found during address claim; the node has
    /// entered `CannotClaim` and must not transmit any PGN but its claim.
    #[error("Address claim lost: no address available")]
    AddressClaimLost,
    /// The CAN driver rejected a frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
    /// Encoding `pgn_data` into its wire payload failed (buffer too small or
    /// a repeating group overflowed the Fast Packet limit); nothing was
    /// transmitted.
    #[error("Buffer full: {0}")]
    BufferFull(SerializationError),
}

//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when required.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}
//==================================================================================BITWRITER_ERRORS
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors raised during bitwise writes into a buffer.
pub enum BitWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
    /// Field is too large for the provided type.
    #[error("Cannot write more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Cursor is not aligned on a byte boundary when the operation requires it.
    #[error("Non aligned bit. Cursor: {cursor}")]
    NonAlignedBit { cursor: usize },
}

impl From<BitWriterError> for SerializationError {
    fn from(err: BitWriterError) -> Self {
        SerializationError::BitWriteError { err }
    }
}
