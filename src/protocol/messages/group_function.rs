//! PGN 126208 — NMEA Request/Command/Acknowledge Group Function.
//!
//! Every group-function sub-message (Request, Command, Acknowledge, Read,
//! ReadReply, Write, WriteReply) shares the same 4-byte header: a 1-byte
//! group-function code followed by a 3-byte target PGN. This crate decodes
//! that shared header and the Acknowledge reply fully; it does not decode
//! the per-PGN parameter lists the Request/Command/Read/Write variants
//! carry afterward (see
//! [`crate::protocol::managment::group_function::GroupFunctionRegistry`],
//! which dispatches by target PGN without inspecting those parameters).
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::traits::PgnData;
use crate::protocol::lookups::{
    N2kGroupFunctionCode, N2kGroupFunctionPGNErrorCode, N2kGroupFunctionParameterErrorCode,
    N2kGroupFunctionTransmissionOrPriorityErrorCode,
};

/// Shared 4-byte header every group-function sub-message starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFunctionHeader {
    pub code: N2kGroupFunctionCode,
    pub target_pgn: u32,
}

impl GroupFunctionHeader {
    /// Decode just the header, leaving the remaining sub-message bytes (if
    /// any) available to a more specific decoder.
    pub fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        if payload.len() < 4 {
            return Err(DeserializationError::DecodeShort);
        }
        let mut r = BitReader::new(payload);
        let code = N2kGroupFunctionCode::from(r.read_u8(8)?);
        let target_pgn = r.read_u32(24)?;
        Ok(Self { code, target_pgn })
    }
}

/// Maximum number of per-parameter error codes carried in one Acknowledge
/// reply. 223-byte Fast Packet budget minus the 6-byte fixed header leaves
/// room for far more than any real request carries; this bound only
/// protects the fixed-size buffer.
pub const MAX_GROUP_FUNCTION_PARAMETERS: usize = 32;

/// PGN 126208, group function code `Acknowledge`: the core's reply to a
/// Request/Command/Read/Write it could (or could not) honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupFunctionAcknowledge {
    pub target_pgn: u32,
    pub pgn_error_code: N2kGroupFunctionPGNErrorCode,
    pub transmission_or_priority_error_code: N2kGroupFunctionTransmissionOrPriorityErrorCode,
    pub parameter_error_codes: [N2kGroupFunctionParameterErrorCode; MAX_GROUP_FUNCTION_PARAMETERS],
    pub parameter_count: usize,
}

impl GroupFunctionAcknowledge {
    /// Build a bare Acknowledge carrying only the two header-level error
    /// codes and no per-parameter detail — the shape
    /// [`Node`](crate::protocol::node::Node) emits for its group-function
    /// skeleton (no parameters are ever decoded, so none are ever reported).
    pub fn plain(
        target_pgn: u32,
        pgn_error_code: N2kGroupFunctionPGNErrorCode,
        transmission_or_priority_error_code: N2kGroupFunctionTransmissionOrPriorityErrorCode,
    ) -> Self {
        Self {
            target_pgn,
            pgn_error_code,
            transmission_or_priority_error_code,
            parameter_error_codes: [N2kGroupFunctionParameterErrorCode::Acknowledge;
                MAX_GROUP_FUNCTION_PARAMETERS],
            parameter_count: 0,
        }
    }
}

impl PgnData for GroupFunctionAcknowledge {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let header = GroupFunctionHeader::from_payload(payload)?;
        let mut r = BitReader::new(payload);
        r.advance(32)?; // code + target pgn, already parsed above
        let pgn_error_code = N2kGroupFunctionPGNErrorCode::from(r.read_u8(4)?);
        let transmission_or_priority_error_code =
            N2kGroupFunctionTransmissionOrPriorityErrorCode::from(r.read_u8(4)?);
        let parameter_count = r.read_u8(8)? as usize;

        let mut parameter_error_codes =
            [N2kGroupFunctionParameterErrorCode::Acknowledge; MAX_GROUP_FUNCTION_PARAMETERS];
        let clamped = parameter_count.min(MAX_GROUP_FUNCTION_PARAMETERS);
        for slot in parameter_error_codes.iter_mut().take(clamped) {
            *slot = N2kGroupFunctionParameterErrorCode::from(r.read_u8(4)?);
        }

        Ok(Self {
            target_pgn: header.target_pgn,
            pgn_error_code,
            transmission_or_priority_error_code,
            parameter_error_codes,
            parameter_count: clamped,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        if self.parameter_count > MAX_GROUP_FUNCTION_PARAMETERS {
            return Err(SerializationError::TooManyRepetitions {
                pgn: 126208,
                requested: self.parameter_count,
                fits: MAX_GROUP_FUNCTION_PARAMETERS,
            });
        }
        let mut w = BitWriter::new(buffer);
        w.write_u8(u8::from(N2kGroupFunctionCode::Acknowledge), 8)?;
        w.write_u32(self.target_pgn, 24)?;
        w.write_u8(u8::from(self.pgn_error_code), 4)?;
        w.write_u8(u8::from(self.transmission_or_priority_error_code), 4)?;
        w.write_u8(self.parameter_count as u8, 8)?;
        for code in &self.parameter_error_codes[..self.parameter_count] {
            w.write_u8(u8::from(*code), 4)?;
        }
        if self.parameter_count % 2 == 1 {
            w.write_u8(0x0F, 4)?; // pad the trailing nibble
        }
        Ok((w.bit_cursor() + 7) / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_decodes_request_for_product_information() {
        let payload = [0u8, 0xF3, 0xF0, 0x01, 0, 0, 0, 0];
        let header = GroupFunctionHeader::from_payload(&payload).unwrap();
        assert_eq!(header.code, N2kGroupFunctionCode::Request);
        assert_eq!(header.target_pgn, 126996);
    }

    #[test]
    fn acknowledge_roundtrip_no_parameters() {
        let msg = GroupFunctionAcknowledge::plain(
            126996,
            N2kGroupFunctionPGNErrorCode::PGNNotSupported,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::Acknowledge,
        );
        let mut buf = [0u8; 8];
        let len = msg.to_payload(&mut buf).unwrap();
        assert_eq!(len, 6);
        let decoded = GroupFunctionAcknowledge::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn acknowledge_roundtrip_with_parameters() {
        let mut msg = GroupFunctionAcknowledge::plain(
            130306,
            N2kGroupFunctionPGNErrorCode::Acknowledge,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::Acknowledge,
        );
        msg.parameter_error_codes[0] = N2kGroupFunctionParameterErrorCode::RequestOrCommandParameterOutOfRange;
        msg.parameter_error_codes[1] = N2kGroupFunctionParameterErrorCode::Acknowledge;
        msg.parameter_count = 2;

        let mut buf = [0u8; 16];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = GroupFunctionAcknowledge::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded, msg);
    }
}
