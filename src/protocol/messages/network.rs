//! Network-management PGNs: ISO Request/Acknowledgement/Address Claim,
//! Heartbeat, Product/Configuration Information, and the supported-PGN list.
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::scaled::PgnBytes;
use crate::infra::codec::traits::PgnData;
use crate::protocol::constants::{
    MAX_N2K_CONFIGURATION_INFO_FIELD_LEN, MAX_N2K_MODEL_ID_LEN, MAX_N2K_MODEL_SERIAL_CODE_LEN,
    MAX_N2K_MODEL_VERSION_LEN, MAX_N2K_SW_CODE_LEN,
};
use crate::protocol::lookups::N2kIsoAckControl;

/// PGN 59392 — ISO Acknowledgement. Reply to an ISO Request a node cannot
/// otherwise satisfy, or the default NACK for an unhandled group function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoAcknowledgement {
    pub control: N2kIsoAckControl,
    pub group_function: u8,
    pub pgn: u32,
}

impl PgnData for IsoAcknowledgement {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let control = N2kIsoAckControl::from(r.read_u8(8)?);
        let group_function = r.read_u8(8)?;
        r.advance(24)?; // three reserved bytes
        let pgn = r.read_u32(24)?;
        Ok(Self {
            control,
            group_function,
            pgn,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(u8::from(self.control), 8)?;
        w.write_u8(self.group_function, 8)?;
        w.write_u64(0xFF_FFFF, 24)?;
        w.write_u32(self.pgn, 24)?;
        Ok(8)
    }
}

/// PGN 59904 — ISO Request. Asks `destination` (carried on the CAN
/// identifier, not in the payload) to transmit `requested_pgn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoRequest {
    pub requested_pgn: u32,
}

impl PgnData for IsoRequest {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        if payload.len() < 3 {
            return Err(DeserializationError::DecodeShort);
        }
        let mut r = BitReader::new(payload);
        Ok(Self {
            requested_pgn: r.read_u32(24)?,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u32(self.requested_pgn, 24)?;
        Ok(3)
    }
}

/// PGN 60928 — ISO Address Claim. Carries the local NAME; see
/// [`crate::protocol::managment::iso_name::IsoName`] for the shared bit
/// layout and the `From` conversions between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoAddressClaim {
    pub unique_number: u32,
    pub manufacturer_code: u16,
    pub device_instance_lower: u8,
    pub device_instance_upper: u8,
    pub device_function: u8,
    pub device_class: u8,
    pub system_instance: u8,
    pub industry_group: u8,
    pub arbitrary_address_capable: bool,
}

impl PgnData for IsoAddressClaim {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let unique_number = r.read_u32(21)?;
        let manufacturer_code = r.read_u16(11)?;
        let device_instance_lower = r.read_u8(3)?;
        let device_instance_upper = r.read_u8(5)?;
        let device_function = r.read_u8(8)?;
        r.advance(1)?; // reserved
        let device_class = r.read_u8(7)?;
        let system_instance = r.read_u8(4)?;
        let industry_group = r.read_u8(3)?;
        let arbitrary_address_capable = r.read_u8(1)? != 0;
        Ok(Self {
            unique_number,
            manufacturer_code,
            device_instance_lower,
            device_instance_upper,
            device_function,
            device_class,
            system_instance,
            industry_group,
            arbitrary_address_capable,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u32(self.unique_number, 21)?;
        w.write_u16(self.manufacturer_code, 11)?;
        w.write_u8(self.device_instance_lower, 3)?;
        w.write_u8(self.device_instance_upper, 5)?;
        w.write_u8(self.device_function, 8)?;
        w.write_u8(0, 1)?;
        w.write_u8(self.device_class, 7)?;
        w.write_u8(self.system_instance, 4)?;
        w.write_u8(self.industry_group, 3)?;
        w.write_u8(self.arbitrary_address_capable as u8, 1)?;
        Ok(8)
    }
}

/// PGN 126993 — Heartbeat. Emitted every `heartbeat_interval` ms with a
/// rolling counter so peers can detect a silently-reset node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heartbeat {
    /// Configured transmission interval, in ms (10..=655_320).
    pub interval_ms: u32,
    /// Rolling counter, incremented (mod 256) on every emission.
    pub sequence_counter: u8,
    /// `true` when the node considers itself in an alarm/degraded state.
    pub equipment_status_alarm: bool,
}

impl PgnData for Heartbeat {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let interval_ms = (r.read_u16(16)? as u32) * 10;
        let sequence_counter = r.read_u8(8)?;
        let equipment_status_alarm = r.read_u8(2)? != 0;
        Ok(Self {
            interval_ms,
            sequence_counter,
            equipment_status_alarm,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u16((self.interval_ms / 10) as u16, 16)?;
        w.write_u8(self.sequence_counter, 8)?;
        w.write_u8(self.equipment_status_alarm as u8, 2)?;
        w.write_u64(0x3F, 6)?; // reserved
        w.write_u64(0xFF_FFFF_FFFF, 32)?; // remaining bytes padded
        Ok(8)
    }
}

/// PGN 126996 — Product Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductInformation {
    pub n2k_version: u16,
    pub product_code: u16,
    pub model_id: PgnBytes,
    pub sw_code: PgnBytes,
    pub model_version: PgnBytes,
    pub model_serial_code: PgnBytes,
    pub certification_level: u8,
    pub load_equivalency: u8,
}

impl PgnData for ProductInformation {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let n2k_version = r.read_u16(16)?;
        let product_code = r.read_u16(16)?;
        let model_id = r.get_str(MAX_N2K_MODEL_ID_LEN)?;
        let sw_code = r.get_str(MAX_N2K_SW_CODE_LEN)?;
        let model_version = r.get_str(MAX_N2K_MODEL_VERSION_LEN)?;
        let model_serial_code = r.get_str(MAX_N2K_MODEL_SERIAL_CODE_LEN)?;
        let certification_level = r.read_u8(8)?;
        let load_equivalency = r.read_u8(8)?;
        Ok(Self {
            n2k_version,
            product_code,
            model_id,
            sw_code,
            model_version,
            model_serial_code,
            certification_level,
            load_equivalency,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u16(self.n2k_version, 16)?;
        w.write_u16(self.product_code, 16)?;
        w.put_str(self.model_id.as_slice(), MAX_N2K_MODEL_ID_LEN)?;
        w.put_str(self.sw_code.as_slice(), MAX_N2K_SW_CODE_LEN)?;
        w.put_str(self.model_version.as_slice(), MAX_N2K_MODEL_VERSION_LEN)?;
        w.put_str(
            self.model_serial_code.as_slice(),
            MAX_N2K_MODEL_SERIAL_CODE_LEN,
        )?;
        w.write_u8(self.certification_level, 8)?;
        w.write_u8(self.load_equivalency, 8)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 126998 — Configuration Information: installation description 1,
/// installation description 2, manufacturer information. Each field is
/// truncated and length-prefixed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationInformation {
    pub installation_description1: PgnBytes,
    pub installation_description2: PgnBytes,
    pub manufacturer_information: PgnBytes,
}

impl PgnData for ConfigurationInformation {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let installation_description1 = r.get_var_str()?.unwrap_or_default();
        let installation_description2 = r.get_var_str()?.unwrap_or_default();
        let manufacturer_information = r.get_var_str()?.unwrap_or_default();
        Ok(Self {
            installation_description1,
            installation_description2,
            manufacturer_information,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        let inst1_len = self
            .installation_description1
            .len()
            .min(MAX_N2K_CONFIGURATION_INFO_FIELD_LEN);
        let inst2_len = self
            .installation_description2
            .len()
            .min(MAX_N2K_CONFIGURATION_INFO_FIELD_LEN);
        let man_len = self
            .manufacturer_information
            .len()
            .min(MAX_N2K_CONFIGURATION_INFO_FIELD_LEN);

        w.put_var_str(&self.installation_description1.as_slice()[..inst1_len])?;
        w.put_var_str(&self.installation_description2.as_slice()[..inst2_len])?;
        w.put_var_str(&self.manufacturer_information.as_slice()[..man_len])?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 126464 — Supported-PGN list (transmit or receive), as requested by a
/// peer. Carries up to 27 PGNs (223-byte Fast Packet budget, 1 header byte
/// + 3 bytes per PGN entry).
///
/// Direction tag for [`PgnList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgnListFunction {
    Transmit,
    Receive,
    Unknown(u8),
}

impl From<u8> for PgnListFunction {
    fn from(raw: u8) -> Self {
        match raw {
            0 => PgnListFunction::Transmit,
            1 => PgnListFunction::Receive,
            other => PgnListFunction::Unknown(other),
        }
    }
}

impl From<PgnListFunction> for u8 {
    fn from(value: PgnListFunction) -> Self {
        match value {
            PgnListFunction::Transmit => 0,
            PgnListFunction::Receive => 1,
            PgnListFunction::Unknown(raw) => raw,
        }
    }
}

const MAX_PGN_LIST_ENTRIES: usize = 27;

#[derive(Debug, Clone, Copy)]
pub struct PgnList {
    pub function: PgnListFunction,
    pub pgns: [u32; MAX_PGN_LIST_ENTRIES],
    pub count: usize,
}

impl PartialEq for PgnList {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
            && self.count == other.count
            && self.pgns[..self.count] == other.pgns[..other.count]
    }
}
impl Eq for PgnList {}

impl PgnData for PgnList {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let function = PgnListFunction::from(r.read_u8(8)?);
        let mut pgns = [0u32; MAX_PGN_LIST_ENTRIES];
        let mut count = 0;
        while count < MAX_PGN_LIST_ENTRIES {
            match r.read_u32(24) {
                Ok(pgn) => {
                    pgns[count] = pgn;
                    count += 1;
                }
                Err(_) => break,
            }
        }
        Ok(Self {
            function,
            pgns,
            count,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        if self.count > MAX_PGN_LIST_ENTRIES {
            return Err(SerializationError::TooManyRepetitions {
                pgn: 126464,
                requested: self.count,
                fits: MAX_PGN_LIST_ENTRIES,
            });
        }
        let mut w = BitWriter::new(buffer);
        w.write_u8(u8::from(self.function), 8)?;
        for pgn in &self.pgns[..self.count] {
            w.write_u32(*pgn, 24)?;
        }
        Ok(w.bit_cursor() / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_acknowledgement_roundtrip() {
        let msg = IsoAcknowledgement {
            control: N2kIsoAckControl::Nak,
            group_function: 0,
            pgn: 60928,
        };
        let mut buf = [0u8; 8];
        let len = msg.to_payload(&mut buf).unwrap();
        assert_eq!(len, 8);
        let decoded = IsoAcknowledgement::from_payload(&buf).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn iso_request_roundtrip() {
        let msg = IsoRequest {
            requested_pgn: 126996,
        };
        let mut buf = [0u8; 3];
        let len = msg.to_payload(&mut buf).unwrap();
        assert_eq!(len, 3);
        let decoded = IsoRequest::from_payload(&buf).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn address_claim_roundtrip() {
        let msg = IsoAddressClaim {
            unique_number: 123456,
            manufacturer_code: 275,
            device_instance_lower: 1,
            device_instance_upper: 2,
            device_function: 130,
            device_class: 25,
            system_instance: 0,
            industry_group: 4,
            arbitrary_address_capable: true,
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = IsoAddressClaim::from_payload(&buf).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn heartbeat_roundtrip() {
        let msg = Heartbeat {
            interval_ms: 60_000,
            sequence_counter: 42,
            equipment_status_alarm: false,
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = Heartbeat::from_payload(&buf).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn product_information_roundtrip() {
        let mut model_id = PgnBytes::default();
        model_id.copy_from_slice(b"helm-node-1");
        let msg = ProductInformation {
            n2k_version: 2100,
            product_code: 1,
            model_id,
            sw_code: PgnBytes::default(),
            model_version: PgnBytes::default(),
            model_serial_code: PgnBytes::default(),
            certification_level: 1,
            load_equivalency: 1,
        };
        let mut buf = [0u8; 134];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = ProductInformation::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.model_id.as_slice(), b"helm-node-1");
        assert_eq!(decoded.n2k_version, 2100);
    }

    #[test]
    fn configuration_information_roundtrip() {
        let mut inst1 = PgnBytes::default();
        inst1.copy_from_slice(b"helm");
        let mut inst2 = PgnBytes::default();
        inst2.copy_from_slice(b"engine room");
        let msg = ConfigurationInformation {
            installation_description1: inst1,
            installation_description2: inst2,
            manufacturer_information: PgnBytes::default(),
        };
        let mut buf = [0u8; 223];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = ConfigurationInformation::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.installation_description1.as_slice(), b"helm");
        assert_eq!(decoded.installation_description2.as_slice(), b"engine room");
    }

    #[test]
    fn pgn_list_roundtrip() {
        let mut pgns = [0u32; MAX_PGN_LIST_ENTRIES];
        pgns[0] = 126992;
        pgns[1] = 127250;
        let msg = PgnList {
            function: PgnListFunction::Transmit,
            pgns,
            count: 2,
        };
        let mut buf = [0u8; 1 + 3 * MAX_PGN_LIST_ENTRIES];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = PgnList::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded, msg);
    }
}
