//! AIS PGNs relayed onto the NMEA 2000 bus by a gateway. Layouts follow
//! the standard public NMEA 2000 / ITU-R M.1371 field definitions.
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::scaled::{PgnBytes, Scaled};
use crate::infra::codec::traits::PgnData;
use crate::protocol::lookups::{
    N2kAisAtoNType, N2kAisDte, N2kAisMode, N2kAisNavStatus, N2kAisRepeat,
    N2kAisTransceiverInformation, N2kAisUnit, N2kGNSSType, N2kHeadingReference,
};

/// PGN 129038 — AIS Class A Position Report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassAPositionReport {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub longitude: Scaled<f64>,
    pub latitude: Scaled<f64>,
    pub accuracy: bool,
    pub raim: bool,
    pub seconds: u8,
    pub cog: Scaled<f64>,
    pub sog: Scaled<f64>,
    pub heading: Scaled<f64>,
    pub rate_of_turn: Scaled<f64>,
    pub nav_status: N2kAisNavStatus,
}

impl PgnData for AisClassAPositionReport {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let longitude = r.get_double(32, 1e-7)?;
        let latitude = r.get_double(32, 1e-7)?;
        let accuracy = r.read_u8(1)? != 0;
        let raim = r.read_u8(1)? != 0;
        r.advance(6)?; // reserved
        let seconds = r.read_u8(6)?;
        let cog = r.get_udouble(16, 0.0001)?;
        let sog = r.get_udouble(16, 0.01)?;
        let heading = r.get_udouble(16, 0.0001)?;
        let rate_of_turn = r.get_double(8, 1.0)?;
        let nav_status = N2kAisNavStatus::from(r.read_u8(4)?);
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            longitude,
            latitude,
            accuracy,
            raim,
            seconds,
            cog,
            sog,
            heading,
            rate_of_turn,
            nav_status,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.put_double(self.longitude, 32, 1e-7)?;
        w.put_double(self.latitude, 32, 1e-7)?;
        w.write_u8(self.accuracy as u8, 1)?;
        w.write_u8(self.raim as u8, 1)?;
        w.write_u8(0x3F, 6)?;
        w.write_u8(self.seconds & 0x3F, 6)?;
        w.put_udouble(self.cog, 16, 0.0001)?;
        w.put_udouble(self.sog, 16, 0.01)?;
        w.put_udouble(self.heading, 16, 0.0001)?;
        w.put_double(self.rate_of_turn, 8, 1.0)?;
        w.write_u8(u8::from(self.nav_status), 4)?;
        w.write_u8(0x0F, 4)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129039 — AIS Class B Position Report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassBPositionReport {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub longitude: Scaled<f64>,
    pub latitude: Scaled<f64>,
    pub accuracy: bool,
    pub raim: bool,
    pub seconds: u8,
    pub cog: Scaled<f64>,
    pub sog: Scaled<f64>,
    pub heading: Scaled<f64>,
    pub unit: N2kAisUnit,
    pub transceiver_information: N2kAisTransceiverInformation,
}

impl PgnData for AisClassBPositionReport {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let longitude = r.get_double(32, 1e-7)?;
        let latitude = r.get_double(32, 1e-7)?;
        let accuracy = r.read_u8(1)? != 0;
        let raim = r.read_u8(1)? != 0;
        r.advance(6)?; // reserved
        let seconds = r.read_u8(6)?;
        let cog = r.get_udouble(16, 0.0001)?;
        let sog = r.get_udouble(16, 0.01)?;
        let heading = r.get_udouble(16, 0.0001)?;
        let unit = N2kAisUnit::from(r.read_u8(1)?);
        let transceiver_information = N2kAisTransceiverInformation::from(r.read_u8(5)?);
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            longitude,
            latitude,
            accuracy,
            raim,
            seconds,
            cog,
            sog,
            heading,
            unit,
            transceiver_information,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.put_double(self.longitude, 32, 1e-7)?;
        w.put_double(self.latitude, 32, 1e-7)?;
        w.write_u8(self.accuracy as u8, 1)?;
        w.write_u8(self.raim as u8, 1)?;
        w.write_u8(0x3F, 6)?;
        w.write_u8(self.seconds & 0x3F, 6)?;
        w.put_udouble(self.cog, 16, 0.0001)?;
        w.put_udouble(self.sog, 16, 0.01)?;
        w.put_udouble(self.heading, 16, 0.0001)?;
        w.write_u8(u8::from(self.unit), 1)?;
        w.write_u8(u8::from(self.transceiver_information), 5)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129040 — AIS Class B Extended Position Report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassBExtendedPositionReport {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub longitude: Scaled<f64>,
    pub latitude: Scaled<f64>,
    pub accuracy: bool,
    pub raim: bool,
    pub seconds: u8,
    pub cog: Scaled<f64>,
    pub sog: Scaled<f64>,
    pub heading: Scaled<f64>,
    pub length: Scaled<f64>,
    pub beam: Scaled<f64>,
    pub position_ref_starboard: Scaled<f64>,
    pub position_ref_bow: Scaled<f64>,
    pub gnss_type: N2kGNSSType,
    pub ship_name: PgnBytes,
}

impl PgnData for AisClassBExtendedPositionReport {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let longitude = r.get_double(32, 1e-7)?;
        let latitude = r.get_double(32, 1e-7)?;
        let accuracy = r.read_u8(1)? != 0;
        let raim = r.read_u8(1)? != 0;
        r.advance(6)?; // reserved
        let seconds = r.read_u8(6)?;
        r.advance(2)?; // regional reserved
        let cog = r.get_udouble(16, 0.0001)?;
        let sog = r.get_udouble(16, 0.01)?;
        let heading = r.get_udouble(16, 0.0001)?;
        let length = r.get_udouble(16, 0.1)?;
        let beam = r.get_udouble(16, 0.1)?;
        let position_ref_starboard = r.get_udouble(16, 0.1)?;
        let position_ref_bow = r.get_udouble(16, 0.1)?;
        let gnss_type = N2kGNSSType::from(r.read_u8(4)?);
        r.advance(4)?; // reserved
        let ship_name = r.get_str(20)?;
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            longitude,
            latitude,
            accuracy,
            raim,
            seconds,
            cog,
            sog,
            heading,
            length,
            beam,
            position_ref_starboard,
            position_ref_bow,
            gnss_type,
            ship_name,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.put_double(self.longitude, 32, 1e-7)?;
        w.put_double(self.latitude, 32, 1e-7)?;
        w.write_u8(self.accuracy as u8, 1)?;
        w.write_u8(self.raim as u8, 1)?;
        w.write_u8(0x3F, 6)?;
        w.write_u8(self.seconds & 0x3F, 6)?;
        w.write_u8(0x03, 2)?;
        w.put_udouble(self.cog, 16, 0.0001)?;
        w.put_udouble(self.sog, 16, 0.01)?;
        w.put_udouble(self.heading, 16, 0.0001)?;
        w.put_udouble(self.length, 16, 0.1)?;
        w.put_udouble(self.beam, 16, 0.1)?;
        w.put_udouble(self.position_ref_starboard, 16, 0.1)?;
        w.put_udouble(self.position_ref_bow, 16, 0.1)?;
        w.write_u8(u8::from(self.gnss_type), 4)?;
        w.write_u8(0x0F, 4)?;
        w.put_str(self.ship_name.as_slice(), 20)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129041 — AIS Aid to Navigation (AtoN) Report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisAtoNReport {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub aton_type: N2kAisAtoNType,
    pub aton_name: PgnBytes,
    pub accuracy: bool,
    pub longitude: Scaled<f64>,
    pub latitude: Scaled<f64>,
    pub length: Scaled<f64>,
    pub beam: Scaled<f64>,
    pub position_ref_starboard: Scaled<f64>,
    pub position_ref_bow: Scaled<f64>,
    pub off_position: bool,
    pub virtual_aton: bool,
}

impl PgnData for AisAtoNReport {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let aton_type = N2kAisAtoNType::from(r.read_u8(5)?);
        r.advance(3)?; // reserved
        let aton_name = r.get_var_str()?.unwrap_or_default();
        let accuracy = r.read_u8(1)? != 0;
        r.advance(7)?; // reserved
        let longitude = r.get_double(32, 1e-7)?;
        let latitude = r.get_double(32, 1e-7)?;
        let length = r.get_udouble(16, 0.1)?;
        let beam = r.get_udouble(16, 0.1)?;
        let position_ref_starboard = r.get_udouble(16, 0.1)?;
        let position_ref_bow = r.get_udouble(16, 0.1)?;
        let off_position = r.read_u8(1)? != 0;
        let virtual_aton = r.read_u8(1)? != 0;
        r.advance(6)?; // reserved
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            aton_type,
            aton_name,
            accuracy,
            longitude,
            latitude,
            length,
            beam,
            position_ref_starboard,
            position_ref_bow,
            off_position,
            virtual_aton,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.write_u8(u8::from(self.aton_type), 5)?;
        w.write_u8(0x07, 3)?;
        w.put_var_str(self.aton_name.as_slice())?;
        w.write_u8(self.accuracy as u8, 1)?;
        w.write_u8(0x7F, 7)?;
        w.put_double(self.longitude, 32, 1e-7)?;
        w.put_double(self.latitude, 32, 1e-7)?;
        w.put_udouble(self.length, 16, 0.1)?;
        w.put_udouble(self.beam, 16, 0.1)?;
        w.put_udouble(self.position_ref_starboard, 16, 0.1)?;
        w.put_udouble(self.position_ref_bow, 16, 0.1)?;
        w.write_u8(self.off_position as u8, 1)?;
        w.write_u8(self.virtual_aton as u8, 1)?;
        w.write_u8(0x3F, 6)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129794 — AIS Class A Static and Voyage Related Data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassAStaticData {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub imo_number: u32,
    pub callsign: PgnBytes,
    pub ship_name: PgnBytes,
    pub ship_type: u8,
    pub length: Scaled<f64>,
    pub beam: Scaled<f64>,
    pub position_ref_starboard: Scaled<f64>,
    pub position_ref_bow: Scaled<f64>,
    pub eta_days: u16,
    pub eta_seconds: Scaled<f64>,
    pub draft: Scaled<f64>,
    pub destination: PgnBytes,
    pub dte: N2kAisDte,
}

impl PgnData for AisClassAStaticData {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let imo_number = r.read_u32(32)?;
        let callsign = r.get_str(7)?;
        let ship_name = r.get_str(20)?;
        let ship_type = r.read_u8(8)?;
        let length = r.get_udouble(16, 0.1)?;
        let beam = r.get_udouble(16, 0.1)?;
        let position_ref_starboard = r.get_udouble(16, 0.1)?;
        let position_ref_bow = r.get_udouble(16, 0.1)?;
        let eta_days = r.read_u16(16)?;
        let eta_seconds = r.get_udouble(32, 0.0001)?;
        let draft = r.get_udouble(16, 0.01)?;
        let destination = r.get_str(20)?;
        let dte = N2kAisDte::from(r.read_u8(1)?);
        r.advance(7)?; // reserved
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            imo_number,
            callsign,
            ship_name,
            ship_type,
            length,
            beam,
            position_ref_starboard,
            position_ref_bow,
            eta_days,
            eta_seconds,
            draft,
            destination,
            dte,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.write_u32(self.imo_number, 32)?;
        w.put_str(self.callsign.as_slice(), 7)?;
        w.put_str(self.ship_name.as_slice(), 20)?;
        w.write_u8(self.ship_type, 8)?;
        w.put_udouble(self.length, 16, 0.1)?;
        w.put_udouble(self.beam, 16, 0.1)?;
        w.put_udouble(self.position_ref_starboard, 16, 0.1)?;
        w.put_udouble(self.position_ref_bow, 16, 0.1)?;
        w.write_u16(self.eta_days, 16)?;
        w.put_udouble(self.eta_seconds, 32, 0.0001)?;
        w.put_udouble(self.draft, 16, 0.01)?;
        w.put_str(self.destination.as_slice(), 20)?;
        w.write_u8(u8::from(self.dte), 1)?;
        w.write_u8(0x7F, 7)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129809 — AIS Class B Static Data, Part A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassBStaticDataPartA {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub ship_name: PgnBytes,
}

impl PgnData for AisClassBStaticDataPartA {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let ship_name = r.get_str(20)?;
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            ship_name,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.put_str(self.ship_name.as_slice(), 20)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129810 — AIS Class B Static Data, Part B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AisClassBStaticDataPartB {
    pub message_id: u8,
    pub repeat: N2kAisRepeat,
    pub mmsi: u32,
    pub ship_type: u8,
    pub vendor_id: PgnBytes,
    pub callsign: PgnBytes,
    pub length: Scaled<f64>,
    pub beam: Scaled<f64>,
    pub position_ref_starboard: Scaled<f64>,
    pub position_ref_bow: Scaled<f64>,
    pub mothership_mmsi: u32,
    pub ais_mode: N2kAisMode,
    pub heading_reference: N2kHeadingReference,
}

impl PgnData for AisClassBStaticDataPartB {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let message_id = r.read_u8(6)?;
        let repeat = N2kAisRepeat::from(r.read_u8(2)?);
        let mmsi = r.read_u32(32)?;
        let ship_type = r.read_u8(8)?;
        let vendor_id = r.get_str(7)?;
        let callsign = r.get_str(7)?;
        let length = r.get_udouble(16, 0.1)?;
        let beam = r.get_udouble(16, 0.1)?;
        let position_ref_starboard = r.get_udouble(16, 0.1)?;
        let position_ref_bow = r.get_udouble(16, 0.1)?;
        let mothership_mmsi = r.read_u32(32)?;
        let ais_mode = N2kAisMode::from(r.read_u8(1)?);
        let heading_reference = N2kHeadingReference::from(r.read_u8(2)?);
        r.advance(5)?; // reserved
        Ok(Self {
            message_id,
            repeat,
            mmsi,
            ship_type,
            vendor_id,
            callsign,
            length,
            beam,
            position_ref_starboard,
            position_ref_bow,
            mothership_mmsi,
            ais_mode,
            heading_reference,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.message_id & 0x3F, 6)?;
        w.write_u8(u8::from(self.repeat), 2)?;
        w.write_u32(self.mmsi, 32)?;
        w.write_u8(self.ship_type, 8)?;
        w.put_str(self.vendor_id.as_slice(), 7)?;
        w.put_str(self.callsign.as_slice(), 7)?;
        w.put_udouble(self.length, 16, 0.1)?;
        w.put_udouble(self.beam, 16, 0.1)?;
        w.put_udouble(self.position_ref_starboard, 16, 0.1)?;
        w.put_udouble(self.position_ref_bow, 16, 0.1)?;
        w.write_u32(self.mothership_mmsi, 32)?;
        w.write_u8(u8::from(self.ais_mode), 1)?;
        w.write_u8(u8::from(self.heading_reference), 2)?;
        w.write_u8(0x1F, 5)?;
        Ok(w.bit_cursor() / 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ais_class_a_position_report_roundtrip() {
        let msg = AisClassAPositionReport {
            message_id: 1,
            repeat: N2kAisRepeat::Initial,
            mmsi: 123456789,
            longitude: Scaled::Value(-4.5),
            latitude: Scaled::Value(48.2),
            accuracy: true,
            raim: false,
            seconds: 30,
            cog: Scaled::Value(1.2),
            sog: Scaled::Value(5.5),
            heading: Scaled::Value(1.0),
            rate_of_turn: Scaled::Unavailable,
            nav_status: N2kAisNavStatus::UnderWayMotoring,
        };
        let mut buf = [0u8; 23];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = AisClassAPositionReport::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.mmsi, msg.mmsi);
        assert_eq!(decoded.nav_status, msg.nav_status);
        assert!(decoded.rate_of_turn.is_unavailable());
    }

    #[test]
    fn ais_class_b_position_report_roundtrip() {
        let msg = AisClassBPositionReport {
            message_id: 18,
            repeat: N2kAisRepeat::Initial,
            mmsi: 987654321,
            longitude: Scaled::Value(2.3),
            latitude: Scaled::Value(51.0),
            accuracy: false,
            raim: false,
            seconds: 12,
            cog: Scaled::Value(0.5),
            sog: Scaled::Value(3.0),
            heading: Scaled::Value(0.2),
            unit: N2kAisUnit::ClassBCs,
            transceiver_information: N2kAisTransceiverInformation::ChannelAVdlReception,
        };
        let mut buf = [0u8; 22];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = AisClassBPositionReport::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.mmsi, msg.mmsi);
        assert_eq!(decoded.unit, msg.unit);
    }

    #[test]
    fn ais_aton_report_roundtrip() {
        let mut name = PgnBytes::default();
        name.copy_from_slice(b"SEA BUOY 4");
        let msg = AisAtoNReport {
            message_id: 21,
            repeat: N2kAisRepeat::Initial,
            mmsi: 992345678,
            aton_type: N2kAisAtoNType::Racon,
            aton_name: name,
            accuracy: true,
            longitude: Scaled::Value(-1.1),
            latitude: Scaled::Value(49.4),
            length: Scaled::Value(5.0),
            beam: Scaled::Value(5.0),
            position_ref_starboard: Scaled::Value(2.5),
            position_ref_bow: Scaled::Value(2.5),
            off_position: false,
            virtual_aton: true,
        };
        let mut buf = [0u8; 50];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = AisAtoNReport::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.aton_type, msg.aton_type);
        assert_eq!(decoded.aton_name.as_slice(), b"SEA BUOY 4");
        assert!(decoded.virtual_aton);
    }

    #[test]
    fn ais_class_a_static_data_roundtrip() {
        let mut ship_name = PgnBytes::default();
        ship_name.copy_from_slice(b"SEAGULL");
        let mut destination = PgnBytes::default();
        destination.copy_from_slice(b"BREST");
        let msg = AisClassAStaticData {
            message_id: 5,
            repeat: N2kAisRepeat::Initial,
            mmsi: 111222333,
            imo_number: 9567890,
            callsign: PgnBytes::default(),
            ship_name,
            ship_type: 36,
            length: Scaled::Value(12.0),
            beam: Scaled::Value(4.0),
            position_ref_starboard: Scaled::Value(2.0),
            position_ref_bow: Scaled::Value(6.0),
            eta_days: 19800,
            eta_seconds: Scaled::Value(3600.0),
            draft: Scaled::Value(1.8),
            destination,
            dte: N2kAisDte::Ready,
        };
        let mut buf = [0u8; 88];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = AisClassAStaticData::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.ship_name.as_slice(), b"SEAGULL");
        assert_eq!(decoded.destination.as_slice(), b"BREST");
        assert_eq!(decoded.dte, N2kAisDte::Ready);
    }

    #[test]
    fn ais_class_b_static_data_part_b_roundtrip() {
        let msg = AisClassBStaticDataPartB {
            message_id: 24,
            repeat: N2kAisRepeat::Initial,
            mmsi: 444555666,
            ship_type: 37,
            vendor_id: PgnBytes::default(),
            callsign: PgnBytes::default(),
            length: Scaled::Value(8.0),
            beam: Scaled::Value(3.0),
            position_ref_starboard: Scaled::Value(1.5),
            position_ref_bow: Scaled::Value(4.0),
            mothership_mmsi: 0,
            ais_mode: N2kAisMode::Autonomous,
            heading_reference: N2kHeadingReference::True,
        };
        let mut buf = [0u8; 33];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = AisClassBStaticDataPartB::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.ship_type, msg.ship_type);
        assert_eq!(decoded.ais_mode, msg.ais_mode);
    }
}
