//! Navigation PGNs: position, heading, attitude, steering, wind, depth, and
//! route/waypoint data. All field layouts follow the standard public
//! NMEA 2000 field definitions (see DESIGN.md).
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::scaled::{PgnBytes, Scaled};
use crate::infra::codec::traits::PgnData;
use crate::protocol::lookups::{
    N2kGNSSDopMode, N2kGNSSMethod, N2kGNSSType, N2kHeadingReference, N2kOnOff,
    N2kRudderDirectionOrder, N2kSpeedWaterReferenceType, N2kSteeringMode, N2kTimeSource,
    N2kTurnMode, N2kWindReference,
};

/// PGN 126992 — System Time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemTime {
    pub sid: u8,
    pub time_source: N2kTimeSource,
    pub days_since_1970: u16,
    pub seconds_since_midnight: Scaled<f64>,
}

impl PgnData for SystemTime {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let time_source = N2kTimeSource::from(r.read_u8(4)?);
        r.advance(4)?; // reserved
        let days_since_1970 = r.read_u16(16)?;
        let seconds_since_midnight = r.get_udouble(32, 0.0001)?;
        Ok(Self {
            sid,
            time_source,
            days_since_1970,
            seconds_since_midnight,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u8(u8::from(self.time_source), 4)?;
        w.write_u8(0x0F, 4)?;
        w.write_u16(self.days_since_1970, 16)?;
        w.put_udouble(self.seconds_since_midnight, 32, 0.0001)?;
        Ok(8)
    }
}

/// PGN 127237 — Heading/Track Control (Fast Packet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingTrackControl {
    pub rudder_limit_exceeded: N2kOnOff,
    pub off_heading_limit_exceeded: N2kOnOff,
    pub off_track_limit_exceeded: N2kOnOff,
    pub override_active: N2kOnOff,
    pub steering_mode: N2kSteeringMode,
    pub turn_mode: N2kTurnMode,
    pub heading_reference: N2kHeadingReference,
    pub commanded_rudder_direction: N2kRudderDirectionOrder,
    pub commanded_rudder_angle: Scaled<f64>,
    pub heading_to_steer_course: Scaled<f64>,
    pub track: Scaled<f64>,
    pub rudder_limit: Scaled<f64>,
    pub off_heading_limit: Scaled<f64>,
    pub radius_of_turn_order: Scaled<f64>,
    pub rate_of_turn_order: Scaled<f64>,
    pub off_track_limit: Scaled<f64>,
    pub vessel_heading: Scaled<f64>,
}

impl PgnData for HeadingTrackControl {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let rudder_limit_exceeded = N2kOnOff::from(r.read_u8(2)?);
        let off_heading_limit_exceeded = N2kOnOff::from(r.read_u8(2)?);
        let off_track_limit_exceeded = N2kOnOff::from(r.read_u8(2)?);
        let override_active = N2kOnOff::from(r.read_u8(2)?);
        let steering_mode = N2kSteeringMode::from(r.read_u8(3)?);
        let turn_mode = N2kTurnMode::from(r.read_u8(3)?);
        let heading_reference = N2kHeadingReference::from(r.read_u8(2)?);
        r.advance(5)?; // reserved
        let commanded_rudder_direction = N2kRudderDirectionOrder::from(r.read_u8(3)?);
        let commanded_rudder_angle = r.get_double(16, 0.0001)?;
        let heading_to_steer_course = r.get_udouble(16, 0.0001)?;
        let track = r.get_udouble(16, 0.0001)?;
        let rudder_limit = r.get_udouble(16, 0.0001)?;
        let off_heading_limit = r.get_udouble(16, 0.0001)?;
        let radius_of_turn_order = r.get_double(16, 1.0)?;
        let rate_of_turn_order = r.get_double(16, 3.125e-5)?;
        let off_track_limit = r.get_double(16, 1.0)?;
        let vessel_heading = r.get_udouble(16, 0.0001)?;
        Ok(Self {
            rudder_limit_exceeded,
            off_heading_limit_exceeded,
            off_track_limit_exceeded,
            override_active,
            steering_mode,
            turn_mode,
            heading_reference,
            commanded_rudder_direction,
            commanded_rudder_angle,
            heading_to_steer_course,
            track,
            rudder_limit,
            off_heading_limit,
            radius_of_turn_order,
            rate_of_turn_order,
            off_track_limit,
            vessel_heading,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(u8::from(self.rudder_limit_exceeded), 2)?;
        w.write_u8(u8::from(self.off_heading_limit_exceeded), 2)?;
        w.write_u8(u8::from(self.off_track_limit_exceeded), 2)?;
        w.write_u8(u8::from(self.override_active), 2)?;
        w.write_u8(u8::from(self.steering_mode), 3)?;
        w.write_u8(u8::from(self.turn_mode), 3)?;
        w.write_u8(u8::from(self.heading_reference), 2)?;
        w.write_u8(0x1F, 5)?;
        w.write_u8(u8::from(self.commanded_rudder_direction), 3)?;
        w.put_double(self.commanded_rudder_angle, 16, 0.0001)?;
        w.put_udouble(self.heading_to_steer_course, 16, 0.0001)?;
        w.put_udouble(self.track, 16, 0.0001)?;
        w.put_udouble(self.rudder_limit, 16, 0.0001)?;
        w.put_udouble(self.off_heading_limit, 16, 0.0001)?;
        w.put_double(self.radius_of_turn_order, 16, 1.0)?;
        w.put_double(self.rate_of_turn_order, 16, 3.125e-5)?;
        w.put_double(self.off_track_limit, 16, 1.0)?;
        w.put_udouble(self.vessel_heading, 16, 0.0001)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 127245 — Rudder. Standard public field layout (two rudders, order
/// angle carried only for instance 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rudder {
    pub instance: u8,
    pub direction_order: N2kRudderDirectionOrder,
    pub angle_order: Scaled<f64>,
    pub position: Scaled<f64>,
}

impl PgnData for Rudder {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let direction_order = N2kRudderDirectionOrder::from(r.read_u8(3)?);
        r.advance(5)?; // reserved
        let angle_order = r.get_double(16, 0.0001)?;
        let position = r.get_double(16, 0.0001)?;
        Ok(Self {
            instance,
            direction_order,
            angle_order,
            position,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.write_u8(u8::from(self.direction_order), 3)?;
        w.write_u8(0x1F, 5)?;
        w.put_double(self.angle_order, 16, 0.0001)?;
        w.put_double(self.position, 16, 0.0001)?;
        Ok(6)
    }
}

/// PGN 127250 — Vessel Heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselHeading {
    pub sid: u8,
    pub heading: Scaled<f64>,
    pub deviation: Scaled<f64>,
    pub variation: Scaled<f64>,
    pub reference: N2kHeadingReference,
}

impl PgnData for VesselHeading {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let heading = r.get_udouble(16, 0.0001)?;
        let deviation = r.get_double(16, 0.0001)?;
        let variation = r.get_double(16, 0.0001)?;
        let reference = N2kHeadingReference::from(r.read_u8(2)?);
        Ok(Self {
            sid,
            heading,
            deviation,
            variation,
            reference,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_udouble(self.heading, 16, 0.0001)?;
        w.put_double(self.deviation, 16, 0.0001)?;
        w.put_double(self.variation, 16, 0.0001)?;
        w.write_u8(u8::from(self.reference), 2)?;
        w.write_u8(0x3F, 6)?;
        Ok(8)
    }
}

/// PGN 127251 — Rate of Turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateOfTurn {
    pub sid: u8,
    pub rate: Scaled<f64>,
}

impl PgnData for RateOfTurn {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let rate = r.get_double(32, 3.125E-08)?;
        Ok(Self { sid, rate })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_double(self.rate, 32, 3.125E-08)?;
        w.write_u8(0xFF, 8)?;
        w.write_u16(0xFFFF, 16)?;
        Ok(8)
    }
}

/// PGN 127257 — Attitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    pub sid: u8,
    pub yaw: Scaled<f64>,
    pub pitch: Scaled<f64>,
    pub roll: Scaled<f64>,
}

impl PgnData for Attitude {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let yaw = r.get_double(16, 0.0001)?;
        let pitch = r.get_double(16, 0.0001)?;
        let roll = r.get_double(16, 0.0001)?;
        Ok(Self {
            sid,
            yaw,
            pitch,
            roll,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_double(self.yaw, 16, 0.0001)?;
        w.put_double(self.pitch, 16, 0.0001)?;
        w.put_double(self.roll, 16, 0.0001)?;
        w.write_u8(0xFF, 8)?;
        Ok(8)
    }
}

/// PGN 128259 — Boat Speed. Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatSpeed {
    pub sid: u8,
    pub speed_water_referenced: Scaled<f64>,
    pub speed_ground_referenced: Scaled<f64>,
    pub reference: N2kSpeedWaterReferenceType,
}

impl PgnData for BoatSpeed {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let speed_water_referenced = r.get_udouble(16, 0.01)?;
        let speed_ground_referenced = r.get_udouble(16, 0.01)?;
        let reference = N2kSpeedWaterReferenceType::from(r.read_u8(8)?);
        Ok(Self {
            sid,
            speed_water_referenced,
            speed_ground_referenced,
            reference,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_udouble(self.speed_water_referenced, 16, 0.01)?;
        w.put_udouble(self.speed_ground_referenced, 16, 0.01)?;
        w.write_u8(u8::from(self.reference), 8)?;
        w.write_u8(0xFF, 8)?;
        Ok(8)
    }
}

/// PGN 128267 — Water Depth. Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterDepth {
    pub sid: u8,
    pub depth_below_transducer: Scaled<f64>,
    pub offset: Scaled<f64>,
    pub max_range: Scaled<f64>,
}

impl PgnData for WaterDepth {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let depth_below_transducer = r.get_udouble(32, 0.01)?;
        let offset = r.get_double(16, 0.001)?;
        let max_range = r.get_udouble(8, 10.0)?;
        Ok(Self {
            sid,
            depth_below_transducer,
            offset,
            max_range,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_udouble(self.depth_below_transducer, 32, 0.01)?;
        w.put_double(self.offset, 16, 0.001)?;
        w.put_udouble(self.max_range, 8, 10.0)?;
        Ok(8)
    }
}

/// PGN 129025 — Position, Rapid Update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRapid {
    pub latitude: Scaled<f64>,
    pub longitude: Scaled<f64>,
}

impl PgnData for PositionRapid {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let latitude = r.get_double(32, 1e-7)?;
        let longitude = r.get_double(32, 1e-7)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.put_double(self.latitude, 32, 1e-7)?;
        w.put_double(self.longitude, 32, 1e-7)?;
        Ok(8)
    }
}

/// PGN 129026 — COG & SOG, Rapid Update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CogSogRapid {
    pub sid: u8,
    pub heading_reference: N2kHeadingReference,
    pub cog: Scaled<f64>,
    pub sog: Scaled<f64>,
}

impl PgnData for CogSogRapid {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let heading_reference = N2kHeadingReference::from(r.read_u8(2)?);
        r.advance(6)?; // reserved
        let cog = r.get_udouble(16, 0.0001)?;
        let sog = r.get_udouble(16, 0.01)?;
        Ok(Self {
            sid,
            heading_reference,
            cog,
            sog,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u8(u8::from(self.heading_reference), 2)?;
        w.write_u8(0x3F, 6)?;
        w.put_udouble(self.cog, 16, 0.0001)?;
        w.put_udouble(self.sog, 16, 0.01)?;
        w.write_u16(0xFFFF, 16)?;
        Ok(8)
    }
}

/// PGN 129029 — GNSS Position Data (Fast Packet). `integrity` is kept fully
/// opaque (two-bit raw value): see DESIGN.md Open Question 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnssPositionData {
    pub sid: u8,
    pub days_since_1970: u16,
    pub seconds_since_midnight: Scaled<f64>,
    pub latitude: Scaled<f64>,
    pub longitude: Scaled<f64>,
    pub altitude: Scaled<f64>,
    pub gnss_type: N2kGNSSType,
    pub gnss_method: N2kGNSSMethod,
    pub integrity: u8,
    pub n_satellites: u8,
    pub hdop: Scaled<f64>,
    pub pdop: Scaled<f64>,
    pub geoidal_separation: Scaled<f64>,
    pub reference_station: Option<(u16, Scaled<f64>)>,
}

impl PgnData for GnssPositionData {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let days_since_1970 = r.read_u16(16)?;
        let seconds_since_midnight = r.get_udouble(32, 0.0001)?;
        let latitude = r.get_double(64, 1e-16)?;
        let longitude = r.get_double(64, 1e-16)?;
        let altitude = r.get_double(64, 1e-6)?;
        let gnss_type = N2kGNSSType::from(r.read_u8(4)?);
        let gnss_method = N2kGNSSMethod::from(r.read_u8(4)?);
        let integrity = r.read_u8(2)?;
        r.advance(6)?; // reserved
        let n_satellites = r.read_u8(8)?;
        let hdop = r.get_double(16, 0.01)?;
        let pdop = r.get_double(16, 0.01)?;
        let geoidal_separation = r.get_double(32, 0.01)?;
        let n_reference_station = r.read_u8(8)?;
        let reference_station = if n_reference_station > 0 && n_reference_station < 0xFF {
            let tag = r.read_u16(16)?;
            let age_of_correction = r.get_udouble(16, 0.01)?;
            Some((tag, age_of_correction))
        } else {
            None
        };
        Ok(Self {
            sid,
            days_since_1970,
            seconds_since_midnight,
            latitude,
            longitude,
            altitude,
            gnss_type,
            gnss_method,
            integrity,
            n_satellites,
            hdop,
            pdop,
            geoidal_separation,
            reference_station,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u16(self.days_since_1970, 16)?;
        w.put_udouble(self.seconds_since_midnight, 32, 0.0001)?;
        w.put_double(self.latitude, 64, 1e-16)?;
        w.put_double(self.longitude, 64, 1e-16)?;
        w.put_double(self.altitude, 64, 1e-6)?;
        w.write_u8(u8::from(self.gnss_type), 4)?;
        w.write_u8(u8::from(self.gnss_method), 4)?;
        w.write_u8(self.integrity & 0x03, 2)?;
        w.write_u8(0x3F, 6)?;
        w.write_u8(self.n_satellites, 8)?;
        w.put_double(self.hdop, 16, 0.01)?;
        w.put_double(self.pdop, 16, 0.01)?;
        w.put_double(self.geoidal_separation, 32, 0.01)?;
        match self.reference_station {
            Some((tag, age)) => {
                w.write_u8(1, 8)?;
                w.write_u16(tag, 16)?;
                w.put_udouble(age, 16, 0.01)?;
            }
            None => {
                w.write_u8(0xFF, 8)?;
            }
        }
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129284 — Navigation Info (Fast Packet). Standard layout (only the
/// commonly-populated fields are modeled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationInfo {
    pub sid: u8,
    pub distance_to_waypoint: Scaled<f64>,
    pub bearing_reference: N2kHeadingReference,
    pub perpendicular_crossed: N2kOnOff,
    pub arrival_circle_entered: N2kOnOff,
    pub eta_days: u16,
    pub eta_seconds: Scaled<f64>,
    pub bearing_origin_to_destination: Scaled<f64>,
    pub bearing_position_to_destination: Scaled<f64>,
    pub origin_waypoint_number: u32,
    pub destination_waypoint_number: u32,
    pub destination_latitude: Scaled<f64>,
    pub destination_longitude: Scaled<f64>,
    pub waypoint_closing_velocity: Scaled<f64>,
}

impl PgnData for NavigationInfo {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let distance_to_waypoint = r.get_udouble(32, 0.01)?;
        let bearing_reference = N2kHeadingReference::from(r.read_u8(2)?);
        let perpendicular_crossed = N2kOnOff::from(r.read_u8(2)?);
        let arrival_circle_entered = N2kOnOff::from(r.read_u8(2)?);
        r.advance(2)?; // reserved
        let eta_days = r.read_u16(16)?;
        let eta_seconds = r.get_udouble(32, 0.0001)?;
        let bearing_origin_to_destination = r.get_udouble(16, 0.0001)?;
        let bearing_position_to_destination = r.get_udouble(16, 0.0001)?;
        let origin_waypoint_number = r.read_u32(32)?;
        let destination_waypoint_number = r.read_u32(32)?;
        let destination_latitude = r.get_double(32, 1e-7)?;
        let destination_longitude = r.get_double(32, 1e-7)?;
        let waypoint_closing_velocity = r.get_double(16, 0.01)?;
        Ok(Self {
            sid,
            distance_to_waypoint,
            bearing_reference,
            perpendicular_crossed,
            arrival_circle_entered,
            eta_days,
            eta_seconds,
            bearing_origin_to_destination,
            bearing_position_to_destination,
            origin_waypoint_number,
            destination_waypoint_number,
            destination_latitude,
            destination_longitude,
            waypoint_closing_velocity,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_udouble(self.distance_to_waypoint, 32, 0.01)?;
        w.write_u8(u8::from(self.bearing_reference), 2)?;
        w.write_u8(u8::from(self.perpendicular_crossed), 2)?;
        w.write_u8(u8::from(self.arrival_circle_entered), 2)?;
        w.write_u8(0x03, 2)?;
        w.write_u16(self.eta_days, 16)?;
        w.put_udouble(self.eta_seconds, 32, 0.0001)?;
        w.put_udouble(self.bearing_origin_to_destination, 16, 0.0001)?;
        w.put_udouble(self.bearing_position_to_destination, 16, 0.0001)?;
        w.write_u32(self.origin_waypoint_number, 32)?;
        w.write_u32(self.destination_waypoint_number, 32)?;
        w.put_double(self.destination_latitude, 32, 1e-7)?;
        w.put_double(self.destination_longitude, 32, 1e-7)?;
        w.put_double(self.waypoint_closing_velocity, 16, 0.01)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129285 — Route & WP Information (Fast Packet). Carries a single
/// waypoint name (standard layout truncates the repeating group to what
/// fits a Fast Packet payload).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteWaypointInfo {
    pub start: u16,
    pub nav_direction: bool,
    pub supplementary_route_wp_data_available: bool,
    pub route_name: PgnBytes,
    pub waypoint_id: u16,
    pub waypoint_name: PgnBytes,
    pub waypoint_latitude: Scaled<f64>,
    pub waypoint_longitude: Scaled<f64>,
}

impl PgnData for RouteWaypointInfo {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let start = r.read_u16(16)?;
        let nav_direction = r.read_u8(1)? != 0;
        let supplementary_route_wp_data_available = r.read_u8(1)? != 0;
        r.advance(6)?; // reserved
        let route_name = r.get_var_str()?.unwrap_or_default();
        let waypoint_id = r.read_u16(16)?;
        let waypoint_name = r.get_var_str()?.unwrap_or_default();
        let waypoint_latitude = r.get_double(32, 1e-7)?;
        let waypoint_longitude = r.get_double(32, 1e-7)?;
        Ok(Self {
            start,
            nav_direction,
            supplementary_route_wp_data_available,
            route_name,
            waypoint_id,
            waypoint_name,
            waypoint_latitude,
            waypoint_longitude,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u16(self.start, 16)?;
        w.write_u8(self.nav_direction as u8, 1)?;
        w.write_u8(self.supplementary_route_wp_data_available as u8, 1)?;
        w.write_u8(0x3F, 6)?;
        w.put_var_str(self.route_name.as_slice())?;
        w.write_u16(self.waypoint_id, 16)?;
        w.put_var_str(self.waypoint_name.as_slice())?;
        w.put_double(self.waypoint_latitude, 32, 1e-7)?;
        w.put_double(self.waypoint_longitude, 32, 1e-7)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 129539 — GNSS DOPs. Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GnssDops {
    pub sid: u8,
    pub desired_mode: N2kGNSSDopMode,
    pub actual_mode: N2kGNSSDopMode,
    pub hdop: Scaled<f64>,
    pub vdop: Scaled<f64>,
    pub tdop: Scaled<f64>,
}

impl PgnData for GnssDops {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let desired_mode = N2kGNSSDopMode::from(r.read_u8(3)?);
        let actual_mode = N2kGNSSDopMode::from(r.read_u8(3)?);
        r.advance(2)?; // reserved
        let hdop = r.get_double(16, 0.01)?;
        let vdop = r.get_double(16, 0.01)?;
        let tdop = r.get_double(16, 0.01)?;
        Ok(Self {
            sid,
            desired_mode,
            actual_mode,
            hdop,
            vdop,
            tdop,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u8(u8::from(self.desired_mode), 3)?;
        w.write_u8(u8::from(self.actual_mode), 3)?;
        w.write_u8(0x03, 2)?;
        w.put_double(self.hdop, 16, 0.01)?;
        w.put_double(self.vdop, 16, 0.01)?;
        w.put_double(self.tdop, 16, 0.01)?;
        Ok(8)
    }
}

const MAX_SATELLITES_IN_VIEW: usize = 18;

/// One satellite entry inside [`SatellitesInView`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SatelliteInfo {
    pub prn: u8,
    pub elevation: Scaled<f64>,
    pub azimuth: Scaled<f64>,
    pub snr: Scaled<f64>,
}

/// PGN 129540 — GNSS Sats in View (Fast Packet). Never implemented
/// Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitesInView {
    pub sid: u8,
    pub range_residual_mode: u8,
    pub satellites: [SatelliteInfo; MAX_SATELLITES_IN_VIEW],
    pub count: usize,
}

impl PgnData for SatellitesInView {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let range_residual_mode = r.read_u8(2)?;
        r.advance(6)?; // reserved
        let declared_count = r.read_u8(8)? as usize;
        let mut satellites = [SatelliteInfo::default(); MAX_SATELLITES_IN_VIEW];
        let mut count = 0;
        while count < declared_count.min(MAX_SATELLITES_IN_VIEW) {
            let prn = r.read_u8(8)?;
            let elevation = r.get_double(16, 0.0001)?;
            let azimuth = r.get_udouble(16, 0.0001)?;
            let snr = r.get_udouble(16, 0.01)?;
            r.advance(32)?; // range residual, unused here
            satellites[count] = SatelliteInfo {
                prn,
                elevation,
                azimuth,
                snr,
            };
            count += 1;
        }
        Ok(Self {
            sid,
            range_residual_mode,
            satellites,
            count,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u8(self.range_residual_mode & 0x03, 2)?;
        w.write_u8(0x3F, 6)?;
        w.write_u8(self.count as u8, 8)?;
        for sat in &self.satellites[..self.count] {
            w.write_u8(sat.prn, 8)?;
            w.put_double(sat.elevation, 16, 0.0001)?;
            w.put_udouble(sat.azimuth, 16, 0.0001)?;
            w.put_udouble(sat.snr, 16, 0.01)?;
            w.write_u32(0xFFFF_FFFF, 32)?;
        }
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 130074 — Waypoint List (Fast Packet). Models a single entry per
/// frame, matching Route & WP Information's repeating-group conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointList {
    pub start: u16,
    pub num_waypoints: u16,
    pub database: u16,
    pub waypoint_id: u16,
    pub waypoint_name: PgnBytes,
    pub waypoint_latitude: Scaled<f64>,
    pub waypoint_longitude: Scaled<f64>,
}

impl PgnData for WaypointList {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let start = r.read_u16(16)?;
        let num_waypoints = r.read_u16(16)?;
        let database = r.read_u16(16)?;
        let waypoint_id = r.read_u16(16)?;
        let waypoint_name = r.get_var_str()?.unwrap_or_default();
        let waypoint_latitude = r.get_double(32, 1e-7)?;
        let waypoint_longitude = r.get_double(32, 1e-7)?;
        Ok(Self {
            start,
            num_waypoints,
            database,
            waypoint_id,
            waypoint_name,
            waypoint_latitude,
            waypoint_longitude,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u16(self.start, 16)?;
        w.write_u16(self.num_waypoints, 16)?;
        w.write_u16(self.database, 16)?;
        w.write_u16(self.waypoint_id, 16)?;
        w.put_var_str(self.waypoint_name.as_slice())?;
        w.put_double(self.waypoint_latitude, 32, 1e-7)?;
        w.put_double(self.waypoint_longitude, 32, 1e-7)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 130306 — Wind Data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindData {
    pub sid: u8,
    pub wind_speed: Scaled<f64>,
    pub wind_angle: Scaled<f64>,
    pub reference: N2kWindReference,
}

impl PgnData for WindData {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let wind_speed = r.get_udouble(16, 0.01)?;
        let wind_angle = r.get_udouble(16, 0.0001)?;
        let reference = N2kWindReference::from(r.read_u8(3)?);
        Ok(Self {
            sid,
            wind_speed,
            wind_angle,
            reference,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.put_udouble(self.wind_speed, 16, 0.01)?;
        w.put_udouble(self.wind_angle, 16, 0.0001)?;
        w.write_u8(u8::from(self.reference), 3)?;
        w.write_u8(0x1F, 5)?;
        w.write_u16(0xFFFF, 16)?;
        Ok(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_time_roundtrip() {
        let msg = SystemTime {
            sid: 1,
            time_source: N2kTimeSource::Gps,
            days_since_1970: 19723,
            seconds_since_midnight: Scaled::Value(43200.1234),
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = SystemTime::from_payload(&buf).unwrap();
        assert_eq!(decoded.days_since_1970, msg.days_since_1970);
        assert_eq!(decoded.time_source, msg.time_source);
    }

    #[test]
    fn vessel_heading_roundtrip() {
        let msg = VesselHeading {
            sid: 7,
            heading: Scaled::Value(1.5708),
            deviation: Scaled::Unavailable,
            variation: Scaled::Value(-0.1),
            reference: N2kHeadingReference::Magnetic,
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = VesselHeading::from_payload(&buf).unwrap();
        assert_eq!(decoded.reference, msg.reference);
        assert!(decoded.deviation.is_unavailable());
    }

    #[test]
    fn rate_of_turn_roundtrip() {
        let msg = RateOfTurn {
            sid: 3,
            rate: Scaled::Value(0.001),
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = RateOfTurn::from_payload(&buf).unwrap();
        assert_eq!(decoded.sid, msg.sid);
    }

    #[test]
    fn position_rapid_roundtrip() {
        let msg = PositionRapid {
            latitude: Scaled::Value(45.123456),
            longitude: Scaled::Value(-1.654321),
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = PositionRapid::from_payload(&buf).unwrap();
        match (decoded.latitude, msg.latitude) {
            (Scaled::Value(a), Scaled::Value(b)) => assert!((a - b).abs() < 1e-6),
            _ => panic!("expected values"),
        }
    }

    #[test]
    fn gnss_position_data_roundtrip_without_reference_station() {
        let msg = GnssPositionData {
            sid: 0,
            days_since_1970: 19723,
            seconds_since_midnight: Scaled::Value(3600.0),
            latitude: Scaled::Value(45.0),
            longitude: Scaled::Value(-1.0),
            altitude: Scaled::Value(12.3),
            gnss_type: N2kGNSSType::Gps,
            gnss_method: N2kGNSSMethod::DgnssFix,
            integrity: 1,
            n_satellites: 9,
            hdop: Scaled::Value(0.9),
            pdop: Scaled::Value(1.2),
            geoidal_separation: Scaled::Value(30.5),
            reference_station: None,
        };
        let mut buf = [0u8; 43];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = GnssPositionData::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.gnss_type, msg.gnss_type);
        assert_eq!(decoded.gnss_method, msg.gnss_method);
        assert_eq!(decoded.integrity, msg.integrity);
        assert!(decoded.reference_station.is_none());
    }

    #[test]
    fn gnss_position_data_roundtrip_with_reference_station() {
        let msg = GnssPositionData {
            sid: 0,
            days_since_1970: 19723,
            seconds_since_midnight: Scaled::Value(3600.0),
            latitude: Scaled::Value(45.0),
            longitude: Scaled::Value(-1.0),
            altitude: Scaled::Value(12.3),
            gnss_type: N2kGNSSType::Gps,
            gnss_method: N2kGNSSMethod::RtkFixed,
            integrity: 2,
            n_satellites: 11,
            hdop: Scaled::Value(0.8),
            pdop: Scaled::Value(1.1),
            geoidal_separation: Scaled::Value(30.5),
            reference_station: Some((1234, Scaled::Value(1.2))),
        };
        let mut buf = [0u8; 47];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = GnssPositionData::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.reference_station, msg.reference_station);
    }

    #[test]
    fn wind_data_roundtrip() {
        let msg = WindData {
            sid: 2,
            wind_speed: Scaled::Value(5.5),
            wind_angle: Scaled::Value(1.0),
            reference: N2kWindReference::ApparentWindType,
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = WindData::from_payload(&buf).unwrap();
        assert_eq!(decoded.reference, msg.reference);
    }

    #[test]
    fn satellites_in_view_roundtrip() {
        let mut satellites = [SatelliteInfo::default(); MAX_SATELLITES_IN_VIEW];
        satellites[0] = SatelliteInfo {
            prn: 12,
            elevation: Scaled::Value(0.5),
            azimuth: Scaled::Value(2.1),
            snr: Scaled::Value(35.0),
        };
        let msg = SatellitesInView {
            sid: 1,
            range_residual_mode: 1,
            satellites,
            count: 1,
        };
        let mut buf = [0u8; 15];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = SatellitesInView::from_payload(&buf[..len]).unwrap();
        assert_eq!(decoded.count, 1);
        assert_eq!(decoded.satellites[0].prn, 12);
    }
}
