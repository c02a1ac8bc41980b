//! Engine, transmission, fluid, and battery PGNs. Every layout here follows
//! the standard public NMEA 2000 field definitions; the bitfield/lookup
//! vocabularies follow the `N2kDD206`/`N2kDD223`/transmission-status
//! conventions (see [`crate::protocol::lookups`]).
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::bits::{BitReader, BitWriter};
use crate::infra::codec::scaled::Scaled;
use crate::infra::codec::traits::PgnData;
use crate::protocol::lookups::{
    N2kBatChem, N2kBatType, N2kDCType, N2kEngineDiscreteStatus1, N2kEngineDiscreteStatus2,
    N2kFluidType, N2kTemperatureSource, N2kTransmissionDiscreteStatus1,
};

/// PGN 127488 — Engine Parameters, Rapid Update. Tilt/trim is modeled as a
/// signed percentage (1% resolution, sentinel `0x7F`), matching its
/// documented "positive or negative percent" semantics (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParametersRapid {
    pub instance: u8,
    pub engine_speed: Scaled<f64>,
    pub engine_boost_pressure: Scaled<f64>,
    pub engine_tilt_trim: Scaled<i64>,
}

impl PgnData for EngineParametersRapid {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let engine_speed = r.get_udouble(16, 0.25)?;
        let engine_boost_pressure = r.get_udouble(16, 100.0)?;
        let engine_tilt_trim = r.get_int(8)?;
        Ok(Self {
            instance,
            engine_speed,
            engine_boost_pressure,
            engine_tilt_trim,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.put_udouble(self.engine_speed, 16, 0.25)?;
        w.put_udouble(self.engine_boost_pressure, 16, 100.0)?;
        w.put_int(self.engine_tilt_trim, 8)?;
        Ok(6)
    }
}

/// PGN 127489 — Engine Parameters, Dynamic (Fast Packet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParametersDynamic {
    pub instance: u8,
    pub oil_pressure: Scaled<f64>,
    pub oil_temperature: Scaled<f64>,
    pub temperature: Scaled<f64>,
    pub alternator_potential: Scaled<f64>,
    pub fuel_rate: Scaled<f64>,
    pub total_engine_hours: Scaled<f64>,
    pub coolant_pressure: Scaled<f64>,
    pub fuel_pressure: Scaled<f64>,
    pub discrete_status1: N2kEngineDiscreteStatus1,
    pub discrete_status2: N2kEngineDiscreteStatus2,
    pub engine_load: Scaled<i64>,
    pub engine_torque: Scaled<i64>,
}

impl PgnData for EngineParametersDynamic {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let oil_pressure = r.get_udouble(16, 100.0)?;
        let oil_temperature = r.get_udouble(16, 0.1)?;
        let temperature = r.get_udouble(16, 0.01)?;
        let alternator_potential = r.get_double(16, 0.01)?;
        let fuel_rate = r.get_double(16, 0.1)?;
        let total_engine_hours = r.get_udouble(32, 1.0)?;
        let coolant_pressure = r.get_udouble(16, 100.0)?;
        let fuel_pressure = r.get_udouble(16, 1000.0)?;
        r.advance(8)?; // reserved
        let discrete_status1 = N2kEngineDiscreteStatus1::from(r.read_u16(16)?);
        let discrete_status2 = N2kEngineDiscreteStatus2::from(r.read_u16(16)?);
        let engine_load = r.get_int(8)?;
        let engine_torque = r.get_int(8)?;
        Ok(Self {
            instance,
            oil_pressure,
            oil_temperature,
            temperature,
            alternator_potential,
            fuel_rate,
            total_engine_hours,
            coolant_pressure,
            fuel_pressure,
            discrete_status1,
            discrete_status2,
            engine_load,
            engine_torque,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.put_udouble(self.oil_pressure, 16, 100.0)?;
        w.put_udouble(self.oil_temperature, 16, 0.1)?;
        w.put_udouble(self.temperature, 16, 0.01)?;
        w.put_double(self.alternator_potential, 16, 0.01)?;
        w.put_double(self.fuel_rate, 16, 0.1)?;
        w.put_udouble(self.total_engine_hours, 32, 1.0)?;
        w.put_udouble(self.coolant_pressure, 16, 100.0)?;
        w.put_udouble(self.fuel_pressure, 16, 1000.0)?;
        w.write_u8(0xFF, 8)?;
        w.write_u16(u16::from(self.discrete_status1), 16)?;
        w.write_u16(u16::from(self.discrete_status2), 16)?;
        w.put_int(self.engine_load, 8)?;
        w.put_int(self.engine_torque, 8)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 127493 — Transmission Parameters, Dynamic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionParametersDynamic {
    pub instance: u8,
    pub discrete_status1: N2kTransmissionDiscreteStatus1,
    pub oil_pressure: Scaled<f64>,
    pub oil_temperature: Scaled<f64>,
}

impl PgnData for TransmissionParametersDynamic {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let discrete_status1 = N2kTransmissionDiscreteStatus1::from(r.read_u8(8)?);
        let oil_pressure = r.get_udouble(16, 100.0)?;
        let oil_temperature = r.get_udouble(16, 0.1)?;
        Ok(Self {
            instance,
            discrete_status1,
            oil_pressure,
            oil_temperature,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.write_u8(u8::from(self.discrete_status1) | 0xE0, 8)?;
        w.put_udouble(self.oil_pressure, 16, 100.0)?;
        w.put_udouble(self.oil_temperature, 16, 0.1)?;
        Ok(6)
    }
}

/// PGN 127505 — Fluid Level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidLevel {
    pub instance: u8,
    pub fluid_type: N2kFluidType,
    pub level: Scaled<f64>,
    pub capacity: Scaled<f64>,
}

impl PgnData for FluidLevel {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(4)?;
        let fluid_type = N2kFluidType::from(r.read_u8(4)?);
        let level = r.get_udouble(16, 0.004)?;
        let capacity = r.get_udouble(32, 0.1)?;
        Ok(Self {
            instance,
            fluid_type,
            level,
            capacity,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance & 0x0F, 4)?;
        w.write_u8(u8::from(self.fluid_type), 4)?;
        w.put_udouble(self.level, 16, 0.004)?;
        w.put_udouble(self.capacity, 32, 0.1)?;
        w.write_u8(0xFF, 8)?;
        Ok(8)
    }
}

/// PGN 127508 — Battery Status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub instance: u8,
    pub voltage: Scaled<f64>,
    pub current: Scaled<f64>,
    pub temperature: Scaled<f64>,
    pub sid: u8,
}

impl PgnData for BatteryStatus {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let voltage = r.get_double(16, 0.01)?;
        let current = r.get_double(16, 0.1)?;
        let temperature = r.get_udouble(16, 0.01)?;
        let sid = r.read_u8(8)?;
        Ok(Self {
            instance,
            voltage,
            current,
            temperature,
            sid,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.put_double(self.voltage, 16, 0.01)?;
        w.put_double(self.current, 16, 0.1)?;
        w.put_udouble(self.temperature, 16, 0.01)?;
        w.write_u8(self.sid, 8)?;
        Ok(8)
    }
}

/// PGN 127513 — Battery Configuration Status. Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryConfigurationStatus {
    pub instance: u8,
    pub bat_type: N2kBatType,
    pub supports_equalization: bool,
    pub nominal_voltage: Scaled<f64>,
    pub chemistry: N2kBatChem,
    pub capacity: Scaled<f64>,
    pub temperature_coefficient: Scaled<i64>,
    pub peukert_exponent: Scaled<f64>,
    pub charge_efficiency_factor: Scaled<f64>,
}

impl PgnData for BatteryConfigurationStatus {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let instance = r.read_u8(8)?;
        let bat_type = N2kBatType::from(r.read_u8(4)?);
        let supports_equalization = r.read_u8(2)? != 0;
        r.advance(2)?; // reserved
        let nominal_voltage = r.get_udouble(16, 0.01)?;
        let chemistry = N2kBatChem::from(r.read_u8(4)?);
        r.advance(4)?; // reserved
        let capacity = r.get_udouble(16, 3600.0)?;
        let temperature_coefficient = r.get_int(8)?;
        let peukert_exponent = r.get_udouble(8, 0.002)?;
        let charge_efficiency_factor = r.get_udouble(8, 1.0)?;
        Ok(Self {
            instance,
            bat_type,
            supports_equalization,
            nominal_voltage,
            chemistry,
            capacity,
            temperature_coefficient,
            peukert_exponent,
            charge_efficiency_factor,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.instance, 8)?;
        w.write_u8(u8::from(self.bat_type), 4)?;
        w.write_u8(self.supports_equalization as u8, 2)?;
        w.write_u8(0x03, 2)?;
        w.put_udouble(self.nominal_voltage, 16, 0.01)?;
        w.write_u8(u8::from(self.chemistry), 4)?;
        w.write_u8(0x0F, 4)?;
        w.put_udouble(self.capacity, 16, 3600.0)?;
        w.put_int(self.temperature_coefficient, 8)?;
        w.put_udouble(self.peukert_exponent, 8, 0.002)?;
        w.put_udouble(self.charge_efficiency_factor, 8, 1.0)?;
        Ok(w.bit_cursor() / 8)
    }
}

/// PGN 130312 — Temperature. Standard layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub sid: u8,
    pub instance: u8,
    pub source: N2kTemperatureSource,
    pub actual_temperature: Scaled<f64>,
    pub set_temperature: Scaled<f64>,
}

impl PgnData for Temperature {
    fn from_payload(payload: &[u8]) -> Result<Self, DeserializationError> {
        let mut r = BitReader::new(payload);
        let sid = r.read_u8(8)?;
        let instance = r.read_u8(8)?;
        let source = N2kTemperatureSource::from(r.read_u8(8)?);
        let actual_temperature = r.get_udouble(16, 0.01)?;
        let set_temperature = r.get_udouble(16, 0.01)?;
        Ok(Self {
            sid,
            instance,
            source,
            actual_temperature,
            set_temperature,
        })
    }

    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, SerializationError> {
        let mut w = BitWriter::new(buffer);
        w.write_u8(self.sid, 8)?;
        w.write_u8(self.instance, 8)?;
        w.write_u8(u8::from(self.source), 8)?;
        w.put_udouble(self.actual_temperature, 16, 0.01)?;
        w.put_udouble(self.set_temperature, 16, 0.01)?;
        Ok(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_parameters_rapid_tilt_trim_signed() {
        let msg = EngineParametersRapid {
            instance: 0,
            engine_speed: Scaled::Value(2400.0),
            engine_boost_pressure: Scaled::Value(50_000.0),
            engine_tilt_trim: Scaled::Value(-15),
        };
        let mut buf = [0u8; 6];
        msg.to_payload(&mut buf).unwrap();
        let decoded = EngineParametersRapid::from_payload(&buf).unwrap();
        assert_eq!(decoded.engine_tilt_trim, Scaled::Value(-15));
    }

    #[test]
    fn engine_parameters_dynamic_roundtrip() {
        let msg = EngineParametersDynamic {
            instance: 1,
            oil_pressure: Scaled::Value(300_000.0),
            oil_temperature: Scaled::Value(360.0),
            temperature: Scaled::Value(353.0),
            alternator_potential: Scaled::Value(14.2),
            fuel_rate: Scaled::Value(5.5),
            total_engine_hours: Scaled::Value(1200.0),
            coolant_pressure: Scaled::Unavailable,
            fuel_pressure: Scaled::Unavailable,
            discrete_status1: N2kEngineDiscreteStatus1 {
                check_engine: true,
                ..Default::default()
            },
            discrete_status2: N2kEngineDiscreteStatus2::default(),
            engine_load: Scaled::Value(45),
            engine_torque: Scaled::Value(60),
        };
        let mut buf = [0u8; 26];
        let len = msg.to_payload(&mut buf).unwrap();
        let decoded = EngineParametersDynamic::from_payload(&buf[..len]).unwrap();
        assert!(decoded.discrete_status1.check_engine);
        assert_eq!(decoded.engine_load, Scaled::Value(45));
    }

    #[test]
    fn transmission_parameters_dynamic_roundtrip() {
        let msg = TransmissionParametersDynamic {
            instance: 0,
            discrete_status1: N2kTransmissionDiscreteStatus1 {
                over_temperature: true,
                ..Default::default()
            },
            oil_pressure: Scaled::Value(200_000.0),
            oil_temperature: Scaled::Value(340.0),
        };
        let mut buf = [0u8; 6];
        msg.to_payload(&mut buf).unwrap();
        let decoded = TransmissionParametersDynamic::from_payload(&buf).unwrap();
        assert!(decoded.discrete_status1.over_temperature);
    }

    #[test]
    fn fluid_level_roundtrip() {
        let msg = FluidLevel {
            instance: 0,
            fluid_type: N2kFluidType::Fuel,
            level: Scaled::Value(75.0),
            capacity: Scaled::Value(120.0),
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = FluidLevel::from_payload(&buf).unwrap();
        assert_eq!(decoded.fluid_type, msg.fluid_type);
    }

    #[test]
    fn battery_status_roundtrip() {
        let msg = BatteryStatus {
            instance: 0,
            voltage: Scaled::Value(12.6),
            current: Scaled::Value(-3.2),
            temperature: Scaled::Value(298.0),
            sid: 9,
        };
        let mut buf = [0u8; 8];
        msg.to_payload(&mut buf).unwrap();
        let decoded = BatteryStatus::from_payload(&buf).unwrap();
        assert_eq!(decoded.sid, msg.sid);
    }
}
