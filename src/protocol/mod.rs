//! High-level components of the NMEA 2000 protocol: lookup tables,
//! network management, message structures, and CAN/Fast Packet transport.
pub mod constants;
pub mod lookups;
pub mod managment;
pub mod message;
pub mod messages;
pub mod node;
pub mod pgn_table;
pub mod transport;
