//! Canonical priority and framing (single-frame vs. Fast Packet) for every
//! PGN this crate encodes or decodes. [`Node`](crate::protocol::node::Node)
//! consults this table to stamp the priority on outgoing messages and to
//! decide how a received frame should be fed into the Fast Packet
//! reassembler. Values are reproduced verbatim from the NMEA 2000 standard
//! field tables; unknown PGNs default to priority 6 and single-frame
//! framing, matching the behaviour of a generic/unsupported PGN
//! pass-through.

/// Default priority applied to a PGN absent from [`priority`]'s table.
pub const DEFAULT_PRIORITY: u8 = 6;

/// Canonical priority for a supported PGN. PGNs outside the table
/// (proprietary or unrecognised) fall back to [`DEFAULT_PRIORITY`].
pub const fn priority(pgn: u32) -> u8 {
    match pgn {
        59392 => 6,  // ISO Acknowledgement
        59904 => 6,  // ISO Request
        60928 => 6,  // ISO Address Claim
        126208 => 3, // Group Function
        126464 => 6, // Supported-PGN list
        126992 => 3, // System Date/Time
        126993 => 7, // Heartbeat
        126996 => 6, // Product Information
        126998 => 6, // Configuration Information
        127237 => 2, // Heading/Track Control
        127245 => 2, // Rudder
        127250 => 2, // Vessel Heading
        127251 => 2, // Rate of Turn
        127257 => 3, // Attitude
        127488 => 2, // Engine Parameters Rapid
        127489 => 2, // Engine Parameters Dynamic
        127493 => 2, // Transmission Parameters Dynamic
        127505 => 6, // Fluid Level
        127508 => 6, // Battery Status
        127513 => 6, // Battery Configuration Status
        128259 => 2, // Boat Speed
        128267 => 3, // Water Depth
        129025 => 2, // Position Rapid
        129026 => 2, // COG/SOG Rapid
        129029 => 3, // GNSS Position Data
        129038 => 4, // AIS Class A Position Report
        129039 => 4, // AIS Class B Position Report
        129040 => 4, // AIS Class B Extended Position Report
        129041 => 4, // AIS Aid to Navigation Report
        129284 => 3, // Navigation Info
        129285 => 3, // Route & Waypoint Info
        129539 => 6, // GNSS DOPs
        129540 => 6, // Satellites In View
        129794 => 6, // AIS Class A Static and Voyage Related Data
        129809 => 6, // AIS Class B Static Data, Part A
        129810 => 6, // AIS Class B Static Data, Part B
        130074 => 7, // Waypoint List
        130306 => 2, // Wind Data
        130312 => 6, // Temperature
        _ => DEFAULT_PRIORITY,
    }
}

/// Whether `pgn` uses the Fast Packet transport (payload may exceed 8
/// bytes and is reassembled from a sequence-counted frame stream) rather
/// than a single CAN frame. Absent PGNs default to single-frame, matching
/// every PGN in the 8-byte PDU1/PDU2 range this crate does not otherwise
/// recognise.
pub const fn is_fast_packet(pgn: u32) -> bool {
    matches!(
        pgn,
        126208
            | 126464
            | 126996
            | 126998
            | 127237
            | 127489
            | 129029
            | 129038
            | 129039
            | 129040
            | 129041
            | 129284
            | 129285
            | 129540
            | 129794
            | 129809
            | 129810
            | 130074
    )
}
