//! `CanBus` extension providing a high-level API to send PGNs: it serializes
//! the structure and builds Fast Packet frames when needed.
//!
//! # Fast Packet pacing
//!
//! This trait itself performs no pacing: it hands every frame of a message
//! to [`CanBus::send`] back-to-back. A cooperative, non-blocking stack
//! cannot sleep between frames without stalling the caller, so spacing
//! Fast Packet frames by [`FAST_PACKET_INTER_FRAME_DELAY_MS`] is instead the
//! job of the caller's send queue (see
//! [`Node`](crate::protocol::node::Node)), which paces draining against
//! [`KorriTimer::now_ms`](crate::protocol::transport::traits::korri_timer::KorriTimer::now_ms)
//! across successive `tick` calls.
use crate::{
    error::SendPgnError,
    infra::codec::traits::PgnData,
    protocol::transport::fast_packet::{builder::FastPacketBuilder, MAX_FAST_PACKET_PAYLOAD},
    protocol::transport::traits::can_bus::CanBus,
};

/// Trait extending `CanBus` with ergonomic PGN-sending helpers.
///
/// Provides convenience methods to send NMEA 2000 messages with automatic
/// serialization and Fast Packet segmentation.
pub trait PgnSender: CanBus
where
    <Self as CanBus>::Error: core::fmt::Debug,
{
    /// Serialize, segment, and send a PGN over the CAN bus.
    ///
    /// Transparently handles:
    /// - **Single-frame PGNs** (<= 8 bytes): sent as a single CAN frame.
    /// - **Fast Packet PGNs** (> 8 bytes): automatically segmented into multiple frames.
    ///
    /// # Arguments
    ///
    /// * `pgn_data` – PGN data structure implementing [`PgnData`]
    /// * `pgn` – Parameter Group Number
    /// * `source_address` – Source address (0-253)
    /// * `destination` – Optional destination (None = broadcast)
    /// * `sequence_id` – 3-bit Fast Packet counter for this PGN; ignored for single-frame PGNs
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`SendPgnError::Serialization`] when serialization fails
    /// - [`SendPgnError::Build`] when frame construction fails
    /// - [`SendPgnError::Send`] when bus transmission fails
    fn send_pgn<P: PgnData>(
        &mut self,
        pgn_data: &P,
        pgn: u32,
        source_address: u8,
        destination: Option<u8>,
        sequence_id: u8,
    ) -> Result<(), SendPgnError<Self::Error>>;
}

impl<C: CanBus> PgnSender for C
where
    C::Error: core::fmt::Debug,
{
    fn send_pgn<P: PgnData>(
        &mut self,
        pgn_data: &P,
        pgn: u32,
        source_address: u8,
        destination: Option<u8>,
        sequence_id: u8,
    ) -> Result<(), SendPgnError<Self::Error>> {
        // Step 1: stack-allocate a buffer to avoid heap usage.
        let mut payload_buffer = [0u8; MAX_FAST_PACKET_PAYLOAD];

        // Step 2: serialize the PGN into the buffer.
        let len = pgn_data
            .to_payload(&mut payload_buffer)
            .map_err(SendPgnError::Serialization)?;
        let payload_slice = &payload_buffer[..len];

        // Step 3: prepare the Fast Packet (or single-frame) builder.
        let builder = FastPacketBuilder::new(
            pgn,
            source_address,
            destination,
            payload_slice,
            sequence_id,
        );

        // Step 4: send every frame, back-to-back.
        for frame_result in builder.build() {
            let frame = frame_result.map_err(SendPgnError::Build)?;
            self.send(&frame).map_err(SendPgnError::Send)?;
        }

        Ok(())
    }
}
