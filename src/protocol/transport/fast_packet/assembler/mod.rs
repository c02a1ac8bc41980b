//! NMEA 2000 Fast Packet assembler: rebuilds application messages by
//! aggregating the CAN frames of a multi-packet session.
use super::MAX_FAST_PACKET_PAYLOAD;

//==================================================================================Constants

/// Default number of Fast Packet sessions handled in parallel, keyed by
/// `(pgn, source)`. Configurable per-instance via [`FastPacketAssembler::with_capacity`].
pub const DEFAULT_CONCURRENT_SESSIONS: usize = 20;

/// Default slot time-to-live: a session inactive for longer than this is
/// reclaimed by [`FastPacketAssembler::tick`] (`MAX_N2K_MSG_BUF_TIME`).
pub const DEFAULT_SESSION_TTL_MS: u64 = 100;

//==================================================================================Enums and Structs
#[derive(Debug)]
pub enum ProcessResult {
    /// Frame not recognized as Fast Packet or discarded (invalid sequence,
    /// session pool exhausted, etc.).
    Ignored,
    /// Frame successfully integrated but additional fragments are still missing.
    FragmentConsumed,
    /// All expected fragments were received; the complete message is now available.
    MessageComplete(CompletedMessage),
}

/// Safe container returning a reassembled message without exposing
/// the assembler's internal buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct CompletedMessage {
    /// Reassembled payload.
    pub payload: [u8; MAX_FAST_PACKET_PAYLOAD],
    /// Effective message length (number of valid bytes).
    pub len: usize,
}

/// Possible states for a reassembly session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SessionState {
    Inactive,
    InProgress,
}

/// Internal structure tracking the state of a Fast Packet session, keyed by
/// `(pgn, source_address)` per SAE J1939-21 (at most one in-flight message
/// per PGN/source pair).
#[derive(Debug, Clone, Copy)]
struct FastPacketSession {
    state: SessionState,
    pgn: u32,
    source_address: u8,
    sequence_id: u8,
    buffer: [u8; MAX_FAST_PACKET_PAYLOAD],
    expected_size: usize,
    current_size: usize,
    last_frame_index: u8,
    last_activity_ms: u64,
}

impl FastPacketSession {
    /// Create a session in the inactive state.
    const fn new() -> Self {
        Self {
            state: SessionState::Inactive,
            pgn: 0,
            source_address: 0,
            sequence_id: 0,
            buffer: [0; MAX_FAST_PACKET_PAYLOAD],
            expected_size: 0,
            current_size: 0,
            last_frame_index: 0,
            last_activity_ms: 0,
        }
    }

    /// Reset the session and make it available again.
    fn reset(&mut self) {
        self.state = SessionState::Inactive;
        self.sequence_id = 0;
        self.expected_size = 0;
        self.current_size = 0;
        self.last_frame_index = 0;
        // No need to wipe the buffer; upcoming copies will overwrite it.
    }
}

/// Main assembler: owns a fixed pool of reusable sessions, each slotting one
/// in-flight Fast Packet message per `(pgn, source)`.
#[derive(Debug, Copy, Clone)]
pub struct FastPacketAssembler<const N: usize = DEFAULT_CONCURRENT_SESSIONS> {
    sessions: [FastPacketSession; N],
    session_ttl_ms: u64,
}

impl Default for FastPacketAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FastPacketAssembler {
    /// Instantiate the assembler with the default pool size and TTL.
    pub const fn new() -> Self {
        Self {
            sessions: [FastPacketSession::new(); DEFAULT_CONCURRENT_SESSIONS],
            session_ttl_ms: DEFAULT_SESSION_TTL_MS,
        }
    }
}

impl<const N: usize> FastPacketAssembler<N> {
    /// Instantiate with a caller-chosen pool size `N` and slot TTL.
    pub const fn with_capacity(session_ttl_ms: u64) -> Self {
        Self {
            sessions: [FastPacketSession::new(); N],
            session_ttl_ms,
        }
    }

    //==================================================================================Process Functions
    /// Process a CAN frame that may belong to a Fast Packet session.
    ///
    /// * `pgn` – Parameter Group Number the frame carries (from the CAN identifier)
    /// * `source_address` – logical address of the sender
    /// * `data` – raw 8-byte payload of the received CAN frame
    /// * `now_ms` – current time, stamped on the session for TTL expiry via [`Self::tick`]
    ///
    /// Returns a `ProcessResult` indicating whether the frame was ignored,
    /// consumed, or completed the message.
    pub fn process_frame(
        &mut self,
        pgn: u32,
        source_address: u8,
        data: &[u8; 8],
        now_ms: u64,
    ) -> ProcessResult {
        let frame_index = data[0] & 0x1F;
        let sequence_id = (data[0] >> 5) & 0x07;

        if frame_index == 0 {
            // First frame: carries the total expected size.
            let expected_size = data[1] as usize;

            if !(8..=MAX_FAST_PACKET_PAYLOAD).contains(&expected_size) {
                return ProcessResult::Ignored;
            }

            // Reuse an existing slot already tracking this (pgn, source) pair
            // if any, otherwise take a free slot.
            let ideal_session_index = self
                .sessions
                .iter()
                .position(|s| s.pgn == pgn && s.source_address == source_address);

            let session_index = ideal_session_index.or_else(|| {
                self.sessions
                    .iter()
                    .position(|s| s.state == SessionState::Inactive)
            });

            if let Some(index) = session_index {
                let session = &mut self.sessions[index];

                // Initialize the session.
                session.state = SessionState::InProgress;
                session.pgn = pgn;
                session.source_address = source_address;
                session.expected_size = expected_size;
                session.sequence_id = sequence_id;
                session.last_frame_index = 0;
                session.last_activity_ms = now_ms;

                // First frame transports six useful bytes after the header.
                let data_len = 6;
                session.buffer[0..data_len].copy_from_slice(&data[2..]);
                session.current_size = data_len;

                ProcessResult::FragmentConsumed
            } else {
                ProcessResult::Ignored
            }
        } else {
            // Continuation frame.
            if let Some(session) = self.sessions.iter_mut().find(|s| {
                s.state == SessionState::InProgress
                    && s.pgn == pgn
                    && s.source_address == source_address
                    && s.sequence_id == sequence_id
            }) {
                if frame_index != session.last_frame_index.wrapping_add(1) {
                    session.reset();
                    return ProcessResult::Ignored;
                }

                session.last_frame_index = frame_index;
                session.last_activity_ms = now_ms;

                let bytes_needed = session.expected_size - session.current_size;
                // Subsequent frames provide up to seven bytes of payload.
                let bytes_in_frame = 7;
                let copy_len = bytes_needed.min(bytes_in_frame);

                let data_slice = &data[1..(1 + copy_len)];
                let buffer_slice =
                    &mut session.buffer[session.current_size..(session.current_size + copy_len)];

                buffer_slice.copy_from_slice(data_slice);
                session.current_size += copy_len;

                if session.current_size >= session.expected_size {
                    // Copy the complete message into a dedicated return structure.
                    let mut payload_buffer = [0; MAX_FAST_PACKET_PAYLOAD];
                    let payload_len = session.expected_size;
                    payload_buffer[..payload_len].copy_from_slice(&session.buffer[..payload_len]);

                    let completed_message = CompletedMessage {
                        payload: payload_buffer,
                        len: payload_len,
                    };

                    // Release the session for future messages.
                    session.reset();

                    ProcessResult::MessageComplete(completed_message)
                } else {
                    ProcessResult::FragmentConsumed
                }
            } else {
                ProcessResult::Ignored
            }
        }
    }

    /// Reclaim any session that has not received a fragment for longer than
    /// the configured TTL, discarding its partial message. Callers invoke
    /// this periodically (e.g. once per
    /// [`Node::tick`](crate::protocol::node::Node::tick)).
    pub fn tick(&mut self, now_ms: u64) {
        for session in self
            .sessions
            .iter_mut()
            .filter(|s| s.state == SessionState::InProgress)
        {
            if now_ms.wrapping_sub(session.last_activity_ms) > self.session_ttl_ms {
                session.reset();
            }
        }
    }
}
