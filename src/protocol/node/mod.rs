//! Synchronous, single-threaded NMEA 2000 node: the top-level state machine
//! that owns address claim, device discovery, heartbeat/product-info
//! scheduling, group-function dispatch, and the send path, driven entirely
//! through `on_frame`/`tick` calls. Owns its `CanBus`/`KorriTimer`
//! collaborators by value, constructed once; no `.await` points anywhere
//! in the core.
pub mod address_claim;
pub mod send_queue;

use crate::error::{ConfigError, NodeError};
use crate::infra::codec::scaled::PgnBytes;
use crate::infra::codec::traits::PgnData;
use crate::protocol::constants::{
    DEFAULT_SEND_QUEUE_CAPACITY, MAX_HEARTBEAT_INTERVAL_MS, MIN_HEARTBEAT_INTERVAL_MS,
    N2K_BROADCAST_CAN_BUS_ADDRESS,
};
use crate::protocol::lookups::{N2kGroupFunctionTransmissionOrPriorityErrorCode, N2kIsoAckControl};
use crate::protocol::managment::device_registry::DeviceRegistry;
use crate::protocol::managment::group_function::{
    GroupFunctionRegistry, DEFAULT_GROUP_FUNCTION_HANDLERS,
};
use crate::protocol::managment::iso_name::IsoName;
use crate::protocol::message::Message;
use crate::protocol::messages::group_function::GroupFunctionHeader;
use crate::protocol::messages::network::{
    ConfigurationInformation, IsoAcknowledgement, IsoAddressClaim, IsoRequest, ProductInformation,
};
use crate::protocol::pgn_table;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::CanId;
use crate::protocol::transport::fast_packet::assembler::{
    FastPacketAssembler, ProcessResult, DEFAULT_CONCURRENT_SESSIONS, DEFAULT_SESSION_TTL_MS,
};
use crate::protocol::transport::fast_packet::builder::FastPacketBuilder;
use crate::protocol::transport::fast_packet::MAX_FAST_PACKET_PAYLOAD;
use crate::protocol::transport::traits::can_bus::CanBus;
use crate::protocol::transport::traits::korri_timer::KorriTimer;

pub use address_claim::{AddressClaim, AddressClaimState, ClaimOutcome};
pub use send_queue::SendQueue;

const PGN_ISO_REQUEST: u32 = 59904;
const PGN_ISO_ACKNOWLEDGEMENT: u32 = 59392;
const PGN_ISO_ADDRESS_CLAIM: u32 = 60928;
const PGN_PRODUCT_INFORMATION: u32 = 126996;
const PGN_CONFIGURATION_INFORMATION: u32 = 126998;
const PGN_HEARTBEAT: u32 = 126993;
const PGN_GROUP_FUNCTION: u32 = 126208;

/// Number of distinct PGNs a single node tracks a rolling Fast Packet
/// sequence counter for. Generous for a single-purpose embedded node
/// transmitting a handful of Fast Packet PGNs.
const DEFAULT_SEQUENCE_COUNTER_SLOTS: usize = 16;

/// Construction-time identity and behaviour for a [`Node`].
#[derive(Debug, Clone, Copy)]
pub struct NodeConfig {
    pub name: IsoName,
    pub preferred_address: u8,
    pub heartbeat_interval_ms: u32,
    pub product_information: ProductInformation,
    pub configuration_information: ConfigurationInformation,
}

impl NodeConfig {
    /// A zero NAME and an out-of-range heartbeat interval are both rejected
    /// at construction time rather than surfacing later as a silent no-op.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.raw() == 0 {
            return Err(ConfigError::ZeroName);
        }
        if !(MIN_HEARTBEAT_INTERVAL_MS..=MAX_HEARTBEAT_INTERVAL_MS)
            .contains(&self.heartbeat_interval_ms)
        {
            return Err(ConfigError::HeartbeatIntervalOutOfRange {
                millis: self.heartbeat_interval_ms,
            });
        }
        Ok(())
    }
}

/// One slot of the lazy PGN → Fast Packet sequence-counter map: each Fast
/// Packet PGN gets a 3-bit counter that starts at 0 and increments modulo 8
/// on every transmission, persisting for the lifetime of the node.
#[derive(Debug, Clone, Copy, Default)]
struct SequenceCounterSlot {
    pgn: u32,
    counter: u8,
}

/// The top-level NMEA 2000 node. Generic over the CAN transport and clock
/// collaborators plus three capacity knobs (Fast Packet reassembly sessions,
/// group-function handlers, and the bounded retry queue), each with a
/// sensible embedded-scale default.
pub struct Node<
    C: CanBus,
    T: KorriTimer,
    const FP: usize = DEFAULT_CONCURRENT_SESSIONS,
    const GF: usize = DEFAULT_GROUP_FUNCTION_HANDLERS,
    const SQ: usize = DEFAULT_SEND_QUEUE_CAPACITY,
> where
    C::Error: core::fmt::Debug + Clone + Copy + PartialEq + Eq,
{
    can_bus: C,
    timer: T,
    address_claim: AddressClaim,
    devices: DeviceRegistry,
    assembler: FastPacketAssembler<FP>,
    group_functions: GroupFunctionRegistry<GF>,
    send_queue: SendQueue<SQ>,
    product_information: ProductInformation,
    configuration_information: ConfigurationInformation,
    heartbeat_interval_ms: u32,
    heartbeat_sequence: u8,
    next_heartbeat_ms: u64,
    pending_product_info_ms: Option<u64>,
    pending_configuration_info_ms: Option<u64>,
    sequence_counters: [SequenceCounterSlot; DEFAULT_SEQUENCE_COUNTER_SLOTS],
}

impl<C: CanBus, T: KorriTimer, const FP: usize, const GF: usize, const SQ: usize>
    Node<C, T, FP, GF, SQ>
where
    C::Error: core::fmt::Debug + Clone + Copy + PartialEq + Eq,
{
    /// Construct a node and start its address-claim procedure. `now_ms` is
    /// the timer reading at construction time; the caller must keep calling
    /// [`Node::tick`] to drive the claim to completion.
    pub fn new(
        can_bus: C,
        timer: T,
        config: NodeConfig,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut address_claim = AddressClaim::new(config.name, config.preferred_address);
        address_claim.start_claiming(now_ms);

        Ok(Self {
            can_bus,
            timer,
            address_claim,
            devices: DeviceRegistry::new(),
            assembler: FastPacketAssembler::with_capacity(DEFAULT_SESSION_TTL_MS),
            group_functions: GroupFunctionRegistry::new(),
            send_queue: SendQueue::new(),
            product_information: config.product_information,
            configuration_information: config.configuration_information,
            heartbeat_interval_ms: config.heartbeat_interval_ms,
            heartbeat_sequence: 0,
            next_heartbeat_ms: now_ms + config.heartbeat_interval_ms as u64,
            pending_product_info_ms: None,
            pending_configuration_info_ms: None,
            sequence_counters: [SequenceCounterSlot::default(); DEFAULT_SEQUENCE_COUNTER_SLOTS],
        })
    }

    /// Current source address, or the null address (254) while unclaimed.
    pub fn address(&self) -> u8 {
        self.address_claim.candidate_address()
    }

    pub fn address_claim_state(&self) -> AddressClaimState {
        self.address_claim.state()
    }

    pub fn devices(&self) -> &DeviceRegistry {
        &self.devices
    }

    /// Borrow the underlying CAN transport. Mainly useful for tests and
    /// host applications that need to inspect driver-level state the node
    /// itself does not expose.
    pub fn can_bus(&self) -> &C {
        &self.can_bus
    }

    /// Register (or replace) the handler for a group-function target PGN.
    pub fn register_group_function(
        &mut self,
        pgn: u32,
        handler: crate::protocol::managment::group_function::GroupFunctionHandlerFn,
    ) -> Result<(), crate::protocol::managment::group_function::RegistryFull> {
        self.group_functions.register(pgn, handler)
    }

    fn next_sequence_counter(&mut self, pgn: u32) -> u8 {
        if let Some(slot) = self.sequence_counters.iter_mut().find(|s| s.pgn == pgn) {
            let value = slot.counter;
            slot.counter = (slot.counter + 1) & 0x07;
            return value;
        }
        if let Some(slot) = self
            .sequence_counters
            .iter_mut()
            .find(|s| s.pgn == 0 && s.counter == 0)
        {
            slot.pgn = pgn;
            slot.counter = 1;
            return 0;
        }
        // Pool exhausted: fall back to an un-tracked counter of 0. Only
        // reachable if a node transmits more distinct Fast Packet PGNs than
        // DEFAULT_SEQUENCE_COUNTER_SLOTS.
        0
    }

    /// Enqueue `frame` for transmission, retrying through the bounded send
    /// queue on driver backpressure. Drains the queue first so ordering is
    /// preserved.
    fn transmit(&mut self, frame: CanFrame) -> Result<(), NodeError<C::Error>> {
        self.drain_send_queue()?;
        if self.send_queue.is_empty() {
            if self.can_bus.send(&frame).is_ok() {
                return Ok(());
            }
        }
        let evicted = self.send_queue.push(frame);
        if evicted {
            Err(NodeError::Backpressure)
        } else {
            Ok(())
        }
    }

    fn drain_send_queue(&mut self) -> Result<(), NodeError<C::Error>> {
        while let Some(frame) = self.send_queue.peek().copied() {
            match self.can_bus.send(&frame) {
                Ok(()) => {
                    self.send_queue.pop();
                }
                Err(_) => break,
            }
        }
        Ok(())
    }

    fn send_claim_frame(&mut self, candidate: u8) -> Result<(), NodeError<C::Error>> {
        let id = CanId::builder(PGN_ISO_ADDRESS_CLAIM, candidate)
            .to_destination(N2K_BROADCAST_CAN_BUS_ADDRESS)
            .with_priority(pgn_table::priority(PGN_ISO_ADDRESS_CLAIM))
            .build()
            .expect("PGN 60928 with broadcast destination always builds");
        let name: IsoAddressClaim = self.address_claim.name().into();
        let mut data = [0xFFu8; 8];
        name.to_payload(&mut data)
            .expect("IsoAddressClaim always fits in 8 bytes");
        self.transmit(CanFrame { id, data, len: 8 })
    }

    /// Send `pgn_data` for `pgn`, stamping the node's current source
    /// address and the PGN's canonical priority. Fast Packet PGNs draw
    /// their 3-bit sequence counter from the node's lazily-initialised
    /// per-PGN map.
    pub fn send<P: PgnData>(
        &mut self,
        pgn_data: &P,
        pgn: u32,
        destination: Option<u8>,
    ) -> Result<(), NodeError<C::Error>> {
        if matches!(self.address_claim.state(), AddressClaimState::CannotClaim) {
            return Err(NodeError::AddressClaimLost);
        }
        let source = self.address();
        let mut payload = [0u8; MAX_FAST_PACKET_PAYLOAD];
        let len = pgn_data
            .to_payload(&mut payload)
            .map_err(NodeError::BufferFull)?;
        let priority = pgn_table::priority(pgn);
        let sequence_id = if pgn_table::is_fast_packet(pgn) {
            self.next_sequence_counter(pgn)
        } else {
            0
        };
        // PDU2 PGNs (PF >= 240) are always global: CanIdBuilder rejects a
        // destination on them, so a directed reply request is normalized to
        // broadcast here, mirroring Message::new's PDU1/PDU2 split.
        let destination = if pgn & 0xFF != 0 { None } else { destination };

        let builder = FastPacketBuilder::new(pgn, source, destination, &payload[..len], sequence_id);
        for frame in builder.build() {
            let mut frame = frame.map_err(|_| NodeError::AddressClaimLost)?;
            frame.id.0 = (frame.id.0 & !(0x7 << 26)) | (((priority & 0x07) as u32) << 26);
            self.transmit(frame)?;
        }
        Ok(())
    }

    fn reply_product_information(&mut self, destination: u8) -> Result<(), NodeError<C::Error>> {
        let info = self.product_information;
        self.send(&info, PGN_PRODUCT_INFORMATION, Some(destination))
    }

    fn reply_configuration_information(&mut self, destination: u8) -> Result<(), NodeError<C::Error>> {
        let info = self.configuration_information;
        self.send(&info, PGN_CONFIGURATION_INFORMATION, Some(destination))
    }

    fn reply_address_claim(&mut self, destination: u8) -> Result<(), NodeError<C::Error>> {
        let _ = destination;
        let candidate = self.address_claim.candidate_address();
        self.send_claim_frame(candidate)
    }

    fn nack(&mut self, destination: u8, requested_pgn: u32) -> Result<(), NodeError<C::Error>> {
        let ack = IsoAcknowledgement {
            control: N2kIsoAckControl::Nak,
            group_function: 0xFF,
            pgn: requested_pgn,
        };
        self.send(&ack, PGN_ISO_ACKNOWLEDGEMENT, Some(destination))
    }

    fn handle_iso_request(&mut self, source: u8, payload: &[u8]) -> Result<(), NodeError<C::Error>> {
        let Ok(request) = IsoRequest::from_payload(payload) else {
            return Ok(());
        };
        match request.requested_pgn {
            PGN_ISO_ADDRESS_CLAIM => self.reply_address_claim(source),
            PGN_PRODUCT_INFORMATION => self.reply_product_information(source),
            PGN_CONFIGURATION_INFORMATION => self.reply_configuration_information(source),
            other => self.nack(source, other),
        }
    }

    fn handle_group_function(&mut self, source: u8, payload: &[u8]) -> Result<(), NodeError<C::Error>> {
        let Ok(header) = GroupFunctionHeader::from_payload(payload) else {
            return Ok(());
        };
        let params = if payload.len() > 4 { &payload[4..] } else { &[] };
        if let Some(pgn_error_code) = self.group_functions.dispatch(header.code, header.target_pgn, params) {
            let ack = crate::protocol::messages::group_function::GroupFunctionAcknowledge::plain(
                header.target_pgn,
                pgn_error_code,
                N2kGroupFunctionTransmissionOrPriorityErrorCode::Acknowledge,
            );
            self.send(&ack, PGN_GROUP_FUNCTION, Some(source))?;
        }
        Ok(())
    }

    fn handle_address_claim_frame(
        &mut self,
        source: u8,
        payload: &[u8],
        now_ms: u64,
    ) -> Result<(), NodeError<C::Error>> {
        let Ok(claim) = IsoAddressClaim::from_payload(payload) else {
            return Ok(());
        };
        let their_name: IsoName = claim.into();
        self.devices.on_iso_address_claim(source, their_name, now_ms);

        match self.address_claim.on_competing_claim(source, their_name, now_ms) {
            ClaimOutcome::Lost => {
                if let AddressClaimState::CannotClaim = self.address_claim.state() {
                    return Err(NodeError::AddressClaimLost);
                }
                let candidate = self.address_claim.candidate_address();
                self.send_claim_frame(candidate)
            }
            ClaimOutcome::Won => {
                let our_address = self.address_claim.candidate_address();
                self.send_claim_frame(our_address)
            }
            ClaimOutcome::NotContending => Ok(()),
        }
    }

    /// Feed one received CAN frame into the node. Malformed or undecodable
    /// payloads are dropped silently; only send-path/backpressure/claim-loss
    /// failures are surfaced.
    pub fn on_frame(
        &mut self,
        frame: &CanFrame,
        now_ms: u64,
        mut dispatch: impl FnMut(&Message),
    ) -> Result<(), NodeError<C::Error>> {
        let pgn = frame.id.pgn();
        let source = frame.id.source_address();
        let destination = frame.id.destination().unwrap_or(N2K_BROADCAST_CAN_BUS_ADDRESS);

        if pgn == PGN_ISO_ADDRESS_CLAIM && frame.len == 8 {
            self.handle_address_claim_frame(source, &frame.data[..frame.len], now_ms)?;
            return Ok(());
        }

        if pgn_table::is_fast_packet(pgn) {
            match self.assembler.process_frame(pgn, source, &frame.data, now_ms) {
                ProcessResult::MessageComplete(completed) => {
                    self.route_message(
                        pgn,
                        source,
                        destination,
                        &completed.payload[..completed.len],
                        now_ms,
                        &mut dispatch,
                    )?;
                }
                ProcessResult::FragmentConsumed | ProcessResult::Ignored => {}
            }
        } else {
            self.route_message(pgn, source, destination, &frame.data[..frame.len], now_ms, &mut dispatch)?;
        }

        Ok(())
    }

    fn route_message(
        &mut self,
        pgn: u32,
        source: u8,
        destination: u8,
        payload: &[u8],
        now_ms: u64,
        dispatch: &mut impl FnMut(&Message),
    ) -> Result<(), NodeError<C::Error>> {
        match pgn {
            PGN_ISO_REQUEST => self.handle_iso_request(source, payload)?,
            PGN_GROUP_FUNCTION => self.handle_group_function(source, payload)?,
            PGN_PRODUCT_INFORMATION => {
                if let Ok(info) = ProductInformation::from_payload(payload) {
                    self.devices.on_product_information(source, info);
                }
            }
            PGN_CONFIGURATION_INFORMATION => {
                if let Ok(info) = ConfigurationInformation::from_payload(payload) {
                    self.devices.on_configuration_information(source, info);
                }
            }
            _ => {}
        }

        let message = Message::new(pgn, pgn_table::priority(pgn), source, destination, payload, now_ms);
        dispatch(&message);
        Ok(())
    }

    /// Drive every internal time-based schedule: address-claim expiry,
    /// staggered product/configuration-info broadcasts, heartbeat emission,
    /// the Fast Packet reassembler's TTL sweep, the device registry's
    /// request backoff, and the send queue's retry drain.
    pub fn tick(&mut self, now_ms: u64) -> Result<(), NodeError<C::Error>> {
        self.assembler.tick(now_ms);
        self.drain_send_queue()?;

        if let Some(address) = self.address_claim.poll(now_ms) {
            self.pending_product_info_ms = Some(now_ms + 187 + address as u64 * 8);
            self.pending_configuration_info_ms = Some(now_ms + 187 + address as u64 * 10);
        }

        if let Some(due) = self.pending_product_info_ms {
            if now_ms >= due {
                self.pending_product_info_ms = None;
                let info = self.product_information;
                self.send(&info, PGN_PRODUCT_INFORMATION, None)?;
            }
        }
        if let Some(due) = self.pending_configuration_info_ms {
            if now_ms >= due {
                self.pending_configuration_info_ms = None;
                let info = self.configuration_information;
                self.send(&info, PGN_CONFIGURATION_INFORMATION, None)?;
            }
        }

        if matches!(self.address_claim.state(), AddressClaimState::Claimed { .. })
            && now_ms >= self.next_heartbeat_ms
        {
            self.emit_heartbeat(false)?;
        }

        if matches!(self.address_claim.state(), AddressClaimState::Claimed { .. }) {
            let mut pending = [(0u8, 0u32); 8];
            let mut count = 0usize;
            self.devices.tick(now_ms, |address, pgn| {
                if count < pending.len() {
                    pending[count] = (address, pgn);
                    count += 1;
                }
            });
            for (address, pgn) in &pending[..count] {
                let request = IsoRequest { requested_pgn: *pgn };
                self.send(&request, PGN_ISO_REQUEST, Some(*address))?;
            }
        }

        Ok(())
    }

    /// Emit PGN 126993 immediately, bypassing the schedule, then rearm the
    /// periodic timer.
    pub fn emit_heartbeat(&mut self, equipment_status_alarm: bool) -> Result<(), NodeError<C::Error>> {
        let heartbeat = crate::protocol::messages::network::Heartbeat {
            interval_ms: self.heartbeat_interval_ms,
            sequence_counter: self.heartbeat_sequence,
            equipment_status_alarm,
        };
        self.heartbeat_sequence = self.heartbeat_sequence.wrapping_add(1);
        self.next_heartbeat_ms = self.timer.now_ms() + self.heartbeat_interval_ms as u64;
        self.send(&heartbeat, PGN_HEARTBEAT, None)
    }
}

/// Convenience to build a [`ProductInformation`]/[`ConfigurationInformation`]
/// pair from plain strings, truncating to each field's fixed ASCII-byte
/// capacity.
pub fn pgn_bytes_from_str(value: &str) -> PgnBytes {
    let mut bytes = PgnBytes::default();
    bytes.copy_from_slice(value.as_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::transport::can_frame::CanFrame;

    /// Fixed-capacity recording bus standing in for `Vec` in `no_std` tests.
    #[derive(Debug, Clone, Copy)]
    struct LoopbackBus {
        sent: [Option<CanFrame>; 32],
        count: usize,
    }

    impl LoopbackBus {
        fn new() -> Self {
            Self { sent: [None; 32], count: 0 }
        }

        fn sent_pgns(&self) -> impl Iterator<Item = u32> + '_ {
            self.sent[..self.count].iter().filter_map(|f| f.map(|f| f.id.pgn()))
        }
    }

    impl CanBus for LoopbackBus {
        type Error = ();
        fn send(&mut self, frame: &CanFrame) -> Result<(), ()> {
            if self.count < self.sent.len() {
                self.sent[self.count] = Some(*frame);
                self.count += 1;
            }
            Ok(())
        }
        fn recv(&mut self) -> Result<Option<CanFrame>, ()> {
            Ok(None)
        }
    }

    struct FixedClock(u64);
    impl KorriTimer for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    fn test_config() -> NodeConfig {
        NodeConfig {
            name: IsoName::builder().unique_number(1).manufacturer_code(275).build(),
            preferred_address: 22,
            heartbeat_interval_ms: 1_000,
            product_information: ProductInformation {
                n2k_version: 2100,
                product_code: 1,
                model_id: pgn_bytes_from_str("test"),
                sw_code: PgnBytes::default(),
                model_version: PgnBytes::default(),
                model_serial_code: PgnBytes::default(),
                certification_level: 1,
                load_equivalency: 1,
            },
            configuration_information: ConfigurationInformation {
                installation_description1: PgnBytes::default(),
                installation_description2: PgnBytes::default(),
                manufacturer_information: PgnBytes::default(),
            },
        }
    }

    #[test]
    fn zero_name_is_rejected_at_construction() {
        let bus = LoopbackBus::new();
        let mut config = test_config();
        config.name = IsoName::from_raw(0);
        let result = Node::new(bus, FixedClock(0), config, 0);
        assert_eq!(result.err(), Some(ConfigError::ZeroName));
    }

    #[test]
    fn out_of_range_heartbeat_interval_is_rejected() {
        let bus = LoopbackBus::new();
        let mut config = test_config();
        config.heartbeat_interval_ms = 5;
        let result = Node::new(bus, FixedClock(0), config, 0);
        assert!(matches!(result, Err(ConfigError::HeartbeatIntervalOutOfRange { millis: 5 })));
    }

    #[test]
    fn claim_resolves_after_timeout_and_broadcasts_info() {
        let bus = LoopbackBus::new();
        let config = test_config();
        let mut node: Node<LoopbackBus, FixedClock> = Node::new(bus, FixedClock(0), config, 0).unwrap();

        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_ISO_ADDRESS_CLAIM));

        node.tick(250).unwrap();
        assert_eq!(node.address_claim_state(), AddressClaimState::Claimed { address: 22 });

        node.tick(187 + 22 * 8).unwrap();
        node.tick(187 + 22 * 10).unwrap();
        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_PRODUCT_INFORMATION));
        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_CONFIGURATION_INFORMATION));
    }

    #[test]
    fn competing_lower_name_claim_forces_reclaim_on_lower_address() {
        let bus = LoopbackBus::new();
        let mut config = test_config();
        config.name = IsoName::from_raw(0x0000_0000_0000_0100);
        let mut node: Node<LoopbackBus, FixedClock> = Node::new(bus, FixedClock(0), config, 0).unwrap();

        let competitor = IsoAddressClaim::from(IsoName::from_raw(0x0000_0000_0000_0080));
        let mut data = [0u8; 8];
        competitor.to_payload(&mut data).unwrap();
        let frame = CanFrame {
            id: CanId::builder(PGN_ISO_ADDRESS_CLAIM, 22).to_destination(255).build().unwrap(),
            data,
            len: 8,
        };

        node.on_frame(&frame, 10, |_| {}).unwrap();
        assert_eq!(
            node.address_claim_state(),
            AddressClaimState::Claiming { candidate: 21, deadline_ms: 260 }
        );
    }

    #[test]
    fn iso_request_for_product_information_replies_with_fast_packet() {
        let bus = LoopbackBus::new();
        let config = test_config();
        let mut node: Node<LoopbackBus, FixedClock> = Node::new(bus, FixedClock(0), config, 0).unwrap();
        node.tick(250).unwrap();

        let request = IsoRequest { requested_pgn: PGN_PRODUCT_INFORMATION };
        let mut payload = [0u8; 3];
        request.to_payload(&mut payload).unwrap();
        let frame = CanFrame {
            id: CanId::builder(PGN_ISO_REQUEST, 10).to_destination(22).build().unwrap(),
            data: { let mut d = [0xFFu8; 8]; d[..3].copy_from_slice(&payload); d },
            len: 3,
        };

        node.on_frame(&frame, 300, |_| {}).unwrap();
        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_PRODUCT_INFORMATION));
    }

    #[test]
    fn unrecognised_iso_request_is_nacked() {
        let bus = LoopbackBus::new();
        let config = test_config();
        let mut node: Node<LoopbackBus, FixedClock> = Node::new(bus, FixedClock(0), config, 0).unwrap();
        node.tick(250).unwrap();

        let request = IsoRequest { requested_pgn: 130306 };
        let mut payload = [0u8; 3];
        request.to_payload(&mut payload).unwrap();
        let frame = CanFrame {
            id: CanId::builder(PGN_ISO_REQUEST, 10).to_destination(22).build().unwrap(),
            data: { let mut d = [0xFFu8; 8]; d[..3].copy_from_slice(&payload); d },
            len: 3,
        };

        node.on_frame(&frame, 300, |_| {}).unwrap();
        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_ISO_ACKNOWLEDGEMENT));
    }

    #[test]
    fn heartbeat_force_flag_bypasses_schedule() {
        let bus = LoopbackBus::new();
        let config = test_config();
        let mut node: Node<LoopbackBus, FixedClock> = Node::new(bus, FixedClock(0), config, 0).unwrap();
        node.tick(250).unwrap();

        node.emit_heartbeat(true).unwrap();
        assert!(node.can_bus().sent_pgns().any(|pgn| pgn == PGN_HEARTBEAT));
    }
}
