//! Dispatch table for PGN 126208 group-function sub-messages. The core
//! decodes the group-function code and target PGN (see
//! [`crate::protocol::messages::group_function`]) and hands both to
//! whichever handler was registered for that target PGN. A PGN with no
//! registered handler gets the default NACK
//! (`N2kGroupFunctionPGNErrorCode::PGNNotSupported`).
use crate::protocol::lookups::{N2kGroupFunctionCode, N2kGroupFunctionPGNErrorCode};

/// Default capacity of a [`GroupFunctionRegistry`]. One slot per PGN a host
/// application wants to expose remote configuration for; generous for a
/// typical single-purpose embedded node.
pub const DEFAULT_GROUP_FUNCTION_HANDLERS: usize = 8;

/// A registered handler decides, for its PGN, whether `code` (Request,
/// Command, Read, or Write — Acknowledge/ReadReply/WriteReply never reach a
/// handler, see [`GroupFunctionRegistry::dispatch`]) can be honoured. The
/// per-parameter payload bytes that follow the shared 4-byte header are
/// passed through unparsed; a handler wanting per-parameter detail decodes
/// them itself.
pub type GroupFunctionHandlerFn =
    fn(code: N2kGroupFunctionCode, params: &[u8]) -> N2kGroupFunctionPGNErrorCode;

/// Fixed-capacity PGN → handler table. Registration is by value (a plain
/// `fn`, no captured state) so the registry itself stays `Copy` and needs
/// no heap.
#[derive(Debug, Clone, Copy)]
pub struct GroupFunctionRegistry<const N: usize = DEFAULT_GROUP_FUNCTION_HANDLERS> {
    slots: [Option<(u32, GroupFunctionHandlerFn)>; N],
}

/// Registration failed because every slot is already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryFull;

impl<const N: usize> Default for GroupFunctionRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> GroupFunctionRegistry<N> {
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Register `handler` for `pgn`, replacing any previous handler for the
    /// same PGN. Fails with [`RegistryFull`] if every slot is occupied by a
    /// *different* PGN.
    pub fn register(
        &mut self,
        pgn: u32,
        handler: GroupFunctionHandlerFn,
    ) -> Result<(), RegistryFull> {
        if let Some(slot) = self.slots.iter_mut().find(|s| matches!(s, Some((p, _)) if *p == pgn))
        {
            *slot = Some((pgn, handler));
            return Ok(());
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some((pgn, handler));
            Ok(())
        } else {
            Err(RegistryFull)
        }
    }

    /// Deregister the handler for `pgn`, if any. Cancellation is plain
    /// deregistration: no runtime inheritance or handle object involved.
    pub fn deregister(&mut self, pgn: u32) {
        if let Some(slot) = self.slots.iter_mut().find(|s| matches!(s, Some((p, _)) if *p == pgn))
        {
            *slot = None;
        }
    }

    /// Dispatch a decoded group-function header to its handler. Only
    /// Request/Command/Read/Write carry a question the core must answer;
    /// Acknowledge/ReadReply/WriteReply are replies from a peer, not
    /// requests for us, and are never dispatched (the caller should ignore
    /// them).
    pub fn dispatch(
        &self,
        code: N2kGroupFunctionCode,
        target_pgn: u32,
        params: &[u8],
    ) -> Option<N2kGroupFunctionPGNErrorCode> {
        if !matches!(
            code,
            N2kGroupFunctionCode::Request
                | N2kGroupFunctionCode::Command
                | N2kGroupFunctionCode::Read
                | N2kGroupFunctionCode::Write
        ) {
            return None;
        }
        let handler = self
            .slots
            .iter()
            .find_map(|s| s.filter(|(p, _)| *p == target_pgn).map(|(_, h)| h));
        Some(match handler {
            Some(h) => h(code, params),
            None => N2kGroupFunctionPGNErrorCode::PGNNotSupported,
        })
    }
}
