//! Synchronous abstraction for a CAN bus. Allows the library to plug into
//! various implementations (embedded HAL, desktop driver, software loopback
//! used in tests) without owning the controller itself.
//!
//! A [`Node`](crate::protocol::node::Node) drives this trait from a
//! cooperative, single-threaded loop: `send` and `recv` must both be
//! non-blocking so the node's `tick` can return promptly and be called
//! again on the next scheduler pass.
use crate::protocol::transport::can_frame::CanFrame;

/// Contract to send and receive CAN frames without blocking.
pub trait CanBus {
    type Error: core::fmt::Debug;

    /// Transmit one frame. Implementations must not block; a full TX
    /// mailbox is a legitimate transient error the caller may retry later.
    fn send(&mut self, frame: &CanFrame) -> Result<(), Self::Error>;

    /// Poll for one received frame, if any is pending. `Ok(None)` is the
    /// normal outcome when the receive queue is empty.
    fn recv(&mut self) -> Result<Option<CanFrame>, Self::Error>;
}
