//! ISO 11783 address-claim state machine: the candidate-address walk and
//! NAME-arbitration rules a [`Node`](super::Node) runs to win a unique
//! 8-bit source address on the bus.
use crate::protocol::constants::{N2K_ADDRESS_CLAIM_TIMEOUT_MS, N2K_MAX_CAN_BUS_ADDRESS};
use crate::protocol::managment::iso_name::IsoName;

/// Current phase of the address-claim procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressClaimState {
    /// No claim attempt has started yet; the node has no usable address.
    Unclaimed,
    /// A claim for `candidate` is outstanding; it wins unchallenged at
    /// `deadline_ms` unless a conflicting claim arrives first.
    Claiming { candidate: u8, deadline_ms: u64 },
    /// `address` is ours; no conflicting claim was seen during the wait.
    Claimed { address: u8 },
    /// Every address in `0..=N2K_MAX_CAN_BUS_ADDRESS` lost to a
    /// lower-NAME peer. The node must not transmit anything but its own
    /// (losing) claim until told to retry.
    CannotClaim,
}

/// Outcome of feeding a competing ISO Address Claim into [`AddressClaim::on_competing_claim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Our NAME wins; the peer must yield. No state change on our side.
    Won,
    /// Our NAME loses; we have moved to a new candidate (or `CannotClaim`
    /// if the address space is exhausted).
    Lost,
    /// The competing claim was not for our current address; irrelevant.
    NotContending,
}

/// Runs the candidate-address walk and NAME arbitration for ISO 11783
/// address claiming. Holds no reference to a bus or clock: the owning
/// [`Node`](super::Node) feeds it timestamps and competing NAMEs and acts on
/// the resulting state.
#[derive(Debug, Clone, Copy)]
pub struct AddressClaim {
    state: AddressClaimState,
    name: IsoName,
    preferred_address: u8,
    /// Number of distinct addresses tried in the current claim round;
    /// exhausting `N2K_MAX_CAN_BUS_ADDRESS + 1` addresses without success
    /// moves the node to `CannotClaim`.
    attempts: u16,
}

impl AddressClaim {
    pub fn new(name: IsoName, preferred_address: u8) -> Self {
        Self {
            state: AddressClaimState::Unclaimed,
            name,
            preferred_address: preferred_address.min(N2K_MAX_CAN_BUS_ADDRESS),
            attempts: 0,
        }
    }

    pub fn state(&self) -> AddressClaimState {
        self.state
    }

    pub fn name(&self) -> IsoName {
        self.name
    }

    /// The address to stamp on the next outgoing ISO Address Claim, or the
    /// null address (254) once the node has given up.
    pub fn candidate_address(&self) -> u8 {
        match self.state {
            AddressClaimState::Claiming { candidate, .. } => candidate,
            AddressClaimState::Claimed { address } => address,
            AddressClaimState::Unclaimed | AddressClaimState::CannotClaim => {
                crate::protocol::constants::N2K_NULL_CAN_BUS_ADDRESS
            }
        }
    }

    /// Downward walk with wraparound at `N2K_MAX_CAN_BUS_ADDRESS`.
    fn next_candidate(current: u8) -> u8 {
        if current == 0 {
            N2K_MAX_CAN_BUS_ADDRESS
        } else {
            current - 1
        }
    }

    /// Begin (or restart) a claim attempt at the preferred address. Returns
    /// the address the caller must now broadcast an ISO Address Claim for.
    pub fn start_claiming(&mut self, now_ms: u64) -> u8 {
        self.attempts = 0;
        self.state = AddressClaimState::Claiming {
            candidate: self.preferred_address,
            deadline_ms: now_ms + N2K_ADDRESS_CLAIM_TIMEOUT_MS,
        };
        self.preferred_address
    }

    /// Called once per `Node::tick`. Returns `Some(address)` the instant a
    /// claim wins unchallenged (the wait window elapsed), transitioning to
    /// `Claimed`.
    pub fn poll(&mut self, now_ms: u64) -> Option<u8> {
        if let AddressClaimState::Claiming {
            candidate,
            deadline_ms,
        } = self.state
        {
            if now_ms >= deadline_ms {
                self.state = AddressClaimState::Claimed { address: candidate };
                return Some(candidate);
            }
        }
        None
    }

    /// Feed a received ISO Address Claim from `source` carrying `their_name`.
    /// Only claims for our own current (or candidate) address matter.
    pub fn on_competing_claim(
        &mut self,
        source: u8,
        their_name: IsoName,
        now_ms: u64,
    ) -> ClaimOutcome {
        let contested = match self.state {
            AddressClaimState::Claiming { candidate, .. } => candidate,
            AddressClaimState::Claimed { address } => address,
            AddressClaimState::Unclaimed | AddressClaimState::CannotClaim => return ClaimOutcome::NotContending,
        };

        if source != contested {
            return ClaimOutcome::NotContending;
        }

        if their_name.raw() < self.name.raw() {
            self.attempts += 1;
            if self.attempts > N2K_MAX_CAN_BUS_ADDRESS as u16 + 1 {
                self.state = AddressClaimState::CannotClaim;
            } else {
                let candidate = Self::next_candidate(contested);
                self.state = AddressClaimState::Claiming {
                    candidate,
                    deadline_ms: now_ms + N2K_ADDRESS_CLAIM_TIMEOUT_MS,
                };
            }
            ClaimOutcome::Lost
        } else {
            ClaimOutcome::Won
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: u64) -> IsoName {
        IsoName::from_raw(raw)
    }

    #[test]
    fn claims_preferred_address_unchallenged() {
        let mut claim = AddressClaim::new(name(100), 22);
        assert_eq!(claim.start_claiming(0), 22);
        assert_eq!(claim.state(), AddressClaimState::Claiming { candidate: 22, deadline_ms: 250 });
        assert_eq!(claim.poll(249), None);
        assert_eq!(claim.poll(250), Some(22));
        assert_eq!(claim.state(), AddressClaimState::Claimed { address: 22 });
    }

    #[test]
    fn loses_to_lower_name_and_walks_downward() {
        let mut claim = AddressClaim::new(name(0x0000_0000_0000_0100), 22);
        claim.start_claiming(0);
        let outcome = claim.on_competing_claim(22, name(0x0000_0000_0000_0080), 10);
        assert_eq!(outcome, ClaimOutcome::Lost);
        assert_eq!(
            claim.state(),
            AddressClaimState::Claiming {
                candidate: 21,
                deadline_ms: 10 + N2K_ADDRESS_CLAIM_TIMEOUT_MS
            }
        );
    }

    #[test]
    fn wins_against_higher_name() {
        let mut claim = AddressClaim::new(name(0x0000_0000_0000_0080), 22);
        claim.start_claiming(0);
        let outcome = claim.on_competing_claim(22, name(0x0000_0000_0000_0100), 10);
        assert_eq!(outcome, ClaimOutcome::Won);
        assert_eq!(
            claim.state(),
            AddressClaimState::Claiming {
                candidate: 22,
                deadline_ms: 250
            }
        );
    }

    #[test]
    fn irrelevant_claim_for_other_address_is_ignored() {
        let mut claim = AddressClaim::new(name(100), 22);
        claim.start_claiming(0);
        let outcome = claim.on_competing_claim(5, name(1), 10);
        assert_eq!(outcome, ClaimOutcome::NotContending);
    }

    #[test]
    fn downward_walk_wraps_at_zero() {
        let mut claim = AddressClaim::new(name(5), 0);
        claim.start_claiming(0);
        let outcome = claim.on_competing_claim(0, name(1), 10);
        assert_eq!(outcome, ClaimOutcome::Lost);
        assert_eq!(
            claim.state(),
            AddressClaimState::Claiming {
                candidate: N2K_MAX_CAN_BUS_ADDRESS,
                deadline_ms: 10 + N2K_ADDRESS_CLAIM_TIMEOUT_MS
            }
        );
    }

    #[test]
    fn exhausting_every_address_enters_cannot_claim() {
        let mut claim = AddressClaim::new(name(5), 0);
        claim.start_claiming(0);
        let mut now = 0u64;
        for _ in 0..=N2K_MAX_CAN_BUS_ADDRESS as u16 + 1 {
            now += N2K_ADDRESS_CLAIM_TIMEOUT_MS;
            let AddressClaimState::Claiming { candidate, .. } = claim.state() else {
                break;
            };
            claim.on_competing_claim(candidate, name(1), now);
        }
        assert_eq!(claim.state(), AddressClaimState::CannotClaim);
        assert_eq!(claim.candidate_address(), crate::protocol::constants::N2K_NULL_CAN_BUS_ADDRESS);
    }
}
