//! Tracks devices observed on the bus: one slot per source address, keyed
//! directly by the address (0..=253) so lookup never scans the table.
//! Populated only by the receive path (address claim, product/configuration
//! information); user code only ever reads it.
use crate::protocol::constants::{
    N2K_DL_TIME_BETWEEN_CI_REQUEST_MS, N2K_DL_TIME_BETWEEN_PI_REQUEST_MS,
    N2K_DL_TIME_FOR_FIRST_REQUEST_MS, N2K_MAX_BUS_DEVICES,
};
use crate::protocol::managment::iso_name::IsoName;
use crate::protocol::messages::network::{ConfigurationInformation, ProductInformation};

/// Product/configuration-info request PGNs the registry schedules via
/// [`DeviceRegistry::tick`].
pub const PGN_PRODUCT_INFORMATION: u32 = 126996;
pub const PGN_CONFIGURATION_INFORMATION: u32 = 126998;

/// Everything known about a single peer observed on the bus.
#[derive(Debug, Clone, Copy)]
pub struct DeviceRecord {
    pub name: IsoName,
    pub first_observed_ms: u64,
    pub last_seen_ms: u64,
    pub product_information: Option<ProductInformation>,
    pub configuration_information: Option<ConfigurationInformation>,
    next_pi_request_ms: Option<u64>,
    next_ci_request_ms: Option<u64>,
}

impl DeviceRecord {
    fn new(name: IsoName, now_ms: u64) -> Self {
        Self {
            name,
            first_observed_ms: now_ms,
            last_seen_ms: now_ms,
            product_information: None,
            configuration_information: None,
            next_pi_request_ms: Some(now_ms + N2K_DL_TIME_FOR_FIRST_REQUEST_MS),
            next_ci_request_ms: Some(now_ms + N2K_DL_TIME_FOR_FIRST_REQUEST_MS),
        }
    }
}

/// Fixed-capacity table of [`DeviceRecord`]s, one per possible source
/// address. `N2K_MAX_BUS_DEVICES` (254) covers every non-null, non-broadcast
/// address.
#[derive(Debug, Clone, Copy)]
pub struct DeviceRegistry {
    devices: [Option<DeviceRecord>; N2K_MAX_BUS_DEVICES],
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub const fn new() -> Self {
        Self {
            devices: [None; N2K_MAX_BUS_DEVICES],
        }
    }

    /// Look up a known device by its current source address.
    pub fn get(&self, source: u8) -> Option<&DeviceRecord> {
        self.devices.get(source as usize).and_then(|d| d.as_ref())
    }

    /// Record an address claim. Creates a fresh record, or refreshes an
    /// existing one in place (keeping its already-gathered product and
    /// configuration info if the NAME is unchanged). If another slot already
    /// holds this NAME under a different address, that stale entry is
    /// evicted — the device has moved.
    pub fn on_iso_address_claim(&mut self, source: u8, name: IsoName, now_ms: u64) {
        let source = source as usize;
        if source >= N2K_MAX_BUS_DEVICES {
            return;
        }

        for (address, slot) in self.devices.iter_mut().enumerate() {
            if address != source {
                if let Some(existing) = slot {
                    if existing.name == name {
                        *slot = None;
                    }
                }
            }
        }

        match &mut self.devices[source] {
            Some(existing) if existing.name == name => {
                existing.last_seen_ms = now_ms;
            }
            _ => {
                self.devices[source] = Some(DeviceRecord::new(name, now_ms));
            }
        }
    }

    /// Attach a decoded Product Information reply to its source's record.
    pub fn on_product_information(&mut self, source: u8, info: ProductInformation) {
        if let Some(Some(record)) = self.devices.get_mut(source as usize) {
            record.product_information = Some(info);
            record.next_pi_request_ms = None;
        }
    }

    /// Attach a decoded Configuration Information reply to its source's record.
    pub fn on_configuration_information(&mut self, source: u8, info: ConfigurationInformation) {
        if let Some(Some(record)) = self.devices.get_mut(source as usize) {
            record.configuration_information = Some(info);
            record.next_ci_request_ms = None;
        }
    }

    /// Drive the request backoff schedule: for every known device still
    /// missing product or configuration info, invoke `emit_request(source,
    /// pgn)` once its retry timer has elapsed, then rearm that timer.
    pub fn tick(&mut self, now_ms: u64, mut emit_request: impl FnMut(u8, u32)) {
        for (address, slot) in self.devices.iter_mut().enumerate() {
            let Some(record) = slot else { continue };

            if record.product_information.is_none() {
                if let Some(due) = record.next_pi_request_ms {
                    if now_ms >= due {
                        emit_request(address as u8, PGN_PRODUCT_INFORMATION);
                        record.next_pi_request_ms = Some(now_ms + N2K_DL_TIME_BETWEEN_PI_REQUEST_MS);
                    }
                }
            }

            if record.configuration_information.is_none() {
                if let Some(due) = record.next_ci_request_ms {
                    if now_ms >= due {
                        emit_request(address as u8, PGN_CONFIGURATION_INFORMATION);
                        record.next_ci_request_ms = Some(now_ms + N2K_DL_TIME_BETWEEN_CI_REQUEST_MS);
                    }
                }
            }
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
    fn claim_creates_record_with_first_request_deadline() {
        let mut registry = DeviceRegistry::new();
        registry.on_iso_address_claim(10, name(100), 1_000);
        let record = registry.get(10).unwrap();
        assert_eq!(record.name, name(100));
        assert_eq!(record.first_observed_ms, 1_000);
        assert!(record.product_information.is_none());
    }

    #[test]
    fn claim_at_new_address_evicts_stale_entry_for_same_name() {
        let mut registry = DeviceRegistry::new();
        registry.on_iso_address_claim(10, name(100), 1_000);
        registry.on_iso_address_claim(9, name(100), 2_000);
        assert!(registry.get(10).is_none());
        assert!(registry.get(9).is_some());
    }

    /// Fixed-capacity collector standing in for `Vec` in `no_std` tests.
    struct Requests {
        items: [(u8, u32); 8],
        count: usize,
    }

    impl Requests {
        fn new() -> Self {
            Self {
                items: [(0, 0); 8],
                count: 0,
            }
        }
        fn push(&mut self, item: (u8, u32)) {
            self.items[self.count] = item;
            self.count += 1;
        }
        fn clear(&mut self) {
            self.count = 0;
        }
        fn as_slice(&self) -> &[(u8, u32)] {
            &self.items[..self.count]
        }
    }

    #[test]
    fn tick_requests_product_info_after_backoff_then_rearms() {
        let mut registry = DeviceRegistry::new();
        registry.on_iso_address_claim(5, name(42), 0);

        let mut requests = Requests::new();
        registry.tick(500, |src, pgn| requests.push((src, pgn)));
        assert!(requests.as_slice().is_empty(), "request fired before backoff elapsed");

        registry.tick(1_000, |src, pgn| requests.push((src, pgn)));
        assert_eq!(requests.as_slice().len(), 2);
        assert!(requests.as_slice().contains(&(5, PGN_PRODUCT_INFORMATION)));
        assert!(requests.as_slice().contains(&(5, PGN_CONFIGURATION_INFORMATION)));

        requests.clear();
        registry.tick(1_500, |src, pgn| requests.push((src, pgn)));
        assert!(requests.as_slice().is_empty(), "retry fired before next 1000ms window");

        registry.tick(2_000, |src, pgn| requests.push((src, pgn)));
        assert_eq!(requests.as_slice().len(), 2);
    }

    #[test]
    fn product_information_stops_further_requests() {
        let mut registry = DeviceRegistry::new();
        registry.on_iso_address_claim(5, name(42), 0);
        registry.on_product_information(5, ProductInformation {
            n2k_version: 2100,
            product_code: 1,
            model_id: Default::default(),
            sw_code: Default::default(),
            model_version: Default::default(),
            model_serial_code: Default::default(),
            certification_level: 1,
            load_equivalency: 1,
        });

        let mut requests = Requests::new();
        registry.tick(1_000, |src, pgn| requests.push((src, pgn)));
        assert_eq!(requests.as_slice().len(), 1);
        assert_eq!(requests.as_slice()[0], (5, PGN_CONFIGURATION_INFORMATION));
    }
}
