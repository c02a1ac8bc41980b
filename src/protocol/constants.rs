//! Protocol-wide magic numbers: addresses, timeouts, string caps, sentinels.

/// Highest source address a node may hold after a successful claim.
pub const N2K_MAX_CAN_BUS_ADDRESS: u8 = 251;
/// Source address used while a node cannot claim any address.
pub const N2K_NULL_CAN_BUS_ADDRESS: u8 = 254;
/// Destination value meaning "every node on the bus".
pub const N2K_BROADCAST_CAN_BUS_ADDRESS: u8 = 255;
/// Number of distinct device slots a registry can track (0..=253).
pub const N2K_MAX_BUS_DEVICES: usize = 254;

/// Time to wait for a conflicting claim before considering an address won.
pub const N2K_ADDRESS_CLAIM_TIMEOUT_MS: u64 = 250;

/// Upper bound accepted for a node's heartbeat interval.
pub const MAX_HEARTBEAT_INTERVAL_MS: u32 = 655_320;
/// Lower bound accepted for a node's heartbeat interval.
pub const MIN_HEARTBEAT_INTERVAL_MS: u32 = 10;
/// Canonical default period used for PGN 126993 absent explicit configuration.
pub const DEFAULT_HEARTBEAT_INTERVAL_MS: u32 = 60_000;

/// Backoff before the device registry's first product/configuration-info request.
pub const N2K_DL_TIME_FOR_FIRST_REQUEST_MS: u64 = 1_000;
/// Retry cadence for Product Information requests.
pub const N2K_DL_TIME_BETWEEN_PI_REQUEST_MS: u64 = 1_000;
/// Retry cadence for Configuration Information requests.
pub const N2K_DL_TIME_BETWEEN_CI_REQUEST_MS: u64 = 1_000;

/// Maximum length of each `ProductInformation` ASCII field.
pub const MAX_N2K_MODEL_ID_LEN: usize = 32;
pub const MAX_N2K_SW_CODE_LEN: usize = 32;
pub const MAX_N2K_MODEL_VERSION_LEN: usize = 32;
pub const MAX_N2K_MODEL_SERIAL_CODE_LEN: usize = 32;
/// Maximum length of each `ConfigurationInformation` variable-length field.
pub const MAX_N2K_CONFIGURATION_INFO_FIELD_LEN: usize = 70;

/// Size of the node's internal bounded send queue.
pub const DEFAULT_SEND_QUEUE_CAPACITY: usize = 40;
