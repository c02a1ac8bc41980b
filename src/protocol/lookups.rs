//! Shared lookup enumerations referenced by several PGN structures.
//!
//! NMEA 2000 encodes many small, closed (or nearly closed) vocabularies as
//! 2-, 3- or 4-bit fields inside a payload: heading reference, GNSS fix
//! type, water reference, on/off, yes/no... Each enum below mirrors one of
//! those vocabularies. Every enum keeps an `Unknown(u8)` (or equivalent)
//! variant so an unrecognised raw value round-trips instead of being
//! silently coerced into a neighbouring variant.

/// Generic two-bit tri-state used by many fields (`No` / `Yes` / `Error` / `Unavailable`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum YesNo {
    No,
    Yes,
    Error,
    Unavailable,
}

impl From<u8> for YesNo {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => YesNo::No,
            1 => YesNo::Yes,
            2 => YesNo::Error,
            _ => YesNo::Unavailable,
        }
    }
}

impl From<YesNo> for u8 {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::No => 0,
            YesNo::Yes => 1,
            YesNo::Error => 2,
            YesNo::Unavailable => 3,
        }
    }
}

/// Reference frame for a heading/course value (2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kHeadingReference {
    True,
    Magnetic,
    Error,
    Unavailable,
}

impl From<u8> for N2kHeadingReference {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => N2kHeadingReference::True,
            1 => N2kHeadingReference::Magnetic,
            2 => N2kHeadingReference::Error,
            _ => N2kHeadingReference::Unavailable,
        }
    }
}

impl From<N2kHeadingReference> for u8 {
    fn from(value: N2kHeadingReference) -> Self {
        match value {
            N2kHeadingReference::True => 0,
            N2kHeadingReference::Magnetic => 1,
            N2kHeadingReference::Error => 2,
            N2kHeadingReference::Unavailable => 3,
        }
    }
}

/// Reference used by wind angle/speed measurements (3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kWindReference {
    True,
    Magnetic,
    ApparentWindType,
    TrueBoat,
    TrueWater,
    Unknown(u8),
}

impl From<u8> for N2kWindReference {
    fn from(raw: u8) -> Self {
        match raw & 0x07 {
            0 => N2kWindReference::True,
            1 => N2kWindReference::Magnetic,
            2 => N2kWindReference::ApparentWindType,
            3 => N2kWindReference::TrueBoat,
            4 => N2kWindReference::TrueWater,
            other => N2kWindReference::Unknown(other),
        }
    }
}

impl From<N2kWindReference> for u8 {
    fn from(value: N2kWindReference) -> Self {
        match value {
            N2kWindReference::True => 0,
            N2kWindReference::Magnetic => 1,
            N2kWindReference::ApparentWindType => 2,
            N2kWindReference::TrueBoat => 3,
            N2kWindReference::TrueWater => 4,
            N2kWindReference::Unknown(raw) => raw & 0x07,
        }
    }
}

/// Reference for speed-through-water measurements (2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kSpeedWaterReferenceType {
    Paddlewheel,
    Pitot,
    Doppler,
    Correlation,
    Unknown(u8),
}

impl From<u8> for N2kSpeedWaterReferenceType {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kSpeedWaterReferenceType::Paddlewheel,
            1 => N2kSpeedWaterReferenceType::Pitot,
            2 => N2kSpeedWaterReferenceType::Doppler,
            3 => N2kSpeedWaterReferenceType::Correlation,
            other => N2kSpeedWaterReferenceType::Unknown(other),
        }
    }
}

impl From<N2kSpeedWaterReferenceType> for u8 {
    fn from(value: N2kSpeedWaterReferenceType) -> Self {
        match value {
            N2kSpeedWaterReferenceType::Paddlewheel => 0,
            N2kSpeedWaterReferenceType::Pitot => 1,
            N2kSpeedWaterReferenceType::Doppler => 2,
            N2kSpeedWaterReferenceType::Correlation => 3,
            N2kSpeedWaterReferenceType::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// GNSS fix type reported in position/COG PGNs (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGNSSType {
    Gps,
    Glonass,
    GpsGlonass,
    GpsSbasWaas,
    GpsSbasWaasGlonass,
    Chayka,
    Integrated,
    Surveyed,
    Galileo,
    Unknown(u8),
}

impl From<u8> for N2kGNSSType {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kGNSSType::Gps,
            1 => N2kGNSSType::Glonass,
            2 => N2kGNSSType::GpsGlonass,
            3 => N2kGNSSType::GpsSbasWaas,
            4 => N2kGNSSType::GpsSbasWaasGlonass,
            5 => N2kGNSSType::Chayka,
            6 => N2kGNSSType::Integrated,
            7 => N2kGNSSType::Surveyed,
            8 => N2kGNSSType::Galileo,
            other => N2kGNSSType::Unknown(other),
        }
    }
}

impl From<N2kGNSSType> for u8 {
    fn from(value: N2kGNSSType) -> Self {
        match value {
            N2kGNSSType::Gps => 0,
            N2kGNSSType::Glonass => 1,
            N2kGNSSType::GpsGlonass => 2,
            N2kGNSSType::GpsSbasWaas => 3,
            N2kGNSSType::GpsSbasWaasGlonass => 4,
            N2kGNSSType::Chayka => 5,
            N2kGNSSType::Integrated => 6,
            N2kGNSSType::Surveyed => 7,
            N2kGNSSType::Galileo => 8,
            N2kGNSSType::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// GNSS fix method (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGNSSMethod {
    NoGnss,
    GnssFix,
    DgnssFix,
    PreciseGnss,
    RtkFixed,
    RtkFloat,
    EstimatedDeadReckoning,
    ManualInput,
    SimulateMode,
    Unknown(u8),
}

impl From<u8> for N2kGNSSMethod {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kGNSSMethod::NoGnss,
            1 => N2kGNSSMethod::GnssFix,
            2 => N2kGNSSMethod::DgnssFix,
            3 => N2kGNSSMethod::PreciseGnss,
            4 => N2kGNSSMethod::RtkFixed,
            5 => N2kGNSSMethod::RtkFloat,
            6 => N2kGNSSMethod::EstimatedDeadReckoning,
            7 => N2kGNSSMethod::ManualInput,
            8 => N2kGNSSMethod::SimulateMode,
            other => N2kGNSSMethod::Unknown(other),
        }
    }
}

impl From<N2kGNSSMethod> for u8 {
    fn from(value: N2kGNSSMethod) -> Self {
        match value {
            N2kGNSSMethod::NoGnss => 0,
            N2kGNSSMethod::GnssFix => 1,
            N2kGNSSMethod::DgnssFix => 2,
            N2kGNSSMethod::PreciseGnss => 3,
            N2kGNSSMethod::RtkFixed => 4,
            N2kGNSSMethod::RtkFloat => 5,
            N2kGNSSMethod::EstimatedDeadReckoning => 6,
            N2kGNSSMethod::ManualInput => 7,
            N2kGNSSMethod::SimulateMode => 8,
            N2kGNSSMethod::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// GNSS dilution-of-precision mode (3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGNSSDopMode {
    OneDim,
    TwoDim,
    ThreeDim,
    Auto,
    Unknown(u8),
}

impl From<u8> for N2kGNSSDopMode {
    fn from(raw: u8) -> Self {
        match raw & 0x07 {
            0 => N2kGNSSDopMode::OneDim,
            1 => N2kGNSSDopMode::TwoDim,
            2 => N2kGNSSDopMode::ThreeDim,
            3 => N2kGNSSDopMode::Auto,
            other => N2kGNSSDopMode::Unknown(other),
        }
    }
}

impl From<N2kGNSSDopMode> for u8 {
    fn from(value: N2kGNSSDopMode) -> Self {
        match value {
            N2kGNSSDopMode::OneDim => 0,
            N2kGNSSDopMode::TwoDim => 1,
            N2kGNSSDopMode::ThreeDim => 2,
            N2kGNSSDopMode::Auto => 3,
            N2kGNSSDopMode::Unknown(raw) => raw & 0x07,
        }
    }
}

/// AIS repeat indicator (2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisRepeat {
    Initial,
    First,
    Second,
    Final,
}

impl From<u8> for N2kAisRepeat {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => N2kAisRepeat::Initial,
            1 => N2kAisRepeat::First,
            2 => N2kAisRepeat::Second,
            _ => N2kAisRepeat::Final,
        }
    }
}

impl From<N2kAisRepeat> for u8 {
    fn from(value: N2kAisRepeat) -> Self {
        match value {
            N2kAisRepeat::Initial => 0,
            N2kAisRepeat::First => 1,
            N2kAisRepeat::Second => 2,
            N2kAisRepeat::Final => 3,
        }
    }
}

/// AIS transceiver channel information (5 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisTransceiverInformation {
    ChannelAVdlReception,
    ChannelBVdlReception,
    ChannelAVdlTransmission,
    ChannelBVdlTransmission,
    OwnInformationNotBroadcast,
    Unknown(u8),
}

impl From<u8> for N2kAisTransceiverInformation {
    fn from(raw: u8) -> Self {
        match raw & 0x1F {
            0 => N2kAisTransceiverInformation::ChannelAVdlReception,
            1 => N2kAisTransceiverInformation::ChannelBVdlReception,
            2 => N2kAisTransceiverInformation::ChannelAVdlTransmission,
            3 => N2kAisTransceiverInformation::ChannelBVdlTransmission,
            4 => N2kAisTransceiverInformation::OwnInformationNotBroadcast,
            other => N2kAisTransceiverInformation::Unknown(other),
        }
    }
}

impl From<N2kAisTransceiverInformation> for u8 {
    fn from(value: N2kAisTransceiverInformation) -> Self {
        match value {
            N2kAisTransceiverInformation::ChannelAVdlReception => 0,
            N2kAisTransceiverInformation::ChannelBVdlReception => 1,
            N2kAisTransceiverInformation::ChannelAVdlTransmission => 2,
            N2kAisTransceiverInformation::ChannelBVdlTransmission => 3,
            N2kAisTransceiverInformation::OwnInformationNotBroadcast => 4,
            N2kAisTransceiverInformation::Unknown(raw) => raw & 0x1F,
        }
    }
}

/// AIS navigational status (4 bits), per ITU-R M.1371.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisNavStatus {
    UnderWayMotoring,
    AtAnchor,
    NotUnderCommand,
    RestrictedManoeuverability,
    ConstrainedByDraught,
    Moored,
    Aground,
    Fishing,
    UnderWaySailing,
    HazardousMaterialHighSpeed,
    HazardousMaterialWingInGround,
    AisSart,
    Unknown(u8),
}

impl From<u8> for N2kAisNavStatus {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kAisNavStatus::UnderWayMotoring,
            1 => N2kAisNavStatus::AtAnchor,
            2 => N2kAisNavStatus::NotUnderCommand,
            3 => N2kAisNavStatus::RestrictedManoeuverability,
            4 => N2kAisNavStatus::ConstrainedByDraught,
            5 => N2kAisNavStatus::Moored,
            6 => N2kAisNavStatus::Aground,
            7 => N2kAisNavStatus::Fishing,
            8 => N2kAisNavStatus::UnderWaySailing,
            9 => N2kAisNavStatus::HazardousMaterialHighSpeed,
            10 => N2kAisNavStatus::HazardousMaterialWingInGround,
            14 => N2kAisNavStatus::AisSart,
            other => N2kAisNavStatus::Unknown(other),
        }
    }
}

impl From<N2kAisNavStatus> for u8 {
    fn from(value: N2kAisNavStatus) -> Self {
        match value {
            N2kAisNavStatus::UnderWayMotoring => 0,
            N2kAisNavStatus::AtAnchor => 1,
            N2kAisNavStatus::NotUnderCommand => 2,
            N2kAisNavStatus::RestrictedManoeuverability => 3,
            N2kAisNavStatus::ConstrainedByDraught => 4,
            N2kAisNavStatus::Moored => 5,
            N2kAisNavStatus::Aground => 6,
            N2kAisNavStatus::Fishing => 7,
            N2kAisNavStatus::UnderWaySailing => 8,
            N2kAisNavStatus::HazardousMaterialHighSpeed => 9,
            N2kAisNavStatus::HazardousMaterialWingInGround => 10,
            N2kAisNavStatus::AisSart => 14,
            N2kAisNavStatus::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// AIS Class B unit type (1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisUnit {
    ClassBSotdma,
    ClassBCs,
}

impl From<u8> for N2kAisUnit {
    fn from(raw: u8) -> Self {
        if raw & 0x01 == 0 {
            N2kAisUnit::ClassBSotdma
        } else {
            N2kAisUnit::ClassBCs
        }
    }
}

impl From<N2kAisUnit> for u8 {
    fn from(value: N2kAisUnit) -> Self {
        match value {
            N2kAisUnit::ClassBSotdma => 0,
            N2kAisUnit::ClassBCs => 1,
        }
    }
}

/// AIS assigned-mode flag (1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisMode {
    Autonomous,
    Assigned,
}

impl From<u8> for N2kAisMode {
    fn from(raw: u8) -> Self {
        if raw & 0x01 == 0 {
            N2kAisMode::Autonomous
        } else {
            N2kAisMode::Assigned
        }
    }
}

impl From<N2kAisMode> for u8 {
    fn from(value: N2kAisMode) -> Self {
        match value {
            N2kAisMode::Autonomous => 0,
            N2kAisMode::Assigned => 1,
        }
    }
}

/// AIS "data terminal equipment ready" flag (1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisDte {
    Ready,
    NotReady,
}

impl From<u8> for N2kAisDte {
    fn from(raw: u8) -> Self {
        if raw & 0x01 == 0 {
            N2kAisDte::Ready
        } else {
            N2kAisDte::NotReady
        }
    }
}

impl From<N2kAisDte> for u8 {
    fn from(value: N2kAisDte) -> Self {
        match value {
            N2kAisDte::Ready => 0,
            N2kAisDte::NotReady => 1,
        }
    }
}

/// AIS protocol version (2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisVersion {
    Itu1371_1,
    Itu1371_3,
    Unknown(u8),
}

impl From<u8> for N2kAisVersion {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => N2kAisVersion::Itu1371_1,
            1 => N2kAisVersion::Itu1371_3,
            other => N2kAisVersion::Unknown(other),
        }
    }
}

impl From<N2kAisVersion> for u8 {
    fn from(value: N2kAisVersion) -> Self {
        match value {
            N2kAisVersion::Itu1371_1 => 0,
            N2kAisVersion::Itu1371_3 => 1,
            N2kAisVersion::Unknown(raw) => raw & 0x03,
        }
    }
}

/// AIS Aid-to-Navigation type (5 bits, `N2kDD305`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kAisAtoNType {
    NotSpecified,
    ReferencePoint,
    Racon,
    FixedStructure,
    EmergencyWreckMarkingBuoy,
    LightWithoutSectors,
    LightWithSectors,
    LeadingLightFront,
    LeadingLightRear,
    BeaconCardinalN,
    BeaconCardinalE,
    BeaconCardinalS,
    BeaconCardinalW,
    BeaconPortHand,
    BeaconStarboardHand,
    BeaconPreferredChPortHand,
    BeaconPreferredChStarboardHand,
    BeaconIsolatedDanger,
    BeaconSafeWater,
    BeaconSpecialMark,
    CardinalMarkN,
    CardinalMarkE,
    CardinalMarkS,
    CardinalMarkW,
    PortHandMark,
    StarboardHandMark,
    PreferredChannelPortHand,
    PreferredChannelStarboardHand,
    IsolatedDanger,
    SafeWater,
    SpecialMark,
    LightVesselLanbyRigs,
    Unknown(u8),
}

impl From<u8> for N2kAisAtoNType {
    fn from(raw: u8) -> Self {
        match raw & 0x1F {
            0 => N2kAisAtoNType::NotSpecified,
            1 => N2kAisAtoNType::ReferencePoint,
            2 => N2kAisAtoNType::Racon,
            3 => N2kAisAtoNType::FixedStructure,
            4 => N2kAisAtoNType::EmergencyWreckMarkingBuoy,
            5 => N2kAisAtoNType::LightWithoutSectors,
            6 => N2kAisAtoNType::LightWithSectors,
            7 => N2kAisAtoNType::LeadingLightFront,
            8 => N2kAisAtoNType::LeadingLightRear,
            9 => N2kAisAtoNType::BeaconCardinalN,
            10 => N2kAisAtoNType::BeaconCardinalE,
            11 => N2kAisAtoNType::BeaconCardinalS,
            12 => N2kAisAtoNType::BeaconCardinalW,
            13 => N2kAisAtoNType::BeaconPortHand,
            14 => N2kAisAtoNType::BeaconStarboardHand,
            15 => N2kAisAtoNType::BeaconPreferredChPortHand,
            16 => N2kAisAtoNType::BeaconPreferredChStarboardHand,
            17 => N2kAisAtoNType::BeaconIsolatedDanger,
            18 => N2kAisAtoNType::BeaconSafeWater,
            19 => N2kAisAtoNType::BeaconSpecialMark,
            20 => N2kAisAtoNType::CardinalMarkN,
            21 => N2kAisAtoNType::CardinalMarkE,
            22 => N2kAisAtoNType::CardinalMarkS,
            23 => N2kAisAtoNType::CardinalMarkW,
            24 => N2kAisAtoNType::PortHandMark,
            25 => N2kAisAtoNType::StarboardHandMark,
            26 => N2kAisAtoNType::PreferredChannelPortHand,
            27 => N2kAisAtoNType::PreferredChannelStarboardHand,
            28 => N2kAisAtoNType::IsolatedDanger,
            29 => N2kAisAtoNType::SafeWater,
            30 => N2kAisAtoNType::SpecialMark,
            31 => N2kAisAtoNType::LightVesselLanbyRigs,
            other => N2kAisAtoNType::Unknown(other),
        }
    }
}

impl From<N2kAisAtoNType> for u8 {
    fn from(value: N2kAisAtoNType) -> Self {
        match value {
            N2kAisAtoNType::NotSpecified => 0,
            N2kAisAtoNType::ReferencePoint => 1,
            N2kAisAtoNType::Racon => 2,
            N2kAisAtoNType::FixedStructure => 3,
            N2kAisAtoNType::EmergencyWreckMarkingBuoy => 4,
            N2kAisAtoNType::LightWithoutSectors => 5,
            N2kAisAtoNType::LightWithSectors => 6,
            N2kAisAtoNType::LeadingLightFront => 7,
            N2kAisAtoNType::LeadingLightRear => 8,
            N2kAisAtoNType::BeaconCardinalN => 9,
            N2kAisAtoNType::BeaconCardinalE => 10,
            N2kAisAtoNType::BeaconCardinalS => 11,
            N2kAisAtoNType::BeaconCardinalW => 12,
            N2kAisAtoNType::BeaconPortHand => 13,
            N2kAisAtoNType::BeaconStarboardHand => 14,
            N2kAisAtoNType::BeaconPreferredChPortHand => 15,
            N2kAisAtoNType::BeaconPreferredChStarboardHand => 16,
            N2kAisAtoNType::BeaconIsolatedDanger => 17,
            N2kAisAtoNType::BeaconSafeWater => 18,
            N2kAisAtoNType::BeaconSpecialMark => 19,
            N2kAisAtoNType::CardinalMarkN => 20,
            N2kAisAtoNType::CardinalMarkE => 21,
            N2kAisAtoNType::CardinalMarkS => 22,
            N2kAisAtoNType::CardinalMarkW => 23,
            N2kAisAtoNType::PortHandMark => 24,
            N2kAisAtoNType::StarboardHandMark => 25,
            N2kAisAtoNType::PreferredChannelPortHand => 26,
            N2kAisAtoNType::PreferredChannelStarboardHand => 27,
            N2kAisAtoNType::IsolatedDanger => 28,
            N2kAisAtoNType::SafeWater => 29,
            N2kAisAtoNType::SpecialMark => 30,
            N2kAisAtoNType::LightVesselLanbyRigs => 31,
            N2kAisAtoNType::Unknown(raw) => raw & 0x1F,
        }
    }
}

/// Generic on/off tri-state (2 bits), distinct from [`YesNo`] in the vocabularies
/// NMEA 2000 treats as separate fields (e.g. engine/system discrete statuses).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kOnOff {
    Off,
    On,
    Error,
    Unavailable,
}

impl From<u8> for N2kOnOff {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => N2kOnOff::Off,
            1 => N2kOnOff::On,
            2 => N2kOnOff::Error,
            _ => N2kOnOff::Unavailable,
        }
    }
}

impl From<N2kOnOff> for u8 {
    fn from(value: N2kOnOff) -> Self {
        match value {
            N2kOnOff::Off => 0,
            N2kOnOff::On => 1,
            N2kOnOff::Error => 2,
            N2kOnOff::Unavailable => 3,
        }
    }
}

/// Steering mode reported/commanded by Heading/Track Control (PGN 127237, 3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kSteeringMode {
    MainSteering,
    NonFollowUpDevice,
    FollowUpDevice,
    HeadingControlStandalone,
    HeadingControl,
    TrackControl,
    Unknown(u8),
}

impl From<u8> for N2kSteeringMode {
    fn from(raw: u8) -> Self {
        match raw & 0x07 {
            0 => N2kSteeringMode::MainSteering,
            1 => N2kSteeringMode::NonFollowUpDevice,
            2 => N2kSteeringMode::FollowUpDevice,
            3 => N2kSteeringMode::HeadingControlStandalone,
            4 => N2kSteeringMode::HeadingControl,
            5 => N2kSteeringMode::TrackControl,
            other => N2kSteeringMode::Unknown(other),
        }
    }
}

impl From<N2kSteeringMode> for u8 {
    fn from(value: N2kSteeringMode) -> Self {
        match value {
            N2kSteeringMode::MainSteering => 0,
            N2kSteeringMode::NonFollowUpDevice => 1,
            N2kSteeringMode::FollowUpDevice => 2,
            N2kSteeringMode::HeadingControlStandalone => 3,
            N2kSteeringMode::HeadingControl => 4,
            N2kSteeringMode::TrackControl => 5,
            N2kSteeringMode::Unknown(raw) => raw & 0x07,
        }
    }
}

/// Turn mode commanded alongside a heading/track control command (2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kTurnMode {
    RudderLimitControlled,
    TurnRateControlled,
    RadiusControlled,
    Unknown(u8),
}

impl From<u8> for N2kTurnMode {
    fn from(raw: u8) -> Self {
        match raw & 0x03 {
            0 => N2kTurnMode::RudderLimitControlled,
            1 => N2kTurnMode::TurnRateControlled,
            2 => N2kTurnMode::RadiusControlled,
            other => N2kTurnMode::Unknown(other),
        }
    }
}

impl From<N2kTurnMode> for u8 {
    fn from(value: N2kTurnMode) -> Self {
        match value {
            N2kTurnMode::RudderLimitControlled => 0,
            N2kTurnMode::TurnRateControlled => 1,
            N2kTurnMode::RadiusControlled => 2,
            N2kTurnMode::Unknown(raw) => raw & 0x03,
        }
    }
}

/// Rudder direction order (PGN 127245, 3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kRudderDirectionOrder {
    NoDirectionOrder,
    MoveToStarboard,
    MoveToPort,
    Unknown(u8),
}

impl From<u8> for N2kRudderDirectionOrder {
    fn from(raw: u8) -> Self {
        match raw & 0x07 {
            0 => N2kRudderDirectionOrder::NoDirectionOrder,
            1 => N2kRudderDirectionOrder::MoveToStarboard,
            2 => N2kRudderDirectionOrder::MoveToPort,
            other => N2kRudderDirectionOrder::Unknown(other),
        }
    }
}

impl From<N2kRudderDirectionOrder> for u8 {
    fn from(value: N2kRudderDirectionOrder) -> Self {
        match value {
            N2kRudderDirectionOrder::NoDirectionOrder => 0,
            N2kRudderDirectionOrder::MoveToStarboard => 1,
            N2kRudderDirectionOrder::MoveToPort => 2,
            N2kRudderDirectionOrder::Unknown(raw) => raw & 0x07,
        }
    }
}

/// Time source reported by System Date/Time (PGN 126992, 4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kTimeSource {
    Gps,
    GlonassGps,
    RadioStation,
    LocalCesiumClock,
    LocalRubidiumClock,
    LocalCrystalClock,
    Unknown(u8),
}

impl From<u8> for N2kTimeSource {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kTimeSource::Gps,
            1 => N2kTimeSource::GlonassGps,
            2 => N2kTimeSource::RadioStation,
            3 => N2kTimeSource::LocalCesiumClock,
            4 => N2kTimeSource::LocalRubidiumClock,
            5 => N2kTimeSource::LocalCrystalClock,
            other => N2kTimeSource::Unknown(other),
        }
    }
}

impl From<N2kTimeSource> for u8 {
    fn from(value: N2kTimeSource) -> Self {
        match value {
            N2kTimeSource::Gps => 0,
            N2kTimeSource::GlonassGps => 1,
            N2kTimeSource::RadioStation => 2,
            N2kTimeSource::LocalCesiumClock => 3,
            N2kTimeSource::LocalRubidiumClock => 4,
            N2kTimeSource::LocalCrystalClock => 5,
            N2kTimeSource::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Control byte of an ISO Acknowledgement frame (PGN 59392, full byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kIsoAckControl {
    Ack,
    Nak,
    AccessDenied,
    AddressBusy,
    Unknown(u8),
}

impl From<u8> for N2kIsoAckControl {
    fn from(raw: u8) -> Self {
        match raw {
            0 => N2kIsoAckControl::Ack,
            1 => N2kIsoAckControl::Nak,
            2 => N2kIsoAckControl::AccessDenied,
            3 => N2kIsoAckControl::AddressBusy,
            other => N2kIsoAckControl::Unknown(other),
        }
    }
}

impl From<N2kIsoAckControl> for u8 {
    fn from(value: N2kIsoAckControl) -> Self {
        match value {
            N2kIsoAckControl::Ack => 0,
            N2kIsoAckControl::Nak => 1,
            N2kIsoAckControl::AccessDenied => 2,
            N2kIsoAckControl::AddressBusy => 3,
            N2kIsoAckControl::Unknown(raw) => raw,
        }
    }
}

/// Group Function code: first byte of PGN 126208, selects which of the four
/// group-function sub-messages follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGroupFunctionCode {
    Request,
    Command,
    Acknowledge,
    Read,
    ReadReply,
    Write,
    WriteReply,
    Unknown(u8),
}

impl From<u8> for N2kGroupFunctionCode {
    fn from(raw: u8) -> Self {
        match raw {
            0 => N2kGroupFunctionCode::Request,
            1 => N2kGroupFunctionCode::Command,
            2 => N2kGroupFunctionCode::Acknowledge,
            3 => N2kGroupFunctionCode::Read,
            4 => N2kGroupFunctionCode::ReadReply,
            5 => N2kGroupFunctionCode::Write,
            6 => N2kGroupFunctionCode::WriteReply,
            other => N2kGroupFunctionCode::Unknown(other),
        }
    }
}

impl From<N2kGroupFunctionCode> for u8 {
    fn from(value: N2kGroupFunctionCode) -> Self {
        match value {
            N2kGroupFunctionCode::Request => 0,
            N2kGroupFunctionCode::Command => 1,
            N2kGroupFunctionCode::Acknowledge => 2,
            N2kGroupFunctionCode::Read => 3,
            N2kGroupFunctionCode::ReadReply => 4,
            N2kGroupFunctionCode::Write => 5,
            N2kGroupFunctionCode::WriteReply => 6,
            N2kGroupFunctionCode::Unknown(raw) => raw,
        }
    }
}

/// PGN error code reported in an Acknowledge group function (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGroupFunctionPGNErrorCode {
    Acknowledge,
    PGNNotSupported,
    PGNTemporarilyNotAvailable,
    AccessDenied,
    NotSupported,
    TagNotSupported,
    ReadOrWriteNotSupported,
    Unknown(u8),
}

impl From<u8> for N2kGroupFunctionPGNErrorCode {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kGroupFunctionPGNErrorCode::Acknowledge,
            1 => N2kGroupFunctionPGNErrorCode::PGNNotSupported,
            2 => N2kGroupFunctionPGNErrorCode::PGNTemporarilyNotAvailable,
            3 => N2kGroupFunctionPGNErrorCode::AccessDenied,
            4 => N2kGroupFunctionPGNErrorCode::NotSupported,
            5 => N2kGroupFunctionPGNErrorCode::TagNotSupported,
            6 => N2kGroupFunctionPGNErrorCode::ReadOrWriteNotSupported,
            other => N2kGroupFunctionPGNErrorCode::Unknown(other),
        }
    }
}

impl From<N2kGroupFunctionPGNErrorCode> for u8 {
    fn from(value: N2kGroupFunctionPGNErrorCode) -> Self {
        match value {
            N2kGroupFunctionPGNErrorCode::Acknowledge => 0,
            N2kGroupFunctionPGNErrorCode::PGNNotSupported => 1,
            N2kGroupFunctionPGNErrorCode::PGNTemporarilyNotAvailable => 2,
            N2kGroupFunctionPGNErrorCode::AccessDenied => 3,
            N2kGroupFunctionPGNErrorCode::NotSupported => 4,
            N2kGroupFunctionPGNErrorCode::TagNotSupported => 5,
            N2kGroupFunctionPGNErrorCode::ReadOrWriteNotSupported => 6,
            N2kGroupFunctionPGNErrorCode::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Transmission-interval/priority error code reported alongside a PGN error
/// code in an Acknowledge group function (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGroupFunctionTransmissionOrPriorityErrorCode {
    Acknowledge,
    TransmitIntervalOrPriorityNotSupported,
    TransmitIntervalTooLow,
    AccessDenied,
    NotSupported,
    Unknown(u8),
}

impl From<u8> for N2kGroupFunctionTransmissionOrPriorityErrorCode {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kGroupFunctionTransmissionOrPriorityErrorCode::Acknowledge,
            1 => {
                N2kGroupFunctionTransmissionOrPriorityErrorCode::TransmitIntervalOrPriorityNotSupported
            }
            2 => N2kGroupFunctionTransmissionOrPriorityErrorCode::TransmitIntervalTooLow,
            3 => N2kGroupFunctionTransmissionOrPriorityErrorCode::AccessDenied,
            4 => N2kGroupFunctionTransmissionOrPriorityErrorCode::NotSupported,
            other => N2kGroupFunctionTransmissionOrPriorityErrorCode::Unknown(other),
        }
    }
}

impl From<N2kGroupFunctionTransmissionOrPriorityErrorCode> for u8 {
    fn from(value: N2kGroupFunctionTransmissionOrPriorityErrorCode) -> Self {
        match value {
            N2kGroupFunctionTransmissionOrPriorityErrorCode::Acknowledge => 0,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::TransmitIntervalOrPriorityNotSupported => 1,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::TransmitIntervalTooLow => 2,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::AccessDenied => 3,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::NotSupported => 4,
            N2kGroupFunctionTransmissionOrPriorityErrorCode::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Per-parameter error code reported in an Acknowledge group function (4 bits),
/// one per requested field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kGroupFunctionParameterErrorCode {
    Acknowledge,
    InvalidRequestParameterField,
    TemporarilyUnableToComply,
    RequestOrCommandParameterOutOfRange,
    AccessDenied,
    NotSupported,
    ReadOrWriteNotSupported,
    Unknown(u8),
}

impl From<u8> for N2kGroupFunctionParameterErrorCode {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kGroupFunctionParameterErrorCode::Acknowledge,
            1 => N2kGroupFunctionParameterErrorCode::InvalidRequestParameterField,
            2 => N2kGroupFunctionParameterErrorCode::TemporarilyUnableToComply,
            3 => N2kGroupFunctionParameterErrorCode::RequestOrCommandParameterOutOfRange,
            4 => N2kGroupFunctionParameterErrorCode::AccessDenied,
            5 => N2kGroupFunctionParameterErrorCode::NotSupported,
            6 => N2kGroupFunctionParameterErrorCode::ReadOrWriteNotSupported,
            other => N2kGroupFunctionParameterErrorCode::Unknown(other),
        }
    }
}

impl From<N2kGroupFunctionParameterErrorCode> for u8 {
    fn from(value: N2kGroupFunctionParameterErrorCode) -> Self {
        match value {
            N2kGroupFunctionParameterErrorCode::Acknowledge => 0,
            N2kGroupFunctionParameterErrorCode::InvalidRequestParameterField => 1,
            N2kGroupFunctionParameterErrorCode::TemporarilyUnableToComply => 2,
            N2kGroupFunctionParameterErrorCode::RequestOrCommandParameterOutOfRange => 3,
            N2kGroupFunctionParameterErrorCode::AccessDenied => 4,
            N2kGroupFunctionParameterErrorCode::NotSupported => 5,
            N2kGroupFunctionParameterErrorCode::ReadOrWriteNotSupported => 6,
            N2kGroupFunctionParameterErrorCode::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Fluid tank category (4 bits): fuel, fresh/gray/black water, live well, oil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kFluidType {
    Fuel,
    Water,
    GrayWater,
    LiveWell,
    Oil,
    BlackWater,
    FuelGasoline,
    Error,
    Unavailable,
    Unknown(u8),
}

impl From<u8> for N2kFluidType {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kFluidType::Fuel,
            1 => N2kFluidType::Water,
            2 => N2kFluidType::GrayWater,
            3 => N2kFluidType::LiveWell,
            4 => N2kFluidType::Oil,
            5 => N2kFluidType::BlackWater,
            6 => N2kFluidType::FuelGasoline,
            14 => N2kFluidType::Error,
            15 => N2kFluidType::Unavailable,
            other => N2kFluidType::Unknown(other),
        }
    }
}

impl From<N2kFluidType> for u8 {
    fn from(value: N2kFluidType) -> Self {
        match value {
            N2kFluidType::Fuel => 0,
            N2kFluidType::Water => 1,
            N2kFluidType::GrayWater => 2,
            N2kFluidType::LiveWell => 3,
            N2kFluidType::Oil => 4,
            N2kFluidType::BlackWater => 5,
            N2kFluidType::FuelGasoline => 6,
            N2kFluidType::Error => 14,
            N2kFluidType::Unavailable => 15,
            N2kFluidType::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// DC source category (4 bits): battery, alternator, converter, solar, wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kDCType {
    Battery,
    Alternator,
    Converter,
    SolarCell,
    WindGenerator,
    Unknown(u8),
}

impl From<u8> for N2kDCType {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kDCType::Battery,
            1 => N2kDCType::Alternator,
            2 => N2kDCType::Converter,
            3 => N2kDCType::SolarCell,
            4 => N2kDCType::WindGenerator,
            other => N2kDCType::Unknown(other),
        }
    }
}

impl From<N2kDCType> for u8 {
    fn from(value: N2kDCType) -> Self {
        match value {
            N2kDCType::Battery => 0,
            N2kDCType::Alternator => 1,
            N2kDCType::Converter => 2,
            N2kDCType::SolarCell => 3,
            N2kDCType::WindGenerator => 4,
            N2kDCType::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Battery construction (4 bits): flooded, gel, AGM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kBatType {
    Flooded,
    Gel,
    Agm,
    Unknown(u8),
}

impl From<u8> for N2kBatType {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kBatType::Flooded,
            1 => N2kBatType::Gel,
            2 => N2kBatType::Agm,
            other => N2kBatType::Unknown(other),
        }
    }
}

impl From<N2kBatType> for u8 {
    fn from(value: N2kBatType) -> Self {
        match value {
            N2kBatType::Flooded => 0,
            N2kBatType::Gel => 1,
            N2kBatType::Agm => 2,
            N2kBatType::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Battery chemistry (4 bits): lead-acid, lithium-ion, NiCad, NiMH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kBatChem {
    LeadAcid,
    LiIon,
    NiCad,
    NiMh,
    Unknown(u8),
}

impl From<u8> for N2kBatChem {
    fn from(raw: u8) -> Self {
        match raw & 0x0F {
            0 => N2kBatChem::LeadAcid,
            1 => N2kBatChem::LiIon,
            2 => N2kBatChem::NiCad,
            3 => N2kBatChem::NiMh,
            other => N2kBatChem::Unknown(other),
        }
    }
}

impl From<N2kBatChem> for u8 {
    fn from(value: N2kBatChem) -> Self {
        match value {
            N2kBatChem::LeadAcid => 0,
            N2kBatChem::LiIon => 1,
            N2kBatChem::NiCad => 2,
            N2kBatChem::NiMh => 3,
            N2kBatChem::Unknown(raw) => raw & 0x0F,
        }
    }
}

/// Temperature sensor location (full byte; the vocabulary has more than 16
/// entries so it is not nibble-packed like the smaller lookups above).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kTemperatureSource {
    SeaTemperature,
    OutsideTemperature,
    InsideTemperature,
    EngineRoomTemperature,
    MainCabinTemperature,
    LiveWellTemperature,
    BaitWellTemperature,
    RefrigerationTemperature,
    HeatingSystemTemperature,
    DewPointTemperature,
    ApparentWindChillTemperature,
    TheoreticalWindChillTemperature,
    HeatIndexTemperature,
    FreezerTemperature,
    ExhaustGasTemperature,
    Unknown(u8),
}

impl From<u8> for N2kTemperatureSource {
    fn from(raw: u8) -> Self {
        match raw {
            0 => N2kTemperatureSource::SeaTemperature,
            1 => N2kTemperatureSource::OutsideTemperature,
            2 => N2kTemperatureSource::InsideTemperature,
            3 => N2kTemperatureSource::EngineRoomTemperature,
            4 => N2kTemperatureSource::MainCabinTemperature,
            5 => N2kTemperatureSource::LiveWellTemperature,
            6 => N2kTemperatureSource::BaitWellTemperature,
            7 => N2kTemperatureSource::RefrigerationTemperature,
            8 => N2kTemperatureSource::HeatingSystemTemperature,
            9 => N2kTemperatureSource::DewPointTemperature,
            10 => N2kTemperatureSource::ApparentWindChillTemperature,
            11 => N2kTemperatureSource::TheoreticalWindChillTemperature,
            12 => N2kTemperatureSource::HeatIndexTemperature,
            13 => N2kTemperatureSource::FreezerTemperature,
            14 => N2kTemperatureSource::ExhaustGasTemperature,
            other => N2kTemperatureSource::Unknown(other),
        }
    }
}

impl From<N2kTemperatureSource> for u8 {
    fn from(value: N2kTemperatureSource) -> Self {
        match value {
            N2kTemperatureSource::SeaTemperature => 0,
            N2kTemperatureSource::OutsideTemperature => 1,
            N2kTemperatureSource::InsideTemperature => 2,
            N2kTemperatureSource::EngineRoomTemperature => 3,
            N2kTemperatureSource::MainCabinTemperature => 4,
            N2kTemperatureSource::LiveWellTemperature => 5,
            N2kTemperatureSource::BaitWellTemperature => 6,
            N2kTemperatureSource::RefrigerationTemperature => 7,
            N2kTemperatureSource::HeatingSystemTemperature => 8,
            N2kTemperatureSource::DewPointTemperature => 9,
            N2kTemperatureSource::ApparentWindChillTemperature => 10,
            N2kTemperatureSource::TheoreticalWindChillTemperature => 11,
            N2kTemperatureSource::HeatIndexTemperature => 12,
            N2kTemperatureSource::FreezerTemperature => 13,
            N2kTemperatureSource::ExhaustGasTemperature => 14,
            N2kTemperatureSource::Unknown(raw) => raw,
        }
    }
}

/// Pressure sensor location (full byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum N2kPressureSource {
    Atmospheric,
    Water,
    Steam,
    CompressedAir,
    Hydraulic,
    Filter,
    AltimeterSetting,
    Oil,
    Fuel,
    Reserved,
    Error,
    Unavailable,
    Unknown(u8),
}

impl From<u8> for N2kPressureSource {
    fn from(raw: u8) -> Self {
        match raw {
            0 => N2kPressureSource::Atmospheric,
            1 => N2kPressureSource::Water,
            2 => N2kPressureSource::Steam,
            3 => N2kPressureSource::CompressedAir,
            4 => N2kPressureSource::Hydraulic,
            5 => N2kPressureSource::Filter,
            6 => N2kPressureSource::AltimeterSetting,
            7 => N2kPressureSource::Oil,
            8 => N2kPressureSource::Fuel,
            253 => N2kPressureSource::Reserved,
            254 => N2kPressureSource::Error,
            255 => N2kPressureSource::Unavailable,
            other => N2kPressureSource::Unknown(other),
        }
    }
}

impl From<N2kPressureSource> for u8 {
    fn from(value: N2kPressureSource) -> Self {
        match value {
            N2kPressureSource::Atmospheric => 0,
            N2kPressureSource::Water => 1,
            N2kPressureSource::Steam => 2,
            N2kPressureSource::CompressedAir => 3,
            N2kPressureSource::Hydraulic => 4,
            N2kPressureSource::Filter => 5,
            N2kPressureSource::AltimeterSetting => 6,
            N2kPressureSource::Oil => 7,
            N2kPressureSource::Fuel => 8,
            N2kPressureSource::Reserved => 253,
            N2kPressureSource::Error => 254,
            N2kPressureSource::Unavailable => 255,
            N2kPressureSource::Unknown(raw) => raw,
        }
    }
}

/// Transmission discrete status bitfield (PGN 127493), decode-only-low-5-bits
/// per the source's own decode mask; the remaining 3 bits are reserved and
/// written as `1` on encode (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct N2kTransmissionDiscreteStatus1 {
    pub check_temperature: bool,
    pub over_temperature: bool,
    pub low_oil_pressure: bool,
    pub low_oil_level: bool,
    pub sail_drive: bool,
}

impl From<u8> for N2kTransmissionDiscreteStatus1 {
    fn from(raw: u8) -> Self {
        let raw = raw & 0x1F;
        Self {
            check_temperature: raw & 0x01 != 0,
            over_temperature: raw & 0x02 != 0,
            low_oil_pressure: raw & 0x04 != 0,
            low_oil_level: raw & 0x08 != 0,
            sail_drive: raw & 0x10 != 0,
        }
    }
}

impl From<N2kTransmissionDiscreteStatus1> for u8 {
    fn from(value: N2kTransmissionDiscreteStatus1) -> Self {
        (value.check_temperature as u8)
            | (value.over_temperature as u8) << 1
            | (value.low_oil_pressure as u8) << 2
            | (value.low_oil_level as u8) << 3
            | (value.sail_drive as u8) << 4
    }
}

/// Engine discrete status bank 1 (`N2kDD206`, PGN 127489), 16 independent
/// alarm/indicator flags packed into two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct N2kEngineDiscreteStatus1 {
    pub check_engine: bool,
    pub over_temperature: bool,
    pub low_oil_pressure: bool,
    pub low_oil_level: bool,
    pub low_fuel_pressure: bool,
    pub low_system_voltage: bool,
    pub low_coolant_level: bool,
    pub water_flow: bool,
    pub water_in_fuel: bool,
    pub charge_indicator: bool,
    pub preheat_indicator: bool,
    pub high_boost_pressure: bool,
    pub rev_limit_exceeded: bool,
    pub egr_system: bool,
    pub throttle_position_sensor: bool,
    pub engine_emergency_stop_mode: bool,
}

impl From<u16> for N2kEngineDiscreteStatus1 {
    fn from(raw: u16) -> Self {
        Self {
            check_engine: raw & 0x0001 != 0,
            over_temperature: raw & 0x0002 != 0,
            low_oil_pressure: raw & 0x0004 != 0,
            low_oil_level: raw & 0x0008 != 0,
            low_fuel_pressure: raw & 0x0010 != 0,
            low_system_voltage: raw & 0x0020 != 0,
            low_coolant_level: raw & 0x0040 != 0,
            water_flow: raw & 0x0080 != 0,
            water_in_fuel: raw & 0x0100 != 0,
            charge_indicator: raw & 0x0200 != 0,
            preheat_indicator: raw & 0x0400 != 0,
            high_boost_pressure: raw & 0x0800 != 0,
            rev_limit_exceeded: raw & 0x1000 != 0,
            egr_system: raw & 0x2000 != 0,
            throttle_position_sensor: raw & 0x4000 != 0,
            engine_emergency_stop_mode: raw & 0x8000 != 0,
        }
    }
}

impl From<N2kEngineDiscreteStatus1> for u16 {
    fn from(value: N2kEngineDiscreteStatus1) -> Self {
        (value.check_engine as u16)
            | (value.over_temperature as u16) << 1
            | (value.low_oil_pressure as u16) << 2
            | (value.low_oil_level as u16) << 3
            | (value.low_fuel_pressure as u16) << 4
            | (value.low_system_voltage as u16) << 5
            | (value.low_coolant_level as u16) << 6
            | (value.water_flow as u16) << 7
            | (value.water_in_fuel as u16) << 8
            | (value.charge_indicator as u16) << 9
            | (value.preheat_indicator as u16) << 10
            | (value.high_boost_pressure as u16) << 11
            | (value.rev_limit_exceeded as u16) << 12
            | (value.egr_system as u16) << 13
            | (value.throttle_position_sensor as u16) << 14
            | (value.engine_emergency_stop_mode as u16) << 15
    }
}

/// Engine discrete status bank 2 (`N2kDD223`, PGN 127489); the high byte is
/// manufacturer-defined and preserved verbatim rather than interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct N2kEngineDiscreteStatus2 {
    pub warning_level1: bool,
    pub warning_level2: bool,
    pub power_reduction: bool,
    pub maintenance_needed: bool,
    pub engine_comm_error: bool,
    pub sub_or_secondary_throttle: bool,
    pub neutral_start_protect: bool,
    pub engine_shutting_down: bool,
    pub manufacturer_flags: u8,
}

impl From<u16> for N2kEngineDiscreteStatus2 {
    fn from(raw: u16) -> Self {
        Self {
            warning_level1: raw & 0x0001 != 0,
            warning_level2: raw & 0x0002 != 0,
            power_reduction: raw & 0x0004 != 0,
            maintenance_needed: raw & 0x0008 != 0,
            engine_comm_error: raw & 0x0010 != 0,
            sub_or_secondary_throttle: raw & 0x0020 != 0,
            neutral_start_protect: raw & 0x0040 != 0,
            engine_shutting_down: raw & 0x0080 != 0,
            manufacturer_flags: (raw >> 8) as u8,
        }
    }
}

impl From<N2kEngineDiscreteStatus2> for u16 {
    fn from(value: N2kEngineDiscreteStatus2) -> Self {
        (value.warning_level1 as u16)
            | (value.warning_level2 as u16) << 1
            | (value.power_reduction as u16) << 2
            | (value.maintenance_needed as u16) << 3
            | (value.engine_comm_error as u16) << 4
            | (value.sub_or_secondary_throttle as u16) << 5
            | (value.neutral_start_protect as u16) << 6
            | (value.engine_shutting_down as u16) << 7
            | (value.manufacturer_flags as u16) << 8
    }
}

/// Thruster motor event flags (`N2kDD472`). The source leaves whether the top
/// two bits are one combined flag or two distinct ones unresolved (see
/// DESIGN.md Open Question 2); this models them as two distinct flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct N2kDD472 {
    pub motor_over_temperature_cutout: bool,
    pub low_oil_level_warning: bool,
    pub motor_overcurrent_cutout: bool,
    pub low_voltage_cutout: bool,
    pub reserved: bool,
    pub data_not_available: bool,
}

impl From<u8> for N2kDD472 {
    fn from(raw: u8) -> Self {
        Self {
            motor_over_temperature_cutout: raw & 0x01 != 0,
            low_oil_level_warning: raw & 0x02 != 0,
            motor_overcurrent_cutout: raw & 0x04 != 0,
            low_voltage_cutout: raw & 0x08 != 0,
            reserved: raw & 0x10 != 0,
            data_not_available: raw & 0x20 != 0,
        }
    }
}

impl From<N2kDD472> for u8 {
    fn from(value: N2kDD472) -> Self {
        (value.motor_over_temperature_cutout as u8)
            | (value.low_oil_level_warning as u8) << 1
            | (value.motor_overcurrent_cutout as u8) << 2
            | (value.low_voltage_cutout as u8) << 3
            | (value.reserved as u8) << 4
            | (value.data_not_available as u8) << 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_roundtrip() {
        for raw in 0u8..4 {
            let value = YesNo::from(raw);
            assert_eq!(u8::from(value), raw);
        }
    }

    #[test]
    fn wind_reference_unknown_preserved() {
        let value = N2kWindReference::from(6);
        assert_eq!(value, N2kWindReference::Unknown(6));
        assert_eq!(u8::from(value), 6);
    }

    #[test]
    fn gnss_method_roundtrip() {
        let value = N2kGNSSMethod::from(4);
        assert_eq!(value, N2kGNSSMethod::RtkFixed);
        assert_eq!(u8::from(value), 4);
    }

    #[test]
    fn fluid_type_roundtrip() {
        assert_eq!(N2kFluidType::from(5), N2kFluidType::BlackWater);
        assert_eq!(u8::from(N2kFluidType::FuelGasoline), 6);
        assert_eq!(N2kFluidType::from(9), N2kFluidType::Unknown(9));
    }

    #[test]
    fn pressure_source_full_byte() {
        assert_eq!(N2kPressureSource::from(254), N2kPressureSource::Error);
        assert_eq!(u8::from(N2kPressureSource::Fuel), 8);
    }

    #[test]
    fn transmission_discrete_status1_masks_high_bits() {
        let status = N2kTransmissionDiscreteStatus1::from(0xFF);
        assert!(status.sail_drive);
        assert_eq!(u8::from(status), 0x1F);
    }

    #[test]
    fn dd472_two_distinct_flags() {
        let status = N2kDD472::from(0x30);
        assert!(status.reserved);
        assert!(status.data_not_available);
        assert_eq!(u8::from(status), 0x30);
    }
}
