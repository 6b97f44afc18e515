//! DHCP message hardware type module.

use std::fmt;

/// IANA hardware type.
///
/// Only MAC-48 addresses are constructed by this crate, but other
/// values pass through the codec untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareType {
    Ethernet,
    Ieee802,
    Arcnet,
    Unknown(u8),
}

impl From<u8> for HardwareType {
    fn from(value: u8) -> Self {
        use self::HardwareType::*;
        match value {
            1 => Ethernet,
            6 => Ieee802,
            7 => Arcnet,

            value => Unknown(value),
        }
    }
}

impl From<HardwareType> for u8 {
    fn from(value: HardwareType) -> Self {
        use self::HardwareType::*;
        match value {
            Ethernet => 1,
            Ieee802 => 6,
            Arcnet => 7,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::HardwareType::*;
        match self {
            Ethernet => write!(f, "Ethernet"),
            Ieee802 => write!(f, "IEEE 802"),
            Arcnet => write!(f, "ARCNET"),

            Unknown(_) => write!(f, "Unknown"),
        }
    }
}
