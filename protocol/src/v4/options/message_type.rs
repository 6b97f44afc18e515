//! DHCP message type module.

use std::fmt;

/// DHCP message type (RFC 2131 only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Decline,
    Ack,
    Nak,
    Release,
    Inform,
    Unknown(u8),
}

impl From<u8> for MessageType {
    fn from(value: u8) -> Self {
        use self::MessageType::*;
        match value {
            1 => Discover,
            2 => Offer,
            3 => Request,
            4 => Decline,
            5 => Ack,
            6 => Nak,
            7 => Release,
            8 => Inform,

            value => Unknown(value),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        use self::MessageType::*;
        match value {
            Discover => 1,
            Offer => 2,
            Request => 3,
            Decline => 4,
            Ack => 5,
            Nak => 6,
            Release => 7,
            Inform => 8,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::MessageType::*;
        match self {
            Discover => write!(f, "DHCPDISCOVER"),
            Offer => write!(f, "DHCPOFFER"),
            Request => write!(f, "DHCPREQUEST"),
            Decline => write!(f, "DHCPDECLINE"),
            Ack => write!(f, "DHCPACK"),
            Nak => write!(f, "DHCPNAK"),
            Release => write!(f, "DHCPRELEASE"),
            Inform => write!(f, "DHCPINFORM"),

            Unknown(_) => write!(f, "Unknown"),
        }
    }
}
