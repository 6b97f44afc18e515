//! DHCPv6 message type module.

use std::fmt;

/// DHCPv6 message type (RFC 8415 §7.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Solicit,
    Advertise,
    Request,
    Confirm,
    Renew,
    Rebind,
    Reply,
    Release,
    Decline,
    Reconfigure,
    InformationRequest,
    RelayForw,
    RelayRepl,
    Unknown(u8),
}

impl From<u8> for MessageType {
    fn from(value: u8) -> Self {
        use self::MessageType::*;
        match value {
            1 => Solicit,
            2 => Advertise,
            3 => Request,
            4 => Confirm,
            5 => Renew,
            6 => Rebind,
            7 => Reply,
            8 => Release,
            9 => Decline,
            10 => Reconfigure,
            11 => InformationRequest,
            12 => RelayForw,
            13 => RelayRepl,

            value => Unknown(value),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        use self::MessageType::*;
        match value {
            Solicit => 1,
            Advertise => 2,
            Request => 3,
            Confirm => 4,
            Renew => 5,
            Rebind => 6,
            Reply => 7,
            Release => 8,
            Decline => 9,
            Reconfigure => 10,
            InformationRequest => 11,
            RelayForw => 12,
            RelayRepl => 13,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::MessageType::*;
        match self {
            Solicit => write!(f, "SOLICIT"),
            Advertise => write!(f, "ADVERTISE"),
            Request => write!(f, "REQUEST"),
            Confirm => write!(f, "CONFIRM"),
            Renew => write!(f, "RENEW"),
            Rebind => write!(f, "REBIND"),
            Reply => write!(f, "REPLY"),
            Release => write!(f, "RELEASE"),
            Decline => write!(f, "DECLINE"),
            Reconfigure => write!(f, "RECONFIGURE"),
            InformationRequest => write!(f, "INFORMATION-REQUEST"),
            RelayForw => write!(f, "RELAY-FORW"),
            RelayRepl => write!(f, "RELAY-REPL"),

            Unknown(_) => write!(f, "Unknown"),
        }
    }
}
