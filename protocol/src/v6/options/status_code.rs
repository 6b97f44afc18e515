//! DHCPv6 status codes module.

use std::fmt;

/// DHCPv6 status code (RFC 8415 §21.13).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success,
    UnspecFail,
    NoAddrsAvail,
    NoBinding,
    NotOnLink,
    UseMulticast,
    NoPrefixAvail,
    Unknown(u16),
}

impl From<u16> for StatusCode {
    fn from(value: u16) -> Self {
        use self::StatusCode::*;
        match value {
            0 => Success,
            1 => UnspecFail,
            2 => NoAddrsAvail,
            3 => NoBinding,
            4 => NotOnLink,
            5 => UseMulticast,
            6 => NoPrefixAvail,

            value => Unknown(value),
        }
    }
}

impl From<StatusCode> for u16 {
    fn from(value: StatusCode) -> Self {
        use self::StatusCode::*;
        match value {
            Success => 0,
            UnspecFail => 1,
            NoAddrsAvail => 2,
            NoBinding => 3,
            NotOnLink => 4,
            UseMulticast => 5,
            NoPrefixAvail => 6,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::StatusCode::*;
        match self {
            Unknown(_) => write!(f, "Unknown"),
            code => write!(f, "{:?}", code),
        }
    }
}
