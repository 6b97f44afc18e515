//! DHCPv6 option codes module.

use std::fmt;

/// DHCPv6 option codes (RFC 8415, RFC 3633).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionCode {
    ClientId,
    ServerId,
    IaNa,
    IaTa,
    IaAddr,
    Oro,
    Preference,
    ElapsedTime,
    RelayMessage,
    Auth,
    Unicast,
    StatusCode,
    RapidCommit,
    UserClass,
    VendorClass,
    VendorOpts,
    InterfaceId,
    ReconfMessage,
    ReconfAccept,
    DnsServers,
    DomainList,
    IaPd,
    IaPrefix,
    Unknown(u16),
}

impl From<u16> for OptionCode {
    fn from(value: u16) -> Self {
        use self::OptionCode::*;
        match value {
            1 => ClientId,
            2 => ServerId,
            3 => IaNa,
            4 => IaTa,
            5 => IaAddr,
            6 => Oro,
            7 => Preference,
            8 => ElapsedTime,
            9 => RelayMessage,
            11 => Auth,
            12 => Unicast,
            13 => StatusCode,
            14 => RapidCommit,
            15 => UserClass,
            16 => VendorClass,
            17 => VendorOpts,
            18 => InterfaceId,
            19 => ReconfMessage,
            20 => ReconfAccept,
            23 => DnsServers,
            24 => DomainList,
            25 => IaPd,
            26 => IaPrefix,

            value => Unknown(value),
        }
    }
}

impl From<OptionCode> for u16 {
    fn from(value: OptionCode) -> Self {
        use self::OptionCode::*;
        match value {
            ClientId => 1,
            ServerId => 2,
            IaNa => 3,
            IaTa => 4,
            IaAddr => 5,
            Oro => 6,
            Preference => 7,
            ElapsedTime => 8,
            RelayMessage => 9,
            Auth => 11,
            Unicast => 12,
            StatusCode => 13,
            RapidCommit => 14,
            UserClass => 15,
            VendorClass => 16,
            VendorOpts => 17,
            InterfaceId => 18,
            ReconfMessage => 19,
            ReconfAccept => 20,
            DnsServers => 23,
            DomainList => 24,
            IaPd => 25,
            IaPrefix => 26,

            Unknown(value) => value,
        }
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::OptionCode::*;
        match self {
            Unknown(_) => write!(f, "Unknown"),
            code => write!(f, "{:?}", code),
        }
    }
}
