//! DHCPv6 options module.
//!
//! Every option is `code:u16, length:u16, value` on the wire, both
//! big-endian. Identity association options and the relay message
//! option contain further options, parsed recursively. Unrecognized
//! codes are carried as `Generic`.

mod ia_prefix;
mod option_code;
mod status_code;

pub use self::{
    ia_prefix::{OptIaPrefix, SIZE_IA_PREFIX_MINIMAL},
    option_code::OptionCode,
    status_code::StatusCode,
};

use std::{fmt, io, mem};

use bytes::{Buf, BufMut};

use super::Packet;

/// The `code` and `length` octets preceding every option value.
pub const SIZE_OPTION_PREFIX: usize = 2 * mem::size_of::<u16>();

/// The fixed `IAID`, `T1`, `T2` prefix of an identity association.
const SIZE_IA_FIELDS: usize = 3 * mem::size_of::<u32>();

/// Checks if there is enough space in buffer to get a value.
macro_rules! check_remaining(
    ($cursor:expr, $length:expr) => (
        if $cursor.remaining() < $length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Buffer is too small or option has invalid length octets",
            ));
        }
    );
);

/// A range from the current cursor position to the specified distance.
macro_rules! distance(
    ($cursor:expr, $distance:expr) => (
        ($cursor.position() as usize)..(($cursor.position() as usize) + $distance)
    );
);

/// A single DHCPv6 option in its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DhcpOption {
    IaNa {
        iaid: u32,
        t1: u32,
        t2: u32,
        options: Vec<DhcpOption>,
    },
    IaPd {
        iaid: u32,
        t1: u32,
        t2: u32,
        options: Vec<DhcpOption>,
    },
    IaPrefix(OptIaPrefix),
    StatusCode {
        code: StatusCode,
        message: String,
    },
    ElapsedTime(u16),
    Oro(Vec<OptionCode>),
    RelayMessage(Box<Packet>),
    Generic {
        code: u16,
        data: Vec<u8>,
    },
}

impl DhcpOption {
    /// The option code this variant occupies on the wire.
    pub fn code(&self) -> OptionCode {
        use self::DhcpOption::*;
        match self {
            IaNa { .. } => OptionCode::IaNa,
            IaPd { .. } => OptionCode::IaPd,
            IaPrefix(_) => OptionCode::IaPrefix,
            StatusCode { .. } => OptionCode::StatusCode,
            ElapsedTime(_) => OptionCode::ElapsedTime,
            Oro(_) => OptionCode::Oro,
            RelayMessage(_) => OptionCode::RelayMessage,
            Generic { code, .. } => OptionCode::from(*code),
        }
    }

    /// Serializes the full TLV, including the code and length octets.
    pub fn to_bytes(&self) -> Vec<u8> {
        use self::DhcpOption::*;

        let value = match self {
            IaPrefix(prefix) => return prefix.to_bytes(),
            IaNa { iaid, t1, t2, options } | IaPd { iaid, t1, t2, options } => {
                let mut value = Vec::new();
                value.put_u32_be(*iaid);
                value.put_u32_be(*t1);
                value.put_u32_be(*t2);
                value.put_slice(&options_to_bytes(options));
                value
            }
            StatusCode { code, message } => {
                let mut value = Vec::new();
                value.put_u16_be((*code).into());
                value.put_slice(message.as_bytes());
                value
            }
            ElapsedTime(hundredths) => {
                let mut value = Vec::new();
                value.put_u16_be(*hundredths);
                value
            }
            Oro(requested) => {
                let mut value = Vec::new();
                for code in requested.iter() {
                    value.put_u16_be((*code).into());
                }
                value
            }
            RelayMessage(packet) => packet.to_bytes(),
            Generic { data, .. } => data.clone(),
        };

        let mut tlv = Vec::with_capacity(SIZE_OPTION_PREFIX + value.len());
        tlv.put_u16_be(self.code().into());
        tlv.put_u16_be(value.len() as u16);
        tlv.put_slice(&value);
        tlv
    }

    /// Parses a single option from its raw value octets.
    fn from_value(code: u16, value: &[u8]) -> io::Result<Self> {
        match OptionCode::from(code) {
            OptionCode::IaNa => {
                let (iaid, t1, t2, options) = parse_ia_value(value)?;
                Ok(DhcpOption::IaNa { iaid, t1, t2, options })
            }
            OptionCode::IaPd => {
                let (iaid, t1, t2, options) = parse_ia_value(value)?;
                Ok(DhcpOption::IaPd { iaid, t1, t2, options })
            }
            OptionCode::IaPrefix => OptIaPrefix::from_bytes(value).map(DhcpOption::IaPrefix),
            OptionCode::StatusCode => {
                if value.len() < mem::size_of::<u16>() {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "Status code option value is shorter than 2 octets",
                    ));
                }
                let mut cursor = io::Cursor::new(value);
                let code = StatusCode::from(cursor.get_u16_be());
                let message = String::from_utf8_lossy(&value[mem::size_of::<u16>()..]).into_owned();
                Ok(DhcpOption::StatusCode { code, message })
            }
            OptionCode::ElapsedTime => {
                if value.len() != mem::size_of::<u16>() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "Elapsed time option value is not 2 octets",
                    ));
                }
                let mut cursor = io::Cursor::new(value);
                Ok(DhcpOption::ElapsedTime(cursor.get_u16_be()))
            }
            OptionCode::Oro => {
                if value.len() % mem::size_of::<u16>() != 0 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "Option request option value is not a sequence of 2-octet codes",
                    ));
                }
                let mut cursor = io::Cursor::new(value);
                let mut requested = Vec::with_capacity(value.len() / mem::size_of::<u16>());
                while cursor.remaining() > 0 {
                    requested.push(OptionCode::from(cursor.get_u16_be()));
                }
                Ok(DhcpOption::Oro(requested))
            }
            OptionCode::RelayMessage => {
                Packet::from_bytes(value).map(|packet| DhcpOption::RelayMessage(Box::new(packet)))
            }
            _ => Ok(DhcpOption::Generic {
                code,
                data: value.to_vec(),
            }),
        }
    }
}

impl fmt::Display for DhcpOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::DhcpOption::*;
        match self {
            IaNa { iaid, t1, t2, options } => {
                write!(f, "IA_NA: iaid={}, t1={}, t2={}, {} sub-options", iaid, t1, t2, options.len())
            }
            IaPd { iaid, t1, t2, options } => {
                write!(f, "IA_PD: iaid={}, t1={}, t2={}, {} sub-options", iaid, t1, t2, options.len())
            }
            IaPrefix(prefix) => write!(f, "{}", prefix),
            StatusCode { code, message } => write!(f, "Status Code: {} ({})", code, message),
            ElapsedTime(hundredths) => write!(f, "Elapsed Time: {}", hundredths),
            Oro(requested) => {
                write!(f, "Option Request:")?;
                for code in requested.iter() {
                    write!(f, " {}", code)?;
                }
                Ok(())
            }
            RelayMessage(_) => write!(f, "Relay Message"),
            Generic { code, data } => write!(f, "Option {}: {:?}", code, data),
        }
    }
}

fn parse_ia_value(value: &[u8]) -> io::Result<(u32, u32, u32, Vec<DhcpOption>)> {
    if value.len() < SIZE_IA_FIELDS {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Identity association option value is shorter than 12 octets",
        ));
    }
    let mut cursor = io::Cursor::new(value);
    let iaid = cursor.get_u32_be();
    let t1 = cursor.get_u32_be();
    let t2 = cursor.get_u32_be();
    let options = options_from_bytes(&value[SIZE_IA_FIELDS..])?;
    Ok((iaid, t1, t2, options))
}

/// Parses an option stream until buffer exhaustion.
///
/// # Errors
/// `io::Error` if an option claims more octets than are available or a
/// recognized option has a malformed value.
pub fn options_from_bytes(src: &[u8]) -> io::Result<Vec<DhcpOption>> {
    let mut cursor = io::Cursor::new(src);
    let mut options = Vec::new();
    while cursor.remaining() > 0 {
        check_remaining!(cursor, SIZE_OPTION_PREFIX);
        let code = cursor.get_u16_be();
        let length = cursor.get_u16_be() as usize;
        check_remaining!(cursor, length);
        let value = &src[distance!(cursor, length)];
        cursor.advance(length);
        options.push(DhcpOption::from_value(code, value)?);
    }
    Ok(options)
}

/// Serializes options back to back, in insertion order.
pub fn options_to_bytes(options: &[DhcpOption]) -> Vec<u8> {
    let mut dst = Vec::new();
    for option in options {
        dst.extend_from_slice(&option.to_bytes());
    }
    dst
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::{
        options_from_bytes, DhcpOption, OptIaPrefix, OptionCode, StatusCode,
    };

    #[test]
    fn an_ia_pd_with_a_nested_prefix_round_trips() {
        let option = DhcpOption::IaPd {
            iaid: 0x01020304,
            t1: 3600,
            t2: 5400,
            options: vec![DhcpOption::IaPrefix(OptIaPrefix {
                preferred_lifetime: 7200,
                valid_lifetime: 14400,
                prefix_length: 56,
                prefix: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0),
                options: Vec::new(),
            })],
        };

        let tlv = option.to_bytes();
        assert_eq!(&tlv[..2], &[0, 25]);
        assert_eq!(options_from_bytes(&tlv).unwrap(), vec![option]);
    }

    #[test]
    fn a_status_code_carries_its_message() {
        let src = [0u8, 13, 0, 9, 0, 6, b'n', b'o', b' ', b'p', b'r', b'e', b'f'];
        let options = options_from_bytes(&src).unwrap();
        assert_eq!(
            options,
            vec![DhcpOption::StatusCode {
                code: StatusCode::NoPrefixAvail,
                message: "no pref".to_owned(),
            }]
        );
    }

    #[test]
    fn an_option_request_parses_its_code_list() {
        let src = [0u8, 6, 0, 4, 0, 25, 0, 23];
        let options = options_from_bytes(&src).unwrap();
        assert_eq!(
            options,
            vec![DhcpOption::Oro(vec![
                OptionCode::IaPd,
                OptionCode::DnsServers,
            ])]
        );
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let src = [0xabu8, 0xcd, 0, 2, 0xde, 0xad];
        let options = options_from_bytes(&src).unwrap();
        assert_eq!(
            options,
            vec![DhcpOption::Generic {
                code: 0xabcd,
                data: vec![0xde, 0xad],
            }]
        );
        assert_eq!(options[0].to_bytes(), src.to_vec());
    }

    #[test]
    fn fails_on_an_overrunning_length() {
        let src = [0u8, 8, 0, 4, 0, 1];
        assert!(options_from_bytes(&src).is_err());
    }

    #[test]
    fn fails_on_a_truncated_option_prefix() {
        let src = [0u8, 8, 0];
        assert!(options_from_bytes(&src).is_err());
    }
}
