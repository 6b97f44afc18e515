//! DHCP options module.
//!
//! Every recognized option is a variant owning its parsed value.
//! Unrecognized codes are carried as `Generic` so that reserialization
//! reproduces the input octets.

mod message_type;
mod option_code;
mod user_class;

pub use self::{
    message_type::MessageType,
    option_code::OptionCode,
    user_class::UserClass,
};

use std::{fmt, io, mem, net::Ipv4Addr};

use bytes::{Buf, BufMut};

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

/// Checks if the option value has the length its type requires.
macro_rules! check_value_length(
    ($value:expr, $correct:expr) => (
        if $value.len() != $correct {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Option value has invalid length",
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

/// A single DHCP option in its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DhcpOption {
    Pad,
    End,
    MessageType(MessageType),
    ServerIdentifier(Ipv4Addr),
    RequestedIpAddress(Ipv4Addr),
    ParameterRequestList(Vec<OptionCode>),
    UserClass(UserClass),
    Generic { code: u8, data: Vec<u8> },
}

impl DhcpOption {
    /// The option code this variant occupies on the wire.
    pub fn code(&self) -> OptionCode {
        use self::DhcpOption::*;
        match self {
            Pad => OptionCode::Pad,
            End => OptionCode::End,
            MessageType(_) => OptionCode::MessageType,
            ServerIdentifier(_) => OptionCode::ServerIdentifier,
            RequestedIpAddress(_) => OptionCode::RequestedIpAddress,
            ParameterRequestList(_) => OptionCode::ParameterRequestList,
            UserClass(_) => OptionCode::UserClass,
            Generic { code, .. } => OptionCode::from(*code),
        }
    }

    /// Serializes the full TLV, including the code and length octets.
    ///
    /// `Pad` and `End` are single octets without a length.
    pub fn to_bytes(&self) -> Vec<u8> {
        use self::DhcpOption::*;

        let mut tlv = Vec::new();
        match self {
            Pad | End => tlv.put_u8(self.code().into()),
            MessageType(message_type) => {
                tlv.put_u8(self.code().into());
                tlv.put_u8(mem::size_of::<u8>() as u8);
                tlv.put_u8((*message_type).into());
            }
            ServerIdentifier(address) | RequestedIpAddress(address) => {
                tlv.put_u8(self.code().into());
                tlv.put_u8(mem::size_of::<u32>() as u8);
                tlv.put_u32_be(u32::from(*address));
            }
            ParameterRequestList(requested) => {
                tlv.put_u8(self.code().into());
                tlv.put_u8(requested.len() as u8);
                for code in requested.iter() {
                    tlv.put_u8((*code).into());
                }
            }
            UserClass(user_class) => {
                let value = user_class.to_bytes();
                tlv.put_u8(self.code().into());
                tlv.put_u8(value.len() as u8);
                tlv.put_slice(&value);
            }
            Generic { code, data } => {
                tlv.put_u8(*code);
                tlv.put_u8(data.len() as u8);
                tlv.put_slice(data);
            }
        }
        tlv
    }

    /// Parses a single option from its raw value octets.
    fn from_value(code: u8, value: &[u8]) -> io::Result<Self> {
        match OptionCode::from(code) {
            OptionCode::MessageType => {
                check_value_length!(value, mem::size_of::<u8>());
                Ok(DhcpOption::MessageType(MessageType::from(value[0])))
            }
            OptionCode::ServerIdentifier => {
                check_value_length!(value, mem::size_of::<u32>());
                Ok(DhcpOption::ServerIdentifier(ipv4_from_value(value)))
            }
            OptionCode::RequestedIpAddress => {
                check_value_length!(value, mem::size_of::<u32>());
                Ok(DhcpOption::RequestedIpAddress(ipv4_from_value(value)))
            }
            OptionCode::ParameterRequestList => Ok(DhcpOption::ParameterRequestList(
                value.iter().map(|code| OptionCode::from(*code)).collect(),
            )),
            OptionCode::UserClass => {
                UserClass::from_bytes(value).map(DhcpOption::UserClass)
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
            Pad => write!(f, "Pad"),
            End => write!(f, "End"),
            MessageType(message_type) => write!(f, "DHCP Message Type: {}", message_type),
            ServerIdentifier(address) => write!(f, "Server Identifier: {}", address),
            RequestedIpAddress(address) => write!(f, "Requested IP Address: {}", address),
            ParameterRequestList(requested) => {
                write!(f, "Parameter Request List:")?;
                for code in requested.iter() {
                    write!(f, " {}", code)?;
                }
                Ok(())
            }
            UserClass(user_class) => write!(f, "User Class: {}", user_class),
            Generic { code, data } => write!(f, "Option {}: {:?}", code, data),
        }
    }
}

fn ipv4_from_value(value: &[u8]) -> Ipv4Addr {
    let mut octets = [0u8; 4];
    octets.copy_from_slice(value);
    Ipv4Addr::from(octets)
}

/// Parses an option stream until the `End` option or buffer exhaustion.
///
/// # Errors
/// `io::Error` if an option claims more octets than are available or a
/// recognized option has a malformed value.
pub fn options_from_bytes(src: &[u8]) -> io::Result<Vec<DhcpOption>> {
    let mut cursor = io::Cursor::new(src);
    let mut options = Vec::new();
    while cursor.remaining() > 0 {
        let code = cursor.get_u8();
        match OptionCode::from(code) {
            OptionCode::Pad => options.push(DhcpOption::Pad),
            OptionCode::End => {
                options.push(DhcpOption::End);
                break;
            }
            _ => {
                check_remaining!(cursor, mem::size_of::<u8>());
                let length = cursor.get_u8() as usize;
                check_remaining!(cursor, length);
                let value = &src[distance!(cursor, length)];
                cursor.advance(length);
                options.push(DhcpOption::from_value(code, value)?);
            }
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::{options_from_bytes, DhcpOption, MessageType, OptionCode};

    #[test]
    fn parses_a_stream_with_pad_end_and_unknown_options() {
        let src = [
            0u8, // Pad
            53, 1, 2, // DHCP Message Type: Offer
            43, 3, 0xde, 0xad, 0x00, // vendor specific, kept as Generic
            255,  // End
            0, 0, // padding after End is not parsed
        ];
        let options = options_from_bytes(&src).unwrap();
        assert_eq!(
            options,
            vec![
                DhcpOption::Pad,
                DhcpOption::MessageType(MessageType::Offer),
                DhcpOption::Generic {
                    code: 43,
                    data: vec![0xde, 0xad, 0x00],
                },
                DhcpOption::End,
            ]
        );
    }

    #[test]
    fn preserves_unknown_codes_through_reserialization() {
        let src = [224u8, 2, 0xaa, 0xbb];
        let options = options_from_bytes(&src).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(u8::from(options[0].code()), 224);
        assert_eq!(options[0].code().to_string(), "Unknown");
        assert_eq!(options[0].to_bytes(), src.to_vec());
    }

    #[test]
    fn fails_on_an_overrunning_length_octet() {
        let src = [54u8, 4, 192, 168];
        assert!(options_from_bytes(&src).is_err());
    }

    #[test]
    fn fails_on_a_malformed_server_identifier() {
        let src = [54u8, 2, 192, 168];
        assert!(options_from_bytes(&src).is_err());
    }

    #[test]
    fn serializes_each_variant_to_its_tlv() {
        assert_eq!(DhcpOption::Pad.to_bytes(), vec![0]);
        assert_eq!(DhcpOption::End.to_bytes(), vec![255]);
        assert_eq!(
            DhcpOption::MessageType(MessageType::Discover).to_bytes(),
            vec![53, 1, 1]
        );
        assert_eq!(
            DhcpOption::ServerIdentifier(Ipv4Addr::new(192, 168, 0, 1)).to_bytes(),
            vec![54, 4, 192, 168, 0, 1]
        );
        assert_eq!(
            DhcpOption::RequestedIpAddress(Ipv4Addr::new(10, 0, 0, 7)).to_bytes(),
            vec![50, 4, 10, 0, 0, 7]
        );
        assert_eq!(
            DhcpOption::ParameterRequestList(vec![
                OptionCode::SubnetMask,
                OptionCode::Router,
                OptionCode::DomainName,
                OptionCode::DomainNameServer,
            ]).to_bytes(),
            vec![55, 4, 1, 3, 15, 6]
        );
    }

    #[test]
    fn option_round_trip_preserves_order() {
        let options = vec![
            DhcpOption::MessageType(MessageType::Request),
            DhcpOption::RequestedIpAddress(Ipv4Addr::new(10, 0, 0, 7)),
            DhcpOption::ServerIdentifier(Ipv4Addr::new(10, 0, 0, 1)),
            DhcpOption::End,
        ];
        let mut src = Vec::new();
        for option in &options {
            src.extend_from_slice(&option.to_bytes());
        }
        assert_eq!(options_from_bytes(&src).unwrap(), options);
    }
}
