//! The IA prefix option module.
//!
//! [RFC 3633](https://tools.ietf.org/html/rfc3633)

use std::{fmt, io, net::Ipv6Addr};

use bytes::{Buf, BufMut};

use super::{options_from_bytes, options_to_bytes, DhcpOption, OptionCode, SIZE_OPTION_PREFIX};

/// The minimal option value: two lifetimes, the prefix length octet and
/// the 16-octet prefix.
pub const SIZE_IA_PREFIX_MINIMAL: usize = 25;

/// A delegated IPv6 prefix with its lifetimes.
///
/// The remainder of the option value after the fixed 25 octets holds
/// nested sub-options, parsed recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptIaPrefix {
    pub preferred_lifetime: u32,
    pub valid_lifetime: u32,
    pub prefix_length: u8,
    pub prefix: Ipv6Addr,
    pub options: Vec<DhcpOption>,
}

impl OptIaPrefix {
    /// Parses the option value.
    ///
    /// # Errors
    /// `io::Error` if the value is shorter than 25 octets or a
    /// sub-option is malformed.
    pub fn from_bytes(value: &[u8]) -> io::Result<Self> {
        if value.len() < SIZE_IA_PREFIX_MINIMAL {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "IA prefix option value is shorter than 25 octets",
            ));
        }

        let mut cursor = io::Cursor::new(value);
        let preferred_lifetime = cursor.get_u32_be();
        let valid_lifetime = cursor.get_u32_be();
        let prefix_length = cursor.get_u8();
        let prefix = {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&value[9..SIZE_IA_PREFIX_MINIMAL]);
            Ipv6Addr::from(octets)
        };
        let options = options_from_bytes(&value[SIZE_IA_PREFIX_MINIMAL..])?;

        Ok(OptIaPrefix {
            preferred_lifetime,
            valid_lifetime,
            prefix_length,
            prefix,
            options,
        })
    }

    /// Serializes the full TLV, including the code and length octets.
    pub fn to_bytes(&self) -> Vec<u8> {
        let sub_options = options_to_bytes(&self.options);

        let mut tlv =
            Vec::with_capacity(SIZE_OPTION_PREFIX + SIZE_IA_PREFIX_MINIMAL + sub_options.len());
        tlv.put_u16_be(OptionCode::IaPrefix.into());
        tlv.put_u16_be((SIZE_IA_PREFIX_MINIMAL + sub_options.len()) as u16);
        tlv.put_u32_be(self.preferred_lifetime);
        tlv.put_u32_be(self.valid_lifetime);
        tlv.put_u8(self.prefix_length);
        tlv.put_slice(&self.prefix.octets());
        tlv.put_slice(&sub_options);
        tlv
    }
}

impl fmt::Display for OptIaPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "IAPrefix: ipv6prefix={}, prefixlength={}, preferredlifetime={}, validlifetime={}",
            self.prefix, self.prefix_length, self.preferred_lifetime, self.valid_lifetime
        )
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::super::DhcpOption;
    use super::OptIaPrefix;

    #[test]
    fn parses_the_fixed_payload() {
        let value = [
            0xaa, 0xbb, 0xcc, 0xdd, // preferred lifetime
            0xee, 0xff, 0x00, 0x11, // valid lifetime
            36,   // prefix length
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, // prefix
        ];
        let option = OptIaPrefix::from_bytes(&value).unwrap();
        assert_eq!(option.preferred_lifetime, 0xaabbccdd);
        assert_eq!(option.valid_lifetime, 0xeeff0011);
        assert_eq!(option.prefix_length, 36);
        assert_eq!(option.prefix, Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1));
        assert!(option.options.is_empty());
    }

    #[test]
    fn serializes_the_code_and_length_before_the_payload() {
        let option = OptIaPrefix {
            preferred_lifetime: 0xaabbccdd,
            valid_lifetime: 0xeeff0011,
            prefix_length: 36,
            prefix: Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0),
            options: Vec::new(),
        };
        let mut expected = vec![
            0x00, 26, 0x00, 25, // code and length
            0xaa, 0xbb, 0xcc, 0xdd, // preferred lifetime
            0xee, 0xff, 0x00, 0x11, // valid lifetime
            36,
        ];
        expected.extend_from_slice(&[0u8; 16]);
        assert_eq!(option.to_bytes(), expected);
    }

    #[test]
    fn fails_on_a_truncated_value() {
        let value = [
            0xaa, 0xbb, 0xcc, 0xdd, // preferred lifetime
            0xee, 0xff, 0x00, 0x11, // valid lifetime
            36,   // prefix length
            0, 0, 0, 0, 0, 0, 0, // truncated prefix
        ];
        assert!(OptIaPrefix::from_bytes(&value).is_err());
    }

    #[test]
    fn the_string_form_names_the_prefix_and_the_lifetimes() {
        let option = OptIaPrefix {
            preferred_lifetime: 0xaabbccdd,
            valid_lifetime: 0xeeff0011,
            prefix_length: 36,
            prefix: Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0),
            options: Vec::new(),
        };
        let string = option.to_string();
        assert!(string.contains("ipv6prefix=2001:db8::"));
        assert!(string.contains("preferredlifetime=2864434397"));
        assert!(string.contains("validlifetime=4009689105"));
    }

    #[test]
    fn a_value_with_sub_options_round_trips() {
        let option = OptIaPrefix {
            preferred_lifetime: 3600,
            valid_lifetime: 7200,
            prefix_length: 56,
            prefix: Ipv6Addr::new(0x2001, 0xdb8, 0xff00, 0, 0, 0, 0, 0),
            options: vec![DhcpOption::ElapsedTime(0xaabb)],
        };
        let tlv = option.to_bytes();
        assert_eq!(OptIaPrefix::from_bytes(&tlv[4..]).unwrap(), option);
    }
}
