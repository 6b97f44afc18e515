//! DHCP message serialization module.

use bytes::BufMut;

use super::{constants::*, Message};

impl Message {
    /// DHCP message serialization.
    ///
    /// Writes the fixed header at full width, the magic cookie and the
    /// option TLVs in insertion order. A broken option list is reported
    /// through the log by `validate_options` but serialized as it is.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.validate_options();

        let mut dst = Vec::with_capacity(SIZE_MESSAGE_MINIMAL);
        dst.put_u8(self.operation_code.into());
        dst.put_u8(self.hardware_type.into());
        dst.put_u8(self.hardware_address_length);
        dst.put_u8(self.hop_count);
        dst.put_u32_be(self.transaction_id);
        dst.put_u16_be(self.seconds);
        dst.put_u16_be(self.flags);
        dst.put_u32_be(u32::from(self.client_ip_address));
        dst.put_u32_be(u32::from(self.your_ip_address));
        dst.put_u32_be(u32::from(self.server_ip_address));
        dst.put_u32_be(u32::from(self.gateway_ip_address));
        dst.put_slice(&self.client_hardware_address);
        dst.put_slice(&self.server_name);
        dst.put_slice(&self.boot_filename);
        dst.put_u32_be(MAGIC_COOKIE);

        for option in &self.options {
            dst.put_slice(&option.to_bytes());
        }
        dst
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::super::{
        constants::SIZE_HEADER,
        options::{DhcpOption, MessageType, OptionCode},
        Message,
    };

    #[test]
    fn the_fixed_header_takes_exactly_236_octets() {
        let message = Message::new();
        let bytes = message.to_bytes();
        assert!(bytes.len() >= SIZE_HEADER + 4);
        assert_eq!(&bytes[SIZE_HEADER..SIZE_HEADER + 4], &[99, 130, 83, 99]);
    }

    #[test]
    fn the_magic_cookie_position_does_not_depend_on_the_options() {
        let mut message = Message::new();
        message.set_server_name(b"sname");
        message.set_boot_filename(b"pxelinux.0");
        message.add_option(DhcpOption::MessageType(MessageType::Discover));
        message.add_option(DhcpOption::ParameterRequestList(vec![
            OptionCode::SubnetMask,
        ]));
        let bytes = message.to_bytes();
        assert_eq!(&bytes[SIZE_HEADER..SIZE_HEADER + 4], &[99, 130, 83, 99]);
    }

    #[test]
    fn a_built_message_round_trips_field_for_field() {
        let mut message = Message::new_discovery(::eui48::MacAddress::new([
            0x00, 0x0c, 0x29, 0x13, 0x0e, 0x37,
        ]));
        message.seconds = 7;
        message.hop_count = 2;
        message.client_ip_address = Ipv4Addr::new(10, 0, 0, 5);
        message.set_server_name(b"server");
        message.set_boot_filename(b"boot/pxelinux.0");
        message.add_option(DhcpOption::Generic {
            code: 224,
            data: vec![1, 2, 3],
        });

        let parsed = Message::from_bytes(&message.to_bytes()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn an_unparsed_packet_reserializes_byte_for_byte() {
        let message = Message::new_discovery(::eui48::MacAddress::new([
            0xde, 0xad, 0xbe, 0xef, 0x00, 0x01,
        ]));
        let bytes = message.to_bytes();
        let reparsed = Message::from_bytes(&bytes).unwrap();
        assert_eq!(reparsed.to_bytes(), bytes);
    }
}
