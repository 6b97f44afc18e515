//! DHCP message deserialization module.

use std::{io, mem, net::Ipv4Addr};

use bytes::Buf;

use super::{constants::*, options, Message};

/// Checks if there is enough space in buffer to get a value.
macro_rules! check_remaining(
    ($cursor:expr, $length:expr) => (
        if $cursor.remaining() < $length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Buffer is too small or packet has invalid length octets",
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

impl Message {
    /// DHCP message deserialization.
    ///
    /// # Errors
    /// `io::Error` if the packet is shorter than the fixed header, the
    /// magic cookie is wrong or missing, or an option is malformed.
    pub fn from_bytes(src: &[u8]) -> io::Result<Self> {
        let mut cursor = io::Cursor::new(src);
        check_remaining!(cursor, SIZE_HEADER);

        let mut message = Message {
            operation_code: cursor.get_u8().into(),
            hardware_type: cursor.get_u8().into(),
            hardware_address_length: cursor.get_u8(),
            hop_count: cursor.get_u8(),
            transaction_id: cursor.get_u32_be(),
            seconds: cursor.get_u16_be(),
            flags: cursor.get_u16_be(),
            client_ip_address: Ipv4Addr::from(cursor.get_u32_be()),
            your_ip_address: Ipv4Addr::from(cursor.get_u32_be()),
            server_ip_address: Ipv4Addr::from(cursor.get_u32_be()),
            gateway_ip_address: Ipv4Addr::from(cursor.get_u32_be()),
            client_hardware_address: {
                let mut field = [0u8; SIZE_HARDWARE_ADDRESS];
                field.copy_from_slice(&src[distance!(cursor, SIZE_HARDWARE_ADDRESS)]);
                cursor.advance(SIZE_HARDWARE_ADDRESS);
                field
            },
            server_name: {
                let mut field = [0u8; SIZE_SERVER_NAME];
                field.copy_from_slice(&src[distance!(cursor, SIZE_SERVER_NAME)]);
                cursor.advance(SIZE_SERVER_NAME);
                field
            },
            boot_filename: {
                let mut field = [0u8; SIZE_BOOT_FILENAME];
                field.copy_from_slice(&src[distance!(cursor, SIZE_BOOT_FILENAME)]);
                cursor.advance(SIZE_BOOT_FILENAME);
                field
            },
            options: Vec::new(),
        };

        check_remaining!(cursor, mem::size_of::<u32>());
        if cursor.get_u32_be() != MAGIC_COOKIE {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "MAGIC_COOKIE"));
        }

        message.options = options::options_from_bytes(&src[cursor.position() as usize..])?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{constants::SIZE_HEADER, Message};

    #[test]
    fn fails_on_a_packet_shorter_than_the_fixed_header() {
        let src = vec![0u8; SIZE_HEADER - 1];
        assert!(Message::from_bytes(&src).is_err());
    }

    #[test]
    fn fails_on_a_missing_magic_cookie() {
        let src = vec![0u8; SIZE_HEADER];
        assert!(Message::from_bytes(&src).is_err());
    }

    #[test]
    fn fails_on_a_wrong_magic_cookie() {
        let mut src = vec![0u8; SIZE_HEADER];
        src.extend_from_slice(&[0x63, 0x82, 0x53, 0x64]);
        assert!(Message::from_bytes(&src).is_err());
    }

    #[test]
    fn fails_on_a_malformed_option() {
        let mut src = vec![0u8; SIZE_HEADER];
        src.extend_from_slice(&[0x63, 0x82, 0x53, 0x63]);
        src.extend_from_slice(&[53, 200, 1]); // the length octet overruns
        assert!(Message::from_bytes(&src).is_err());
    }
}
