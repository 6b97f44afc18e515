//! The main DHCPv6 message module.

pub mod message_type;
pub mod options;

use std::{fmt, io, mem, net::Ipv6Addr};

use bytes::{Buf, BufMut};

pub use self::{
    message_type::MessageType,
    options::{DhcpOption, OptIaPrefix, OptionCode, StatusCode},
};

/// The port the server and the relay agents listen on.
pub const DHCPV6_PORT_SERVER: u16 = 547;

/// The port the client listens on.
pub const DHCPV6_PORT_CLIENT: u16 = 546;

/// `msg-type` plus the 3-octet `transaction-id`.
pub const SIZE_HEADER_MESSAGE: usize = 4;

/// `msg-type`, `hop-count` and the link and peer addresses.
pub const SIZE_HEADER_RELAY: usize = 34;

/// Only the low 24 bits of a transaction identifier reach the wire.
pub const MASK_TRANSACTION_ID: u32 = 0x00ff_ffff;

/// Checks if there is enough space in buffer to get a value.
macro_rules! check_remaining(
    ($cursor:expr, $length:expr) => (
        if $cursor.remaining() < $length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Buffer is too small for the DHCPv6 header",
            ));
        }
    );
);

/// A client or server DHCPv6 message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message_type: MessageType,
    /// Only the low 24 bits are used.
    pub transaction_id: u32,
    pub options: Vec<DhcpOption>,
}

/// A relay-forward or relay-reply wrapper around a client or server
/// message carried in its Relay Message option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayMessage {
    pub message_type: MessageType,
    pub hop_count: u8,
    pub link_address: Ipv6Addr,
    pub peer_address: Ipv6Addr,
    pub options: Vec<DhcpOption>,
}

/// A transmission unit: either a plain message or a relay wrapper.
///
/// This is the recursion point for relay chains, since a relay wrapper
/// may itself carry another relay wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Message(Message),
    Relay(RelayMessage),
}

impl Packet {
    /// Parses a packet, dispatching on the message type octet.
    pub fn from_bytes(src: &[u8]) -> io::Result<Self> {
        if src.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Empty DHCPv6 packet",
            ));
        }
        match MessageType::from(src[0]) {
            MessageType::RelayForw | MessageType::RelayRepl => {
                RelayMessage::from_bytes(src).map(Packet::Relay)
            }
            _ => Message::from_bytes(src).map(Packet::Message),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Packet::Message(message) => message.to_bytes(),
            Packet::Relay(relay) => relay.to_bytes(),
        }
    }
}

impl Message {
    /// DHCPv6 message deserialization.
    ///
    /// # Errors
    /// `io::Error` if the packet is shorter than the fixed header or an
    /// option is malformed.
    pub fn from_bytes(src: &[u8]) -> io::Result<Self> {
        let mut cursor = io::Cursor::new(src);
        check_remaining!(cursor, SIZE_HEADER_MESSAGE);

        let message_type = MessageType::from(cursor.get_u8());
        let transaction_id = cursor.get_uint_be(3) as u32;
        let options = options::options_from_bytes(&src[SIZE_HEADER_MESSAGE..])?;

        Ok(Message {
            message_type,
            transaction_id,
            options,
        })
    }

    /// DHCPv6 message serialization.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut dst = Vec::new();
        dst.put_u8(self.message_type.into());
        dst.put_uint_be(u64::from(self.transaction_id & MASK_TRANSACTION_ID), 3);
        dst.put_slice(&options::options_to_bytes(&self.options));
        dst
    }
}

impl RelayMessage {
    /// Relay message deserialization.
    ///
    /// # Errors
    /// `io::Error` if the packet is shorter than the relay header or an
    /// option is malformed.
    pub fn from_bytes(src: &[u8]) -> io::Result<Self> {
        let mut cursor = io::Cursor::new(src);
        check_remaining!(cursor, SIZE_HEADER_RELAY);

        let message_type = MessageType::from(cursor.get_u8());
        let hop_count = cursor.get_u8();
        let link_address = ipv6_from_cursor(&mut cursor, src);
        let peer_address = ipv6_from_cursor(&mut cursor, src);
        let options = options::options_from_bytes(&src[SIZE_HEADER_RELAY..])?;

        Ok(RelayMessage {
            message_type,
            hop_count,
            link_address,
            peer_address,
            options,
        })
    }

    /// Relay message serialization.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut dst = Vec::new();
        dst.put_u8(self.message_type.into());
        dst.put_u8(self.hop_count);
        dst.put_slice(&self.link_address.octets());
        dst.put_slice(&self.peer_address.octets());
        dst.put_slice(&options::options_to_bytes(&self.options));
        dst
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} (transaction ID {:#08x})",
            self.message_type, self.transaction_id
        )?;
        for option in &self.options {
            writeln!(f, "    {}", option)?;
        }
        Ok(())
    }
}

fn ipv6_from_cursor(cursor: &mut io::Cursor<&[u8]>, src: &[u8]) -> Ipv6Addr {
    let position = cursor.position() as usize;
    let mut octets = [0u8; mem::size_of::<u128>()];
    let len = octets.len();
    octets.copy_from_slice(&src[position..position + len]);
    cursor.advance(len);
    Ipv6Addr::from(octets)
}
