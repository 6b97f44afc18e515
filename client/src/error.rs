//! Error module.

use std::io;

use dhcp_protocol;
use dhcp_protocol::v4::Message;

/// What went wrong during an exchange.
#[derive(Fail, Debug)]
pub enum ErrorKind {
    #[fail(display = "Malformed packet: {}", _0)]
    Protocol(#[cause] io::Error),
    #[fail(display = "{}", _0)]
    Construction(#[cause] dhcp_protocol::Error),
    #[fail(display = "Socket error: {}", _0)]
    Socket(#[cause] io::Error),
    #[fail(display = "Timed out while listening for replies")]
    Timeout,
}

/// An exchange failure carrying the conversation prefix collected
/// before the failure.
#[derive(Fail, Debug)]
#[fail(display = "{}", kind)]
pub struct Error {
    /// The messages sent and received so far, in
    /// Discover/Offer/Request/Ack order.
    pub conversation: Vec<Message>,
    #[cause]
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(conversation: Vec<Message>, kind: ErrorKind) -> Self {
        Error { conversation, kind }
    }
}
