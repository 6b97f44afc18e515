//! The DORA exchange driver.

use std::{
    io,
    net::UdpSocket,
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use dhcp_protocol::v4::{
    modifiers::Modifier, Message, MessageType, OperationCode,
};

use builder;
use error::{Error, ErrorKind};
use socket::{self, BroadcastSocket};

/// The maximal accepted UDP datagram size.
const SIZE_BUFFER_RECEIVE: usize = 8192;

const DEFAULT_READ_TIMEOUT_SECS: u64 = 3;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 3;

/// Returns the partial conversation alongside the failure.
macro_rules! try_exchange (
    ($conversation:expr, $result:expr) => (
        match $result {
            Ok(value) => value,
            Err(kind) => return Err(Error::new($conversation, kind)),
        }
    );
);

/// The object performing DHCP exchanges.
///
/// The two timeouts are the only knobs: `read_timeout` bounds the wait
/// for each reply, `write_timeout` bounds each send.
pub struct Client {
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl Client {
    /// Creates a client with both timeouts at their 3-second defaults.
    pub fn new() -> Self {
        Client {
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
        }
    }

    /// Runs a full Discover/Offer/Request/Acknowledge transaction on
    /// the named interface. Does not retry on failures.
    ///
    /// When no Discover is supplied, one is built from the interface's
    /// hardware address. The modifiers are applied left to right, both
    /// to the Discover and to the Request built from the Offer.
    ///
    /// # Errors
    /// Every failure carries the conversation prefix collected so far,
    /// in `[Discover, Offer, Request, Ack]` order.
    pub fn exchange(
        &self,
        iface_name: &str,
        discover: Option<Message>,
        modifiers: &[Modifier],
    ) -> Result<Vec<Message>, Error> {
        let mut conversation: Vec<Message> = Vec::with_capacity(4);

        let send_socket = try_exchange!(
            conversation,
            BroadcastSocket::new(iface_name, self.write_timeout).map_err(ErrorKind::Socket)
        );
        let recv_socket = try_exchange!(
            conversation,
            socket::listening_socket(iface_name).map_err(ErrorKind::Socket)
        );

        let mut discover = match discover {
            Some(message) => message,
            None => try_exchange!(
                conversation,
                builder::new_discovery_for_interface(iface_name).map_err(ErrorKind::Socket)
            ),
        };
        for modifier in modifiers.iter() {
            modifier(&mut discover);
        }
        trace!("DHCPDISCOVER on {}:\n{}", iface_name, discover);
        conversation.push(discover);

        let offer = try_exchange!(
            conversation,
            self.broadcast_send_receive(
                &send_socket,
                &recv_socket,
                &conversation[0],
                Some(MessageType::Offer),
            )
        );
        info!("DHCPOFFER from {}", offer.server_ip_address);
        conversation.push(offer);

        let request = try_exchange!(
            conversation,
            Message::new_request_from_offer(&conversation[1], modifiers)
                .map_err(ErrorKind::Construction)
        );
        trace!("DHCPREQUEST on {}:\n{}", iface_name, request);
        conversation.push(request);

        let ack = try_exchange!(
            conversation,
            self.broadcast_send_receive(
                &send_socket,
                &recv_socket,
                &conversation[2],
                Some(MessageType::Ack),
            )
        );
        info!("DHCPACK: {} is ours", ack.your_ip_address);
        conversation.push(ack);

        Ok(conversation)
    }

    /// Broadcasts the message and waits for the intended reply.
    ///
    /// A background thread owns the receive loop; the single-slot
    /// channel delivers either the reply or the receive failure, and
    /// `recv_timeout` bounds the whole wait from above.
    fn broadcast_send_receive(
        &self,
        send_socket: &BroadcastSocket,
        recv_socket: &UdpSocket,
        message: &Message,
        expected: Option<MessageType>,
    ) -> Result<Message, ErrorKind> {
        let packet = socket::raw_broadcast_packet(&message.to_bytes());

        let socket = recv_socket.try_clone().map_err(ErrorKind::Socket)?;
        let transaction_id = message.transaction_id;
        let read_timeout = self.read_timeout;
        let (tx, rx) = mpsc::sync_channel::<Result<Message, ErrorKind>>(1);
        thread::spawn(move || {
            let _ = tx.send(receive_reply(&socket, transaction_id, expected, read_timeout));
        });

        send_socket.send(&packet).map_err(ErrorKind::Socket)?;

        match rx.recv_timeout(self.read_timeout) {
            Ok(result) => result,
            Err(_) => Err(ErrorKind::Timeout),
        }
    }
}

/// Loops over incoming datagrams until the intended reply arrives or
/// the deadline expires.
///
/// The deadline is armed once, so a stream of unrelated datagrams
/// cannot extend the wait.
fn receive_reply(
    socket: &UdpSocket,
    transaction_id: u32,
    expected: Option<MessageType>,
    read_timeout: Duration,
) -> Result<Message, ErrorKind> {
    let deadline = Instant::now() + read_timeout;
    let mut buffer = vec![0u8; SIZE_BUFFER_RECEIVE];
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Err(ErrorKind::Timeout);
        }
        socket
            .set_read_timeout(Some(deadline - now))
            .map_err(ErrorKind::Socket)?;

        let (amount, source) = match socket.recv_from(&mut buffer) {
            Ok(received) => received,
            Err(ref error)
                if error.kind() == io::ErrorKind::WouldBlock
                    || error.kind() == io::ErrorKind::TimedOut =>
            {
                return Err(ErrorKind::Timeout)
            }
            Err(error) => return Err(ErrorKind::Socket(error)),
        };

        let response = Message::from_bytes(&buffer[..amount]).map_err(ErrorKind::Protocol)?;
        if !is_intended_reply(&response, transaction_id, expected) {
            trace!("Dropping an unrelated datagram from {}", source);
            continue;
        }
        debug!("Accepted a reply from {}:\n{}", source, response);
        return Ok(response);
    }
}

/// The correlation rule: the transaction identifier and the reply
/// opcode must match, and so must the message type when one is
/// expected.
fn is_intended_reply(
    response: &Message,
    transaction_id: u32,
    expected: Option<MessageType>,
) -> bool {
    if response.transaction_id != transaction_id {
        return false;
    }
    if response.operation_code != OperationCode::BootReply {
        return false;
    }
    match expected {
        None => true,
        Some(expected) => response.message_type() == Some(expected),
    }
}
