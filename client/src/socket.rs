//! Socket plumbing for the exchange: the raw broadcast sender, the UDP
//! listener and the IPv4+UDP wrapping of outgoing payloads.

use std::{
    io, mem,
    net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket},
    os::unix::io::AsRawFd,
    time::Duration,
};

use bytes::BufMut;
use libc;
use net2::UdpBuilder;

use dhcp_protocol::v4::constants::{DHCP_PORT_CLIENT, DHCP_PORT_SERVER};

use iface;

/// The IPv4 header size of outgoing raw packets.
const SIZE_HEADER_IP: usize = 20;

/// The UDP header size of outgoing raw packets.
const SIZE_HEADER_UDP: usize = 8;

/// The byte offset of the checksum within the IPv4 header.
const OFFSET_IP_CHECKSUM: usize = 10;

const DEFAULT_IP_TTL: u8 = 64;

/// A raw `IPPROTO_RAW` socket owning its descriptor.
///
/// The socket can broadcast self-assembled IP packets from an interface
/// that has no address configured yet.
pub struct BroadcastSocket {
    fd: libc::c_int,
}

impl BroadcastSocket {
    /// Opens the raw socket with `SO_REUSEADDR`, `IP_HDRINCL` and
    /// `SO_BROADCAST` set and binds it to the named interface.
    pub fn new(iface_name: &str, write_timeout: Duration) -> io::Result<Self> {
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_RAW, libc::IPPROTO_RAW) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        // the descriptor is owned from here on, so early errors close it
        let socket = BroadcastSocket { fd };
        socket.setsockopt_int(libc::SOL_SOCKET, libc::SO_REUSEADDR, 1)?;
        socket.setsockopt_int(libc::IPPROTO_IP, libc::IP_HDRINCL, 1)?;
        socket.setsockopt_int(libc::SOL_SOCKET, libc::SO_BROADCAST, 1)?;
        socket.set_send_timeout(write_timeout)?;
        iface::bind_to_device(socket.fd, iface_name)?;
        Ok(socket)
    }

    /// Broadcasts one prepared raw packet.
    pub fn send(&self, packet: &[u8]) -> io::Result<()> {
        let mut destination: libc::sockaddr_in = unsafe { mem::zeroed() };
        destination.sin_family = libc::AF_INET as libc::sa_family_t;
        destination.sin_port = u16::to_be(DHCP_PORT_SERVER);
        destination.sin_addr = libc::in_addr {
            s_addr: u32::to_be(u32::from(Ipv4Addr::new(255, 255, 255, 255))),
        };

        let amount = unsafe {
            libc::sendto(
                self.fd,
                packet.as_ptr() as *const libc::c_void,
                packet.len(),
                0,
                &destination as *const libc::sockaddr_in as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
            )
        };
        if amount < 0 {
            return Err(io::Error::last_os_error());
        }
        if amount as usize != packet.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "Failed to write the entire datagram",
            ));
        }
        Ok(())
    }

    fn setsockopt_int(
        &self,
        level: libc::c_int,
        name: libc::c_int,
        value: libc::c_int,
    ) -> io::Result<()> {
        let result = unsafe {
            libc::setsockopt(
                self.fd,
                level,
                name,
                &value as *const libc::c_int as *const libc::c_void,
                mem::size_of::<libc::c_int>() as libc::socklen_t,
            )
        };
        if result < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn set_send_timeout(&self, timeout: Duration) -> io::Result<()> {
        let timeout = libc::timeval {
            tv_sec: timeout.as_secs() as libc::time_t,
            tv_usec: timeout.subsec_micros() as libc::suseconds_t,
        };
        let result = unsafe {
            libc::setsockopt(
                self.fd,
                libc::SOL_SOCKET,
                libc::SO_SNDTIMEO,
                &timeout as *const libc::timeval as *const libc::c_void,
                mem::size_of::<libc::timeval>() as libc::socklen_t,
            )
        };
        if result < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

impl Drop for BroadcastSocket {
    fn drop(&mut self) {
        unsafe { libc::close(self.fd) };
    }
}

/// Opens the client-port UDP socket used to receive replies, bound to
/// the named interface.
pub fn listening_socket(iface_name: &str) -> io::Result<UdpSocket> {
    let builder = UdpBuilder::new_v4()?;
    builder.reuse_address(true)?;
    let socket = builder.bind(SocketAddr::new(
        IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
        DHCP_PORT_CLIENT,
    ))?;
    socket.set_broadcast(true)?;
    iface::bind_to_device(socket.as_raw_fd(), iface_name)?;
    Ok(socket)
}

/// Wraps a serialized DHCP message into IPv4 and UDP headers suitable
/// for an `IP_HDRINCL` raw socket.
///
/// The UDP checksum is left zero to be offloaded; the IP header
/// checksum is computed here.
pub fn raw_broadcast_packet(payload: &[u8]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(SIZE_HEADER_IP + SIZE_HEADER_UDP + payload.len());

    // IPv4 header: version 4, IHL 5, no fragmentation.
    packet.put_u8(0x45);
    packet.put_u8(0x00);
    packet.put_u16_be((SIZE_HEADER_IP + SIZE_HEADER_UDP + payload.len()) as u16);
    packet.put_u16_be(0); // identification
    packet.put_u16_be(0); // flags and fragment offset
    packet.put_u8(DEFAULT_IP_TTL);
    packet.put_u8(libc::IPPROTO_UDP as u8);
    packet.put_u16_be(0); // checksum placeholder
    packet.put_u32_be(u32::from(Ipv4Addr::new(0, 0, 0, 0)));
    packet.put_u32_be(u32::from(Ipv4Addr::new(255, 255, 255, 255)));
    let checksum = internet_checksum(&packet[..SIZE_HEADER_IP]);
    packet[OFFSET_IP_CHECKSUM] = (checksum >> 8) as u8;
    packet[OFFSET_IP_CHECKSUM + 1] = (checksum & 0x00ff) as u8;

    packet.put_u16_be(DHCP_PORT_CLIENT);
    packet.put_u16_be(DHCP_PORT_SERVER);
    packet.put_u16_be((SIZE_HEADER_UDP + payload.len()) as u16);
    packet.put_u16_be(0); // checksum is offloaded

    packet.put_slice(payload);
    packet
}

/// RFC 1071 checksum.
fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum = 0u32;
    for chunk in data.chunks(2) {
        let word = if chunk.len() == 2 {
            (u32::from(chunk[0]) << 8) | u32::from(chunk[1])
        } else {
            u32::from(chunk[0]) << 8
        };
        sum += word;
    }
    while sum >> 16 > 0 {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    !sum as u16
}

#[cfg(test)]
mod tests {
    use super::{internet_checksum, raw_broadcast_packet, SIZE_HEADER_IP, SIZE_HEADER_UDP};

    #[test]
    fn the_headers_wrap_the_payload() {
        let payload = [0xaau8; 300];
        let packet = raw_broadcast_packet(&payload);

        assert_eq!(packet.len(), SIZE_HEADER_IP + SIZE_HEADER_UDP + payload.len());
        // version and IHL
        assert_eq!(packet[0], 0x45);
        // total length
        assert_eq!(&packet[2..4], &[0x01, 0x48]);
        // TTL and protocol
        assert_eq!(&packet[8..10], &[64, 17]);
        // source and destination
        assert_eq!(&packet[12..16], &[0, 0, 0, 0]);
        assert_eq!(&packet[16..20], &[255, 255, 255, 255]);
        // UDP ports
        assert_eq!(&packet[20..24], &[0, 68, 0, 67]);
        // UDP length and the offloaded checksum
        assert_eq!(&packet[24..26], &[0x01, 0x34]);
        assert_eq!(&packet[26..28], &[0, 0]);
        assert_eq!(&packet[28..], &payload[..]);
    }

    #[test]
    fn the_ip_header_checksum_verifies() {
        let packet = raw_broadcast_packet(&[0u8; 240]);
        assert_eq!(internet_checksum(&packet[..SIZE_HEADER_IP]), 0);
    }
}
