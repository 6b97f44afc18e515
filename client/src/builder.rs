//! Interface-bound message constructors.

use std::io;

use dhcp_protocol::v4::Message;

use iface;

/// Builds a Discover for the hardware address of the named interface.
pub fn new_discovery_for_interface(iface_name: &str) -> io::Result<Message> {
    let hardware_address = iface::hardware_address(iface_name)?;
    Ok(Message::new_discovery(hardware_address))
}

/// Builds an Inform for the named interface, using its first configured
/// IPv4 address as the client address.
pub fn new_inform_for_interface(iface_name: &str, needs_broadcast: bool) -> io::Result<Message> {
    let hardware_address = iface::hardware_address(iface_name)?;
    let local_ip_address = iface::ipv4_addresses(iface_name)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("No configured IPv4 addresses on {}", iface_name),
            )
        })?;

    let mut message = Message::new_inform(hardware_address, local_ip_address);
    if needs_broadcast {
        message.set_broadcast();
    } else {
        message.set_unicast();
    }
    Ok(message)
}
