//! Network interface helpers.

use std::{ffi::CString, io, net::{Ipv4Addr, SocketAddr}};

use eui48::MacAddress;
use ifcontrol::{self, Iface};
use libc;
use nix::{ifaddrs, sys::socket::SockAddr};

/// Looks up the hardware address of a named interface, checking that
/// the interface exists and is up.
pub fn hardware_address(iface_name: &str) -> io::Result<MacAddress> {
    let iface = Iface::find_by_name(iface_name).map_err(|error| match error {
        ifcontrol::IfError::NotFound => {
            io::Error::new(io::ErrorKind::Other, "Interface not found")
        }
        ifcontrol::IfError::Io(error) => error,
        error => io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to find the interface: {:?}", error),
        ),
    })?;
    match iface.is_up() {
        Err(error) => {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to check the interface state: {:?}", error),
            ))
        }
        Ok(false) => {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "The interface is not UP",
            ))
        }
        _ => {}
    }
    iface.hw_addr().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Other,
            "No hardware address on the interface",
        )
    })
}

/// Collects the currently configured non-loopback IPv4 addresses of a
/// named interface.
pub fn ipv4_addresses(iface_name: &str) -> io::Result<Vec<Ipv4Addr>> {
    let ifaddrs = ifaddrs::getifaddrs().map_err(|error| {
        io::Error::new(io::ErrorKind::Other, format!("getifaddrs: {}", error))
    })?;

    let mut addresses = Vec::new();
    for ifaddr in ifaddrs {
        if ifaddr.interface_name != iface_name {
            continue;
        }
        if let Some(SockAddr::Inet(inet)) = ifaddr.address {
            if let SocketAddr::V4(address) = inet.to_std() {
                if !address.ip().is_loopback() {
                    addresses.push(*address.ip());
                }
            }
        }
    }
    Ok(addresses)
}

/// Binds a socket to the named interface.
pub fn bind_to_device(fd: libc::c_int, iface_name: &str) -> io::Result<()> {
    let iface_name = CString::new(iface_name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Interface name contains a NUL octet",
        )
    })?;
    let result = unsafe {
        libc::setsockopt(
            fd,
            libc::SOL_SOCKET,
            libc::SO_BINDTODEVICE,
            iface_name.as_ptr() as *const libc::c_void,
            iface_name.as_bytes_with_nul().len() as libc::socklen_t,
        )
    };
    if result < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
