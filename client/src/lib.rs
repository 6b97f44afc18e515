//! A DHCP client performing the four-way DORA handshake over a raw
//! broadcast socket bound to a chosen network interface.

mod builder;
mod client;
mod error;
mod socket;

pub mod iface;

extern crate bytes;
extern crate eui48;
#[macro_use] extern crate failure;
extern crate ifcontrol;
extern crate libc;
#[macro_use] extern crate log;
extern crate net2;
extern crate nix;

extern crate dhcp_protocol;

pub use self::{
    builder::{new_discovery_for_interface, new_inform_for_interface},
    client::Client,
    error::{Error, ErrorKind},
};
