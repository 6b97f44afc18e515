//! The DHCP protocol implementation: message data models, wire codecs
//! and construction helpers for DHCPv4 and DHCPv6.

pub mod v4;
pub mod v6;

mod error;

extern crate bytes;
extern crate eui48;
#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate rand;

pub use error::Error;
