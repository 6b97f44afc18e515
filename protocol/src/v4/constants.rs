//! DHCP message constants.

/// The fixed BOOTP header size in bytes.
pub const SIZE_HEADER: usize = 236;

/// `client_hardware_address` size in bytes.
pub const SIZE_HARDWARE_ADDRESS: usize = 16;

/// `server_name` size in bytes.
pub const SIZE_SERVER_NAME: usize = 64;

/// `boot_filename` size in bytes.
pub const SIZE_BOOT_FILENAME: usize = 128;

/// Only the highest bit of the `flags` field is used in DHCP.
pub const FLAG_BROADCAST: u16 = 0b1000000000000000;

/// The magic number before the DHCP options.
pub const MAGIC_COOKIE: u32 = 0x63825363;

/// The minimal message size the client MUST be able to accept.
pub const SIZE_MESSAGE_MINIMAL: usize = 576;

/// The port the server listens on.
pub const DHCP_PORT_SERVER: u16 = 67;

/// The port the client listens on.
pub const DHCP_PORT_CLIENT: u16 = 68;
