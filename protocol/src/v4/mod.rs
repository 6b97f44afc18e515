//! The main DHCPv4 message module.

pub mod constants;
pub mod hardware_type;
pub mod modifiers;
pub mod operation_code;
pub mod options;

mod builder;
mod deserializer;
mod serializer;
mod validator;

use std::{fmt, net::Ipv4Addr};

pub use self::{
    hardware_type::HardwareType,
    operation_code::OperationCode,
    options::{DhcpOption, MessageType, OptionCode, UserClass},
};
use self::constants::*;

/// DHCP message.
///
/// The fixed-width header fields are arrays, so the 236-octet header
/// invariant holds by construction. The option list keeps its insertion
/// order; a valid outgoing message ends with the `End` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub operation_code: OperationCode,
    pub hardware_type: HardwareType,
    pub hardware_address_length: u8,
    pub hop_count: u8,
    pub transaction_id: u32,
    pub seconds: u16,
    pub flags: u16,
    pub client_ip_address: Ipv4Addr,
    pub your_ip_address: Ipv4Addr,
    pub server_ip_address: Ipv4Addr,
    pub gateway_ip_address: Ipv4Addr,
    pub client_hardware_address: [u8; SIZE_HARDWARE_ADDRESS],
    pub server_name: [u8; SIZE_SERVER_NAME],
    pub boot_filename: [u8; SIZE_BOOT_FILENAME],
    pub options: Vec<DhcpOption>,
}

impl Message {
    /// Whether the broadcast bit of the `flags` field is set.
    pub fn is_broadcast(&self) -> bool {
        self.flags & FLAG_BROADCAST == FLAG_BROADCAST
    }

    /// Sets the broadcast bit, leaving the reserved bits untouched.
    pub fn set_broadcast(&mut self) {
        self.flags |= FLAG_BROADCAST;
    }

    /// Clears the broadcast bit, leaving the reserved bits untouched.
    pub fn set_unicast(&mut self) {
        self.flags &= !FLAG_BROADCAST;
    }

    /// Renders the `flags` field, flagging reserved-bit violations.
    pub fn flags_to_string(&self) -> String {
        let mut flags = String::from(if self.is_broadcast() {
            "Broadcast"
        } else {
            "Unicast"
        });
        if self.flags & !FLAG_BROADCAST != 0 {
            flags.push_str(" (reserved bits not zeroed)");
        }
        flags
    }

    /// Sets the hardware address length, clamping it to the maximal
    /// 16 octets the header field can hold.
    pub fn set_hardware_address_length(&mut self, length: u8) {
        let mut length = length;
        if length as usize > SIZE_HARDWARE_ADDRESS {
            warn!(
                "Hardware address length {} is over {}, clamping",
                length, SIZE_HARDWARE_ADDRESS
            );
            length = SIZE_HARDWARE_ADDRESS as u8;
        }
        self.hardware_address_length = length;
    }

    /// Replaces the client hardware address, truncating over-long input
    /// to 16 octets and zero-padding the remainder of the field.
    pub fn set_client_hardware_address(&mut self, address: &[u8]) {
        let mut address = address;
        if address.len() > SIZE_HARDWARE_ADDRESS {
            warn!(
                "Hardware address is {} octets long, truncating to {}",
                address.len(),
                SIZE_HARDWARE_ADDRESS
            );
            address = &address[..SIZE_HARDWARE_ADDRESS];
        }
        self.client_hardware_address = [0u8; SIZE_HARDWARE_ADDRESS];
        self.client_hardware_address[..address.len()].copy_from_slice(address);
    }

    /// Renders the first `hardware_address_length` octets of the client
    /// hardware address colon-separated.
    pub fn client_hardware_address_to_string(&self) -> String {
        let length = (self.hardware_address_length as usize).min(SIZE_HARDWARE_ADDRESS);
        self.client_hardware_address[..length]
            .iter()
            .map(|octet| format!("{:02x}", octet))
            .collect::<Vec<String>>()
            .join(":")
    }

    /// Replaces the server host name, truncating it to the 64-octet
    /// field width and zero-padding the remainder.
    pub fn set_server_name(&mut self, server_name: &[u8]) {
        let length = server_name.len().min(SIZE_SERVER_NAME);
        self.server_name = [0u8; SIZE_SERVER_NAME];
        self.server_name[..length].copy_from_slice(&server_name[..length]);
    }

    /// The server host name with the trailing NUL octets trimmed.
    pub fn server_name_to_string(&self) -> String {
        trim_field(&self.server_name)
    }

    /// Replaces the boot file name, truncating it to the 128-octet
    /// field width and zero-padding the remainder.
    pub fn set_boot_filename(&mut self, boot_filename: &[u8]) {
        let length = boot_filename.len().min(SIZE_BOOT_FILENAME);
        self.boot_filename = [0u8; SIZE_BOOT_FILENAME];
        self.boot_filename[..length].copy_from_slice(&boot_filename[..length]);
    }

    /// The boot file name with the trailing NUL octets trimmed.
    pub fn boot_filename_to_string(&self) -> String {
        trim_field(&self.boot_filename)
    }

    /// All options with the given code, in insertion order.
    pub fn get(&self, code: OptionCode) -> Vec<&DhcpOption> {
        self.options
            .iter()
            .filter(|option| option.code() == code)
            .collect()
    }

    /// The first option with the given code.
    pub fn get_one(&self, code: OptionCode) -> Option<&DhcpOption> {
        self.options.iter().find(|option| option.code() == code)
    }

    /// The first option with the given code, mutably.
    pub fn get_one_mut(&mut self, code: OptionCode) -> Option<&mut DhcpOption> {
        self.options.iter_mut().find(|option| option.code() == code)
    }

    /// Replaces the option list.
    pub fn set_options(&mut self, options: Vec<DhcpOption>) {
        self.options = options;
    }

    /// Appends an option, keeping a trailing `End` option trailing.
    ///
    /// `End` options before the end of a malformed list are not handled.
    pub fn add_option(&mut self, option: DhcpOption) {
        if let Some(&DhcpOption::End) = self.options.last() {
            let last = self.options.len() - 1;
            self.options.insert(last, option);
        } else {
            self.options.push(option);
        }
    }

    /// The option list truncated at, and including, the first `End`.
    pub fn stripped_options(&self) -> &[DhcpOption] {
        match self
            .options
            .iter()
            .position(|option| option.code() == OptionCode::End)
        {
            Some(end) => &self.options[..=end],
            None => &self.options[..],
        }
    }

    /// The DHCP message type, when the option is present.
    pub fn message_type(&self) -> Option<MessageType> {
        match self.get_one(OptionCode::MessageType) {
            Some(&DhcpOption::MessageType(message_type)) => Some(message_type),
            _ => None,
        }
    }

    /// Whether the code is listed in any parameter request list option.
    pub fn is_option_requested(&self, requested: OptionCode) -> bool {
        self.get(OptionCode::ParameterRequestList)
            .iter()
            .any(|option| match option {
                DhcpOption::ParameterRequestList(codes) => codes.contains(&requested),
                _ => false,
            })
    }

    /// Whether an option with the given code is present.
    pub fn has_option(&self, code: OptionCode) -> bool {
        self.get_one(code).is_some()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{:32} | {}", "Operation code", self.operation_code)?;
        writeln!(f, "{:32} | {}", "Hardware type", self.hardware_type)?;
        writeln!(
            f,
            "{:32} | {}",
            "Hardware address length", self.hardware_address_length
        )?;
        writeln!(f, "{:32} | {}", "Hop count", self.hop_count)?;
        writeln!(f, "{:32} | {:#010x}", "Transaction ID", self.transaction_id)?;
        writeln!(f, "{:32} | {}", "Seconds", self.seconds)?;
        writeln!(f, "{:32} | {}", "Flags", self.flags_to_string())?;
        writeln!(f, "{:32} | {}", "Client IP address", self.client_ip_address)?;
        writeln!(f, "{:32} | {}", "Your IP address", self.your_ip_address)?;
        writeln!(f, "{:32} | {}", "Server IP address", self.server_ip_address)?;
        writeln!(
            f,
            "{:32} | {}",
            "Gateway IP address", self.gateway_ip_address
        )?;
        writeln!(
            f,
            "{:32} | {}",
            "Client hardware address",
            self.client_hardware_address_to_string()
        )?;
        writeln!(
            f,
            "{:32} | {}",
            "Server name",
            self.server_name_to_string()
        )?;
        writeln!(
            f,
            "{:32} | {}",
            "Boot filename",
            self.boot_filename_to_string()
        )?;

        writeln!(f, "Options:")?;
        for option in self.stripped_options() {
            writeln!(f, "    {}", option)?;
        }
        Ok(())
    }
}

fn trim_field(field: &[u8]) -> String {
    let mut last = field.len();
    while last > 0 && field[last - 1] == 0 {
        last -= 1;
    }
    String::from_utf8_lossy(&field[..last]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{DhcpOption, Message, MessageType, OptionCode};

    #[test]
    fn add_option_keeps_the_end_option_trailing() {
        let mut message = Message::new();
        assert_eq!(message.options, vec![DhcpOption::End]);

        message.add_option(DhcpOption::MessageType(MessageType::Discover));
        assert_eq!(
            message.options,
            vec![
                DhcpOption::MessageType(MessageType::Discover),
                DhcpOption::End,
            ]
        );
    }

    #[test]
    fn add_option_appends_when_there_is_no_end() {
        let mut message = Message::new();
        message.options.clear();
        message.add_option(DhcpOption::MessageType(MessageType::Discover));
        assert_eq!(
            message.options,
            vec![DhcpOption::MessageType(MessageType::Discover)]
        );
    }

    #[test]
    fn stripped_options_cut_after_the_first_end() {
        let mut message = Message::new();
        message.set_options(vec![
            DhcpOption::MessageType(MessageType::Offer),
            DhcpOption::End,
            DhcpOption::Pad,
            DhcpOption::Pad,
        ]);
        assert_eq!(
            message.stripped_options(),
            &[DhcpOption::MessageType(MessageType::Offer), DhcpOption::End][..]
        );
    }

    #[test]
    fn get_returns_duplicates_in_insertion_order() {
        let mut message = Message::new();
        message.set_options(vec![
            DhcpOption::MessageType(MessageType::Offer),
            DhcpOption::MessageType(MessageType::Ack),
        ]);
        let found = message.get(OptionCode::MessageType);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], &DhcpOption::MessageType(MessageType::Offer));
        assert_eq!(
            message.get_one(OptionCode::MessageType),
            Some(&DhcpOption::MessageType(MessageType::Offer))
        );
        assert_eq!(message.message_type(), Some(MessageType::Offer));
    }

    #[test]
    fn hardware_address_setters_clamp_and_pad() {
        let mut message = Message::new();
        message.set_hardware_address_length(32);
        assert_eq!(message.hardware_address_length, 16);

        message.set_client_hardware_address(&[0xffu8; 20]);
        assert_eq!(message.client_hardware_address, [0xffu8; 16]);

        message.set_client_hardware_address(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        message.set_hardware_address_length(6);
        assert_eq!(&message.client_hardware_address[..6], &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert_eq!(&message.client_hardware_address[6..], &[0u8; 10][..]);
        assert_eq!(
            message.client_hardware_address_to_string(),
            "00:11:22:33:44:55"
        );
    }

    #[test]
    fn fixed_name_fields_trim_trailing_nuls() {
        let mut message = Message::new();
        message.set_server_name(b"boot.example.org");
        assert_eq!(message.server_name_to_string(), "boot.example.org");
        message.set_boot_filename(b"pxelinux.0");
        assert_eq!(message.boot_filename_to_string(), "pxelinux.0");
    }

    #[test]
    fn is_option_requested_scans_the_parameter_request_list() {
        let mut message = Message::new();
        message.add_option(DhcpOption::ParameterRequestList(vec![
            OptionCode::SubnetMask,
            OptionCode::Router,
        ]));
        assert!(message.is_option_requested(OptionCode::Router));
        assert!(!message.is_option_requested(OptionCode::DomainName));
    }
}
