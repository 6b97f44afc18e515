//! Constructors for the common client and server messages.

use std::net::Ipv4Addr;

use eui48::{EUI48LEN, MacAddress};
use rand;

use error::Error;

use super::{
    constants::*,
    modifiers::Modifier,
    options::{DhcpOption, MessageType, OptionCode},
    HardwareType, Message, OperationCode,
};

impl Message {
    /// Creates a zeroed BOOTREQUEST with a fresh random transaction
    /// identifier and an option list holding only `End`.
    ///
    /// The result is not a valid DHCP message yet: the caller chooses
    /// the message type and the hardware address.
    pub fn new() -> Self {
        Message {
            operation_code: OperationCode::BootRequest,
            hardware_type: HardwareType::Ethernet,
            hardware_address_length: EUI48LEN as u8,
            hop_count: 0,
            transaction_id: rand::random::<u32>(),
            seconds: 0,
            flags: 0,
            client_ip_address: Ipv4Addr::new(0, 0, 0, 0),
            your_ip_address: Ipv4Addr::new(0, 0, 0, 0),
            server_ip_address: Ipv4Addr::new(0, 0, 0, 0),
            gateway_ip_address: Ipv4Addr::new(0, 0, 0, 0),
            client_hardware_address: [0u8; SIZE_HARDWARE_ADDRESS],
            server_name: [0u8; SIZE_SERVER_NAME],
            boot_filename: [0u8; SIZE_BOOT_FILENAME],
            options: vec![DhcpOption::End],
        }
    }

    /// Creates a broadcast `DHCPDISCOVER` with the default parameter
    /// request list.
    pub fn new_discovery(client_hardware_address: MacAddress) -> Self {
        let mut message = Self::new();
        message.set_hardware_address_length(client_hardware_address.as_bytes().len() as u8);
        message.set_client_hardware_address(client_hardware_address.as_bytes());
        message.set_broadcast();
        message.add_option(DhcpOption::MessageType(MessageType::Discover));
        message.add_option(DhcpOption::ParameterRequestList(vec![
            OptionCode::SubnetMask,
            OptionCode::Router,
            OptionCode::DomainName,
            OptionCode::DomainNameServer,
        ]));
        message
    }

    /// Creates a unicast `DHCPINFORM` for a client that already has an
    /// address. The option list is left without `End`: the caller
    /// composes the rest of the list.
    pub fn new_inform(client_hardware_address: MacAddress, local_ip_address: Ipv4Addr) -> Self {
        let mut message = Self::new();
        message.set_hardware_address_length(client_hardware_address.as_bytes().len() as u8);
        message.set_client_hardware_address(client_hardware_address.as_bytes());
        message.client_ip_address = local_ip_address;
        message.options = vec![DhcpOption::MessageType(MessageType::Inform)];
        message
    }

    /// Creates a `DHCPREQUEST` in `SELECTING` state from an offer,
    /// applying the modifiers in order.
    ///
    /// # Errors
    /// `Error::MissingServerIdentifier` if the offer carries no Server
    /// Identifier option.
    pub fn new_request_from_offer(offer: &Message, modifiers: &[Modifier]) -> Result<Self, Error> {
        let mut message = Self::new();
        message.hardware_type = offer.hardware_type;
        message.set_hardware_address_length(offer.hardware_address_length);
        message.client_hardware_address = offer.client_hardware_address;
        message.transaction_id = offer.transaction_id;
        if offer.is_broadcast() {
            message.set_broadcast();
        } else {
            message.set_unicast();
        }

        let server_ip_address = match offer.get_one(OptionCode::ServerIdentifier) {
            Some(&DhcpOption::ServerIdentifier(address)) => address,
            _ => return Err(Error::MissingServerIdentifier),
        };
        message.server_ip_address = server_ip_address;

        message.add_option(DhcpOption::MessageType(MessageType::Request));
        message.add_option(DhcpOption::RequestedIpAddress(offer.your_ip_address));
        message.add_option(DhcpOption::ServerIdentifier(server_ip_address));

        for modifier in modifiers.iter() {
            modifier(&mut message);
        }
        Ok(message)
    }

    /// Creates a BOOTREPLY skeleton mirroring the request, applying the
    /// modifiers in order.
    pub fn new_reply_from_request(request: &Message, modifiers: &[Modifier]) -> Self {
        let mut message = Self::new();
        message.operation_code = OperationCode::BootReply;
        message.hardware_type = request.hardware_type;
        message.set_hardware_address_length(request.hardware_address_length);
        message.client_hardware_address = request.client_hardware_address;
        message.transaction_id = request.transaction_id;
        message.flags = request.flags;
        message.gateway_ip_address = request.gateway_ip_address;

        for modifier in modifiers.iter() {
            modifier(&mut message);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use eui48::MacAddress;

    use error::Error;

    use super::super::{
        options::{DhcpOption, MessageType, OptionCode},
        Message, OperationCode,
    };

    #[test]
    fn a_discovery_has_the_default_parameter_request_list() {
        let message =
            Message::new_discovery(MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));

        assert_eq!(message.operation_code, OperationCode::BootRequest);
        assert!(message.is_broadcast());
        assert_eq!(message.hardware_address_length, 6);
        assert_eq!(
            &message.client_hardware_address[..6],
            &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]
        );
        assert_eq!(message.message_type(), Some(MessageType::Discover));
        assert_eq!(
            message.get_one(OptionCode::ParameterRequestList),
            Some(&DhcpOption::ParameterRequestList(vec![
                OptionCode::SubnetMask,
                OptionCode::Router,
                OptionCode::DomainName,
                OptionCode::DomainNameServer,
            ]))
        );
        assert_eq!(message.options.last(), Some(&DhcpOption::End));
    }

    #[test]
    fn an_inform_is_unicast_and_has_no_end_option() {
        let local_ip_address = Ipv4Addr::new(192, 168, 0, 60);
        let message = Message::new_inform(
            MacAddress::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            local_ip_address,
        );

        assert!(!message.is_broadcast());
        assert_eq!(message.client_ip_address, local_ip_address);
        assert_eq!(
            message.options,
            vec![DhcpOption::MessageType(MessageType::Inform)]
        );
    }

    #[test]
    fn a_request_is_built_from_an_offer() {
        let server_ip_address = Ipv4Addr::new(192, 168, 0, 2);
        let mut offer = Message::new();
        offer.set_client_hardware_address(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        offer.your_ip_address = Ipv4Addr::new(192, 168, 0, 60);
        offer.set_broadcast();
        offer.add_option(DhcpOption::MessageType(MessageType::Offer));
        offer.add_option(DhcpOption::ServerIdentifier(server_ip_address));

        let request = Message::new_request_from_offer(&offer, &[]).unwrap();
        assert_eq!(request.transaction_id, offer.transaction_id);
        assert_eq!(
            request.client_hardware_address,
            offer.client_hardware_address
        );
        assert!(request.is_broadcast());
        assert_eq!(request.server_ip_address, server_ip_address);
        assert_eq!(request.message_type(), Some(MessageType::Request));
        assert_eq!(
            request.get_one(OptionCode::RequestedIpAddress),
            Some(&DhcpOption::RequestedIpAddress(offer.your_ip_address))
        );
        assert_eq!(
            request.get_one(OptionCode::ServerIdentifier),
            Some(&DhcpOption::ServerIdentifier(server_ip_address))
        );
        assert_eq!(request.options.last(), Some(&DhcpOption::End));
    }

    #[test]
    fn a_request_fails_without_a_server_identifier() {
        let mut offer = Message::new();
        offer.add_option(DhcpOption::MessageType(MessageType::Offer));

        assert_eq!(
            Message::new_request_from_offer(&offer, &[]),
            Err(Error::MissingServerIdentifier)
        );
    }

    #[test]
    fn a_reply_mirrors_the_request_header() {
        let mut request = Message::new();
        request.set_client_hardware_address(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        request.gateway_ip_address = Ipv4Addr::new(10, 0, 0, 1);
        request.flags = 0x8000;
        request.hop_count = 1;

        let reply = Message::new_reply_from_request(&request, &[]);
        assert_eq!(reply.operation_code, OperationCode::BootReply);
        assert_eq!(reply.transaction_id, request.transaction_id);
        assert_eq!(reply.flags, request.flags);
        assert_eq!(reply.gateway_ip_address, request.gateway_ip_address);
        assert_eq!(
            reply.client_hardware_address,
            request.client_hardware_address
        );
    }
}
