//! Pure message transforms, composed by left-to-right application.

use std::net::Ipv4Addr;

use super::{
    options::{DhcpOption, OptionCode, UserClass},
    Message,
};

/// A transform over a message under construction.
pub type Modifier = Box<dyn Fn(&mut Message) + Send + Sync>;

/// Appends a user class option with the chosen wire encoding.
pub fn with_user_class(user_class: &[u8], rfc3004: bool) -> Modifier {
    let user_class = user_class.to_vec();
    Box::new(move |message| {
        message.add_option(DhcpOption::UserClass(UserClass {
            user_classes: vec![user_class.clone()],
            rfc3004,
        }));
    })
}

/// Makes sure the parameter request list asks for the TFTP server name
/// and the boot file name, each at most once.
pub fn with_netboot() -> Modifier {
    Box::new(|message| {
        let mut found = false;
        if let Some(&mut DhcpOption::ParameterRequestList(ref mut requested)) =
            message.get_one_mut(OptionCode::ParameterRequestList)
        {
            if !requested.contains(&OptionCode::TftpServerName) {
                requested.push(OptionCode::TftpServerName);
            }
            if !requested.contains(&OptionCode::BootfileName) {
                requested.push(OptionCode::BootfileName);
            }
            found = true;
        }
        if !found {
            message.add_option(DhcpOption::ParameterRequestList(vec![
                OptionCode::TftpServerName,
                OptionCode::BootfileName,
            ]));
        }
    })
}

/// Appends codes to the parameter request list, creating the list when
/// it is absent. Duplicates are not filtered.
pub fn with_requested_options(option_codes: &[OptionCode]) -> Modifier {
    let option_codes = option_codes.to_vec();
    Box::new(move |message| {
        let mut appended = false;
        if let Some(&mut DhcpOption::ParameterRequestList(ref mut requested)) =
            message.get_one_mut(OptionCode::ParameterRequestList)
        {
            requested.extend_from_slice(&option_codes);
            appended = true;
        }
        if !appended {
            message.add_option(DhcpOption::ParameterRequestList(option_codes.clone()));
        }
    })
}

/// Marks the message as relayed by the given relay agent.
pub fn with_relay(relay_ip_address: Ipv4Addr) -> Modifier {
    Box::new(move |message| {
        message.set_unicast();
        message.gateway_ip_address = relay_ip_address;
        message.hop_count = 1;
    })
}
