//! Run this with administrator privileges where it is required
//! in order to bind the DHCP client socket to its port 68.

#[macro_use]
extern crate log;
extern crate env_logger;

extern crate dhcp_client;
extern crate dhcp_protocol;

use std::env;

use dhcp_client::Client;
use dhcp_protocol::v4::modifiers;

fn main() {
    std::env::set_var("RUST_LOG", "dora=info,dhcp_client=trace");
    env_logger::init();

    let iface_name = env::args().nth(1).unwrap_or_else(|| "eth0".to_owned());

    let client = Client::new();
    info!("Starting a DHCP exchange on {}", iface_name);
    match client.exchange(&iface_name, None, &[modifiers::with_netboot()]) {
        Ok(conversation) => {
            for message in &conversation {
                info!("{}", message);
            }
        }
        Err(error) => {
            error!(
                "The exchange failed after {} messages: {}",
                error.conversation.len(),
                error
            );
        }
    }
}
