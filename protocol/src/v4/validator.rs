//! DHCP option list validation module.

use super::{options::OptionCode, Message};

impl Message {
    /// Sanity-checks the option list and reports problems through the
    /// log: a duplicate `End`, options after `End`, a missing `End`.
    ///
    /// Never fails and never changes the message. Broken lists are
    /// still serialized as they are.
    pub fn validate_options(&self) {
        let mut found_end = false;
        for option in &self.options {
            if found_end {
                match option.code() {
                    OptionCode::End => warn!("Found a duplicate End option"),
                    OptionCode::Pad => {}
                    code => warn!(
                        "Found option {} ({}) after the End option",
                        u8::from(code),
                        code
                    ),
                }
            }
            if option.code() == OptionCode::End {
                found_end = true;
            }
        }
        if !found_end {
            warn!("No End option found");
        }
    }
}
