//! Error module.

/// Returned by message constructors.
#[derive(Fail, Debug, PartialEq)]
pub enum Error {
    #[fail(display = "Missing Server Identifier option in the DHCP Offer")]
    MissingServerIdentifier,
}
