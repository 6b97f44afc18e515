//! The user class option value module.
//!
//! [RFC 3004](https://tools.ietf.org/html/rfc3004)

use std::{fmt, io};

/// One or more user class identifiers.
///
/// The wire encoding is chosen at construction time: the RFC 3004 form
/// prefixes every identifier with its one-octet length, the legacy
/// Microsoft form concatenates the identifiers without length octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserClass {
    pub user_classes: Vec<Vec<u8>>,
    pub rfc3004: bool,
}

impl UserClass {
    /// Parses the option value.
    ///
    /// The RFC 3004 framing is tried first; when the length octets do not
    /// cover the value exactly, the whole value is taken as a single
    /// legacy identifier.
    pub fn from_bytes(value: &[u8]) -> io::Result<Self> {
        if value.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Empty user class option",
            ));
        }

        if let Some(user_classes) = Self::split_rfc3004(value) {
            return Ok(UserClass {
                user_classes,
                rfc3004: true,
            });
        }

        Ok(UserClass {
            user_classes: vec![value.to_vec()],
            rfc3004: false,
        })
    }

    /// Serializes the option value without the code and length octets.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::new();
        for user_class in &self.user_classes {
            if self.rfc3004 {
                data.push(user_class.len() as u8);
            }
            data.extend_from_slice(user_class);
        }
        data
    }

    fn split_rfc3004(value: &[u8]) -> Option<Vec<Vec<u8>>> {
        let mut user_classes = Vec::new();
        let mut position = 0;
        while position < value.len() {
            let length = value[position] as usize;
            if length == 0 || position + 1 + length > value.len() {
                return None;
            }
            user_classes.push(value[position + 1..position + 1 + length].to_vec());
            position += 1 + length;
        }
        Some(user_classes)
    }
}

impl fmt::Display for UserClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for user_class in &self.user_classes {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", String::from_utf8_lossy(user_class))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UserClass;

    #[test]
    fn parses_rfc3004_framing() {
        let value = [4u8, b'i', b'P', b'X', b'E', 5, b'l', b'i', b'n', b'u', b'x'];
        let user_class = UserClass::from_bytes(&value).unwrap();
        assert!(user_class.rfc3004);
        assert_eq!(
            user_class.user_classes,
            vec![b"iPXE".to_vec(), b"linux".to_vec()]
        );
        assert_eq!(user_class.to_bytes(), value.to_vec());
    }

    #[test]
    fn falls_back_to_a_single_legacy_identifier() {
        // The first octet does not cover the value, so this is not
        // valid RFC 3004 framing.
        let value = b"FooUserClass";
        let user_class = UserClass::from_bytes(&value[..]).unwrap();
        assert!(!user_class.rfc3004);
        assert_eq!(user_class.user_classes, vec![value.to_vec()]);
        assert_eq!(user_class.to_bytes(), value.to_vec());
    }

    #[test]
    fn serializes_legacy_concatenation() {
        let user_class = UserClass {
            user_classes: vec![b"one".to_vec(), b"two".to_vec()],
            rfc3004: false,
        };
        assert_eq!(user_class.to_bytes(), b"onetwo".to_vec());
    }

    #[test]
    fn rejects_an_empty_value() {
        assert!(UserClass::from_bytes(&[]).is_err());
    }
}
