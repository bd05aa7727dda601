use std::fmt;
use std::num::ParseIntError;

use pnet::util::MacAddr;

use crate::error::WakeError;

/// A hardware address reduced to the 12 characters that matter.
///
/// Parsing strips every character that is not an ASCII letter or digit, so
/// `AA:BB:CC:DD:EE:FF`, `AA-BB-CC-DD-EE-FF` and `AABBCCDDEEFF` all collapse
/// to the same value. Only the digit count is checked here; turning the
/// digits into octets happens in [`MacString::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacString(String);

impl MacString {
    pub fn parse(raw: &str) -> Result<Self, WakeError> {
        if raw.trim().is_empty() {
            return Err(WakeError::MissingMac);
        }

        let stripped: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
        if stripped.len() != 12 {
            return Err(WakeError::MacLength {
                raw: raw.to_string(),
                found: stripped.len(),
            });
        }

        Ok(Self(stripped))
    }

    /// Decodes the 12 digits into the 6 octets of a [`MacAddr`].
    ///
    /// Mixed case is accepted. Letters outside the hex range fail here,
    /// not in [`MacString::parse`].
    pub fn decode(&self) -> Result<MacAddr, ParseIntError> {
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&self.0[2 * i..2 * i + 2], 16)?;
        }
        Ok(MacAddr::new(
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5],
        ))
    }
}

impl fmt::Display for MacString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
