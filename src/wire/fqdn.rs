use alloc::string::String;
use alloc::vec::Vec;
use bitflags::bitflags;
use core::fmt;

use super::domain_name::parse_name;
use super::{Reader, Result, Writer};

bitflags! {
    /// The flags field of the Client FQDN option ([RFC 4704 section 4.1]).
    ///
    /// [RFC 4704 section 4.1]: https://tools.ietf.org/html/rfc4704#section-4.1
    pub struct FqdnFlags: u8 {
        /// The server should perform the AAAA RR update.
        const S = 0b0000_0001;
        /// The server has overridden the client's preference for `S`.
        const O = 0b0000_0010;
        /// The server should not perform any DNS updates.
        const N = 0b0000_0100;
    }
}

/// Render the known flags set in `flags` as letters, always in the order `S`, `O`, `N`.
///
/// Reserved bits are not rendered, and no flag set renders as the empty string.
pub fn flags_to_string(flags: u8) -> String {
    let flags = FqdnFlags::from_bits_truncate(flags);
    let mut s = String::new();
    for (flag, letter) in [
        (FqdnFlags::S, 'S'),
        (FqdnFlags::O, 'O'),
        (FqdnFlags::N, 'N'),
    ] {
        if flags.contains(flag) {
            s.push(letter);
        }
    }
    s
}

//     0                   1                   2                   3
//     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |          OPTION_FQDN          |         option-len            |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |   flags       |                                               |
//    +-+-+-+-+-+-+-+-+                                               |
//    .                                                               .
//    .                          domain-name                          .
//    .                                                               .
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The value of the option starts at `flags`; the option length is the only
// delimiter of the name.
/// A representation of the Client FQDN option value.
///
/// Parsing and emitting are not inverses of each other: [`Fqdn::parse`] reads the name as
/// length-prefixed labels, while [`Fqdn::emit`] writes the name octets as they are, with
/// neither length octets nor a terminator. Peers that frame the name as labels should be
/// given the name through [`emit_name`](super::emit_name) instead.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fqdn {
    /// The raw flags octet. Reserved bits are carried through unchanged.
    pub flags: u8,
    pub name: String,
}

impl Fqdn {
    /// Return the known flags that are set.
    pub fn flags(&self) -> FqdnFlags {
        FqdnFlags::from_bits_truncate(self.flags)
    }

    /// Return the length of the option value that will be emitted from this record.
    pub fn buffer_len(&self) -> usize {
        1 + self.name.len()
    }

    /// Parse a Client FQDN option value.
    ///
    /// Returns `Err(Error::TruncatedInput)` if there is no flags octet.
    pub fn parse(data: &[u8]) -> Result<Fqdn> {
        let mut reader = Reader::new(data);
        let flags = reader.read_u8()?;
        let name = parse_name(&mut reader)?;
        Ok(Fqdn { flags, name })
    }

    /// Emit the flags octet followed by the name octets.
    pub fn emit(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        writer.write_u8(self.flags);
        writer.write_bytes(self.name.as_bytes());
        writer.into_inner()
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.name, flags_to_string(self.flags))
    }
}
