use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::{Error, Reader, Result, Writer};

// A domain name is carried as a sequence of labels, each preceded by its length,
// and terminated by a zero length label (RFC 1035 section 3.1). DHCPv6 never uses
// compression pointers (RFC 3315 section 8):
//
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |   7   | e | x | a | m | p | l | e |   3   | c | o | m |   0   |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// A list of names is the concatenation of such sequences.

/// Read one domain name.
///
/// Labels are read until a zero length octet, or until the input runs out where a
/// length octet was expected. A reader that is already exhausted yields an empty name.
/// Label octets that are not UTF-8 are replaced with `U+FFFD`; a label that
/// contains a `.` cannot be told apart from two labels once joined.
pub fn parse_name(reader: &mut Reader<'_>) -> Result<String> {
    let mut name = String::new();
    while !reader.is_empty() {
        let len = reader.read_u8()?;
        if len == 0 {
            break;
        }
        let label = reader
            .read_exact(len as usize)
            .map_err(|_| Error::MalformedName)?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
    }
    net_trace!("domain name: parsed {:?}", name.as_str());
    Ok(name)
}

/// Return the labels of `name`, or `Err(Error::MalformedName)` if one of them cannot be
/// encoded.
///
/// A single trailing `.` marks an absolute name and does not produce a label, so the
/// root name (`""` or `"."`) has no labels at all. Empty labels anywhere else, and labels
/// longer than 255 octets, are rejected.
fn labels(name: &str) -> Result<impl Iterator<Item = &str>> {
    let name = name.strip_suffix('.').unwrap_or(name);
    let labels = name.split('.').filter(move |_| !name.is_empty());
    for label in labels.clone() {
        if label.is_empty() || label.len() > u8::MAX as usize {
            net_debug!("domain name: cannot encode label of {} octets", label.len());
            return Err(Error::MalformedName);
        }
    }
    Ok(labels)
}

/// Write one domain name, terminator included.
///
/// Nothing is written if the name cannot be encoded.
pub fn emit_name(writer: &mut Writer, name: &str) -> Result<()> {
    for label in labels(name)? {
        writer.write_u8(label.len() as u8);
        writer.write_bytes(label.as_bytes());
    }
    writer.write_u8(0);
    Ok(())
}

/// Return the number of octets `name` occupies once emitted.
fn name_len(name: &str) -> usize {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        1
    } else {
        // One length octet per label, plus the terminator, and the dots are not written.
        name.len() + 2
    }
}

/// An ordered list of domain names, e.g. the value of the Domain Search List option
/// ([RFC 3646 section 4]).
///
/// [RFC 3646 section 4]: https://tools.ietf.org/html/rfc3646#section-4
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DomainNames(pub Vec<String>);

impl DomainNames {
    /// Parse every name in `data`, in order.
    ///
    /// An empty buffer yields an empty list.
    pub fn parse(data: &[u8]) -> Result<DomainNames> {
        let mut reader = Reader::new(data);
        let mut names = Vec::new();
        while !reader.is_empty() {
            names.push(parse_name(&mut reader)?);
        }
        Ok(DomainNames(names))
    }

    /// Return the length of the option value that will be emitted from this list.
    pub fn buffer_len(&self) -> usize {
        self.0.iter().map(|name| name_len(name)).sum()
    }

    /// Emit every name, each followed by its terminator.
    pub fn emit(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        for name in self.0.iter() {
            emit_name(&mut writer, name)?;
        }
        Ok(writer.into_inner())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DomainNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        DomainNames(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for DomainNames {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "domain-list")?;
        for name in self.iter() {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}
