use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use super::{DomainNames, Error, Fqdn, Reader, Result, Writer};

pub const OPT_CLIENTID: u16 = 1;
pub const OPT_SERVERID: u16 = 2;
pub const OPT_ELAPSED_TIME: u16 = 8;
pub const OPT_RELAY_MSG: u16 = 9;
pub const OPT_DNS_SERVERS: u16 = 23;
pub const OPT_DOMAIN_LIST: u16 = 24;
pub const OPT_CLIENT_FQDN: u16 = 39;

/// The contract between the packet envelope and whatever holds the options area.
///
/// The envelope hands [`parse`](OptionsCodec::parse) every octet that follows the
/// header, and appends whatever [`emit`](OptionsCodec::emit) writes after the header.
pub trait OptionsCodec: Sized {
    /// Parse an entire options area.
    fn parse(data: &[u8]) -> Result<Self>;

    /// Return the number of octets [`emit`](OptionsCodec::emit) will write.
    fn buffer_len(&self) -> usize;

    /// Append the options area to `writer`.
    fn emit(&self, writer: &mut Writer) -> Result<()>;
}

/// The options area as raw octets, carried verbatim.
impl OptionsCodec for Vec<u8> {
    fn parse(data: &[u8]) -> Result<Self> {
        Ok(data.to_vec())
    }

    fn buffer_len(&self) -> usize {
        self.len()
    }

    fn emit(&self, writer: &mut Writer) -> Result<()> {
        writer.write_bytes(self);
        Ok(())
    }
}

// The format of DHCP options is:
//
//     0                   1                   2                   3
//     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |          option-code          |           option-len          |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |                          option-data                          |
//    |                      (option-len octets)                      |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// option-code   An unsigned integer identifying the specific option
//               type carried in this option.
//
// option-len    An unsigned integer giving the length of the
//               option-data field in this option in octets.
//
// option-data   The data for the option; the format of this data
//               depends on the definition of the option.
//
/// A representation of a single DHCP option.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dhcpv6Option<'a> {
    pub kind: u16,
    pub data: &'a [u8],
}

/// Options keyed by option code.
///
/// Several values may be stored under one code. Options are emitted in ascending order
/// of their code, and values sharing a code in the order they were added.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Options {
    options: BTreeMap<u16, Vec<Vec<u8>>>,
}

impl Options {
    pub const fn new() -> Options {
        Options {
            options: BTreeMap::new(),
        }
    }

    /// Add a value for `kind`, after any value already stored for it.
    pub fn add<T: Into<Vec<u8>>>(&mut self, kind: u16, data: T) {
        self.options.entry(kind).or_default().push(data.into())
    }

    /// Replace every value stored for `kind` with `data`.
    pub fn set<T: Into<Vec<u8>>>(&mut self, kind: u16, data: T) {
        self.options.insert(kind, alloc::vec![data.into()]);
    }

    /// Remove every value stored for `kind`, returning them.
    pub fn remove(&mut self, kind: u16) -> Option<Vec<Vec<u8>>> {
        self.options.remove(&kind)
    }

    /// Return every value stored for `kind`.
    pub fn get(&self, kind: u16) -> Option<&[Vec<u8>]> {
        self.options.get(&kind).map(Vec::as_slice)
    }

    /// Return the first value stored for `kind`.
    pub fn get_one(&self, kind: u16) -> Option<&[u8]> {
        self.get(kind)?.first().map(Vec::as_slice)
    }

    /// Return the number of options, counting each value separately.
    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an iterator over the options, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = Dhcpv6Option<'_>> + '_ {
        self.options.iter().flat_map(|(&kind, values)| {
            values.iter().map(move |data| Dhcpv6Option { kind, data })
        })
    }

    /// Parse the Domain Search List option, if present.
    pub fn domain_search_list(&self) -> Option<Result<DomainNames>> {
        self.get_one(OPT_DOMAIN_LIST).map(DomainNames::parse)
    }

    pub fn set_domain_search_list(&mut self, names: &DomainNames) -> Result<()> {
        self.set(OPT_DOMAIN_LIST, names.emit()?);
        Ok(())
    }

    /// Parse the Client FQDN option, if present.
    pub fn client_fqdn(&self) -> Option<Result<Fqdn>> {
        self.get_one(OPT_CLIENT_FQDN).map(Fqdn::parse)
    }

    pub fn set_client_fqdn(&mut self, fqdn: &Fqdn) {
        self.set(OPT_CLIENT_FQDN, fqdn.emit())
    }
}

impl OptionsCodec for Options {
    /// Parse a sequence of options.
    ///
    /// Returns `Err(Error::TruncatedInput)` if an option header or value runs past the end
    /// of `data`.
    fn parse(data: &[u8]) -> Result<Options> {
        let mut reader = Reader::new(data);
        let mut options = Options::new();
        while !reader.is_empty() {
            let kind = reader.read_u16()?;
            let len = reader.read_u16()?;
            let data = reader.read_exact(len as usize)?;
            options.add(kind, data);
        }
        Ok(options)
    }

    fn buffer_len(&self) -> usize {
        self.iter().map(|opt| 4 + opt.data.len()).sum()
    }

    /// Emit every option.
    ///
    /// Returns `Err(Error::OptionTooLong)` if a value does not fit the length field.
    fn emit(&self, writer: &mut Writer) -> Result<()> {
        for option in self.iter() {
            let len = u16::try_from(option.data.len()).map_err(|_| Error::OptionTooLong)?;
            writer.write_u16(option.kind);
            writer.write_u16(len);
            writer.write_bytes(option.data);
        }
        Ok(())
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for option in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match option.kind {
                OPT_DOMAIN_LIST => match DomainNames::parse(option.data) {
                    Ok(names) => write!(f, "{names}")?,
                    Err(err) => write!(f, "domain-list ({err})")?,
                },
                OPT_CLIENT_FQDN => match Fqdn::parse(option.data) {
                    Ok(fqdn) => write!(f, "fqdn={fqdn}")?,
                    Err(err) => write!(f, "fqdn ({err})")?,
                },
                kind => write!(f, "opt{kind}={:X?}", option.data)?,
            }
        }
        Ok(())
    }
}
