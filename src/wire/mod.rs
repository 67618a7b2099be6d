/*! Low-level packet access and construction.

The `wire` module deals with the packet *representation*. It provides two levels
of functionality.

 * First, it provides functions to extract fields from sequences of octets,
   and to insert fields into sequences of octets. This happens in the `Packet` family of
   structures, e.g. [Dhcpv6Packet].
 * Second, in cases where the space of valid field values is much smaller than the space
   of possible field values, it provides a compact, high-level representation
   of packet data that can be parsed from and emitted into a sequence of octets.
   This happens in the `Repr` family of structures, e.g. [Dhcpv6Repr].

The `Packet` family of data structures guarantees that, if the `Packet::check_len()` method
returned `Ok(())`, then no accessor or setter method will panic; however, the guarantee
provided by `Packet::check_len()` may no longer hold after changing certain fields,
which are listed in the documentation for the specific packet.

The `Packet::new_checked` method is a shorthand for a combination of `Packet::new_unchecked`
and `Packet::check_len`.
When parsing untrusted input, it is *necessary* to use `Packet::new_checked()`;
so long as the buffer is not modified, no accessor will fail.
When emitting output, though, it is *incorrect* to use `Packet::new_checked()`;
the length check is likely to succeed on a zeroed buffer, but fail on a buffer
filled with data from a previous packet, such as when reusing buffers, resulting
in nondeterministic panics with some network devices but not others.
The buffer length for emission is not calculated by the `Packet` layer.

In the `Repr` family of data structures, the `Repr::parse()` method never panics
as long as `Packet::new_checked()` (or `Packet::check_len()`) has succeeded, and
the `Repr::emit()` method never panics as long as the underlying buffer is exactly
`Repr::buffer_len()` octets long.

The option payloads ([DomainNames] and [Fqdn]) and the option container ([Dhcpv6Options])
are parsed from, and emitted into, the value of a single option through a [Reader] or
a [Writer] cursor.

# Examples

To emit a relay message:

```rust
use dhcpv6_wire::wire::*;

let repr: Dhcpv6Repr = Dhcpv6Repr {
    header: Dhcpv6Header::Relay {
        message_type: Dhcpv6MessageType::RelayForw,
        hop_count: 1,
        link_address: Ipv6Address([0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
        peer_address: Ipv6Address([0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]),
    },
    options: Dhcpv6Options::new(),
};
let bytes = repr.emit().unwrap();
assert_eq!(bytes.len(), repr.buffer_len());
assert_eq!(Dhcpv6Repr::parse(&bytes), Ok(repr));
```

To decode a domain search list:

```rust
use dhcpv6_wire::wire::*;

let names = DomainNames::parse(b"\x07example\x03com\x00").unwrap();
assert_eq!(names.0, ["example.com"]);
```

To build an options area:

```rust
use dhcpv6_wire::wire::*;

let mut options = Dhcpv6Options::new();
options.add(OPT_CLIENTID, vec![0x00, 0x03, 0x00, 0x01]);
options.add(OPT_SERVERID, vec![0x00, 0x03, 0x00, 0x02]);
options.add(OPT_ELAPSED_TIME, vec![0x00, 0x00]);
options.add(OPT_DNS_SERVERS, vec![0x20; 16]);
options.add(OPT_RELAY_MSG, vec![0x0b, 0x12, 0x34, 0x56]);
let codes: Vec<u16> = options.iter().map(|opt| opt.kind).collect();
assert_eq!(codes, [1, 2, 8, 9, 23]);
```
*/

mod field {
    pub type Field = ::core::ops::Range<usize>;
    pub type Rest = ::core::ops::RangeFrom<usize>;
}

pub mod pretty_print;

mod cursor;
pub mod dhcpv6;
mod dhcpv6_options;
mod domain_name;
mod fqdn;
mod ipv6;

use core::fmt;

pub use self::pretty_print::PrettyPrinter;

pub use self::cursor::{Reader, Writer};

pub use self::ipv6::Address as Ipv6Address;

pub use self::dhcpv6::{
    Header as Dhcpv6Header, MessageType as Dhcpv6MessageType, Packet as Dhcpv6Packet,
    Repr as Dhcpv6Repr, CLIENT_PORT as DHCPV6_CLIENT_PORT, SERVER_PORT as DHCPV6_SERVER_PORT,
};

pub use self::dhcpv6_options::{
    Dhcpv6Option, Options as Dhcpv6Options, OptionsCodec, OPT_CLIENTID, OPT_CLIENT_FQDN,
    OPT_DNS_SERVERS, OPT_DOMAIN_LIST, OPT_ELAPSED_TIME, OPT_RELAY_MSG, OPT_SERVERID,
};

pub use self::domain_name::{emit_name, parse_name, DomainNames};

pub use self::fqdn::{flags_to_string, Fqdn, FqdnFlags};

/// Parsing a packet failed.
///
/// Either it is malformed, or it is not supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Fewer octets were available than a fixed-width field requires.
    TruncatedInput,
    /// A label length ran past the end of the input, or a label could not be encoded.
    MalformedName,
    /// The packet is shorter than its framing requires, or its options area was rejected.
    InvalidPacket,
    /// An option value does not fit the 16-bit option length field.
    OptionTooLong,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TruncatedInput => write!(f, "truncated input"),
            Error::MalformedName => write!(f, "malformed domain name"),
            Error::InvalidPacket => write!(f, "invalid packet"),
            Error::OptionTooLong => write!(f, "option too long"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
