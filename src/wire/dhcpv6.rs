// See https://datatracker.ietf.org/doc/html/rfc3315 for the DHCPv6 specification.

use alloc::vec::Vec;
use core::fmt;

use super::dhcpv6_options::Options;
use super::ipv6::Address;
use super::{Error, OptionsCodec, Reader, Result, Writer};

pub const SERVER_PORT: u16 = 547;
pub const CLIENT_PORT: u16 = 546;

enum_with_unknown! {
    /// The possible message types of a DHCP packet.
    pub enum MessageType(u8) {
        Solicit = 1,
        Advertise = 2,
        Request = 3,
        Confirm = 4,
        Renew = 5,
        Rebind = 6,
        Reply = 7,
        Release = 8,
        Decline = 9,
        Reconfigure = 10,
        InformationRequest = 11,
        RelayForw = 12,
        RelayRepl = 13,
        LeaseQuery = 14,
        LeaseQueryReply = 15,
        LeaseQueryDone = 16,
        LeaseQueryData = 17,
    }
}

impl MessageType {
    /// Query whether messages of this type use the relay agent framing.
    ///
    /// This is the only thing that decides between the two header layouts.
    pub const fn is_relay(&self) -> bool {
        matches!(self, MessageType::RelayForw | MessageType::RelayRepl)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Solicit => write!(f, "solicit"),
            Self::Advertise => write!(f, "advertise"),
            Self::Request => write!(f, "request"),
            Self::Confirm => write!(f, "confirm"),
            Self::Renew => write!(f, "renew"),
            Self::Rebind => write!(f, "rebind"),
            Self::Reply => write!(f, "reply"),
            Self::Release => write!(f, "release"),
            Self::Decline => write!(f, "decline"),
            Self::Reconfigure => write!(f, "reconfigure"),
            Self::InformationRequest => write!(f, "information-request"),
            Self::RelayForw => write!(f, "relay-forw"),
            Self::RelayRepl => write!(f, "relay-repl"),
            Self::LeaseQuery => write!(f, "lease-query"),
            Self::LeaseQueryReply => write!(f, "lease-query-reply"),
            Self::LeaseQueryDone => write!(f, "lease-query-done"),
            Self::LeaseQueryData => write!(f, "lease-query-data"),
            Self::Unknown(a) => write!(f, "unknown({a})"),
        }
    }
}

/// A read/write wrapper around a Dynamic Host Configuration Protocol packet buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet<T: AsRef<[u8]>> {
    buffer: T,
}

pub(crate) mod field {
    #![allow(non_snake_case)]
    #![allow(unused)]

    use crate::wire::field::*;

    pub const MTYPE: usize = 0;

    // Client/server messages.
    pub const XID: Field = 1..4;
    pub const OPTIONS: Rest = 4..;

    // Relay agent/server messages.
    pub const HOP_COUNT: usize = 1;
    pub const LINK_ADDR: Field = 2..18;
    pub const PEER_ADDR: Field = 18..34;
    pub const RELAY_OPTIONS: Rest = 34..;
}

/// The length of a client/server message header.
pub const HEADER_LEN: usize = field::OPTIONS.start;
/// The length of a relay agent/server message header.
pub const RELAY_HEADER_LEN: usize = field::RELAY_OPTIONS.start;

impl<T: AsRef<[u8]>> Packet<T> {
    /// Imbue a raw octet buffer with DHCP packet structure.
    pub const fn new_unchecked(buffer: T) -> Packet<T> {
        Packet { buffer }
    }

    /// Shorthand for a combination of [new_unchecked] and [check_len].
    ///
    /// [new_unchecked]: #method.new_unchecked
    /// [check_len]: #method.check_len
    pub fn new_checked(buffer: T) -> Result<Packet<T>> {
        let packet = Self::new_unchecked(buffer);
        packet.check_len()?;
        Ok(packet)
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error::InvalidPacket)` if the buffer is too short for the header
    /// its message type calls for.
    ///
    /// The result of this check is invalidated by calling [set_msg_type].
    ///
    /// [set_msg_type]: #method.set_msg_type
    pub fn check_len(&self) -> Result<()> {
        let len = self.buffer.as_ref().len();
        if len < HEADER_LEN || (self.msg_type().is_relay() && len < RELAY_HEADER_LEN) {
            Err(Error::InvalidPacket)
        } else {
            Ok(())
        }
    }

    /// Consume the packet, returning the underlying buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Returns the message type.
    pub fn msg_type(&self) -> MessageType {
        MessageType::from(self.buffer.as_ref()[field::MTYPE])
    }

    /// Returns the transaction ID.
    ///
    /// The transaction ID is an opaque value chosen by the client, used to associate
    /// messages and responses between client and server. Relay messages have none, and
    /// the octets returned for them are part of the link address.
    pub fn transaction_id(&self) -> [u8; 3] {
        let mut xid = [0; 3];
        xid.copy_from_slice(&self.buffer.as_ref()[field::XID]);
        xid
    }

    /// Returns the number of relay agents that have already relayed this message.
    pub fn hop_count(&self) -> u8 {
        self.buffer.as_ref()[field::HOP_COUNT]
    }

    /// Returns the address the relay agent uses to identify the client's link.
    pub fn link_address(&self) -> Address {
        Address::from_bytes(&self.buffer.as_ref()[field::LINK_ADDR])
    }

    /// Returns the address of the client or relay agent the message was received from.
    pub fn peer_address(&self) -> Address {
        Address::from_bytes(&self.buffer.as_ref()[field::PEER_ADDR])
    }

    /// Return the options area, which starts after the header selected by the message type.
    pub fn options(&self) -> &[u8] {
        let data = self.buffer.as_ref();
        if self.msg_type().is_relay() {
            &data[field::RELAY_OPTIONS]
        } else {
            &data[field::OPTIONS]
        }
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Packet<T> {
    /// Sets the message type.
    pub fn set_msg_type(&mut self, value: MessageType) {
        self.buffer.as_mut()[field::MTYPE] = value.into();
    }

    /// Sets the transaction ID.
    pub fn set_transaction_id(&mut self, value: [u8; 3]) {
        self.buffer.as_mut()[field::XID].copy_from_slice(&value)
    }

    /// Sets the hop count of a relay message.
    pub fn set_hop_count(&mut self, value: u8) {
        self.buffer.as_mut()[field::HOP_COUNT] = value
    }

    /// Sets the link address of a relay message.
    pub fn set_link_address(&mut self, value: Address) {
        self.buffer.as_mut()[field::LINK_ADDR].copy_from_slice(value.as_bytes())
    }

    /// Sets the peer address of a relay message.
    pub fn set_peer_address(&mut self, value: Address) {
        self.buffer.as_mut()[field::PEER_ADDR].copy_from_slice(value.as_bytes())
    }

    /// Return a mutable pointer to the options area.
    pub fn options_mut(&mut self) -> &mut [u8] {
        let relay = self.msg_type().is_relay();
        let data = self.buffer.as_mut();
        if relay {
            &mut data[field::RELAY_OPTIONS]
        } else {
            &mut data[field::OPTIONS]
        }
    }
}

// All DHCP messages sent between clients and servers share an identical
// fixed-format header and a variable-format area for options:
//
//     0                   1                   2                   3
//     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |    msg-type   |               transaction-id                  |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |                                                               |
//    .                            options                            .
//    .                 (variable number and length)                  .
//    |                                                               |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// Relay agents and servers exchange relay messages instead (RFC 3315
// section 7):
//
//     0                   1                   2                   3
//     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |    msg-type   |   hop-count   |                               |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+                               |
//    |                                                               |
//    |                         link-address                          |
//    |                                                               |
//    |                               +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |                               |                               |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+                               |
//    |                                                               |
//    |                         peer-address                          |
//    |                                                               |
//    |                               +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//    |                               |                               |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+                               |
//    .                                                               .
//    .            options (variable number and length)   ....        .
//    |                                                               |
//    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// The fixed part of a DHCP message. Which variant applies is decided by the message type.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Header {
    /// A client/server message.
    Standard {
        message_type: MessageType,
        /// An opaque value used to match replies to requests.
        transaction_id: [u8; 3],
    },
    /// A relay agent/server message (`RelayForw` or `RelayRepl`).
    Relay {
        message_type: MessageType,
        hop_count: u8,
        link_address: Address,
        peer_address: Address,
    },
}

impl Header {
    pub const fn message_type(&self) -> MessageType {
        match *self {
            Header::Standard { message_type, .. } | Header::Relay { message_type, .. } => {
                message_type
            }
        }
    }

    /// Return the length of the header on the wire.
    pub const fn header_len(&self) -> usize {
        match self {
            Header::Standard { .. } => HEADER_LEN,
            Header::Relay { .. } => RELAY_HEADER_LEN,
        }
    }

    fn parse(reader: &mut Reader<'_>) -> Result<Header> {
        let message_type = MessageType::from(reader.read_u8()?);
        if message_type.is_relay() {
            Ok(Header::Relay {
                message_type,
                hop_count: reader.read_u8()?,
                link_address: Address(reader.read_array()?),
                peer_address: Address(reader.read_array()?),
            })
        } else {
            Ok(Header::Standard {
                message_type,
                transaction_id: reader.read_array()?,
            })
        }
    }

    fn emit(&self, writer: &mut Writer) -> Result<()> {
        match *self {
            Header::Standard {
                message_type,
                transaction_id,
            } => {
                if message_type.is_relay() {
                    net_debug!("DHCPv6 {} cannot use the client/server header", message_type);
                    return Err(Error::InvalidPacket);
                }
                writer.write_u8(message_type.into());
                writer.write_bytes(&transaction_id);
            }
            Header::Relay {
                message_type,
                hop_count,
                link_address,
                peer_address,
            } => {
                if !message_type.is_relay() {
                    net_debug!("DHCPv6 {} cannot use the relay header", message_type);
                    return Err(Error::InvalidPacket);
                }
                writer.write_u8(message_type.into());
                writer.write_u8(hop_count);
                writer.write_bytes(link_address.as_bytes());
                writer.write_bytes(peer_address.as_bytes());
            }
        }
        Ok(())
    }
}

/// A high-level representation of a DHCPv6 message.
///
/// The options area is handed to `O`, see [`OptionsCodec`].
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Repr<O = Options> {
    pub header: Header,
    pub options: O,
}

impl<O: OptionsCodec> Repr<O> {
    pub const fn message_type(&self) -> MessageType {
        self.header.message_type()
    }

    /// Return the length of a packet that will be emitted from this high-level representation.
    pub fn buffer_len(&self) -> usize {
        self.header.header_len() + self.options.buffer_len()
    }

    /// Parse a DHCP packet and return a high-level representation.
    ///
    /// Returns `Err(Error::InvalidPacket)` if the packet is shorter than the header its
    /// message type calls for, or if `O` rejects the options area.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let packet = Packet::new_checked(data).map_err(|err| {
            net_debug!("DHCPv6 packet too short: {} octets", data.len());
            err
        })?;
        net_trace!(
            "DHCPv6 {} header, {} octets of options",
            packet.msg_type(),
            packet.options().len()
        );

        let mut reader = Reader::new(data);
        let header = Header::parse(&mut reader).map_err(|_| Error::InvalidPacket)?;
        let options = O::parse(reader.remaining()).map_err(|err| {
            net_debug!("DHCPv6 options area rejected: {:?}", err);
            Error::InvalidPacket
        })?;

        Ok(Repr { header, options })
    }

    /// Emit a high-level representation into a newly allocated buffer.
    ///
    /// Returns `Err(Error::InvalidPacket)` if the header variant does not match the message
    /// type. Errors from `O` are returned as they are.
    pub fn emit(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::with_capacity(self.buffer_len());
        self.header.emit(&mut writer)?;
        self.options.emit(&mut writer)?;
        net_trace!(
            "DHCPv6 emitted {} in {} octets",
            self.message_type(),
            writer.len()
        );
        Ok(writer.into_inner())
    }
}

impl<'a, T: AsRef<[u8]> + ?Sized> fmt::Display for Packet<&'a T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match Repr::<Options>::parse(self.buffer.as_ref()) {
            Ok(repr) => write!(f, "{repr}"),
            Err(err) => {
                write!(f, "DHCPv6 ({err})")
            }
        }
    }
}

impl<O: fmt::Display> fmt::Display for Repr<O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.header {
            Header::Standard {
                message_type,
                transaction_id: [a, b, c],
            } => write!(
                f,
                "DHCPv6 msg-type={message_type} trans-id=0x{a:02x}{b:02x}{c:02x}"
            )?,
            Header::Relay {
                message_type,
                hop_count,
                link_address,
                peer_address,
            } => write!(
                f,
                "DHCPv6 msg-type={message_type} hop-count={hop_count} link-addr={link_address} peer-addr={peer_address}"
            )?,
        }
        write!(f, " {}", self.options)
    }
}

use crate::wire::pretty_print::{PrettyIndent, PrettyPrint};

impl<T: AsRef<[u8]>> PrettyPrint for Packet<T> {
    fn pretty_print(
        buffer: &dyn AsRef<[u8]>,
        f: &mut fmt::Formatter,
        indent: &mut PrettyIndent,
    ) -> fmt::Result {
        let packet = match Packet::new_checked(buffer.as_ref()) {
            Err(err) => return write!(f, "{indent}({err})"),
            Ok(packet) => packet,
        };
        write!(f, "{indent}{packet}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::wire::{OPT_CLIENT_FQDN, OPT_ELAPSED_TIME, OPT_RELAY_MSG};
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    static SOLICIT_BYTES: [u8; 21] = [
        0x01, 0x12, 0x34, 0x56, 0x00, 0x08, 0x00, 0x02, 0x00, 0x00, 0x00, 0x27, 0x00, 0x07, 0x01,
        0x04, 0x68, 0x6f, 0x73, 0x74, 0x00,
    ];

    static RELAY_FORW_BYTES: [u8; 42] = [
        0x0c, 0x02, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x01, 0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x02, 0x00, 0x09, 0x00, 0x04, 0x0b, 0xab, 0xcd, 0xef,
    ];

    const LINK_ADDR: Address = Address([
        0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01,
    ]);
    const PEER_ADDR: Address = Address([
        0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x02,
    ]);

    fn solicit_repr() -> Repr {
        let mut options = Options::new();
        options.add(OPT_ELAPSED_TIME, vec![0x00, 0x00]);
        options.add(OPT_CLIENT_FQDN, &b"\x01\x04host\x00"[..]);
        Repr {
            header: Header::Standard {
                message_type: MessageType::Solicit,
                transaction_id: [0x12, 0x34, 0x56],
            },
            options,
        }
    }

    fn relay_forw_repr() -> Repr {
        let mut options = Options::new();
        options.add(OPT_RELAY_MSG, vec![0x0b, 0xab, 0xcd, 0xef]);
        Repr {
            header: Header::Relay {
                message_type: MessageType::RelayForw,
                hop_count: 2,
                link_address: LINK_ADDR,
                peer_address: PEER_ADDR,
            },
            options,
        }
    }

    #[test]
    fn test_parse_solicit() {
        let repr = Repr::parse(&SOLICIT_BYTES).unwrap();
        assert_eq!(repr, solicit_repr());
        assert_eq!(repr.message_type(), MessageType::Solicit);
        assert_eq!(
            repr.options.client_fqdn().unwrap().unwrap().name,
            "host"
        );
    }

    #[test]
    fn test_emit_solicit() {
        let repr = solicit_repr();
        assert_eq!(repr.buffer_len(), SOLICIT_BYTES.len());
        assert_eq!(repr.emit().unwrap(), SOLICIT_BYTES);
    }

    #[test]
    fn test_parse_relay_forw() {
        let repr = Repr::parse(&RELAY_FORW_BYTES).unwrap();
        assert_eq!(repr, relay_forw_repr());

        // The relayed message is itself a DHCPv6 message.
        let inner = repr.options.get_one(OPT_RELAY_MSG).unwrap();
        let inner = Repr::<Vec<u8>>::parse(inner).unwrap();
        assert_eq!(
            inner.header,
            Header::Standard {
                message_type: MessageType::InformationRequest,
                transaction_id: [0xab, 0xcd, 0xef],
            }
        );
        assert!(inner.options.is_empty());
    }

    #[test]
    fn test_emit_relay_forw() {
        let repr = relay_forw_repr();
        assert_eq!(repr.buffer_len(), RELAY_FORW_BYTES.len());
        assert_eq!(repr.emit().unwrap(), RELAY_FORW_BYTES);
    }

    #[test]
    fn test_relay_repl_round_trip() {
        let repr = Repr {
            header: Header::Relay {
                message_type: MessageType::RelayRepl,
                hop_count: 0xff,
                link_address: PEER_ADDR,
                peer_address: LINK_ADDR,
            },
            options: Options::new(),
        };
        let bytes = repr.emit().unwrap();
        assert_eq!(bytes.len(), RELAY_HEADER_LEN);
        assert_eq!(Repr::parse(&bytes), Ok(repr));
    }

    #[test]
    fn test_parse_too_short() {
        for len in 0..HEADER_LEN {
            assert_eq!(
                Repr::<Vec<u8>>::parse(&SOLICIT_BYTES[..len]),
                Err(Error::InvalidPacket)
            );
        }
        assert!(Repr::<Vec<u8>>::parse(&SOLICIT_BYTES[..HEADER_LEN]).is_ok());
    }

    #[test]
    fn test_parse_relay_too_short() {
        for len in 0..RELAY_HEADER_LEN {
            assert_eq!(
                Repr::<Vec<u8>>::parse(&RELAY_FORW_BYTES[..len]),
                Err(Error::InvalidPacket)
            );
        }
        let repr = Repr::<Vec<u8>>::parse(&RELAY_FORW_BYTES[..RELAY_HEADER_LEN]).unwrap();
        assert!(repr.options.is_empty());
    }

    #[test]
    fn test_parse_rejected_options() {
        // The last option claims 7 octets but only 6 are present.
        assert_eq!(
            Repr::<Options>::parse(&SOLICIT_BYTES[..20]),
            Err(Error::InvalidPacket)
        );
        // The raw container accepts anything.
        let repr = Repr::<Vec<u8>>::parse(&SOLICIT_BYTES[..20]).unwrap();
        assert_eq!(repr.options, SOLICIT_BYTES[4..20]);
    }

    #[test]
    fn test_standard_framing_for_every_other_type() {
        let mut bytes = RELAY_FORW_BYTES;
        for value in 0..=u8::MAX {
            bytes[0] = value;
            let repr = Repr::<Vec<u8>>::parse(&bytes).unwrap();
            let message_type = MessageType::from(value);
            assert_eq!(repr.message_type(), message_type);
            if value == 12 || value == 13 {
                assert!(matches!(repr.header, Header::Relay { hop_count: 2, .. }));
                assert_eq!(repr.options, RELAY_FORW_BYTES[34..]);
            } else {
                assert_eq!(
                    repr.header,
                    Header::Standard {
                        message_type,
                        transaction_id: [0x02, 0x20, 0x01],
                    }
                );
                assert_eq!(repr.options, RELAY_FORW_BYTES[4..]);
                assert_eq!(repr.emit().unwrap(), bytes);
            }
        }
    }

    #[test]
    fn test_emit_mismatched_header() {
        let repr = Repr {
            header: Header::Standard {
                message_type: MessageType::RelayRepl,
                transaction_id: [0; 3],
            },
            options: Vec::<u8>::new(),
        };
        assert_eq!(repr.emit(), Err(Error::InvalidPacket));

        let repr = Repr {
            header: Header::Relay {
                message_type: MessageType::Reply,
                hop_count: 0,
                link_address: Address::UNSPECIFIED,
                peer_address: Address::UNSPECIFIED,
            },
            options: Vec::<u8>::new(),
        };
        assert_eq!(repr.emit(), Err(Error::InvalidPacket));
    }

    #[test]
    fn test_emit_propagates_options_error() {
        let mut repr = solicit_repr();
        repr.options.add(0xffff, vec![0; 0x1_0000]);
        assert_eq!(repr.emit(), Err(Error::OptionTooLong));
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x3315);
        for _ in 0..256 {
            let header = if rng.gen() {
                Header::Relay {
                    message_type: if rng.gen() {
                        MessageType::RelayForw
                    } else {
                        MessageType::RelayRepl
                    },
                    hop_count: rng.gen(),
                    link_address: Address(rng.gen()),
                    peer_address: Address(rng.gen()),
                }
            } else {
                let message_type = MessageType::from(rng.gen::<u8>());
                if message_type.is_relay() {
                    continue;
                }
                Header::Standard {
                    message_type,
                    transaction_id: rng.gen(),
                }
            };
            let mut options = Options::new();
            for _ in 0..rng.gen_range(0..4) {
                let len = rng.gen_range(0..32);
                let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                options.add(rng.gen(), data);
            }
            let repr = Repr { header, options };
            let bytes = repr.emit().unwrap();
            assert_eq!(bytes.len(), repr.buffer_len());
            assert_eq!(Repr::parse(&bytes), Ok(repr));
        }
    }

    #[test]
    fn test_packet_accessors() {
        let packet = Packet::new_checked(&SOLICIT_BYTES[..]).unwrap();
        assert_eq!(packet.msg_type(), MessageType::Solicit);
        assert_eq!(packet.transaction_id(), [0x12, 0x34, 0x56]);
        assert_eq!(packet.options(), &SOLICIT_BYTES[4..]);

        let packet = Packet::new_checked(&RELAY_FORW_BYTES[..]).unwrap();
        assert_eq!(packet.msg_type(), MessageType::RelayForw);
        assert_eq!(packet.hop_count(), 2);
        assert_eq!(packet.link_address(), LINK_ADDR);
        assert_eq!(packet.peer_address(), PEER_ADDR);
        assert_eq!(packet.options(), &RELAY_FORW_BYTES[34..]);
    }

    #[test]
    fn test_packet_check_len() {
        assert_eq!(
            Packet::new_checked(&SOLICIT_BYTES[..3]),
            Err(Error::InvalidPacket)
        );
        assert_eq!(
            Packet::new_checked(&RELAY_FORW_BYTES[..33]),
            Err(Error::InvalidPacket)
        );
        assert!(Packet::new_checked(&RELAY_FORW_BYTES[..4]).is_err());
        assert!(Packet::new_checked(&SOLICIT_BYTES[..4]).is_ok());
    }

    #[test]
    fn test_packet_setters() {
        let mut bytes = vec![0xa5; RELAY_FORW_BYTES.len()];
        let mut packet = Packet::new_unchecked(&mut bytes);
        packet.set_msg_type(MessageType::RelayForw);
        packet.set_hop_count(2);
        packet.set_link_address(LINK_ADDR);
        packet.set_peer_address(PEER_ADDR);
        packet.options_mut().copy_from_slice(&RELAY_FORW_BYTES[34..]);
        assert_eq!(packet.into_inner().as_slice(), &RELAY_FORW_BYTES[..]);

        let mut bytes = vec![0xa5; SOLICIT_BYTES.len()];
        let mut packet = Packet::new_unchecked(&mut bytes);
        packet.set_msg_type(MessageType::Solicit);
        packet.set_transaction_id([0x12, 0x34, 0x56]);
        packet.options_mut().copy_from_slice(&SOLICIT_BYTES[4..]);
        assert_eq!(packet.into_inner().as_slice(), &SOLICIT_BYTES[..]);
    }

    #[test]
    fn test_message_type() {
        assert!(MessageType::RelayForw.is_relay());
        assert!(MessageType::RelayRepl.is_relay());
        assert!(!MessageType::Reply.is_relay());
        assert!(!MessageType::Unknown(0).is_relay());
        assert_eq!(MessageType::from(12), MessageType::RelayForw);
        assert_eq!(u8::from(MessageType::Unknown(200)), 200);
        assert_eq!(alloc::format!("{}", MessageType::Unknown(200)), "unknown(200)");
    }

    #[test]
    fn test_display() {
        let packet = Packet::new_unchecked(&SOLICIT_BYTES[..]);
        assert_eq!(
            alloc::format!("{packet}"),
            "DHCPv6 msg-type=solicit trans-id=0x123456 opt8=[0, 0] fqdn=host:S"
        );
        assert_eq!(
            alloc::format!("{}", relay_forw_repr()),
            "DHCPv6 msg-type=relay-forw hop-count=2 link-addr=2001:db8::1 peer-addr=fe80::2 opt9=[B, AB, CD, EF]"
        );
        let packet = Packet::new_unchecked(&SOLICIT_BYTES[..2]);
        assert_eq!(alloc::format!("{packet}"), "DHCPv6 (invalid packet)");
    }
}
