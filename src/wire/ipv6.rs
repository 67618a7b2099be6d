use core::fmt;
use core::net::Ipv6Addr;

/// A sixteen-octet IPv6 address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(pub [u8; 16]);

impl Address {
    /// The [unspecified address].
    ///
    /// [unspecified address]: https://tools.ietf.org/html/rfc4291#section-2.5.2
    pub const UNSPECIFIED: Address = Address([0x00; 16]);

    /// The link-local [all DHCP relay agents and servers] multicast address.
    ///
    /// [all DHCP relay agents and servers]: https://tools.ietf.org/html/rfc3315#section-5.1
    pub const ALL_DHCP_RELAY_AGENTS_AND_SERVERS: Address = Address([
        0xff, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
        0x02,
    ]);

    /// Construct an IPv6 address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not sixteen octets long.
    pub fn from_bytes(data: &[u8]) -> Address {
        let mut bytes = [0; 16];
        bytes.copy_from_slice(data);
        Address(bytes)
    }

    /// Return an IPv6 address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the IPv6 address is the [unspecified address].
    ///
    /// [unspecified address]: https://tools.ietf.org/html/rfc4291#section-2.5.2
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0x00; 16]
    }
}

impl From<Ipv6Addr> for Address {
    fn from(x: Ipv6Addr) -> Address {
        Address(x.octets())
    }
}

impl From<Address> for Ipv6Addr {
    fn from(Address(x): Address) -> Ipv6Addr {
        x.into()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv6Addr::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            alloc::format!("{}", Address::ALL_DHCP_RELAY_AGENTS_AND_SERVERS),
            "ff02::1:2"
        );
        assert_eq!(alloc::format!("{}", Address::UNSPECIFIED), "::");
        assert!(Address::UNSPECIFIED.is_unspecified());
    }

    #[test]
    fn test_std_round_trip() {
        let std_addr = Ipv6Addr::new(0xfe80, 0, 0, 0, 0x1ff, 0xfe23, 0x4567, 0x890a);
        let addr = Address::from(std_addr);
        assert_eq!(addr.as_bytes()[0..2], [0xfe, 0x80]);
        assert_eq!(Ipv6Addr::from(addr), std_addr);
        assert_eq!(Address::from_bytes(addr.as_bytes()), addr);
    }
}
