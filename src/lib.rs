#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

//! The _dhcpv6-wire_ library is a wire format codec for DHCPv6 ([RFC 3315]) messages.
//!
//! It covers the outer packet envelope, including the relay framing used by relay agents,
//! and the two option payloads that carry DNS names: the domain search list ([RFC 3646])
//! and the client FQDN option ([RFC 4704]). Everything else that lives in the options area
//! is handled by an option container, which the envelope only talks to through the
//! [`OptionsCodec`](wire::OptionsCodec) trait.
//!
//! # The wire layer
//! The `wire` module deals with the packet *representation*. It provides two levels
//! of functionality.
//!
//!  * First, it provides functions to extract fields from sequences of octets,
//!    and to insert fields into sequences of octets. This happens in the `Packet` family of
//!    structures, e.g. [Dhcpv6Packet].
//!  * Second, in cases where the space of valid field values is much smaller than the space
//!    of possible field values, it provides a compact, high-level representation
//!    of packet data that can be parsed from and emitted into a sequence of octets.
//!    This happens in the `Repr` family of structures, e.g. [Dhcpv6Repr], and in the
//!    option payload types [DomainNames] and [Fqdn].
//!
//! Parsing never panics: every read past the end of the input is reported as an error.
//!
//! # Configuration
//! The crate is `no_std` (with `alloc`) unless the `std` feature is enabled. Logging goes
//! through the `log` crate or through `defmt`, selected by the feature of the same name.
//! The `verbose` feature additionally traces every framing decision.
//!
//! [RFC 3315]: https://tools.ietf.org/html/rfc3315
//! [RFC 3646]: https://tools.ietf.org/html/rfc3646
//! [RFC 4704]: https://tools.ietf.org/html/rfc4704
//! [Dhcpv6Packet]: wire::Dhcpv6Packet
//! [Dhcpv6Repr]: wire::Dhcpv6Repr
//! [DomainNames]: wire::DomainNames
//! [Fqdn]: wire::Fqdn

extern crate alloc;

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("You must enable at most one of the following features: defmt, log");

#[macro_use]
mod macros;

pub mod wire;
