#![no_main]
use libfuzzer_sys::fuzz_target;
use dhcpv6_wire::wire::{Dhcpv6Options, Dhcpv6Packet, Dhcpv6Repr, PrettyPrinter};

fuzz_target!(|data: &[u8]| {
    let _ = format!("{}", PrettyPrinter::<Dhcpv6Packet<&'static [u8]>>::new("", &data));

    if let Ok(repr) = Dhcpv6Repr::<Dhcpv6Options>::parse(data) {
        let bytes = repr.emit().expect("a parsed packet can be emitted");
        assert_eq!(bytes.len(), repr.buffer_len());
        assert_eq!(Dhcpv6Repr::parse(&bytes), Ok(repr));
    }
});
