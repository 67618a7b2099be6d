#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use dhcpv6_wire::wire::{flags_to_string, Fqdn};

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    Parse(&'a [u8]),
    Emit { flags: u8, name: String },
}

fuzz_target!(|input: Input| {
    match input {
        Input::Parse(data) => {
            if let Ok(fqdn) = Fqdn::parse(data) {
                assert_eq!(fqdn.flags, data[0]);
                assert!(flags_to_string(fqdn.flags).len() <= 3);
            }
        }
        Input::Emit { flags, name } => {
            let fqdn = Fqdn { flags, name };
            let bytes = fqdn.emit();
            assert_eq!(bytes.len(), fqdn.buffer_len());
            assert_eq!(bytes[0], flags);
            assert_eq!(&bytes[1..], fqdn.name.as_bytes());
        }
    }
});
