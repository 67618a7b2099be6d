#![no_main]
use libfuzzer_sys::fuzz_target;
use dhcpv6_wire::wire::DomainNames;

fuzz_target!(|data: &[u8]| {
    if let Ok(names) = DomainNames::parse(data) {
        if let Ok(bytes) = names.emit() {
            assert_eq!(bytes.len(), names.buffer_len());
        }
    }
});
