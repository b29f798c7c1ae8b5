#![no_main]
use libfuzzer_sys::fuzz_target;
use name_parts::Name;

fuzz_target!(|data: &str| {
    Name::parse(data);
});
