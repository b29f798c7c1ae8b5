#![no_main]
use libfuzzer_sys::fuzz_target;
use name_parts::Name;

fuzz_target!(|data: &str| {
    let name = Name::parse(data);
    assert_eq!(name, Name::parse(name.full()));
});
