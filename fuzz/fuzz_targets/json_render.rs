#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlrender::{loader::JsonLoader, render};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(nodes) = JsonLoader::default().load_str(s) {
            let _ = render(&nodes);
        }
    }
});
