#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must reject bad input, never panic
        let _ = toml::from_str::<dockerimages::Config>(content);
    }
});
