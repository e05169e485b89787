#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Every accepted entry must be a usable archive name
        if let Ok(images) = dockerimages::parse_image_list(content, Path::new("images.txt")) {
            for image in images {
                let stem = image.name.archive_stem();
                assert!(!stem.contains('/') && !stem.contains(':'));
            }
        }
    }
});
