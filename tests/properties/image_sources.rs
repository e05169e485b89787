//! Property tests for image list and compose parsing.

use std::path::Path;

use proptest::prelude::*;

use dockerimages::{parse_compose, parse_image_list, ImageOrigin};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary list content never panics.
    #[test]
    fn property_image_list_never_panics(content in "(?s).{0,256}") {
        let _ = parse_image_list(&content, Path::new("images.txt"));
    }

    /// PROPERTY: Parsing arbitrary compose content never panics.
    #[test]
    fn property_compose_never_panics(content in "(?s).{0,256}") {
        let _ = parse_compose(&content, Path::new("compose.yml"));
    }

    /// PROPERTY: Every accepted list entry is trimmed and points at its own line.
    #[test]
    fn property_list_lines_are_tracked(
        names in proptest::collection::vec("[a-z][a-z0-9:/._-]{0,12}", 1..8),
        pad in " {0,3}",
    ) {
        let content: String = names
            .iter()
            .map(|n| format!("{pad}{n}{pad}\n\n"))
            .collect();

        let images = parse_image_list(&content, Path::new("images.txt")).unwrap();
        prop_assert_eq!(images.len(), names.len());

        for (idx, (image, name)) in images.iter().zip(&names).enumerate() {
            prop_assert_eq!(image.name.as_str(), name.as_str());
            match &image.origin {
                ImageOrigin::File { line, .. } => prop_assert_eq!(*line, idx * 2 + 1),
                other => prop_assert!(false, "unexpected origin {:?}", other),
            }
        }
    }
}
