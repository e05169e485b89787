//! Property tests for archive naming.

use std::path::Path;

use proptest::prelude::*;

use dockerimages::{ArchivePlan, ImageName, ImageOrigin};

fn image() -> impl Strategy<Value = ImageName> {
    "[a-z0-9]{1,6}(/[a-z0-9]{1,6}){0,2}(:[a-z0-9.]{1,6})?"
        .prop_map(|raw| ImageName::parse(&raw, &ImageOrigin::Argument).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Archive file names never contain '/' or ':'.
    #[test]
    fn property_archive_stem_is_a_plain_file_name(name in image()) {
        let stem = name.archive_stem();
        prop_assert!(!stem.contains('/'));
        prop_assert!(!stem.contains(':'));
        prop_assert_eq!(stem.len(), name.as_str().len());
    }

    /// PROPERTY: Individual mode yields one archive per image, all inside the output dir.
    #[test]
    fn property_individual_plan_covers_every_image(
        images in proptest::collection::vec(image(), 0..8),
        gzip in any::<bool>(),
    ) {
        let dir = Path::new("out");
        let plan = ArchivePlan::new(dir, &images, false, gzip);

        prop_assert_eq!(plan.jobs.len(), images.len());
        for (job, image) in plan.jobs.iter().zip(&images) {
            prop_assert_eq!(job.images.as_slice(), std::slice::from_ref(image));
            prop_assert_eq!(job.tar_path.parent(), Some(dir));
            let ext = if gzip { "gz" } else { "tar" };
            let final_path = job.final_path();
            prop_assert_eq!(
                final_path.extension().and_then(|e| e.to_str()),
                Some(ext)
            );
        }
    }

    /// PROPERTY: Merged mode yields exactly one archive unless there is nothing to save.
    #[test]
    fn property_merged_plan_is_single_archive(
        images in proptest::collection::vec(image(), 0..8)
    ) {
        let plan = ArchivePlan::new(Path::new("out"), &images, true, false);
        if images.is_empty() {
            prop_assert!(plan.is_empty());
        } else {
            prop_assert_eq!(plan.jobs.len(), 1);
            prop_assert_eq!(&plan.jobs[0].images, &images);
            prop_assert_eq!(plan.jobs[0].tar_path.clone(), Path::new("out").join("images.tar"));
        }
    }
}
