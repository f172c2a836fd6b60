#![no_main]

use bumpcheck_version::{Version, compare};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(version) = Version::new(data) else {
        return;
    };
    assert_eq!(Version::new(version.to_string()), Ok(version));
    assert_eq!(compare(data, data), Ok(false));
});
