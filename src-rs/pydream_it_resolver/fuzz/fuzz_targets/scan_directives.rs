#![no_main]

use libfuzzer_sys::fuzz_target;
use pydream_it_resolver::{DirectiveError, scan_directives};

fuzz_target!(|source: &str| {
    match scan_directives(source) {
        Ok(_) => {}
        Err(DirectiveError::MalformedDirective {
            line_number,
            offset,
            length,
            ..
        }) => {
            assert!(line_number >= 1, "line numbers start at 1");
            assert!(
                offset + length <= source.len(),
                "directive ({offset}, {length}) is outside the source ({} bytes)",
                source.len(),
            );
            assert!(
                source[offset..].starts_with("#PYDREAM_IT"),
                "directive at {offset} does not start with the marker",
            );
        }
    }
});
