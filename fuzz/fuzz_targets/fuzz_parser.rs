#![no_main]

use libfuzzer_sys::fuzz_target;
use utf8fsm::{ParseError, Parser};

/// Drives the parser one code point at a time over arbitrary bytes and
/// checks it against the differential oracle: the prefix it accepts
/// must match what `core::str::from_utf8` accepts, byte for byte.
fn check_agrees_with_std(data: &[u8]) {
    let mut parser = Parser::new();
    let mut pos = 0usize;

    while pos < data.len() {
        match parser.parse_next_code_point(data, pos) {
            Ok(end) => {
                assert!(end > pos);
                pos = end;
            }
            Err(ParseError::IllegalSequenceAt(at)) => {
                // `at` is the absolute index of the offending byte, which for
                // a truncated or continuation-byte failure is past the
                // code point's start `pos` (e.g. 0xC2 alone: accepted as a
                // lead, then EOF reports `at = 1` while `pos = 0`).
                assert!(at >= pos);
                break;
            }
            Err(ParseError::UnrecoverableState) => {
                panic!("parser reported a corrupt state it never set itself");
            }
        }
    }

    let expected = match core::str::from_utf8(data) {
        Ok(s) => s.len(),
        Err(e) => e.valid_up_to(),
    };
    assert_eq!(pos, expected, "diverged from core::str::from_utf8 on {data:?}");
}

/// Drives the raw, cache-free transition step directly, checking the
/// determinism invariant holds for every byte the fuzzer produces: at
/// most one bit of the successor mask can ever be set.
fn check_step_is_deterministic(data: &[u8]) {
    let mut mask = 1u16 << 15; // Ini
    for &byte in data {
        let next = utf8fsm::step(mask, byte);
        assert!(next.count_ones() <= 1, "byte {byte:#04x} from mask {mask:#06x} produced {next:#06x}");
        mask = if next == 0 { 1u16 << 15 } else { next };
    }
}

fuzz_target!(|data: &[u8]| {
    check_agrees_with_std(data);
    check_step_is_deterministic(data);
});
