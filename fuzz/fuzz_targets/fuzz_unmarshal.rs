//! Fuzz target for generator state decoding.
//!
//! # Safety Properties Tested
//! - No panics on arbitrary input
//! - Anything that decodes re-encodes to the same bytes

#![no_main]

use libfuzzer_sys::fuzz_target;
use zigrand::codec::{marshal, unmarshal};

fuzz_target!(|data: &[u8]| {
    if let Ok(rng) = unmarshal(data) {
        let encoded = marshal(&rng).expect("decoded state must encode");
        assert_eq!(encoded, data, "decode/encode is not the identity");
    }
});
