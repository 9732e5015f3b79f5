#![no_main]

//! Protocol reader fuzzer.
//!
//! Arbitrary bytes fed to the transcript parser must produce either a
//! transcript or a protocol error, never a panic. Anything that parses is
//! replayed through the engine as well.

use canopy::{Engine, Transcript};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(transcript) = Transcript::parse(data) {
        // The reader only accepts trees on board cells, so replay must succeed.
        assert!(transcript.replay(&Engine::default()).is_ok());
    }
});
