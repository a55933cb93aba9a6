#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The loader must reject malformed input with an error, never a panic
    let _ = comparar::loader::samples_from_reader(data);
    let _ = comparar::loader::sized_samples_from_reader(data);
});
