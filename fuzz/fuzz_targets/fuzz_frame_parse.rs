#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz the call-frame parser with arbitrary bytes.
fuzz_target!(|data: &[u8]| {
    // Parsing must never panic, and every accessor on a frame that does
    // parse must stay in bounds no matter what the words say.
    if let Ok(frame) = castellan_codec::Frame::parse(data) {
        for index in 0..frame.word_count() + 4 {
            let _ = frame.address_at(index);
            let _ = frame.uint_at(index);
            if let Ok(payload) = frame.bytes_at(index) {
                // Whatever bytes_at hands out must live inside the frame.
                assert!(payload.len() <= data.len());
                let _ = castellan_codec::payload_selector(payload);
            }
        }
    }

    let _ = castellan_codec::payload_selector(data);
});
