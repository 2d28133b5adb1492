#![no_main]

use huffcode::{build_tree, frequencies, BitString, HuffmanDecoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First half picks the alphabet, second half is an arbitrary packed stream.
    // Decoding garbage may fail but must never panic.
    if data.len() < 2 {
        return;
    }

    let (alphabet, stream) = data.split_at(data.len() / 2);
    let tree = match build_tree(&frequencies(alphabet)) {
        Ok(tree) => tree,
        Err(_) => return,
    };
    let decoder = HuffmanDecoder::new(&tree);

    let bit_len = stream.len() * 8;
    let packed = decoder.decode_packed(stream, bit_len);

    if let Ok(bits) = BitString::from_bytes(stream, bit_len) {
        // Both entry points agree on success or failure
        let unpacked = decoder.decode(&bits);
        assert_eq!(packed.is_ok(), unpacked.is_ok());
        if let (Ok(a), Ok(b)) = (packed, unpacked) {
            assert_eq!(a, b);
        }
    }
});
