//! Integration tests for generator state persistence.
//!
//! Covers the binary codec, the serde representation and the byte reader's
//! buffered word surviving a save/restore.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use proptest::prelude::*;
use zigrand::codec::{marshal, marshal_into, unmarshal};
use zigrand::{FormatErrorReason, Rand, RandError, StateRecord, STATE_LEN};

fn exercised(seed: u64, words: usize, bytes: usize) -> Rand {
    let mut rng = Rand::new(seed);
    for _ in 0..words {
        let _ = rng.next_u64();
    }
    let mut sink = vec![0u8; bytes];
    rng.read(&mut sink);
    rng
}

#[test]
fn restored_generator_replays_every_output_kind() {
    let mut original = exercised(100, 10, 5);
    let mut restored = Rand::unmarshal(&original.marshal().unwrap()).unwrap();

    for _ in 0..50 {
        assert_eq!(original.uint64n(1_000_003).unwrap(), restored.uint64n(1_000_003).unwrap());
        assert_eq!(original.float64().to_bits(), restored.float64().to_bits());
        assert_eq!(original.exp_float64().to_bits(), restored.exp_float64().to_bits());
        assert_eq!(original.norm_float64().to_bits(), restored.norm_float64().to_bits());
    }
    assert_eq!(original.perm(30), restored.perm(30));

    let mut a = [0u8; 21];
    let mut b = [0u8; 21];
    original.read(&mut a);
    restored.read(&mut b);
    assert_eq!(a, b);
}

#[test]
fn pending_read_bytes_survive_restore() {
    // Three bytes read: five bytes of the current word are still pending.
    let mut original = exercised(101, 0, 3);
    let mut restored = unmarshal(&marshal(&original).unwrap()).unwrap();

    let mut expected = [0u8; 5];
    original.read(&mut expected);
    let mut got = [0u8; 5];
    restored.read(&mut got);
    assert_eq!(got, expected);

    // The pending bytes are the top five bytes of the first word.
    let first = Rand::new(101).next_u64().to_le_bytes();
    assert_eq!(got, first[3..]);
}

#[test]
fn marshal_into_writes_same_bytes() {
    let rng = exercised(102, 3, 1);
    let mut buffer = vec![0u8; STATE_LEN];
    assert_eq!(marshal_into(&rng, &mut buffer).unwrap(), STATE_LEN);
    assert_eq!(buffer, rng.marshal().unwrap());
}

#[test]
fn every_single_byte_corruption_is_caught_or_harmless() {
    // Header and reader position bytes must be validated; state bytes may hold any value.
    let good = exercised(103, 1, 1).marshal().unwrap();
    for offset in 0..STATE_LEN {
        let mut bytes = good.clone();
        bytes[offset] ^= 0x80;
        let result = unmarshal(&bytes);
        match offset {
            0..=3 => assert!(matches!(
                result,
                Err(RandError::InvalidFormat { reason: FormatErrorReason::BadMagic { .. } })
            )),
            4 => assert!(matches!(
                result,
                Err(RandError::InvalidFormat {
                    reason: FormatErrorReason::UnsupportedVersion { .. }
                })
            )),
            45 => assert!(matches!(
                result,
                Err(RandError::InvalidFormat {
                    reason: FormatErrorReason::ReadPositionOutOfRange { .. }
                })
            )),
            _ => assert!(result.is_ok(), "offset {offset} rejected"),
        }
    }
}

#[test]
fn failed_unmarshal_from_keeps_target() {
    let mut target = exercised(104, 7, 6);
    let snapshot = target.clone();

    let mut truncated = exercised(105, 0, 0).marshal().unwrap();
    truncated.pop();
    let err = target.unmarshal_from(&truncated).unwrap_err();
    assert!(err.to_string().contains("expected 46 bytes"));
    assert_eq!(target, snapshot);
}

#[test]
fn serde_json_roundtrip_uses_state_record() {
    let original = exercised(106, 2, 2);
    let json = serde_json::to_string(&original).unwrap();
    assert!(json.contains("\"magic\""));
    assert!(json.contains("\"read_pos\":6"));

    let restored: Rand = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn serde_json_rejects_invalid_record() {
    let mut record = StateRecord::from(&exercised(107, 0, 0));
    record.read_pos = 9;
    let json = serde_json::to_string(&record).unwrap();
    let err = serde_json::from_str::<Rand>(&json).unwrap_err();
    assert!(err.to_string().contains("read position 9"), "{err}");

    record.read_pos = 0;
    record.version = 7;
    let json = serde_json::to_string(&record).unwrap();
    assert!(serde_json::from_str::<Rand>(&json).is_err());
}

proptest! {
    /// Property: restoring at any point yields the same next k words.
    #[test]
    fn prop_roundtrip_law(
        seed in any::<u64>(),
        words in 0usize..64,
        bytes in 0usize..16,
        k in 1usize..64,
    ) {
        let mut original = exercised(seed, words, bytes);
        let mut restored = unmarshal(&marshal(&original).unwrap()).unwrap();
        for _ in 0..k {
            prop_assert_eq!(original.next_u64(), restored.next_u64());
        }
    }

    /// Property: arbitrary buffers never panic the decoder.
    #[test]
    fn prop_unmarshal_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = unmarshal(&bytes);
        if bytes.len() != STATE_LEN {
            let is_wrong_length = matches!(
                result,
                Err(RandError::InvalidFormat { reason: FormatErrorReason::WrongLength { .. } })
            );
            prop_assert!(is_wrong_length);
        }
    }

    /// Property: the encoding is a fixed-size function of the state.
    #[test]
    fn prop_marshal_is_fixed_length(seed in any::<u64>(), bytes in 0usize..16) {
        let encoded = exercised(seed, 0, bytes).marshal().unwrap();
        prop_assert_eq!(encoded.len(), STATE_LEN);
        prop_assert_eq!(&encoded[..4], b"ZRNG");
    }
}
