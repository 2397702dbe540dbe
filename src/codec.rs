//! Binary persistence of generator state.
//!
//! A [`Rand`] is encoded as a fixed 46-byte, little-endian, versioned buffer:
//!
//! | offset | size | field                                   |
//! |-------:|-----:|-----------------------------------------|
//! | 0      | 4    | magic `b"ZRNG"`                         |
//! | 4      | 1    | format version, currently `1`           |
//! | 5      | 32   | engine words `a, b, c, counter` (`u64`) |
//! | 37     | 8    | byte reader's pending word (`u64`)      |
//! | 45     | 1    | byte reader's pending byte count (`u8`) |
//!
//! Encoding goes through bincode with fixed-width integers, so the layout never
//! depends on the values stored. Decoding validates the whole buffer before a
//! generator is built; a rejected buffer never alters an existing generator.
//!
//! # Examples
//!
//! ```
//! use zigrand::Rand;
//!
//! let mut rng = Rand::new(7);
//! let _ = rng.next_u64();
//! let saved = rng.marshal()?;
//!
//! let mut restored = Rand::unmarshal(&saved)?;
//! assert_eq!(rng.next_u64(), restored.next_u64());
//! # Ok::<(), zigrand::RandError>(())
//! ```

use crate::engine::Sfc64;
use crate::error::{FormatErrorReason, RandError, RandResult};
use crate::rand::Rand;
use serde::{Deserialize, Serialize};

/// Magic bytes opening every encoded state.
pub const MAGIC: [u8; 4] = *b"ZRNG";

/// The format version this build writes and reads.
pub const VERSION: u8 = 1;

/// Exact length of an encoded state in bytes.
pub const STATE_LEN: usize = 46;

fn config() -> impl bincode::config::Config {
    bincode::config::standard()
        .with_fixed_int_encoding()
        .with_little_endian()
}

/// The on-wire form of a generator, field for field.
///
/// Also the serde representation of [`Rand`]: deserializing any format goes through
/// the same validation as [`unmarshal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateRecord {
    /// Must equal [`MAGIC`].
    pub magic: [u8; 4],
    /// Must equal [`VERSION`].
    pub version: u8,
    /// Engine words `[a, b, c, counter]`.
    pub state: [u64; 4],
    /// Pending byte-reader word.
    pub read_val: u64,
    /// Pending byte count, `0..=7`.
    pub read_pos: u8,
}

impl From<&Rand> for StateRecord {
    fn from(rand: &Rand) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            state: rand.engine.to_words(),
            read_val: rand.read_val,
            read_pos: rand.read_pos,
        }
    }
}

impl From<Rand> for StateRecord {
    fn from(rand: Rand) -> Self {
        Self::from(&rand)
    }
}

impl TryFrom<StateRecord> for Rand {
    type Error = RandError;

    fn try_from(record: StateRecord) -> RandResult<Self> {
        if record.magic != MAGIC {
            return Err(rejected(FormatErrorReason::BadMagic {
                found: record.magic,
            }));
        }
        if record.version != VERSION {
            return Err(rejected(FormatErrorReason::UnsupportedVersion {
                found: record.version,
                supported: VERSION,
            }));
        }
        if record.read_pos > 7 {
            return Err(rejected(FormatErrorReason::ReadPositionOutOfRange {
                found: record.read_pos,
            }));
        }
        Ok(Self {
            engine: Sfc64::from_words(record.state),
            read_val: record.read_val,
            read_pos: record.read_pos,
        })
    }
}

fn rejected(reason: FormatErrorReason) -> RandError {
    tracing::debug!(%reason, "rejected generator state");
    RandError::invalid_format(reason)
}

/// Encodes `rand` into a new [`STATE_LEN`]-byte vector.
pub fn marshal(rand: &Rand) -> RandResult<Vec<u8>> {
    bincode::serde::encode_to_vec(StateRecord::from(rand), config()).map_err(|e| {
        RandError::invalid_format(FormatErrorReason::Encode {
            message: e.to_string(),
        })
    })
}

/// Encodes `rand` into the front of `buffer`, returning the bytes written ([`STATE_LEN`]).
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `buffer` is shorter than [`STATE_LEN`].
pub fn marshal_into(rand: &Rand, buffer: &mut [u8]) -> RandResult<usize> {
    if buffer.len() < STATE_LEN {
        return Err(RandError::invalid_argument(
            "marshal_into",
            format!("buffer needs {} bytes, got {}", STATE_LEN, buffer.len()),
        ));
    }
    bincode::serde::encode_into_slice(StateRecord::from(rand), buffer, config()).map_err(|e| {
        RandError::invalid_format(FormatErrorReason::Encode {
            message: e.to_string(),
        })
    })
}

/// Decodes a generator from exactly [`STATE_LEN`] bytes.
///
/// # Errors
///
/// Returns [`RandError::InvalidFormat`] if the length, magic, version or reader
/// position is wrong.
pub fn unmarshal(bytes: &[u8]) -> RandResult<Rand> {
    if bytes.len() != STATE_LEN {
        return Err(rejected(FormatErrorReason::WrongLength {
            expected: STATE_LEN,
            actual: bytes.len(),
        }));
    }
    let (record, _) = bincode::serde::decode_from_slice::<StateRecord, _>(bytes, config())
        .map_err(|e| {
            rejected(FormatErrorReason::Decode {
                message: e.to_string(),
            })
        })?;
    Rand::try_from(record)
}

impl Rand {
    /// Encodes this generator. See [`marshal`].
    pub fn marshal(&self) -> RandResult<Vec<u8>> {
        marshal(self)
    }

    /// Decodes a generator. See [`unmarshal`].
    pub fn unmarshal(bytes: &[u8]) -> RandResult<Self> {
        unmarshal(bytes)
    }

    /// Replaces this generator's state with the decoded `bytes`.
    ///
    /// On error `self` is left exactly as it was.
    pub fn unmarshal_from(&mut self, bytes: &[u8]) -> RandResult<()> {
        *self = unmarshal(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;

    fn advanced(seed: u64) -> Rand {
        let mut rng = Rand::new(seed);
        let _ = rng.next_u64();
        let mut partial = [0u8; 3];
        rng.read(&mut partial);
        rng
    }

    #[test]
    fn test_layout() {
        let rng = advanced(1);
        let bytes = rng.marshal().unwrap();
        assert_eq!(bytes.len(), STATE_LEN);
        assert_eq!(&bytes[0..4], b"ZRNG");
        assert_eq!(bytes[4], VERSION);

        let words = rng.engine().to_words();
        for (i, word) in words.iter().enumerate() {
            let start = 5 + i * 8;
            assert_eq!(&bytes[start..start + 8], &word.to_le_bytes());
        }
        assert_eq!(&bytes[37..45], &rng.read_val.to_le_bytes());
        assert_eq!(bytes[45], 5);
    }

    #[test]
    fn test_roundtrip_continues_sequence() {
        let mut original = advanced(2);
        let mut restored = unmarshal(&marshal(&original).unwrap()).unwrap();
        assert_eq!(restored, original);

        for _ in 0..100 {
            assert_eq!(restored.next_u64(), original.next_u64());
        }
        let mut a = [0u8; 13];
        let mut b = [0u8; 13];
        original.read(&mut a);
        restored.read(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_marshal_into() {
        let rng = advanced(3);
        let mut buffer = [0xEEu8; 64];
        assert_eq!(marshal_into(&rng, &mut buffer).unwrap(), STATE_LEN);
        assert_eq!(&buffer[..STATE_LEN], rng.marshal().unwrap().as_slice());
        assert_eq!(buffer[STATE_LEN], 0xEE);

        let mut short = [0u8; STATE_LEN - 1];
        assert!(matches!(
            marshal_into(&rng, &mut short),
            Err(RandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_wrong_length() {
        let bytes = advanced(4).marshal().unwrap();
        for len in [0, 1, STATE_LEN - 1] {
            let err = unmarshal(&bytes[..len]).unwrap_err();
            assert_eq!(
                err,
                RandError::InvalidFormat {
                    reason: FormatErrorReason::WrongLength {
                        expected: STATE_LEN,
                        actual: len
                    }
                }
            );
        }
        let mut long = bytes;
        long.push(0);
        assert!(unmarshal(&long).is_err());
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = advanced(5).marshal().unwrap();
        bytes[0] = b'X';
        let err = unmarshal(&bytes).unwrap_err();
        assert_eq!(
            err,
            RandError::InvalidFormat {
                reason: FormatErrorReason::BadMagic { found: *b"XRNG" }
            }
        );
    }

    #[test]
    fn test_unsupported_version() {
        let mut bytes = advanced(6).marshal().unwrap();
        bytes[4] = 2;
        let err = unmarshal(&bytes).unwrap_err();
        assert_eq!(
            err,
            RandError::InvalidFormat {
                reason: FormatErrorReason::UnsupportedVersion {
                    found: 2,
                    supported: 1
                }
            }
        );
    }

    #[test]
    fn test_read_position_out_of_range() {
        let mut bytes = advanced(7).marshal().unwrap();
        bytes[45] = 8;
        let err = unmarshal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            RandError::InvalidFormat {
                reason: FormatErrorReason::ReadPositionOutOfRange { found: 8 }
            }
        ));
    }

    #[test]
    fn test_failed_unmarshal_from_leaves_state() {
        let mut target = advanced(8);
        let before = target.clone();

        let mut bad = advanced(9).marshal().unwrap();
        bad[4] = 0;
        assert!(target.unmarshal_from(&bad).is_err());
        assert!(target.unmarshal_from(&bad[..10]).is_err());
        assert_eq!(target, before);

        let good = advanced(9).marshal().unwrap();
        target.unmarshal_from(&good).unwrap();
        assert_eq!(target, advanced(9));
    }

    #[test]
    fn test_any_engine_words_decode() {
        let mut bytes = Rand::new(0).marshal().unwrap();
        bytes[5..37].fill(0);
        let mut rng = unmarshal(&bytes).unwrap();
        assert_eq!(rng.engine().to_words(), [0; 4]);
        // All-zero state is a valid SFC64 state: the counter keeps it moving.
        assert_eq!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }
}
