use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::piece::PieceKind;

/// Seeded generator of piece kinds.
///
/// Every draw is an independent uniform pick among the 7 kinds. There is
/// deliberately no bag or drought protection: repeats and long runs are
/// part of the game's behavior, not a deficiency of this generator.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: Pcg32,
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource {
    /// Creates a source with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but deterministic: the same seed yields the same
    /// kind sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Draws the next piece kind.
    pub fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}

/// 128-bit seed for deterministic piece generation.
///
/// The wire format is a 32-character lowercase hex string (big-endian), the
/// same on the serde and [`FromStr`] paths, so a seed printed from one run
/// can be passed back on the command line to replay the piece sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

/// Error for seed strings that are not 32 hex characters.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece seed must be exactly 32 hex characters")]
pub struct ParsePieceSeedError;

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParsePieceSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid seed: {hex_str}")))
    }
}

impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_same_sequence() {
        let seed: PieceSeed = rand::rng().random();
        let mut a = PieceSource::with_seed(seed);
        let mut b = PieceSource::with_seed(seed);
        for _ in 0..20 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn draws_cover_every_kind() {
        // Uniform draws over 7 kinds: 1000 draws miss a kind with
        // probability ~1e-66, so this is effectively deterministic.
        let mut source = PieceSource::with_seed(PieceSeed([7; 16]));
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..1000 {
            seen[source.next_kind() as usize] = true;
        }
        assert_eq!(seen, [true; PieceKind::LEN]);
    }

    #[test]
    fn seed_serializes_as_32_char_hex() {
        let seed = PieceSeed([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");

        let deserialized: PieceSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, seed);
    }

    #[test]
    fn seed_parses_from_hex_string() {
        let seed: PieceSeed = "0123456789abcdeffedcba9876543210".parse().unwrap();
        let roundtrip = serde_json::to_string(&seed).unwrap();
        assert_eq!(roundtrip, "\"0123456789abcdeffedcba9876543210\"");

        // Uppercase input is accepted; output is always lowercase.
        assert!("0123456789ABCDEFFEDCBA9876543210".parse::<PieceSeed>().is_ok());
    }

    #[test]
    fn malformed_seeds_are_rejected() {
        assert!("".parse::<PieceSeed>().is_err());
        assert!("0123".parse::<PieceSeed>().is_err());
        assert!(
            "0123456789abcdeffedcba98765432100"
                .parse::<PieceSeed>()
                .is_err()
        );
        assert!(
            "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<PieceSeed>()
                .is_err()
        );
        assert!(serde_json::from_str::<PieceSeed>("\"xyz\"").is_err());
    }
}
