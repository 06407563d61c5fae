//! Conversion between stored 16-byte dish identifiers and UUIDs.
//!
//! Some storage drivers hand back the blob as signed bytes. Every byte must
//! be read as `u8` before it is placed in the UUID, otherwise identifiers
//! with a byte >= 0x80 come out wrong.

use crate::utils::error::{InsightError, Result};
use uuid::Uuid;

pub const IDENTIFIER_LEN: usize = 16;

pub struct IdentifierCodec;

impl IdentifierCodec {
    pub fn decode(raw: &[u8]) -> Result<Uuid> {
        let bytes: [u8; IDENTIFIER_LEN] =
            raw.try_into()
                .map_err(|_| InsightError::InvalidIdentifier { length: raw.len() })?;
        Ok(Uuid::from_bytes(bytes))
    }

    /// Same as [`IdentifierCodec::decode`] for drivers that expose the blob
    /// as `i8` values in `-128..=127`.
    pub fn decode_signed(raw: &[i8]) -> Result<Uuid> {
        let unsigned: Vec<u8> = raw.iter().map(|&b| b as u8).collect();
        Self::decode(&unsigned)
    }

    pub fn encode(id: &Uuid) -> [u8; IDENTIFIER_LEN] {
        *id.as_bytes()
    }

    pub fn encode_signed(id: &Uuid) -> [i8; IDENTIFIER_LEN] {
        id.as_bytes().map(|b| b as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGH_BIT_ID: &str = "ff0e8400-e29b-41d4-a716-4466554400ff";

    #[test]
    fn test_round_trip_with_high_bytes() {
        let id = Uuid::parse_str(HIGH_BIT_ID).unwrap();
        let raw = IdentifierCodec::encode(&id);
        assert_eq!(raw[0], 0xff);
        assert_eq!(raw[1], 0x0e);

        let decoded = IdentifierCodec::decode(&raw).unwrap();
        assert_eq!(decoded.to_string(), HIGH_BIT_ID);
    }

    #[test]
    fn test_signed_bytes_are_reinterpreted_as_unsigned() {
        // The signed view of 0xff 0x0e 0x84 0x00 0xe2 0x9b ...
        let signed: [i8; 16] = [
            -1, 14, -124, 0, -30, -101, 65, -44, -89, 22, 68, 102, 85, 68, 0, -1,
        ];

        let decoded = IdentifierCodec::decode_signed(&signed).unwrap();

        assert_eq!(decoded.to_string(), HIGH_BIT_ID);
    }

    #[test]
    fn test_signed_round_trip() {
        let id = Uuid::parse_str("80808080-8080-8080-8080-808080808080").unwrap();
        let signed = IdentifierCodec::encode_signed(&id);
        assert!(signed.iter().all(|&b| b == i8::MIN));
        assert_eq!(IdentifierCodec::decode_signed(&signed).unwrap(), id);
    }

    #[test]
    fn test_canonical_grouping() {
        let raw: Vec<u8> = (0u8..16).collect();
        let decoded = IdentifierCodec::decode(&raw).unwrap();
        assert_eq!(decoded.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = IdentifierCodec::decode(&[0u8; 15]).unwrap_err();
        assert!(matches!(err, InsightError::InvalidIdentifier { length: 15 }));
        assert!(IdentifierCodec::decode(&[0u8; 17]).is_err());
    }
}
