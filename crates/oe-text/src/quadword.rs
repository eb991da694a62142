//! Hexadecimal text views of 128-bit register values
//!
//! Words and bytes are printed in memory order: word 0 (the least
//! significant 32 bits) comes first.

use std::fmt::{self, Write};

/// A 128-bit value as held in a 128-bit GPR or VU register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quadword(pub u128);

impl Quadword {
    /// Build from four 32-bit words, word 0 least significant
    pub fn from_words(words: [u32; 4]) -> Self {
        let value = words
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | w as u128);
        Self(value)
    }

    pub fn words(&self) -> [u32; 4] {
        [0, 1, 2, 3].map(|i| (self.0 >> (32 * i)) as u32)
    }

    pub fn bytes(&self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// `0xWWWWWWWW.WWWWWWWW.WWWWWWWW.WWWWWWWW`
    pub fn to_hex_words(&self) -> String {
        let mut out = String::with_capacity(38);
        let _ = self.write_hex_words(&mut out);
        out
    }

    /// `0xWWWWWWWWWWWWWWWW.WWWWWWWWWWWWWWWW`
    pub fn to_hex_dwords(&self) -> String {
        let mut out = String::with_capacity(35);
        let _ = self.write_hex_dwords(&mut out);
        out
    }

    /// `0xBB.BB.BB...` over all sixteen bytes
    pub fn to_hex_bytes(&self) -> String {
        let mut out = String::with_capacity(49);
        let _ = self.write_hex_bytes(&mut out);
        out
    }

    pub fn write_hex_words<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let [w0, w1, w2, w3] = self.words();
        write!(dest, "0x{w0:08X}.{w1:08X}.{w2:08X}.{w3:08X}")
    }

    pub fn write_hex_dwords<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let [w0, w1, w2, w3] = self.words();
        write!(dest, "0x{w0:08X}{w1:08X}.{w2:08X}{w3:08X}")
    }

    pub fn write_hex_bytes<W: Write>(&self, dest: &mut W) -> fmt::Result {
        let bytes = self.bytes();
        write!(dest, "0x{:02X}.{:02X}", bytes[0], bytes[1])?;
        for pair in bytes[2..].chunks_exact(2) {
            write!(dest, ".{:02X}.{:02X}", pair[0], pair[1])?;
        }
        Ok(())
    }
}

impl From<u128> for Quadword {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Quadword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex_words(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u32; 4] = [0x0011_2233, 0x4455_6677, 0x8899_AABB, 0xCCDD_EEFF];

    #[test]
    fn test_word_order() {
        let q = Quadword::from_words(SAMPLE);
        assert_eq!(q.words(), SAMPLE);
        assert_eq!(q.0 as u32, 0x0011_2233);
    }

    #[test]
    fn test_hex_words() {
        let q = Quadword::from_words(SAMPLE);
        assert_eq!(q.to_hex_words(), "0x00112233.44556677.8899AABB.CCDDEEFF");
        assert_eq!(q.to_string(), q.to_hex_words());
    }

    #[test]
    fn test_hex_dwords() {
        let q = Quadword::from_words(SAMPLE);
        assert_eq!(q.to_hex_dwords(), "0x0011223344556677.8899AABBCCDDEEFF");
    }

    #[test]
    fn test_hex_bytes() {
        let q = Quadword::from_words([0x0403_0201, 0, 0, 0xFF00_0000]);
        assert_eq!(
            q.to_hex_bytes(),
            "0x01.02.03.04.00.00.00.00.00.00.00.00.00.00.00.FF"
        );
    }

    #[test]
    fn test_write_appends() {
        let mut out = String::from("r1=");
        Quadword(0).write_hex_dwords(&mut out).unwrap();
        assert_eq!(out, "r1=0x0000000000000000.0000000000000000");
    }
}
