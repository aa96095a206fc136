#![doc = r#"
# Chunk Decoder (no_std, deterministic)

Rebuilds an obfuscated string from its 64-bit identifier and the shared table
of masked UTF-16 chunks. The identifier's low word seeds the generator; two
generator outputs XOR the identifier's high word into the logical position of
the string's length cell; every cell after that is a one-time-pad unmask of
the stored unit against the continuing stream.

Chunks are raw `u16` code units, not `str`: masked payloads cover the full
0..=0xFFFF range, including values UTF-8 cannot carry.

A position outside the table is a build/runtime version skew, never
legitimate input, and panics through the bounds check rather than being
clamped or wrapped.
"#]

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::{rng, MAX_CHUNK_LENGTH};

/// Unmask the code unit at logical position `pos`, advancing the stream once.
#[inline(always)]
fn unit_at<C: AsRef<[u16]>>(pos: usize, chunks: &[C], state: u32) -> (u16, u32) {
    let (mask, state) = rng::next(state);
    let raw = chunks[pos / MAX_CHUNK_LENGTH].as_ref()[pos % MAX_CHUNK_LENGTH];
    (mask ^ raw, state)
}

/// Recover the raw UTF-16 code units addressed by `id`.
///
/// The first unmasked cell is the output length `L`; the following `L` cells
/// are the payload, unmasked sequentially against the same stream. `L == 0`
/// yields an empty buffer with no further generator advances.
pub fn decode_units<C: AsRef<[u16]>>(id: u64, chunks: &[C]) -> Vec<u16> {
    let state = rng::seed(id & 0xffff_ffff);
    let (lo, state) = rng::next(state);
    let (hi, state) = rng::next(state);
    let low = lo as u32;
    let high = (hi as u32) << 16;

    let base = (((id >> 32) as u32) ^ low ^ high) as usize;

    let (len, mut state) = unit_at(base, chunks, state);
    let mut units = Vec::with_capacity(len as usize);
    for i in 0..len as usize {
        let (unit, next) = unit_at(base + i + 1, chunks, state);
        units.push(unit);
        state = next;
    }
    units
}

/// Recover the string addressed by `id`.
///
/// # Panics
/// - If `id` and `chunks` were not produced together (out-of-range access)
/// - If the recovered units are not well-formed UTF-16
pub fn decode<C: AsRef<[u16]>>(id: u64, chunks: &[C]) -> String {
    let mut units = decode_units(id, chunks);
    let text = String::from_utf16(&units).expect("AGERA: invalid UTF-16");
    units.zeroize();
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::StringPool;

    // `StringPool::intern("AGERA", 0x12345678)` into an empty pool, from a
    // trusted reference run.
    const GOLDEN_ID: u64 = 0xbb48_7096_1234_5678;
    const GOLDEN_CHUNK: &[u16] = &[0x8d1c, 0xa030, 0x4b71, 0x054d, 0x110f, 0x0a45];

    #[test]
    fn golden_identifier_decodes() {
        assert_eq!(decode(GOLDEN_ID, &[GOLDEN_CHUNK]), "AGERA");
    }

    #[test]
    fn identifier_zero_against_zero_cell_is_empty() {
        // seed(0) == 0 and the zero state is a fixed point, so every derived
        // value is 0: position 0, mask 0, and a stored 0 unmasks to length 0.
        let chunks: &[&[u16]] = &[&[0]];
        assert_eq!(decode(0, chunks), "");
    }

    #[test]
    fn decode_is_deterministic() {
        let first = decode(GOLDEN_ID, &[GOLDEN_CHUNK]);
        let second = decode(GOLDEN_ID, &[GOLDEN_CHUNK]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_string_roundtrip() {
        let mut pool = StringPool::new();
        let id = pool.intern("", 0x0bad_cafe);
        assert_eq!(decode(id, &pool.chunks()), "");
    }

    #[test]
    fn unicode_roundtrip() {
        let mut pool = StringPool::new();
        let texts = ["a", "KOENIG \u{00c5}GERA", "\u{1F680} surrogate pairs \u{1F512}", "日本語"];
        let ids: Vec<u64> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| pool.intern(t, 0x517e_ed00 ^ i as u32))
            .collect();
        let chunks = pool.chunks();
        for (id, text) in ids.iter().zip(texts) {
            assert_eq!(decode(*id, &chunks), text);
        }
    }

    #[test]
    fn full_code_unit_range_roundtrip() {
        // Every u16 value, surrogates included, split across two pool entries
        // (the length cell caps a single entry at 65535 units).
        let all: Vec<u16> = (0..=0xffffu16).collect();
        let (front, back) = all.split_at(0x8000);

        let mut pool = StringPool::new();
        let id_front = pool.intern_units(front, 0x0001_0001);
        let id_back = pool.intern_units(back, 0xfeed_f00d);
        let chunks = pool.chunks();

        assert_eq!(decode_units(id_front, &chunks), front);
        assert_eq!(decode_units(id_back, &chunks), back);
    }

    #[test]
    fn cells_straddling_a_chunk_boundary() {
        let mut pool = StringPool::new();
        // Park the length cell three units shy of the first boundary so the
        // payload crosses into the second chunk.
        pool.decoy((0..MAX_CHUNK_LENGTH as u16 - 3).map(|u| u ^ 0x5a5a));
        let id = pool.intern("boundary straddle", 0x2545_f491);
        let chunks = pool.chunks();
        assert_eq!(chunks.len(), 2);
        assert_eq!(decode(id, &chunks), "boundary straddle");
    }

    #[test]
    fn large_output_spans_many_chunks() {
        let big: Vec<u16> = (0..65535u32).map(|i| (i.wrapping_mul(0x9e37_79b1) >> 8) as u16).collect();
        let mut pool = StringPool::new();
        let id = pool.intern_units(&big, 0xcafe_babe);
        let chunks = pool.chunks();
        assert_eq!(chunks.len(), 9);
        assert_eq!(decode_units(id, &chunks), big);
    }

    #[test]
    #[should_panic]
    fn out_of_range_identifier_is_fatal() {
        // High word pushes the derived position far past the table.
        let chunks: &[&[u16]] = &[&[0]];
        decode(0xffff_ffff_0000_0000, chunks);
    }
}
