#![doc = r#"
# String Pool (build-time encoder)

The symmetric inverse of the decoder. All strings destined for one binary are
interned into a single logical stream of masked UTF-16 code units; each
intern runs the identical generator sequence the decoder will run, XORs it
over the length cell and payload, and folds the string's stream position into
the high word of the returned identifier.

The pool lives at build time only (macro expansion or an external packer);
the runtime ships nothing but the chunked stream and the identifiers.
"#]

use alloc::string::String;
use alloc::vec::Vec;

use crate::{rng, MAX_CHUNK_LENGTH};

/// Accumulates masked strings into one logical stream.
#[derive(Default)]
pub struct StringPool {
    units: Vec<u16>,
}

impl StringPool {
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Number of code units interned so far (the next length cell's position).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append raw filler units that belong to no string, so length cells do
    /// not sit at predictable offsets.
    pub fn decoy(&mut self, junk: impl IntoIterator<Item = u16>) {
        self.units.extend(junk);
    }

    /// Intern `text` under `seed_low`, returning its identifier.
    pub fn intern(&mut self, text: &str, seed_low: u32) -> u64 {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.intern_units(&units, seed_low)
    }

    /// Intern raw code units under `seed_low`, returning the identifier the
    /// decoder resolves them with.
    ///
    /// # Panics
    /// If `units` exceeds 65535 entries; the length cell is 16 bits.
    pub fn intern_units(&mut self, units: &[u16], seed_low: u32) -> u64 {
        assert!(units.len() <= 0xffff, "AGERA: string exceeds 65535 UTF-16 units");

        // Mirror the decoder's derivation so base position XOR low XOR high
        // reproduces the high identifier word.
        let base = self.units.len() as u32;
        let state = rng::seed(seed_low as u64);
        let (lo, state) = rng::next(state);
        let (hi, state) = rng::next(state);
        let id_high = base ^ lo as u32 ^ ((hi as u32) << 16);

        let (mask, mut state) = rng::next(state);
        self.units.push(mask ^ units.len() as u16);
        for &unit in units {
            let (mask, next) = rng::next(state);
            self.units.push(mask ^ unit);
            state = next;
        }

        ((id_high as u64) << 32) | seed_low as u64
    }

    /// Split the stream into table chunks. Every chunk except the last holds
    /// exactly [`MAX_CHUNK_LENGTH`] units; the positional addressing
    /// arithmetic depends on that.
    pub fn chunks(&self) -> Vec<Vec<u16>> {
        self.units.chunks(MAX_CHUNK_LENGTH).map(<[u16]>::to_vec).collect()
    }

    /// Render each chunk as escaped source-literal text, for packers that
    /// emit tables into generated code.
    pub fn chunk_literals(&self) -> Vec<String> {
        use core::fmt::Write;

        self.chunks()
            .iter()
            .map(|chunk| {
                let mut lit = String::with_capacity(chunk.len() * 8);
                for unit in chunk {
                    let _ = write!(lit, "\\u{{{unit:04x}}}");
                }
                lit
            })
            .collect()
    }
}
