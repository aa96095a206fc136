#![doc = r#"
# Bit-Stream Generator (no_std, deterministic)

Seeded pseudo-random stream driving the AGERA mask. Two stages:

- [`seed`]: 64-bit multiply-xorshift finalizer collapsing an identifier's low
  word into a 32-bit starting state.
- [`next`]: ARX step over two independent 16-bit lanes, yielding one 16-bit
  mask unit and the successor state per call.

This is *not* a cryptographic generator. It is a fast, reversible obfuscation
stream: the encoder and decoder re-derive the identical sequence from the
identical seed, so every add, shift and rotate below is a frozen contract.
Changing any constant orphans every table ever produced against it.
"#]

/// Collapse `x` into a 32-bit generator state.
///
/// Callers pass the identifier's low 32 bits widened to `u64`; all arithmetic
/// is wrapping, all shifts logical. The final `>> 32` of a 64-bit product
/// leaves the upper word zero, so the truncation is lossless.
#[inline(always)]
pub fn seed(x: u64) -> u32 {
    let z = (x ^ (x >> 33)).wrapping_mul(0x62a9_d9ed_7997_05f5);
    (((z ^ (z >> 28)).wrapping_mul(0xcb24_d0a5_c88c_35b3)) >> 32) as u32
}

/// Advance the generator one step.
///
/// Splits `state` into lanes `s0` (low) and `s1` (high), mixes with 16-bit
/// wrapping adds and circular rotates (9 / 13 / 10, shift 5), and returns the
/// 16-bit output together with the repacked successor state.
#[inline(always)]
pub fn next(state: u32) -> (u16, u32) {
    let s0 = state as u16;
    let s1 = (state >> 16) as u16;

    let out = s0.wrapping_add(s1).rotate_left(9).wrapping_add(s0);

    let s1 = s1 ^ s0;
    let s0 = s0.rotate_left(13) ^ s1 ^ (s1 << 5);
    let s1 = s1.rotate_left(10);

    (out, ((s1 as u32) << 16) | s0 as u32)
}
