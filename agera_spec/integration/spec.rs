// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2025 TITAN Softwork Solutions

/*!
 * ==================================================================================
 *  Repository:   AGERA
 *  Project:      TSS
 *  File:         agera_spec main/spec
 *  Organization: TITAN Softwork Solutions
 *
 *  Description:
 *  AGERA is a compile-time string obfuscation framework for Rust. String
 *  literals are stripped from the binary at build time and rebuilt on demand
 *  from a 64-bit identifier plus a shared table of masked UTF-16 chunks,
 *  driven by a deterministic two-lane ARX bit-stream generator.
 *
 *  License:      GNU Affero General Public License v3.0 (AGPL-3.0)
 *  Copyright:    (C) 2025 TITAN Softwork Solutions. All rights reserved.
 *
 *  Licensing Terms:
 *  ----------------------------------------------------------------------------------
 *   - You are free to use, modify, and share this software under the terms of AGPL-3.0.
 *   - All derivative works must also be licensed under AGPL-3.0.
 *   - Commercial use, distribution, or deployment must adhere to AGPL obligations.
 *   - Proper attribution must be given to TITAN Softwork Solutions.
 *   - Modifications must be clearly documented.
 *   - This software is provided "as-is" without warranties of any kind.
 *
 *  Full License: https://www.gnu.org/licenses/agpl-3.0.html
 * ==================================================================================
 */

use agera::{agera, ageraex, decode, StringPool};

// Diagnostic CLI runner (cargo test -- --nocapture or `cargo run --bin diagnostic`)
fn main() {
    println!("==============================");
    println!("RUNNING AGERA ENGINE DIAGNOSTIC\n");

    test_macro_diag();
    test_pool_diag();

    println!("\nALL DIAGNOSTIC TESTS COMPLETED");
    println!("==============================");
}

// Diagnostic output versions (manual test/debug)
fn test_macro_diag() {
    let secret = agera!("AGERA QUdFUkE=");
    let [a, b]: [String; 2] = ageraex!("odium", "andromeda");

    println!("[[ AGERA MACROS ]]");
    println!("> agera:            {}", secret);
    println!("> ageraex[0]:       {}", a);
    println!("> ageraex[1]:       {}", b);
}

fn test_pool_diag() {
    let mut pool = StringPool::new();
    let id = pool.intern("runtime-interned", 0x7a11_ad00);
    let chunks = pool.chunks();

    println!("\n[[ AGERA POOL ]]");
    println!("> id:               {:#018x}", id);
    println!("> chunks:           {}", chunks.len());
    println!("> decoded:          {}", decode(id, &chunks));
}

// Unit tests (standard cargo test)
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agera_macro() {
        let secret = agera!("AGERA QUdFUkE=");
        assert_eq!(secret, "AGERA QUdFUkE=");
    }

    #[test]
    fn test_agera_macro_empty() {
        let empty = agera!("");
        assert_eq!(empty, "");
    }

    #[test]
    fn test_ageraex_macro() {
        let [a, b, c]: [String; 3] = ageraex!("amnesia", "distortion", "deep-fusion");
        assert_eq!(a, "amnesia");
        assert_eq!(b, "distortion");
        assert_eq!(c, "deep-fusion");
    }

    #[test]
    fn test_macro_repeated_expansion_is_stable() {
        // Two expansions of the same literal carry independent tables and
        // identifiers but must recover identical text.
        let first = agera!("volume-two");
        let second = agera!("volume-two");
        assert_eq!(first, second);
    }

    #[test]
    fn test_pool_and_decode_surface() {
        let mut pool = StringPool::new();
        let id = pool.intern("space-attack", 0x0bd1_77e5);
        assert_eq!(decode(id, &pool.chunks()), "space-attack");
    }
}
