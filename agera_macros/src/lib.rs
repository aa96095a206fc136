// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2025 TITAN Softwork Solutions

/*!
 * ==================================================================================
 *  Repository:   AGERA
 *  Project:      TSS
 *  File:         agera_macros lib
 *  Organization: TITAN Softwork Solutions
 *
 *  Description:
 *  AGERA is a compile-time string obfuscation framework for Rust. String
 *  literals are stripped from the binary at build time and rebuilt on demand
 *  from a 64-bit identifier plus a shared table of masked UTF-16 chunks,
 *  driven by a deterministic two-lane ARX bit-stream generator.
 *
 *  agera_macros interns literals through agera_core's StringPool at macro
 *  expansion time and bakes the masked chunk table into the expansion, so
 *  only identifiers and masked units reach the binary.
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

extern crate proc_macro;

use proc_macro::{TokenStream, TokenTree};
use proc_macro2::Literal;
use quote::quote;

use agera_core::{rng, StringPool};

fn parse_literals(input: TokenStream) -> Vec<String> {
    input
        .into_iter()
        .filter_map(|tk| {
            if let TokenTree::Literal(lit) = tk {
                let s = lit.to_string();
                Some(s[1..s.len() - 1].to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Per-expansion entropy: wall clock, pid and thread id folded through the
/// default hasher. Good enough to vary seeds between builds; never a secret.
fn entropy64() -> u64 {
    use std::{
        collections::hash_map::DefaultHasher,
        fmt::Write,
        hash::Hasher,
        process,
        time::{SystemTime, UNIX_EPOCH},
    };

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let pid = process::id();

    let tid_hash = {
        let mut s = String::new();
        write!(&mut s, "{:?}", std::thread::current().id()).unwrap();
        s.bytes()
            .enumerate()
            .fold(0u64, |acc, (i, b)| acc ^ (b as u64).rotate_left(i as u32 % 57))
    };

    let raw = now ^ (pid as u128).rotate_left(17) ^ (tid_hash as u128).rotate_right(13);

    let mut h = DefaultHasher::new();
    h.write_u128(!raw);
    h.finish()
}

/// Push 3..=18 junk units drawn from the generator itself, so length cells
/// never sit at offset zero and tables differ even for identical literals.
fn scatter_decoys(pool: &mut StringPool, entropy: u64) {
    let (count, mut state) = rng::next(rng::seed(entropy));
    let mut junk = Vec::with_capacity(18);
    for _ in 0..(count % 16 + 3) {
        let (unit, next) = rng::next(state);
        junk.push(unit);
        state = next;
    }
    pool.decoy(junk);
}

fn bake_table(pool: &StringPool) -> proc_macro2::TokenStream {
    let chunk_rows = pool.chunks().into_iter().map(|chunk| {
        let units = chunk.iter().map(|u| Literal::u16_unsuffixed(*u));
        quote!(&[#(#units),*])
    });
    quote!(&[#(#chunk_rows),*])
}

/// Build the `agera!("…")` variant
fn exsingle(input: TokenStream) -> TokenStream {
    let plain = parse_literals(input).pop().unwrap_or_default();
    let entropy = entropy64();

    let mut pool = StringPool::new();
    scatter_decoys(&mut pool, entropy);
    let id = pool.intern(&plain, (entropy >> 32) as u32);
    let table = bake_table(&pool);

    let expanded = quote! {{
        let __chunks: &[&[u16]] = #table;
        ::agera::decode(#id, __chunks)
    }};
    expanded.into()
}

/// Build the `ageraex!("…", "…")` variant: one shared table for the list.
fn exmulti(input: TokenStream) -> TokenStream {
    let items = parse_literals(input);
    let entropy = entropy64();

    let mut pool = StringPool::new();
    let ids: Vec<u64> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            scatter_decoys(&mut pool, entropy.rotate_left(i as u32 + 1));
            pool.intern(item, (entropy >> 32) as u32 ^ i as u32)
        })
        .collect();
    let table = bake_table(&pool);

    let expanded = quote! {{
        let __chunks: &[&[u16]] = #table;
        [#(::agera::decode(#ids, __chunks)),*]
    }};
    expanded.into()
}

#[proc_macro]
pub fn agera(input: TokenStream) -> TokenStream {
    exsingle(input)
}

#[proc_macro]
pub fn ageraex(input: TokenStream) -> TokenStream {
    exmulti(input)
}
