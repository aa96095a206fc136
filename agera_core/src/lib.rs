// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2025 TITAN Softwork Solutions

/*!
 * ==================================================================================
 *  Repository:   AGERA
 *  Project:      TSS
 *  File:         agera_core lib
 *  Organization: TITAN Softwork Solutions
 *
 *  Description:
 *  AGERA is a compile-time string obfuscation framework for Rust. String
 *  literals are stripped from the binary at build time and rebuilt on demand
 *  from a 64-bit identifier plus a shared table of masked UTF-16 chunks,
 *  driven by a deterministic two-lane ARX bit-stream generator.
 *
 *  agera_core carries the runtime engine:
 *
 *  rng:    seeded bit-stream generator (frozen algorithm)
 *  decode: chunk decoder, identifier + table -> string
 *  pool:   string pool, the symmetric encoder used at build time
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

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub const LICENSE: &str = "AGPL-3.0 © 2025 TITAN Softwork Solutions | AGERA";

pub mod decode;
pub mod pool;
pub mod rng;

/// Maximum number of UTF-16 code units per chunk. Logical positions map to
/// `(p / MAX_CHUNK_LENGTH, p % MAX_CHUNK_LENGTH)`, so every chunk except the
/// last must hold exactly this many units. Frozen alongside the generator
/// constants; masked tables produced against one value never decode under
/// another.
pub const MAX_CHUNK_LENGTH: usize = 0x1fff;

pub use decode::{decode, decode_units};
pub use pool::StringPool;
