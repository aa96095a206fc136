// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2025 TITAN Softwork Solutions

/*!
 * ==================================================================================
 *  Repository:   AGERA
 *  Project:      TSS
 *  File:         agera lib
 *  Organization: TITAN Softwork Solutions
 *
 *  Description:
 *  AGERA is a compile-time string obfuscation framework for Rust. String
 *  literals are stripped from the binary at build time and rebuilt on demand
 *  from a 64-bit identifier plus a shared table of masked UTF-16 chunks,
 *  driven by a deterministic two-lane ARX bit-stream generator.
 *
 *  This crate is the user-facing surface: it re-exports the agera_core
 *  runtime (macro expansions resolve `::agera::decode`) together with the
 *  `agera!` / `ageraex!` proc-macros.
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

#![no_std]

pub use agera_core::{decode, decode_units, pool, rng, StringPool, LICENSE, MAX_CHUNK_LENGTH};
pub use agera_macros::{agera, ageraex};
