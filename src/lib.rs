/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graphs;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::Adjacency;
}

/// Use `use webgraph_msbfs::prelude::*;` to import common utilities, modules
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::msbfs;
    pub use algo::msbfs::{Direction, Discovery, MsBfsError, ParMsBfs, SeqMsBfs};
    pub use graphs::{check_symmetric, SymmCsrGraph};
    pub use traits::*;
    pub use utils::Threads;
}
