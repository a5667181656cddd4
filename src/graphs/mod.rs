/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs as seen by multi-source breadth-first visits.
//!
//! The visits in [`msbfs`](crate::algo::msbfs) need very little from a
//! graph: the number of nodes, the degree of a node and the list of its
//! neighbors. The [`Adjacency`] trait collects these capabilities; it is
//! implemented by every [`RandomAccessGraph`](webgraph::traits::RandomAccessGraph)
//! and by [`SymmCsrGraph`], a small in-memory undirected graph.

mod adjacency;
pub use adjacency::*;

mod symm_csr;
pub use symm_csr::*;
