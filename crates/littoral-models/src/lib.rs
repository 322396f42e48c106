//! Simulation models for the Littoral coastal erosion simulator.
//!
//! Two lattice models share one [`Grid`](littoral_core::Grid):
//!
//! 1. [`InvasionPercolation`]: erodes Solid cells one at a time, always
//!    taking the most invadable site on the fluid front, until the front
//!    reaches the landward boundary (`x = N - 1`).
//! 2. [`KawasakiDiffusion`]: Metropolis Monte-Carlo exchange of
//!    neighbouring Fluid/Solid pairs, conserving the count of each kind.
//!
//! Supporting pieces: [`RandomField`] (pore incursion probabilities),
//! [`GrowthFrontier`] (max-ordered invadable sites), [`AcceptanceTable`]
//! (precomputed Metropolis factors) and the [`hamiltonian`] energy terms.
//!
//! Both models are configured through validating builders and are
//! stateless between runs: every `run` call builds fresh internal state
//! and draws from a single run-scoped ChaCha8 stream.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod acceptance;
pub mod frontier;
pub mod hamiltonian;
pub mod invasion;
pub mod kawasaki;
pub mod random_field;

pub use acceptance::{AcceptanceParams, AcceptanceTable};
pub use frontier::{FrontierEntry, GrowthFrontier};
pub use invasion::{InvasionOutcome, InvasionPercolation, InvasionStatus};
pub use kawasaki::{DiffusionReport, KawasakiDiffusion};
pub use random_field::RandomField;
