//! Travel-order optimization for machine heads.
//!
//! Given a set of spatial targets a head must visit, and a way to estimate
//! the time or distance of moving between two of them, this crate computes
//! a visiting order that minimizes total travel cost. Two components:
//!
//! - **Cost estimation** ([`cost`]): motion-time estimation from per-axis
//!   acceleration and feedrate limits using a trapezoidal velocity-profile
//!   approximation, with a plain Euclidean-distance fallback. Axes move
//!   concurrently, so per-axis estimates combine by maximum.
//! - **Tour optimization** ([`tour`]): a simulated-annealing solver over
//!   visiting orders with two neighborhood moves — position swaps and
//!   sub-sequence reversals ("twists") — each scored by an O(1) incremental
//!   cost delta rather than a full tour re-summation. Twists are what let
//!   the solver untangle crossing edges quickly on the rectangularly
//!   arrayed target patterns typical of pick-and-place machines.
//!
//! The solver is single-threaded and synchronous; a full solve runs to
//! completion on the calling thread. It is deterministic for a fixed seed,
//! and a cancellation flag can be threaded through long solves.
//!
//! # Examples
//!
//! ```
//! use u_travel::geom::Point;
//! use u_travel::tour::TourSolver;
//!
//! let targets = vec![
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(0.0, 1.0, 0.0),
//!     Point::new(1.0, 1.0, 0.0),
//!     Point::new(1.0, 0.0, 0.0),
//! ];
//! let mut solver = TourSolver::new(targets, None, None);
//! let report = solver.solve();
//! assert!(report.best_cost <= 4.0 + 1e-9);
//! ```

pub mod cost;
pub mod geom;
pub mod tour;
