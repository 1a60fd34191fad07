//! Simulated-annealing tour optimization.
//!
//! Finds a good visiting order for a list of travel targets: "given these
//! locations, what is the cheapest route that visits each one?" An optional
//! start and/or end location (e.g. the current head position, or the
//! location of the next task) can pin the route's boundaries; passing the
//! same location for both forms a closed loop, and leaving either open lets
//! the solver pick that boundary freely.
//!
//! Beyond the schoolbook swap neighborhood the solver also uses "twists"
//! that reverse the travel direction between the two chosen positions.
//! Twists improve solutions a lot in practice because they let the solver
//! quickly untangle routes at or near crossing points, which appear
//! frequently in the rectangularly arrayed target patterns typical of
//! pick-and-place machines.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod svg;
mod types;

pub use config::TourConfig;
pub use runner::{SolveReport, TourSolver};
pub use types::{Locate, TourNode};
