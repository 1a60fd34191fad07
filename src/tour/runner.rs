//! The annealing loop and its incremental move evaluation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::TourConfig;
use super::svg;
use super::types::{Locate, TourNode};
use crate::cost::{CostModel, EuclideanCost};
use crate::geom::Point;

/// Factor applied to the running cost before storing it as the snapshot
/// threshold, so floating-point noise does not trigger excessive copies
/// of the best tour.
const SNAPSHOT_MARGIN: f64 = 1.0 - 1e-5;

/// The loop stops once the temperature falls to this fraction of the
/// starting temperature.
const TEMPERATURE_FLOOR_RATIO: f64 = 1e-3;

/// How often the cancellation flag is polled, in iterations.
const CANCEL_CHECK_INTERVAL: usize = 256;

/// Diagnostics from one solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Total cost of the best tour found (the solver's final state).
    pub best_cost: f64,

    /// Iterations executed (move evaluations).
    pub iterations: usize,

    /// Accepted moves, improving or Metropolis-accepted.
    pub accepted_moves: usize,

    /// How many accepted moves were twists rather than swaps.
    pub twist_moves: usize,

    /// Best-tour snapshots taken.
    pub snapshots: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Whether the solve was cancelled externally.
    pub cancelled: bool,

    /// Wall-clock duration of the solve.
    pub duration: Duration,
}

/// Simulated-annealing solver for a travel-order problem.
///
/// Construction converts every item location to canonical millimeters
/// once; the solve loop never converts units. A solver instance is meant
/// for a single item set: construct, solve, read the tour back.
pub struct TourSolver<T, C = EuclideanCost> {
    items: Vec<T>,
    travel: Vec<TourNode>,
    start: Option<Point>,
    end: Option<Point>,
    cost_model: C,
    duration: Duration,
}

impl<T: Locate> TourSolver<T, EuclideanCost> {
    /// Creates a solver that scores edges by straight-line 3D distance.
    ///
    /// `start` and `end` optionally pin the route's boundaries, e.g. the
    /// current head location and the location of the next task. Either may
    /// be `None` to leave that boundary free; passing the same location
    /// for both makes the route a closed loop.
    pub fn new(items: Vec<T>, start: Option<Point>, end: Option<Point>) -> Self {
        Self::with_cost_model(items, start, end, EuclideanCost)
    }
}

impl<T: Locate, C: CostModel> TourSolver<T, C> {
    /// Creates a solver that scores edges with the given cost model.
    pub fn with_cost_model(
        items: Vec<T>,
        start: Option<Point>,
        end: Option<Point>,
        cost_model: C,
    ) -> Self {
        let travel = items
            .iter()
            .enumerate()
            .map(|(index, item)| TourNode {
                point: item.location(),
                index,
            })
            .collect();
        Self {
            items,
            travel,
            start,
            end,
            cost_model,
            duration: Duration::ZERO,
        }
    }
}

impl<T, C: CostModel> TourSolver<T, C> {
    /// The point at tour position `i`, where `-1` addresses the fixed
    /// start and `n` the fixed end. Absent endpoints yield `None`.
    fn point_at(&self, i: isize) -> Option<&Point> {
        if i < 0 {
            self.start.as_ref()
        } else if i as usize >= self.travel.len() {
            self.end.as_ref()
        } else {
            Some(&self.travel[i as usize].point)
        }
    }

    /// Cost of the edge between tour positions `a` and `b`. Edges touching
    /// an absent endpoint are free: the route may start or end anywhere.
    fn edge_cost(&self, a: isize, b: isize) -> f64 {
        match (self.point_at(a), self.point_at(b)) {
            (Some(pa), Some(pb)) => self.cost_model.cost(pa, pb),
            _ => 0.0,
        }
    }

    /// Total cost of the current order, including the boundary edges to
    /// the fixed start and end where present.
    pub fn total_cost(&self) -> f64 {
        (0..=self.travel.len() as isize)
            .map(|i| self.edge_cost(i - 1, i))
            .sum()
    }

    /// Cost change of exchanging positions `a` and `b` (swap), or of
    /// reversing the sub-sequence between them (twist), computed from the
    /// affected edges only. A swap touches at most four edges (three when
    /// the positions are adjacent), a twist exactly two; everything else
    /// in the tour keeps its cost.
    fn move_delta(&self, a: usize, b: usize, twist: bool) -> f64 {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        let (a, b) = (a as isize, b as isize);
        if twist {
            let old = self.edge_cost(a - 1, a) + self.edge_cost(b, b + 1);
            let new = self.edge_cost(a - 1, b) + self.edge_cost(a, b + 1);
            new - old
        } else if a + 1 == b {
            let old = self.edge_cost(a - 1, a) + self.edge_cost(a, b) + self.edge_cost(b, b + 1);
            let new = self.edge_cost(a - 1, b) + self.edge_cost(b, a) + self.edge_cost(a, b + 1);
            new - old
        } else {
            let old = self.edge_cost(a - 1, a)
                + self.edge_cost(a, a + 1)
                + self.edge_cost(b - 1, b)
                + self.edge_cost(b, b + 1);
            let new = self.edge_cost(a - 1, b)
                + self.edge_cost(b, a + 1)
                + self.edge_cost(b - 1, a)
                + self.edge_cost(a, b + 1);
            new - old
        }
    }

    /// Applies the move scored by [`Self::move_delta`].
    fn apply_move(&mut self, a: usize, b: usize, twist: bool) {
        if twist {
            let (a, b) = if a > b { (b, a) } else { (a, b) };
            self.travel[a..=b].reverse();
        } else {
            self.travel.swap(a, b);
        }
    }

    /// Solves with parameters derived from the problem (see [`TourConfig`]).
    pub fn solve(&mut self) -> SolveReport {
        self.solve_with(&TourConfig::default())
    }

    /// Solves with the given configuration.
    pub fn solve_with(&mut self, config: &TourConfig) -> SolveReport {
        self.solve_with_cancel(config, None)
    }

    /// Solves with the given configuration and an optional cancellation
    /// flag, polled every few hundred iterations. A cancelled solve still
    /// restores the best tour seen so far, so the result is usable.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn solve_with_cancel(
        &mut self,
        config: &TourConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveReport {
        config.validate().expect("invalid TourConfig");

        let started = Instant::now();
        let n = self.travel.len();
        let mut current_cost = self.total_cost();
        let (initial_temperature, cooling_rate, max_iterations) =
            config.resolve(n, current_cost);

        let temperature_floor = initial_temperature * TEMPERATURE_FLOOR_RATIO;
        let mut temperature = initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut twist_moves = 0usize;
        let mut snapshots = 0usize;
        let mut cancelled = false;

        if n > 1 {
            let mut rng = StdRng::seed_from_u64(config.seed);
            // Two owned buffers: the working order and the best snapshot.
            // Copy only on improvement past the noise margin.
            let mut best = self.travel.clone();
            let mut best_cost = SNAPSHOT_MARGIN * current_cost;

            while temperature > temperature_floor && iterations < max_iterations {
                if iterations % CANCEL_CHECK_INTERVAL == 0 {
                    if let Some(flag) = &cancel {
                        if flag.load(Ordering::Relaxed) {
                            cancelled = true;
                            break;
                        }
                    }
                }

                let a = rng.random_range(0..n);
                let mut b = rng.random_range(0..n);
                while b == a {
                    b = rng.random_range(0..n);
                }

                // Score both candidate moves on the same pair and keep the
                // cheaper one.
                let swap_delta = self.move_delta(a, b, false);
                let twist_delta = self.move_delta(a, b, true);
                let (twist, delta) = if twist_delta < swap_delta {
                    (true, twist_delta)
                } else {
                    (false, swap_delta)
                };

                // Metropolis acceptance criterion
                let accept =
                    delta < 0.0 || (-delta / temperature).exp() >= rng.random_range(0.0..1.0);
                if accept {
                    self.apply_move(a, b, twist);
                    current_cost += delta;
                    accepted_moves += 1;
                    if twist {
                        twist_moves += 1;
                    }
                    if current_cost < best_cost {
                        best_cost = SNAPSHOT_MARGIN * current_cost;
                        best.copy_from_slice(&self.travel);
                        snapshots += 1;
                    }
                }

                temperature *= cooling_rate;
                iterations += 1;
            }

            // The final working order is not necessarily the best ever
            // seen; always hand back the best snapshot.
            self.travel.copy_from_slice(&best);
        }

        self.duration = started.elapsed();
        SolveReport {
            best_cost: self.total_cost(),
            iterations,
            accepted_moves,
            twist_moves,
            snapshots,
            final_temperature: temperature,
            cancelled,
            duration: self.duration,
        }
    }

    /// Renders the current tour as an SVG document, for debugging and
    /// visual inspection of solutions.
    pub fn to_svg(&self) -> String {
        svg::render(
            &self.travel,
            self.start.as_ref(),
            self.end.as_ref(),
            self.total_cost(),
            self.duration,
        )
    }
}

impl<T, C> TourSolver<T, C> {
    /// Number of items in the tour.
    pub fn len(&self) -> usize {
        self.travel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel.is_empty()
    }

    /// The fixed start location, if any.
    pub fn start_point(&self) -> Option<Point> {
        self.start
    }

    /// The fixed end location, if any.
    pub fn end_point(&self) -> Option<Point> {
        self.end
    }

    /// Wall-clock duration of the most recent solve.
    pub fn solver_duration(&self) -> Duration {
        self.duration
    }

    /// The current visiting order as indices into the caller's input list.
    pub fn tour_indices(&self) -> Vec<usize> {
        self.travel.iter().map(|node| node.index).collect()
    }

    /// Consumes the solver and returns the caller's items in visiting
    /// order — always a permutation of the input, never a transform of
    /// the items themselves.
    pub fn into_tour(self) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.items.into_iter().map(Some).collect();
        self.travel
            .iter()
            .map(|node| {
                slots[node.index]
                    .take()
                    .expect("tour visits each item exactly once")
            })
            .collect()
    }
}
