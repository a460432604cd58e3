//! Bagarre computes bilateral gradual semantics on weighted bipolar argumentation graphs.
//!
//! Each argument gets an acceptability degree and a rejectability degree, both in `[0,1]`,
//! computed by iterating an update rule until a fixed point is approached.
//! The max-based (ARM), cardinality-based (ARC) and hybrid-based (ARH) semantics are available.
//!
//! ```
//! # use bagarre::io::{BagReader, InstanceReader};
//! # use bagarre::semantics::Semantics;
//! # use bagarre::solvers::BilateralSolver;
//! let graph = BagReader::default()
//!     .read(&mut "arg(a).\narg(b, 0.8).\natt(a, b).\nsup(b, a, 0.5).\n".as_bytes())
//!     .unwrap();
//! let outcome = BilateralSolver::new(&graph, Semantics::ARH).solve().unwrap();
//! for arg in graph.argument_set().iter() {
//!     let score = outcome.final_state().score_of(arg);
//!     println!("{}: {} {}", arg, score.acceptability(), score.rejectability());
//! }
//! ```

#![warn(missing_docs)]

pub mod graph;

pub mod io;

pub mod semantics;

pub mod solvers;
