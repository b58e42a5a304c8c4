//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling disciplines over a static
//! list of processes with known arrival and burst times, and measures
//! the outcome.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Schedule`, `ExecutionSlice`
//! - **`dispatching`**: Selection rules (SPT, FIFO) and the rule engine
//! - **`scheduler`**: FCFS, SJF and Round-Robin schedulers, metrics, comparison
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times)
//! - **`input`**: Loading process lists from text
//! - **`report`**: Text rendering of results and comparison charts
//! - **`workload`**: Seeded random process lists
//! - **`config`**: Simulation settings
//!
//! # Example
//!
//! ```
//! use sched_sim::models::Process;
//! use sched_sim::scheduler::{simulate, FcfsScheduler};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
//! let result = simulate(&FcfsScheduler::new(), &processes).unwrap();
//! assert_eq!(result.schedule.completion_of(2), Some(8));
//! assert!((result.metrics.avg_waiting_time - 1.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, Result, SchedError};
