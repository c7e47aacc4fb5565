//! # grainboard-core: Pure Computation for Grainboard
//!
//! This crate is the **heart** of Grainboard, the chessboard doubling
//! explorer: 1 grain on square 1, doubled on every square through 64. It
//! contains all numeric logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grainboard Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (grainboard-cli, web UI)           │   │
//! │  │    Slider/argv ──► Stats panel ──► Heatmap ──► Charts           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ build_report(square)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grainboard-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ quantity  │  │ magnitude │  │  series   │  │comparison │  │   │
//! │  │   │ 2^(n-1)   │  │ 1.05M     │  │  board    │  │ fixed     │  │   │
//! │  │   │ 2^n - 1   │  │ 18446.74Q │  │  8×8 grid │  │ table     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `SquareIndex`, the validated board position
//! - [`grains`] - `GrainCount`, exact `u64` grain quantities
//! - [`quantity`] - per-square and cumulative counts
//! - [`magnitude`] - M/B/T/Q display formatting
//! - [`series`] - per-square and cumulative chart series
//! - [`board`] - 8×8 log-magnitude heatmap
//! - [`comparison`] - real-world reference quantities
//! - [`summary`] - headline statistics and narrative
//! - [`formulas`] - the closed-form formula table
//! - [`report`] - everything above for one square
//! - [`validation`] - parsing user input into a square
//! - [`error`] - domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same square in, same report out
//! 2. **Exact Counts**: grains are `u64`; floats only appear for display
//! 3. **Reject, Don't Clamp**: squares outside `1..=64` are errors
//!
//! ## Example Usage
//!
//! ```rust
//! use grainboard_core::{build_report, SquareIndex};
//!
//! let square: SquareIndex = "64".parse().unwrap();
//! let report = build_report(square);
//!
//! assert_eq!(report.summary.total.get(), u64::MAX);
//! assert_eq!(
//!     report.summary.complete_board.unwrap().total_exact,
//!     "18,446,744,073,709,551,615"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod board;
pub mod comparison;
pub mod error;
pub mod formulas;
pub mod grains;
pub mod magnitude;
pub mod quantity;
pub mod report;
pub mod series;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use board::{board_grid, BoardCell, BoardGrid};
pub use comparison::{comparison_entries, ComparisonEntry};
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use formulas::{formula_rows, FormulaRow};
pub use grains::GrainCount;
pub use magnitude::{format_magnitude, group_thousands, MagnitudeSuffix};
pub use quantity::{estimated_weight_kg, grains_on_square, share_of_board, total_through_square};
pub use report::{build_report, BoardReport};
pub use series::{build_series, GrowthSeries, Series, SeriesPoint};
pub use summary::{summarize, CompleteBoard, NarrativeTier, Summary};
pub use types::SquareIndex;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Squares on the board. Fixed by the legend, not configurable.
pub const BOARD_SQUARES: u8 = 64;

/// Squares per row (and rows per board).
pub const BOARD_WIDTH: usize = 8;

/// Mass of one grain of rice in kilograms (~20 mg).
pub const GRAIN_MASS_KG: f64 = 0.00002;
