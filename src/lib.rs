//! # kinvar
//!
//! Per-event kinematic observables for columnar HEP ntuple analysis.
//!
//! Each function in [`quantities`] reads one or more existing columns of a
//! lazy dataframe (particle four-momenta, pair indices, per-object arrays)
//! and registers a single derived column through the [`Define`] capability.
//! Four-momenta are stored as flattened component columns in the
//! $`(p_T, \eta, \phi, m)`$ parameterization, e.g. `p4_1_pt`, `p4_1_eta`,
//! `p4_1_phi`, `p4_1_mass`.
//!
//! Invalid inputs never fault: out-of-range object indices and four-momenta
//! flagged invalid by the upstream selection (negative $`p_T`$) resolve to
//! the typed sentinel values in [`defaults`].
#![warn(clippy::perf, clippy::style)]

use polars::prelude::{Expr, LazyFrame, PlSmallStr};
use thiserror::Error;

/// Typed sentinel values substituted for unavailable quantities.
pub mod defaults;
/// Functions which derive per-event observables and register them as columns.
pub mod quantities;
/// Utility functions, enums, and vector types.
pub mod utils;

pub use crate::utils::enums::Leg;
pub use crate::utils::vectors::{PtEtaPhiM, Vec3, Vec4};

pub type KinvarResult<T> = Result<T, KinvarError>;

/// The error type used by all `kinvar` internal methods
#[derive(Error, Debug)]
pub enum KinvarError {
    /// An alias for [`polars::error::PolarsError`].
    #[error("Polars Error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
    /// An error which occurs when the user tries to parse an invalid string of text, typically
    /// into an enum variant.
    #[error("Failed to parse string: \"{name}\" does not correspond to a valid \"{object}\"!")]
    ParseError {
        /// The string which was parsed
        name: String,
        /// The name of the object it failed to parse into
        object: String,
    },
}

/// A capability for registering a derived column on a dataframe handle.
///
/// The expression carries both the computation and the input column
/// references, so one registration call fully describes a new column. Every
/// function in [`quantities`] is written against this trait rather than a
/// concrete engine handle.
pub trait Define {
    /// Add a column named `name` computed from `expr` and return the new handle.
    fn define<S: Into<PlSmallStr>>(self, name: S, expr: Expr) -> Self;
}

impl Define for LazyFrame {
    fn define<S: Into<PlSmallStr>>(self, name: S, expr: Expr) -> Self {
        self.with_column(expr.alias(name))
    }
}

#[cfg(test)]
pub mod tests {
    use polars::prelude::*;

    /// Get the value of a float column at the given row, panicking on error.
    pub fn val(df: &DataFrame, col: &str, row: usize) -> f64 {
        let s = df.column(col).unwrap();
        match s.dtype() {
            DataType::Float64 => s.f64().unwrap().get(row).unwrap(),
            DataType::Float32 => s.f32().unwrap().get(row).unwrap() as f64,
            dt => panic!("column {col} must be f32/f64, got {dt:?}"),
        }
    }

    /// Get the value of an Int32 column at the given row, panicking on error.
    pub fn val_i32(df: &DataFrame, col: &str, row: usize) -> i32 {
        df.column(col).unwrap().i32().unwrap().get(row).unwrap()
    }

    /// Get the value of a UInt8 column at the given row, panicking on error.
    pub fn val_u8(df: &DataFrame, col: &str, row: usize) -> u8 {
        df.column(col).unwrap().u8().unwrap().get(row).unwrap()
    }

    /// Add `{name}_pt`, `{name}_eta`, `{name}_phi`, `{name}_mass` (Float64)
    /// columns, one entry per row.
    pub fn add_p4(df: &mut DataFrame, name: &str, rows: &[[f64; 4]]) {
        for (i, suffix) in ["pt", "eta", "phi", "mass"].iter().enumerate() {
            let values: Vec<f64> = rows.iter().map(|r| r[i]).collect();
            df.with_column(Series::new(format!("{}_{}", name, suffix).into(), values))
                .unwrap();
        }
    }

    /// Add a `List(Float64)` column, one inner list per row.
    pub fn add_list_f64(df: &mut DataFrame, name: &str, rows: &[&[f64]]) {
        let rows: Vec<Series> = rows.iter().map(|r| Series::new("".into(), *r)).collect();
        df.with_column(Series::new(name.into(), rows)).unwrap();
    }

    /// Add a `List(Int32)` column, one inner list per row.
    pub fn add_list_i32(df: &mut DataFrame, name: &str, rows: &[&[i32]]) {
        let rows: Vec<Series> = rows.iter().map(|r| Series::new("".into(), *r)).collect();
        df.with_column(Series::new(name.into(), rows)).unwrap();
    }

    /// Add a `List(UInt8)` column, one inner list per row.
    pub fn add_list_u8(df: &mut DataFrame, name: &str, rows: &[&[u8]]) {
        let rows: Vec<Series> = rows.iter().map(|r| Series::new("".into(), *r)).collect();
        df.with_column(Series::new(name.into(), rows)).unwrap();
    }
}
