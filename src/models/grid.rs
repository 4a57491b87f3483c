//! Sensitivity grids
//!
//! Price and P&L tables over a spot x volatility Cartesian product: one row
//! per vol, one column per spot. Rows are independent, so they are evaluated
//! in parallel and collected in input order; the result is identical to the
//! sequential nested loop. Grids are rebuilt from scratch on every call.

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::OptionKind;
use crate::models::black_scholes::price;

/// A labeled 2D table of option values: volatility rows, spot columns.
///
/// Labels are the axis inputs formatted to 2 decimals; they are carried for
/// display and never looked up, so colliding labels are left as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityGrid {
    /// Row axis name
    pub row_axis: String,
    /// Column axis name
    pub col_axis: String,
    /// Row labels (formatted vol values)
    pub row_labels: Vec<String>,
    /// Column labels (formatted spot values)
    pub col_labels: Vec<String>,
    /// Cell values, shape (rows, cols)
    pub values: Array2<f64>,
}

impl SensitivityGrid {
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }

    /// View of one row (all spots at a single vol)
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.values.row(row)
    }
}

/// Option price over every (spot, vol) pair.
pub fn price_grid(
    s_range: &[f64],
    vol_range: &[f64],
    strike: f64,
    time: f64,
    rate: f64,
    kind: OptionKind,
) -> SensitivityGrid {
    build_grid(s_range, vol_range, |spot, vol| {
        price(spot, strike, time, rate, vol, kind)
    })
}

/// P&L against a purchase price over every (spot, vol) pair.
pub fn pnl_grid(
    s_range: &[f64],
    vol_range: &[f64],
    strike: f64,
    time: f64,
    rate: f64,
    purchase_price: f64,
    kind: OptionKind,
) -> SensitivityGrid {
    build_grid(s_range, vol_range, |spot, vol| {
        price(spot, strike, time, rate, vol, kind) - purchase_price
    })
}

fn build_grid<F>(s_range: &[f64], vol_range: &[f64], cell: F) -> SensitivityGrid
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    tracing::debug!(
        rows = vol_range.len(),
        cols = s_range.len(),
        "building sensitivity grid"
    );

    let cell = &cell;
    let flat: Vec<f64> = vol_range
        .par_iter()
        .flat_map_iter(|&vol| s_range.iter().map(move |&spot| cell(spot, vol)))
        .collect();

    let values = Array2::from_shape_vec((vol_range.len(), s_range.len()), flat).unwrap();

    SensitivityGrid {
        row_axis: "Volatility".to_string(),
        col_axis: "Stock Price".to_string(),
        row_labels: vol_range.iter().map(|v| format!("{:.2}", v)).collect(),
        col_labels: s_range.iter().map(|s| format!("{:.2}", s)).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        if n < 2 {
            return vec![start];
        }
        let step = (end - start) / (n - 1) as f64;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn test_price_grid_shape_and_cells() {
        let s_range = linspace(80.0, 120.0, 10);
        let vol_range = linspace(0.1, 0.5, 6);
        let grid = price_grid(&s_range, &vol_range, 100.0, 1.0, 0.05, OptionKind::Call);

        assert_eq!(grid.nrows(), 6);
        assert_eq!(grid.ncols(), 10);

        // Every cell equals a direct pricing call, exactly
        for (i, &vol) in vol_range.iter().enumerate() {
            for (j, &spot) in s_range.iter().enumerate() {
                let direct = price(spot, 100.0, 1.0, 0.05, vol, OptionKind::Call);
                assert_eq!(grid.get(i, j), direct);
            }
        }
    }

    #[test]
    fn test_grid_labels() {
        let grid = price_grid(
            &[80.0, 100.5, 120.0],
            &[0.1, 0.25],
            100.0,
            1.0,
            0.05,
            OptionKind::Put,
        );
        assert_eq!(grid.row_axis, "Volatility");
        assert_eq!(grid.col_axis, "Stock Price");
        assert_eq!(grid.row_labels, vec!["0.10", "0.25"]);
        assert_eq!(grid.col_labels, vec!["80.00", "100.50", "120.00"]);
    }

    #[test]
    fn test_pnl_grid_offsets_price_grid() {
        let s_range = linspace(90.0, 110.0, 5);
        let vol_range = linspace(0.15, 0.35, 5);
        let prices = price_grid(&s_range, &vol_range, 100.0, 0.5, 0.02, OptionKind::Call);
        let pnls = pnl_grid(&s_range, &vol_range, 100.0, 0.5, 0.02, 8.0, OptionKind::Call);

        for i in 0..prices.nrows() {
            for j in 0..prices.ncols() {
                assert!((pnls.get(i, j) - (prices.get(i, j) - 8.0)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_grid_rows_ordered_by_input() {
        // Parallel evaluation must not reorder rows
        let vol_range = [0.5, 0.1, 0.3];
        let grid = price_grid(&[100.0], &vol_range, 100.0, 1.0, 0.05, OptionKind::Call);
        for (i, &vol) in vol_range.iter().enumerate() {
            assert_eq!(
                grid.get(i, 0),
                price(100.0, 100.0, 1.0, 0.05, vol, OptionKind::Call)
            );
        }
    }

    #[test]
    fn test_empty_ranges() {
        let grid = price_grid(&[], &[0.2], 100.0, 1.0, 0.05, OptionKind::Call);
        assert_eq!(grid.nrows(), 1);
        assert_eq!(grid.ncols(), 0);

        let grid = price_grid(&[100.0], &[], 100.0, 1.0, 0.05, OptionKind::Call);
        assert_eq!(grid.nrows(), 0);
    }

    #[test]
    fn test_grid_serde_round_trip() {
        let grid = price_grid(
            &[90.0, 100.0, 110.0],
            &[0.15, 0.25],
            100.0,
            0.5,
            0.03,
            OptionKind::Call,
        );
        let json = serde_json::to_string(&grid).unwrap();
        let back: SensitivityGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(back.row_axis, grid.row_axis);
        assert_eq!(back.col_axis, grid.col_axis);
        assert_eq!(back.row_labels, grid.row_labels);
        assert_eq!(back.col_labels, grid.col_labels);
        assert_eq!(back.values, grid.values);
    }

    #[test]
    fn test_degenerate_time_grid_is_all_zero() {
        let grid = price_grid(
            &[80.0, 100.0, 120.0],
            &[0.1, 0.2],
            100.0,
            0.0,
            0.05,
            OptionKind::Call,
        );
        assert!(grid.values.iter().all(|&v| v == 0.0));
    }
}
