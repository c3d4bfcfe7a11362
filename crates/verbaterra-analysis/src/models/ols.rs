//! Ordinary least squares with an intercept.
//!
//! Features are centered, the normal equations `XᵀX w = Xᵀy` are solved by
//! Gauss-Jordan elimination with partial pivoting, and the intercept is
//! recovered as `ȳ - w·x̄`. A pivot below `max_diag * PIVOT_TOLERANCE` marks
//! a rank-deficient direction whose coefficient is fixed at zero.

use serde::{Deserialize, Serialize};
use verbaterra_core::errors::ModelError;

use crate::normalize::mean;

const PIVOT_TOLERANCE: f64 = 1e-12;

/// One fitted linear regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `target ~ features`. Each feature slice must have `target.len()` rows.
    pub fn fit(features: &[&[f64]], target: &[f64]) -> Result<Self, ModelError> {
        let n = target.len();
        if n == 0 {
            return Err(ModelError::InsufficientRows { rows: 0 });
        }
        let p = features.len();
        let x_mean: Vec<f64> = features.iter().map(|f| mean(f)).collect();
        let y_mean = mean(target);

        // Augmented system [XᵀX | Xᵀy] over centered data.
        let mut system = vec![vec![0.0; p + 1]; p];
        for row in 0..n {
            let y = target[row] - y_mean;
            for i in 0..p {
                let xi = features[i][row] - x_mean[i];
                for j in i..p {
                    system[i][j] += xi * (features[j][row] - x_mean[j]);
                }
                system[i][p] += xi * y;
            }
        }
        for i in 0..p {
            for j in 0..i {
                system[i][j] = system[j][i];
            }
        }

        let coef = solve_gauss_jordan(system, p);
        let intercept = y_mean - coef.iter().zip(&x_mean).map(|(w, m)| w * m).sum::<f64>();
        Ok(Self { coef, intercept })
    }

    /// Predictions for column-major `features`.
    pub fn predict(&self, features: &[&[f64]]) -> Vec<f64> {
        let rows = features.first().map_or(0, |f| f.len());
        (0..rows)
            .map(|r| {
                self.intercept
                    + self
                        .coef
                        .iter()
                        .zip(features)
                        .map(|(w, col)| w * col[r])
                        .sum::<f64>()
            })
            .collect()
    }
}

/// Solve a `p x (p+1)` augmented symmetric system in place.
fn solve_gauss_jordan(mut a: Vec<Vec<f64>>, p: usize) -> Vec<f64> {
    let max_diag = (0..p).map(|i| a[i][i].abs()).fold(0.0, f64::max);
    let tolerance = max_diag * PIVOT_TOLERANCE;

    let mut solution = vec![0.0; p];
    let mut pivot_row_of: Vec<Option<usize>> = vec![None; p];
    let mut next_row = 0;

    for col in 0..p {
        if next_row == p {
            break;
        }
        let (best, best_abs) = (next_row..p)
            .map(|r| (r, a[r][col].abs()))
            .fold((next_row, -1.0), |acc, cand| if cand.1 > acc.1 { cand } else { acc });
        if best_abs <= tolerance {
            continue;
        }
        a.swap(next_row, best);

        let pivot = a[next_row][col];
        for v in a[next_row].iter_mut() {
            *v /= pivot;
        }
        let pivot_values = a[next_row].clone();
        for r in 0..p {
            if r == next_row {
                continue;
            }
            let factor = a[r][col];
            if factor == 0.0 {
                continue;
            }
            for (v, pv) in a[r].iter_mut().zip(&pivot_values) {
                *v -= factor * pv;
            }
        }
        pivot_row_of[col] = Some(next_row);
        next_row += 1;
    }

    for (col, row) in pivot_row_of.into_iter().enumerate() {
        if let Some(row) = row {
            solution[col] = a[row][p];
        }
    }
    solution
}
