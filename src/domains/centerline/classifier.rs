use super::types::{Point, Side};
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Lower bound for the curvature of the two-variable subproblem.
const TAU: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    /// Histogram intersection, `min(u.x, v.x) + min(u.y, v.y)`.
    /// Expects non-negative coordinates.
    Intersection,
    /// Gaussian radial basis, `exp(-gamma * |u - v|^2)`.
    Rbf { gamma: f64 },
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::Intersection
    }
}

impl Kernel {
    pub fn eval(&self, u: &Point, v: &Point) -> f64 {
        match self {
            Kernel::Intersection => u.x.min(v.x) + u.y.min(v.y),
            Kernel::Rbf { gamma } => {
                let d2 = (u.x - v.x).powi(2) + (u.y - v.y).powi(2);
                (-gamma * d2).exp()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SvmSettings {
    pub kernel: Kernel,
    /// Box constraint of the soft-margin problem.
    pub c: f64,
    /// Stop once the maximal KKT violation drops below this value.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SvmSettings {
    fn default() -> Self {
        Self {
            kernel: Kernel::Intersection,
            c: 1.0,
            tolerance: 1e-3,
            max_iterations: 100_000,
        }
    }
}

/// Binary decision surface over the normalized marker frame.
pub trait BoundaryClassifier {
    /// Signed distance-like score; positive values belong to side B.
    fn decision_value(&self, point: Point) -> f64;

    fn predict(&self, point: Point) -> Side {
        if self.decision_value(point) >= 0.0 {
            Side::B
        } else {
            Side::A
        }
    }
}

/// C-support-vector classifier trained with sequential minimal optimization.
#[derive(Debug, Clone)]
pub struct KernelSvm {
    kernel: Kernel,
    support_vectors: Vec<Point>,
    /// `alpha_i * y_i` for each support vector.
    coefficients: Vec<f64>,
    rho: f64,
    iterations: usize,
}

impl KernelSvm {
    pub fn fit(points: &[Point], sides: &[Side], settings: &SvmSettings) -> DomainResult<Self> {
        if points.len() != sides.len() {
            return Err(DomainError::InvalidInput {
                reason: format!("{} points but {} labels", points.len(), sides.len()),
            });
        }
        if points.len() < 2 {
            return Err(DomainError::InvalidInput {
                reason: format!("need at least 2 samples, got {}", points.len()),
            });
        }
        if !(settings.c > 0.0 && settings.c.is_finite()) || !(settings.tolerance > 0.0) {
            return Err(DomainError::InvalidInput {
                reason: format!(
                    "invalid solver settings: c={}, tolerance={}",
                    settings.c, settings.tolerance
                ),
            });
        }

        let first = sides[0];
        if sides.iter().all(|s| *s == first) {
            return Err(DomainError::DegenerateLabelSet {
                side: first.as_wire(),
                count: sides.len(),
            });
        }

        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(DomainError::NumericInstability {
                reason: format!("non-finite sample ({}, {})", bad.x, bad.y),
            });
        }

        let mut solver = Solver::new(points, sides, settings)?;
        let iterations = solver.solve(settings.tolerance, settings.max_iterations)?;
        let rho = solver.rho();
        if !rho.is_finite() {
            return Err(DomainError::NumericInstability {
                reason: "decision offset is not finite".to_string(),
            });
        }

        let mut support_vectors = Vec::new();
        let mut coefficients = Vec::new();
        for (idx, alpha) in solver.alpha.iter().enumerate() {
            if *alpha > 0.0 {
                support_vectors.push(points[idx]);
                coefficients.push(alpha * solver.y[idx]);
            }
        }

        tracing::debug!(
            samples = points.len(),
            support_vectors = support_vectors.len(),
            iterations,
            rho,
            "boundary classifier fitted"
        );

        Ok(Self {
            kernel: settings.kernel,
            support_vectors,
            coefficients,
            rho,
            iterations,
        })
    }

    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    pub fn support_vectors(&self) -> &[Point] {
        &self.support_vectors
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl BoundaryClassifier for KernelSvm {
    fn decision_value(&self, point: Point) -> f64 {
        let sum: f64 = self
            .support_vectors
            .iter()
            .zip(&self.coefficients)
            .map(|(sv, coef)| coef * self.kernel.eval(sv, &point))
            .sum();
        sum - self.rho
    }
}

enum Selection {
    Optimal,
    Pair(usize, usize),
}

/// Dual solver state: `min 1/2 a'Qa - e'a` with `0 <= a <= c`, `y'a = 0`.
struct Solver {
    n: usize,
    gram: Vec<f64>,
    y: Vec<f64>,
    alpha: Vec<f64>,
    grad: Vec<f64>,
    c: f64,
}

impl Solver {
    fn new(points: &[Point], sides: &[Side], settings: &SvmSettings) -> DomainResult<Self> {
        let n = points.len();
        let mut gram = Vec::with_capacity(n * n);
        for a in points {
            for b in points {
                let k = settings.kernel.eval(a, b);
                if !k.is_finite() {
                    return Err(DomainError::NumericInstability {
                        reason: "kernel produced a non-finite value".to_string(),
                    });
                }
                gram.push(k);
            }
        }

        Ok(Self {
            n,
            gram,
            y: sides.iter().map(Side::target).collect(),
            alpha: vec![0.0; n],
            grad: vec![-1.0; n],
            c: settings.c,
        })
    }

    fn k(&self, i: usize, j: usize) -> f64 {
        self.gram[i * self.n + j]
    }

    fn curvature(&self, i: usize, j: usize) -> f64 {
        let quad = self.k(i, i) + self.k(j, j) - 2.0 * self.k(i, j);
        if quad > 0.0 {
            quad
        } else {
            TAU
        }
    }

    fn solve(&mut self, tolerance: f64, max_iterations: usize) -> DomainResult<usize> {
        for iteration in 0..max_iterations {
            match self.select_working_set(tolerance) {
                Selection::Optimal => return Ok(iteration),
                Selection::Pair(i, j) => self.update_pair(i, j),
            }
            if self.grad.iter().any(|g| !g.is_finite()) {
                return Err(DomainError::NumericInstability {
                    reason: format!("gradient diverged at iteration {}", iteration),
                });
            }
        }

        Err(DomainError::NumericInstability {
            reason: format!(
                "solver did not converge within {} iterations",
                max_iterations
            ),
        })
    }

    /// Maximal violating pair, second index chosen by second-order gain.
    fn select_working_set(&self, tolerance: f64) -> Selection {
        let mut gmax = f64::NEG_INFINITY;
        let mut first = None;
        for t in 0..self.n {
            if self.y[t] > 0.0 {
                if self.alpha[t] < self.c && -self.grad[t] >= gmax {
                    gmax = -self.grad[t];
                    first = Some(t);
                }
            } else if self.alpha[t] > 0.0 && self.grad[t] >= gmax {
                gmax = self.grad[t];
                first = Some(t);
            }
        }
        let Some(i) = first else {
            return Selection::Optimal;
        };

        let mut gmax2 = f64::NEG_INFINITY;
        let mut second = None;
        let mut best_gain = f64::INFINITY;
        for t in 0..self.n {
            let (eligible, grad_diff, violation) = if self.y[t] > 0.0 {
                (self.alpha[t] > 0.0, gmax + self.grad[t], self.grad[t])
            } else {
                (self.alpha[t] < self.c, gmax - self.grad[t], -self.grad[t])
            };
            if !eligible {
                continue;
            }
            gmax2 = gmax2.max(violation);
            if grad_diff > 0.0 {
                let gain = -(grad_diff * grad_diff) / self.curvature(i, t);
                if gain <= best_gain {
                    best_gain = gain;
                    second = Some(t);
                }
            }
        }

        match second {
            Some(j) if gmax + gmax2 >= tolerance => Selection::Pair(i, j),
            _ => Selection::Optimal,
        }
    }

    fn update_pair(&mut self, i: usize, j: usize) {
        let c = self.c;
        let (old_i, old_j) = (self.alpha[i], self.alpha[j]);
        let quad = self.curvature(i, j);

        if self.y[i] != self.y[j] {
            let delta = (-self.grad[i] - self.grad[j]) / quad;
            let diff = old_i - old_j;
            self.alpha[i] += delta;
            self.alpha[j] += delta;

            if diff > 0.0 {
                if self.alpha[j] < 0.0 {
                    self.alpha[j] = 0.0;
                    self.alpha[i] = diff;
                }
            } else if self.alpha[i] < 0.0 {
                self.alpha[i] = 0.0;
                self.alpha[j] = -diff;
            }
            if diff > 0.0 {
                if self.alpha[i] > c {
                    self.alpha[i] = c;
                    self.alpha[j] = c - diff;
                }
            } else if self.alpha[j] > c {
                self.alpha[j] = c;
                self.alpha[i] = c + diff;
            }
        } else {
            let delta = (self.grad[i] - self.grad[j]) / quad;
            let sum = old_i + old_j;
            self.alpha[i] -= delta;
            self.alpha[j] += delta;

            if sum > c {
                if self.alpha[i] > c {
                    self.alpha[i] = c;
                    self.alpha[j] = sum - c;
                }
            } else if self.alpha[j] < 0.0 {
                self.alpha[j] = 0.0;
                self.alpha[i] = sum;
            }
            if sum > c {
                if self.alpha[j] > c {
                    self.alpha[j] = c;
                    self.alpha[i] = sum - c;
                }
            } else if self.alpha[i] < 0.0 {
                self.alpha[i] = 0.0;
                self.alpha[j] = sum;
            }
        }

        let delta_i = self.alpha[i] - old_i;
        let delta_j = self.alpha[j] - old_j;
        for k in 0..self.n {
            self.grad[k] += self.y[k] * self.y[i] * self.k(k, i) * delta_i
                + self.y[k] * self.y[j] * self.k(k, j) * delta_j;
        }
    }

    /// Offset from free support vectors, or the midpoint of the feasible interval.
    fn rho(&self) -> f64 {
        let mut upper = f64::INFINITY;
        let mut lower = f64::NEG_INFINITY;
        let mut free_sum = 0.0;
        let mut free_count = 0usize;

        for t in 0..self.n {
            let yg = self.y[t] * self.grad[t];
            if self.alpha[t] >= self.c {
                if self.y[t] < 0.0 {
                    upper = upper.min(yg);
                } else {
                    lower = lower.max(yg);
                }
            } else if self.alpha[t] <= 0.0 {
                if self.y[t] > 0.0 {
                    upper = upper.min(yg);
                } else {
                    lower = lower.max(yg);
                }
            } else {
                free_sum += yg;
                free_count += 1;
            }
        }

        if free_count > 0 {
            free_sum / free_count as f64
        } else {
            (upper + lower) / 2.0
        }
    }
}
