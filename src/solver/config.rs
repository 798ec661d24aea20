//! Solver configuration and validation.

use thiserror::Error;

/// Error type for solver construction.
///
/// All variants are detected before any grid allocation happens.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Domain extents must be strictly positive.
    #[error("domain extents must be positive, got {width} x {height}")]
    InvalidDomain {
        /// Requested physical width
        width: f64,
        /// Requested physical height
        height: f64,
    },

    /// At least one live cell per axis.
    #[error("grid must have at least one cell per axis, got {nx} x {ny}")]
    InvalidGridSize {
        /// Requested cells in x
        nx: usize,
        /// Requested cells in y
        ny: usize,
    },

    /// The staggered scheme is stable only for CFL numbers in (0, 0.5].
    #[error("CFL number must lie in (0, 0.5], got {0}")]
    InvalidCfl(f64),

    /// The MinMod family is defined for θ in [1, 2].
    #[error("limiter parameter theta must lie in [1, 2], got {0}")]
    InvalidTheta(f64),
}

/// Configuration for a [`Central2D`](crate::solver::Central2D) solver.
///
/// # Example
///
/// ```
/// use central_rs::solver::SolverConfig;
///
/// let config = SolverConfig::new(2.0, 2.0, 200, 200)
///     .with_theta(2.0)
///     .with_verbose(true);
/// assert_eq!(config.cfl, 0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Physical domain width
    pub width: f64,
    /// Physical domain height
    pub height: f64,
    /// Live cells in x
    pub nx: usize,
    /// Live cells in y
    pub ny: usize,
    /// CFL number, in (0, 0.5]
    pub cfl: f64,
    /// MinMod limiter parameter, in [1, 2]
    pub theta: f64,
    /// Print one diagnostic line per sub-step
    pub verbose: bool,
}

impl SolverConfig {
    /// Create a configuration with the default CFL number (0.2) and limiter
    /// parameter (1.0).
    pub fn new(width: f64, height: f64, nx: usize, ny: usize) -> Self {
        Self {
            width,
            height,
            nx,
            ny,
            cfl: 0.2,
            theta: 1.0,
            verbose: false,
        }
    }

    /// Set the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Set the limiter parameter θ.
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    /// Enable or disable per-sub-step diagnostic output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check all parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidDomain {
                width: self.width,
                height: self.height,
            });
        }
        if self.nx == 0 || self.ny == 0 {
            return Err(ConfigError::InvalidGridSize {
                nx: self.nx,
                ny: self.ny,
            });
        }
        if !(self.cfl > 0.0 && self.cfl <= 0.5) {
            return Err(ConfigError::InvalidCfl(self.cfl));
        }
        if !(1.0..=2.0).contains(&self.theta) {
            return Err(ConfigError::InvalidTheta(self.theta));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::new(2.0, 2.0, 200, 200);
        assert_eq!(config.cfl, 0.2);
        assert_eq!(config.theta, 1.0);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_domain() {
        assert_eq!(
            SolverConfig::new(0.0, 2.0, 10, 10).validate(),
            Err(ConfigError::InvalidDomain {
                width: 0.0,
                height: 2.0
            })
        );
        assert!(SolverConfig::new(1.0, -1.0, 10, 10).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 1.0, 10, 10).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(SolverConfig::new(1.0, 1.0, 0, 10).validate().is_err());
        assert!(SolverConfig::new(1.0, 1.0, 10, 0).validate().is_err());
        assert!(SolverConfig::new(1.0, 1.0, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_cfl() {
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_cfl(0.0)
            .validate()
            .is_err());
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_cfl(0.6)
            .validate()
            .is_err());
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_cfl(0.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_bad_theta() {
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_theta(0.9)
            .validate()
            .is_err());
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_theta(2.1)
            .validate()
            .is_err());
        assert!(SolverConfig::new(1.0, 1.0, 4, 4)
            .with_theta(2.0)
            .validate()
            .is_ok());
    }
}
