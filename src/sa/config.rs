//! SA configuration.

/// Configuration for the annealing search.
///
/// Cooling is geometric: `T_{k+1} = alpha * T_k`, applied once per
/// iteration.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(50_000)
///     .with_start_temperature(1_000.0)
///     .with_alpha(0.999)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Search budget: maximum number of candidate evaluations.
    pub iterations: usize,

    /// Initial temperature. Higher values accept worsening moves more
    /// freely early in the search.
    pub start_temperature: f64,

    /// Per-iteration cooling multiplier in (0, 1). Higher = slower cooling.
    pub alpha: f64,

    /// Cutoff temperature. Once T drops below this, the acceptance
    /// probability for any worsening move is negligible and the search
    /// stops immediately, regardless of remaining budget.
    pub min_temperature: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            start_temperature: 10_000.0,
            alpha: 0.995,
            min_temperature: 1e-8,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// An `alpha` outside (0, 1) would produce a non-cooling or divergent
    /// schedule, so it is rejected here rather than silently clamped.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_temperature <= 0.0 {
            return Err("start_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.iterations, 10_000);
        assert!((config.start_temperature - 10_000.0).abs() < 1e-10);
        assert!((config.alpha - 0.995).abs() < 1e-12);
        assert!((config.min_temperature - 1e-8).abs() < 1e-18);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = SaConfig::default()
            .with_iterations(500)
            .with_start_temperature(50.0)
            .with_alpha(0.9)
            .with_min_temperature(1e-4)
            .with_seed(7);
        assert_eq!(config.iterations, 500);
        assert!((config.start_temperature - 50.0).abs() < 1e-10);
        assert!((config.alpha - 0.9).abs() < 1e-12);
        assert!((config.min_temperature - 1e-4).abs() < 1e-14);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_start_temperature() {
        let config = SaConfig::default().with_start_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_min_temperature() {
        let config = SaConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::default().with_alpha(1.0).validate().is_err());
        assert!(SaConfig::default().with_alpha(1.5).validate().is_err());
        assert!(SaConfig::default().with_alpha(0.0).validate().is_err());
    }
}
