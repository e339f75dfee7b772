use crate::registry::{Registry, RegistryError};
use rand::Rng;

/// Configuration for randomized practice sessions.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of practice sessions to run.
    pub sessions: usize,
    /// Smallest symbol batch a session may record.
    pub min_symbols: u64,
    /// Largest symbol batch a session may record.
    pub max_symbols: u64,
    /// Shortest duration-based session, in minutes.
    pub min_minutes: f64,
    /// Longest duration-based session, in minutes.
    pub max_minutes: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sessions: 10,
            min_symbols: 100,
            max_symbols: 2000,
            min_minutes: 0.5,
            max_minutes: 5.0,
        }
    }
}

/// Drives a registry through randomized practice sessions, alternating
/// between symbol-count and duration-based recording.
pub struct PracticeSimulator {
    config: SimulationConfig,
}

impl PracticeSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run the configured number of sessions, spreading practice across
    /// `codes` round-robin. An unknown code surfaces as `NotFound`.
    pub fn run<R: Rng>(
        &self,
        registry: &mut Registry,
        codes: &[String],
        rng: &mut R,
    ) -> Result<(), RegistryError> {
        if codes.is_empty() {
            return Ok(());
        }

        for session in 0..self.config.sessions {
            let code = &codes[session % codes.len()];
            if session % 2 == 0 {
                let symbols = rng.gen_range(self.config.min_symbols..=self.config.max_symbols);
                registry.record_symbols(code, symbols)?;
            } else {
                let minutes = rng.gen_range(self.config.min_minutes..self.config.max_minutes);
                registry.record_duration(code, minutes)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrainerConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simulation_accumulates_progress() {
        let mut reg = Registry::new(TrainerConfig::default());
        let sim = PracticeSimulator::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        sim.run(&mut reg, &codes(&["ru"]), &mut rng).unwrap();

        // Five of the ten sessions are symbol batches of at least min_symbols.
        let report = reg.report();
        assert!(report[0].total_symbols >= 500);
        assert!(report[0].total_time > 0.0);
    }

    #[test]
    fn test_round_robin_reaches_every_language() {
        let mut reg = Registry::new(TrainerConfig::default());
        reg.add_language("en").unwrap();
        let sim = PracticeSimulator::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        sim.run(&mut reg, &codes(&["ru", "en"]), &mut rng).unwrap();

        let report = reg.report();
        assert!(report.iter().all(|r| r.total_symbols > 0));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let sim = PracticeSimulator::new(SimulationConfig::default());
        let run = |seed| {
            let mut reg = Registry::new(TrainerConfig::default());
            let mut rng = StdRng::seed_from_u64(seed);
            sim.run(&mut reg, &codes(&["ru"]), &mut rng).unwrap();
            reg.report()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_unknown_code_stops_simulation() {
        let mut reg = Registry::new(TrainerConfig::default());
        let sim = PracticeSimulator::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(sim.run(&mut reg, &codes(&["xx"]), &mut rng).is_err());
    }

    #[test]
    fn test_empty_code_list_is_noop() {
        let mut reg = Registry::new(TrainerConfig::default());
        let sim = PracticeSimulator::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        sim.run(&mut reg, &[], &mut rng).unwrap();

        assert_eq!(reg.report()[0].total_symbols, 0);
    }
}
