use crate::config::TrainerConfig;
use crate::progress::LanguageProgress;
use crate::report::LanguageReport;
use thiserror::Error;

/// Recoverable failures surfaced by [`Registry`] operations.
///
/// None of these are fatal: the registry is left unchanged on every error
/// path and the caller decides whether to report and continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown language: {code}")]
    NotFound { code: String },

    #[error("language {code} is already registered")]
    AlreadyExists { code: String },

    #[error("registry already holds {max} languages")]
    CapacityExceeded { max: usize },

    #[error("catch-up needs at least two languages")]
    InsufficientLanguages,
}

/// Snapshot estimate of the practice volume the slowest language needs to
/// match the fastest language's current speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchUpEstimate {
    pub slower: String,
    pub slower_speed: u32,
    pub faster: String,
    pub faster_speed: u32,
    pub symbols_needed: u64,
}

/// Bounded collection of practiced languages, keyed by code.
///
/// Entries are kept in insertion order, which makes the first-encountered
/// tie-breaking of [`Registry::most_active`] and [`Registry::catch_up`]
/// deterministic: earlier additions win ties.
#[derive(Debug)]
pub struct Registry {
    config: TrainerConfig,
    entries: Vec<LanguageProgress>,
}

impl Registry {
    /// Create a registry pre-populated with the configured default language.
    pub fn new(config: TrainerConfig) -> Self {
        let default = LanguageProgress::new(config.default_language.clone(), config.curve);
        Self {
            entries: vec![default],
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    fn find(&self, code: &str) -> Option<&LanguageProgress> {
        self.entries.iter().find(|lang| lang.code() == code)
    }

    fn find_mut(&mut self, code: &str) -> Option<&mut LanguageProgress> {
        self.entries.iter_mut().find(|lang| lang.code() == code)
    }

    /// Record typed symbols for a language.
    pub fn record_symbols(&mut self, code: &str, symbols: u64) -> Result<(), RegistryError> {
        let lang = self.find_mut(code).ok_or_else(|| RegistryError::NotFound {
            code: code.to_string(),
        })?;
        lang.record_symbols(symbols);
        Ok(())
    }

    /// Record a practice session by duration in minutes.
    pub fn record_duration(&mut self, code: &str, minutes: f64) -> Result<(), RegistryError> {
        let lang = self.find_mut(code).ok_or_else(|| RegistryError::NotFound {
            code: code.to_string(),
        })?;
        lang.record_duration(minutes);
        Ok(())
    }

    /// Current speed for a language, or `0` when the code is unknown.
    ///
    /// Zero is a sentinel: real speeds never drop below the curve's base.
    pub fn speed_of(&self, code: &str) -> u32 {
        self.find(code).map_or(0, |lang| lang.speed())
    }

    /// Register a new language, bootstrapping its starting speed from the
    /// least practiced language already held.
    ///
    /// The target speed is `base + min_progress / 2`, reached by driving the
    /// fresh entry through whole warm-up batches of `symbols_per_step`
    /// symbols. Both divisions floor, so the realized speed can land below
    /// the single-division ideal of `base + min_progress / 10`.
    pub fn add_language(&mut self, code: &str) -> Result<(), RegistryError> {
        if self.entries.len() >= self.config.max_languages {
            return Err(RegistryError::CapacityExceeded {
                max: self.config.max_languages,
            });
        }
        if self.contains(code) {
            return Err(RegistryError::AlreadyExists {
                code: code.to_string(),
            });
        }

        let min_progress = self
            .entries
            .iter()
            .map(|lang| lang.total_symbols())
            .min()
            .unwrap_or(0);
        let curve = self.config.curve;
        let target_speed = curve.base_speed + (min_progress / 2) as u32;
        let warmup_batches = (target_speed - curve.base_speed) / curve.speed_step;

        let mut fresh = LanguageProgress::new(code, curve);
        for _ in 0..warmup_batches {
            fresh.record_symbols(curve.symbols_per_step);
        }
        self.entries.push(fresh);
        Ok(())
    }

    /// Code of the language with the strictly largest accumulated practice
    /// time, or `None` when nothing has been practiced yet.
    pub fn most_active(&self) -> Option<&str> {
        let mut best = None;
        let mut max_time = 0.0;
        for lang in &self.entries {
            if lang.total_time() > max_time {
                max_time = lang.total_time();
                best = Some(lang.code());
            }
        }
        best
    }

    /// Estimate the symbols the slowest language needs to close the speed gap
    /// to the fastest one.
    ///
    /// This is a static snapshot: it assumes the fastest language stops
    /// gaining speed while the slowest catches up.
    pub fn catch_up(&self) -> Result<CatchUpEstimate, RegistryError> {
        if self.entries.len() < 2 {
            return Err(RegistryError::InsufficientLanguages);
        }

        let mut fastest = &self.entries[0];
        let mut slowest = &self.entries[0];
        for lang in &self.entries[1..] {
            if lang.speed() > fastest.speed() {
                fastest = lang;
            }
            if lang.speed() < slowest.speed() {
                slowest = lang;
            }
        }

        let curve = self.config.curve;
        let diff = fastest.speed() - slowest.speed();
        let symbols_needed = u64::from(diff / curve.speed_step) * curve.symbols_per_step;

        Ok(CatchUpEstimate {
            slower: slowest.code().to_string(),
            slower_speed: slowest.speed(),
            faster: fastest.code().to_string(),
            faster_speed: fastest.speed(),
            symbols_needed,
        })
    }

    /// Snapshot of every held language in insertion order. Pure read.
    pub fn report(&self) -> Vec<LanguageReport> {
        self.entries
            .iter()
            .map(|lang| LanguageReport {
                code: lang.code().to_string(),
                speed: lang.speed(),
                total_symbols: lang.total_symbols(),
                total_time: lang.total_time(),
            })
            .collect()
    }
}
