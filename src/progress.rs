use serde::{Deserialize, Serialize};

/// Growth rule mapping cumulative practice volume to typing speed.
///
/// Speed is always derived from the cumulative symbol count and never stored
/// or adjusted on its own, so it cannot drift out of sync with recorded
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// Starting speed for a fresh language, in symbols per minute.
    pub base_speed: u32,
    /// Speed gained per completed step of practice volume.
    pub speed_step: u32,
    /// Symbols required to complete one step.
    pub symbols_per_step: u64,
}

impl Default for GrowthCurve {
    fn default() -> Self {
        Self {
            base_speed: 100,
            speed_step: 5,
            symbols_per_step: 1000,
        }
    }
}

impl GrowthCurve {
    /// Speed implied by a cumulative symbol count.
    pub fn speed_for(&self, total_symbols: u64) -> u32 {
        let steps = (total_symbols / self.symbols_per_step) as u32;
        self.base_speed + self.speed_step * steps
    }
}

/// Cumulative typing progress for one practiced language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProgress {
    code: String,
    speed: u32,
    total_symbols: u64,
    total_time: f64,
    curve: GrowthCurve,
}

impl LanguageProgress {
    pub fn new(code: impl Into<String>, curve: GrowthCurve) -> Self {
        Self {
            code: code.into(),
            speed: curve.base_speed,
            total_symbols: 0,
            total_time: 0.0,
            curve,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Current speed in symbols per minute.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Total symbols ever recorded.
    pub fn total_symbols(&self) -> u64 {
        self.total_symbols
    }

    /// Total practice minutes, charged per batch at the speed active when the
    /// batch was recorded.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Record a batch of typed symbols.
    ///
    /// Time is charged at the speed in effect before the batch; the speed is
    /// then recomputed from the new cumulative count.
    pub fn record_symbols(&mut self, symbols: u64) {
        self.total_time += symbols as f64 / self.speed as f64;
        self.total_symbols += symbols;
        self.speed = self.curve.speed_for(self.total_symbols);
    }

    /// Record a practice session by duration, converting minutes to symbols
    /// at the current speed.
    ///
    /// The speed may step up as a result, so the minutes-to-symbols rate is
    /// only valid at call time.
    pub fn record_duration(&mut self, minutes: f64) {
        let symbols = (minutes * self.speed as f64).floor() as u64;
        self.record_symbols(symbols);
    }
}
