//! Match configuration chosen before play starts.

use std::time::Duration;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{DEFAULT_COUNTDOWN, DEFAULT_RESET_DELAY};

/// The per-piece recovery time after a move. Only these values are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CooldownSetting {
    FiveSeconds,
    #[default]
    TenSeconds,
    FifteenSeconds,
}

impl CooldownSetting {
    pub const ALL: [CooldownSetting; 3] = [
        CooldownSetting::FiveSeconds,
        CooldownSetting::TenSeconds,
        CooldownSetting::FifteenSeconds,
    ];

    #[inline]
    pub const fn seconds(self) -> u64 {
        match self {
            CooldownSetting::FiveSeconds => 5,
            CooldownSetting::TenSeconds => 10,
            CooldownSetting::FifteenSeconds => 15,
        }
    }

    #[inline]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.seconds())
    }

    pub fn from_seconds(seconds: u64) -> Result<Self, ChessErrors> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.seconds() == seconds)
            .ok_or(ChessErrors::UnsupportedCooldown(seconds))
    }

    /// Next option, wrapping from the longest back to the shortest.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping from the shortest to the longest.
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub cooldown: CooldownSetting,
    /// Length of the countdown between ready-up and play.
    pub countdown: Duration,
    /// Time the finished board stays up before the automatic reset.
    pub reset_delay: Duration,
    /// Seed for the fairness shuffle. `None` draws a fresh seed per match.
    pub shuffle_seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cooldown: CooldownSetting::default(),
            countdown: DEFAULT_COUNTDOWN,
            reset_delay: DEFAULT_RESET_DELAY,
            shuffle_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_options_cycle_in_both_directions() {
        let mut setting = CooldownSetting::FiveSeconds;
        setting = setting.next();
        assert_eq!(setting, CooldownSetting::TenSeconds);
        setting = setting.next().next();
        assert_eq!(setting, CooldownSetting::FiveSeconds);
        assert_eq!(setting.previous(), CooldownSetting::FifteenSeconds);
    }

    #[test]
    fn only_offered_cooldowns_parse() {
        assert_eq!(
            CooldownSetting::from_seconds(15),
            Ok(CooldownSetting::FifteenSeconds)
        );
        assert_eq!(
            CooldownSetting::from_seconds(7),
            Err(ChessErrors::UnsupportedCooldown(7))
        );
        assert_eq!(
            CooldownSetting::TenSeconds.duration(),
            Duration::from_millis(10_000)
        );
    }
}
