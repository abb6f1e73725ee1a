use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity levels understood by [`BasicLogger`](crate::BasicLogger).
///
/// Levels are ordered numerically, `Debug3` being the most verbose rung. `Print` sits
/// above `Critical` so that print-style calls are shown under any threshold, and it
/// deliberately shares its display name with `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug3 = 0,
    Debug2,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    Print,
    /// Returned by [`Level::parse`] when no name matches.
    Unknown,
}

// Parse order matters: "INFO" must resolve to `Info`, never to `Print`.
const NAMED: [Level; 7] = [
    Level::Debug3,
    Level::Debug2,
    Level::Debug,
    Level::Info,
    Level::Warning,
    Level::Error,
    Level::Critical,
];

impl Level {
    /// Checks if `requested` may be emitted by a logger whose threshold is `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use unilogger::Level;
    /// assert!(Level::Info.is_allowed(Level::Error));
    /// assert!(!Level::Info.is_allowed(Level::Debug));
    /// ```
    pub fn is_allowed(self, requested: Level) -> bool {
        requested >= self
    }

    /// The display name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug3 => "DEBUG3",
            Level::Debug2 => "DEBUG2",
            Level::Debug => "DEBUG",
            Level::Info | Level::Print => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Unknown => "UNKNOWN",
        }
    }

    /// Looks a level up by name, ignoring case.
    ///
    /// Unmatched names yield [`Level::Unknown`]; parsing never fails. Since `Print`
    /// is displayed as `INFO`, its name parses back to [`Level::Info`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use unilogger::Level;
    /// assert_eq!(Level::parse("warning"), Level::Warning);
    /// assert_eq!(Level::parse("verbose"), Level::Unknown);
    /// ```
    pub fn parse(name: &str) -> Level {
        NAMED
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Level::Unknown)
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Debug3,
            1 => Level::Debug2,
            2 => Level::Debug,
            3 => Level::Info,
            4 => Level::Warning,
            5 => Level::Error,
            6 => Level::Critical,
            7 => Level::Print,
            _ => Level::Unknown,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Debug3,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug3 | Level::Debug2 => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warning => log::LevelFilter::Warn,
            Level::Error | Level::Critical => log::LevelFilter::Error,
            // Only print-style calls pass; `log` has nothing that high.
            Level::Print | Level::Unknown => log::LevelFilter::Off,
        }
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug3 | Level::Debug2 => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info | Level::Print | Level::Unknown => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Error | Level::Critical => log::Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Level; 8] = [
        Level::Debug3,
        Level::Debug2,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Print,
    ];

    #[test]
    fn ordering_is_numeric() {
        for pair in ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Level::Print < Level::Unknown);
    }

    #[test]
    fn allowed_iff_requested_not_below_threshold() {
        for threshold in ALL {
            for requested in ALL {
                assert_eq!(threshold.is_allowed(requested), requested >= threshold);
            }
        }
    }

    #[test]
    fn parse_round_trips_except_print() {
        for level in ALL {
            let parsed = Level::parse(&level.to_string());
            if level == Level::Print {
                assert_eq!(parsed, Level::Info);
            } else {
                assert_eq!(parsed, level);
            }
        }
    }

    #[test]
    fn parse_ignores_case_and_rejects_unknown_names() {
        assert_eq!(Level::parse("Debug2"), Level::Debug2);
        assert_eq!(Level::parse("critical"), Level::Critical);
        assert_eq!(Level::parse("warn"), Level::Unknown);
        assert_eq!(Level::parse(""), Level::Unknown);
        assert_eq!(Level::parse("UNKNOWN"), Level::Unknown);
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
    }

    #[test]
    fn print_shares_the_info_name() {
        assert_eq!(Level::Print.to_string(), Level::Info.to_string());
        assert_ne!(Level::Print, Level::Info);
    }

    #[test]
    fn raw_values_map_back() {
        for level in ALL {
            assert_eq!(Level::from_u8(level as u8), level);
        }
        assert_eq!(Level::from_u8(200), Level::Unknown);
    }

    #[test]
    fn log_crate_conversions() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug3);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
        assert_eq!(log::LevelFilter::from(Level::Info), log::LevelFilter::Info);
        assert_eq!(log::LevelFilter::from(Level::Unknown), log::LevelFilter::Off);
        assert_eq!(log::Level::from(Level::Critical), log::Level::Error);
    }
}
