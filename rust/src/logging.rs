//! Phase-tagged logging for schedule runs.
//!
//! Every line is tagged with the CPM phase that produced it, and each phase has a
//! minimum verbosity. Nothing is formatted when the phase is disabled, so
//! verbosity 0 costs a comparison per call site.
//!
//! Verbosity levels:
//! - 0: SILENT (nothing; failures are returned, not logged)
//! - 1: CHANGES (run outcome)
//! - 2: CHECKS (validation and critical-path trace)
//! - 3: DEBUG (per-activity pass values)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Stage of a schedule run a log line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Graph build and topological ordering.
    Validate,
    /// ES/EF computation.
    Forward,
    /// LS/LF computation.
    Backward,
    /// Total/free float and criticality per activity.
    Float,
    /// Critical-path walk.
    Trace,
    /// Final outcome of the run.
    Summary,
}

impl Phase {
    /// Lowest verbosity at which this phase logs.
    pub const fn min_verbosity(self) -> u8 {
        match self {
            Phase::Summary => VERBOSITY_CHANGES,
            Phase::Validate | Phase::Trace => VERBOSITY_CHECKS,
            Phase::Forward | Phase::Backward | Phase::Float => VERBOSITY_DEBUG,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::Validate => "validate",
            Phase::Forward => "forward",
            Phase::Backward => "backward",
            Phase::Float => "float",
            Phase::Trace => "trace",
            Phase::Summary => "summary",
        }
    }

    #[inline]
    pub fn enabled(self, verbosity: u8) -> bool {
        verbosity >= self.min_verbosity()
    }
}

/// Log a line for a run phase to stderr if the verbosity allows it.
///
/// `log_phase!(verbosity, Phase::Forward, "{}: ES={}", id, es)` prints
/// `[cpm:forward] A: ES=0`.
#[macro_export]
macro_rules! log_phase {
    ($verbosity:expr, $phase:expr, $($arg:tt)*) => {{
        let phase: $crate::logging::Phase = $phase;
        if phase.enabled($verbosity) {
            eprintln!("[cpm:{}] {}", phase.label(), format_args!($($arg)*));
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_thresholds() {
        assert!(!Phase::Summary.enabled(VERBOSITY_SILENT));
        assert!(Phase::Summary.enabled(VERBOSITY_CHANGES));
        assert!(!Phase::Validate.enabled(VERBOSITY_CHANGES));
        assert!(Phase::Trace.enabled(VERBOSITY_CHECKS));
        assert!(!Phase::Forward.enabled(VERBOSITY_CHECKS));
        assert!(Phase::Backward.enabled(VERBOSITY_DEBUG));
        assert!(Phase::Float.enabled(VERBOSITY_DEBUG));
    }

    #[test]
    fn test_phase_labels_distinct() {
        let phases = [
            Phase::Validate,
            Phase::Forward,
            Phase::Backward,
            Phase::Float,
            Phase::Trace,
            Phase::Summary,
        ];
        for (i, a) in phases.iter().enumerate() {
            for b in &phases[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_log_phase_silent() {
        let verbosity = VERBOSITY_SILENT;
        log_phase!(verbosity, Phase::Summary, "duration {}", 14);
        log_phase!(verbosity, Phase::Forward, "{}: ES={} EF={}", "A", 0, 2);
    }
}
