use bitflags::bitflags;

use crate::log::Severity;

bitflags! {
    /// Set of severities shown in the view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeverityMask: u8 {
        const DEBUG = 1 << 0;
        const VERBOSE = 1 << 1;
        const INFO = 1 << 2;
        const WARN = 1 << 3;
        const ERROR = 1 << 4;
        const FATAL = 1 << 5;
    }
}

impl SeverityMask {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Self::DEBUG,
            Severity::Verbose => Self::VERBOSE,
            Severity::Info => Self::INFO,
            Severity::Warn => Self::WARN,
            Severity::Error => Self::ERROR,
            Severity::Fatal => Self::FATAL,
        }
    }

    /// Whether records of this severity pass the mask
    pub fn shows(&self, severity: Severity) -> bool {
        self.contains(Self::from_severity(severity))
    }

    pub fn set_severity(&mut self, severity: Severity, shown: bool) {
        self.set(Self::from_severity(severity), shown);
    }

    /// Severities in the mask, in ascending order
    pub fn severities(&self) -> Vec<Severity> {
        Severity::ALL.into_iter().filter(|s| self.shows(*s)).collect()
    }
}

impl Default for SeverityMask {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Severity> for SeverityMask {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, s| mask | Self::from_severity(s))
    }
}
