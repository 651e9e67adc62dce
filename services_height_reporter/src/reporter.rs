//! The height reporter component

use document_api::{DocumentApi, PortError};
use frame_types::{EmbedToken, TargetOrigin};
use messaging::HeightReport;
use serde::{Deserialize, Serialize};

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Target-origin restriction for outbound posts
    ///
    /// Defaults to [`TargetOrigin::Wildcard`]: reports are not
    /// origin-restricted unless the integrator opts in.
    pub target_origin: TargetOrigin,
}

impl ReporterConfig {
    /// Creates the default configuration (wildcard target origin)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts outbound posts to a single origin
    pub fn with_target_origin(mut self, target: TargetOrigin) -> Self {
        self.target_origin = target;
        self
    }
}

/// Outcome of one report attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report was handed to the parent port
    Posted(HeightReport),
    /// No addressable parent; nothing was posted
    NoParent,
}

impl ReportOutcome {
    /// Returns true if a report was posted
    pub fn is_posted(&self) -> bool {
        matches!(self, Self::Posted(_))
    }

    /// Returns the posted report, if any
    pub fn posted(&self) -> Option<&HeightReport> {
        match self {
            Self::Posted(report) => Some(report),
            Self::NoParent => None,
        }
    }
}

/// Measures document height and notifies the embedding parent
///
/// Stateless: every call reads current document state, so repeated calls
/// with unchanged state post identical reports. There is no deduplication
/// and no memory of previous posts.
#[derive(Debug, Clone, Default)]
pub struct HeightReporter {
    config: ReporterConfig,
}

impl HeightReporter {
    /// Creates a reporter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter with the given configuration
    pub fn with_config(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// Returns the reporter configuration
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Measures the document and posts one height report to the parent
    ///
    /// If the document has no addressable parent the call is a silent
    /// no-op returning [`ReportOutcome::NoParent`] — the one guarded
    /// condition on this path. Port failures are not caught here; they
    /// propagate to the caller.
    pub fn report(&self, doc: &mut dyn DocumentApi) -> Result<ReportOutcome, PortError> {
        if doc.parent_port().is_none() {
            return Ok(ReportOutcome::NoParent);
        }

        let height = doc.scroll_height();
        let token = EmbedToken::from_location_search(doc.location_search());
        let report = HeightReport::new(token, height);

        match doc.parent_port() {
            Some(port) => {
                port.post(&report, &self.config.target_origin)?;
                Ok(ReportOutcome::Posted(report))
            }
            None => Ok(ReportOutcome::NoParent),
        }
    }
}
