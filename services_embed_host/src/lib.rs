//! # Embed Host Service
//!
//! This crate implements the host side of FrameFit: consuming height
//! reports posted by embedded guests and resizing the matching containers.
//!
//! ## Philosophy
//!
//! - **Strict on receive**: only well-formed `setHeight` triples from
//!   allowed origins are applied; everything else is rejected with a typed
//!   error and logged
//! - **Token-addressed**: the embed token in the report selects the
//!   container; the host never guesses
//! - **Idempotent application**: heights are set, not accumulated; repeated
//!   identical reports re-apply the same height and shrinking is allowed
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A layout system (the host records heights; presentation is the
//!   embedder's concern)
//! - A message transport (raw payloads arrive from the embedder's glue)

use frame_types::{ContainerId, ContentHeight, EmbedToken, MessageOrigin};
use messaging::{HeightReport, WireError};
use serde::{Deserialize, Serialize};
use services_diagnostics::{LogEntry, LogLevel, LogSink, NullSink};
use std::collections::HashMap;
use thiserror::Error;

/// Which sender origins the host accepts reports from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OriginPolicy {
    /// Accept reports from any origin (compatibility default)
    #[default]
    AllowAny,
    /// Accept reports only from the listed origins
    Allowlist(Vec<MessageOrigin>),
}

impl OriginPolicy {
    /// Creates an allowlist policy from the given origins
    pub fn allowlist(origins: impl IntoIterator<Item = MessageOrigin>) -> Self {
        Self::Allowlist(origins.into_iter().collect())
    }

    /// Checks whether a sender origin is allowed
    pub fn allows(&self, origin: &MessageOrigin) -> bool {
        match self {
            Self::AllowAny => true,
            Self::Allowlist(origins) => origins.contains(origin),
        }
    }
}

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// Origin restriction for inbound reports
    pub origin_policy: OriginPolicy,
}

impl HostConfig {
    /// Creates the default configuration (any origin allowed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the origin policy
    pub fn with_origin_policy(mut self, policy: OriginPolicy) -> Self {
        self.origin_policy = policy;
        self
    }
}

/// Embed host service error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Report origin not allowed: {0}")]
    OriginRejected(MessageOrigin),

    #[error("Malformed report: {0}")]
    Wire(#[from] WireError),

    #[error("No container registered for token '{0}'")]
    UnknownToken(EmbedToken),

    #[error("Container already registered for token '{0}'")]
    TokenAlreadyRegistered(EmbedToken),
}

/// A height applied to a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightUpdate {
    /// The resized container
    pub container_id: ContainerId,
    /// Token the report carried
    pub token: EmbedToken,
    /// Newly applied height
    pub height: ContentHeight,
    /// Height before this report, if one had been applied
    pub previous: Option<ContentHeight>,
}

/// Container record - internal state per registered embed
#[derive(Debug, Clone)]
struct ContainerRecord {
    container_id: ContainerId,
    height: Option<ContentHeight>,
}

/// Embed host
///
/// Registers containers by embed token and applies inbound height reports
/// to them.
pub struct EmbedHost {
    config: HostConfig,
    containers: HashMap<EmbedToken, ContainerRecord>,
    log: Box<dyn LogSink>,
}

impl EmbedHost {
    /// Creates a host with the given configuration and no log sink
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            containers: HashMap::new(),
            log: Box::new(NullSink),
        }
    }

    /// Installs a log sink for handled messages
    pub fn with_log_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.log = sink;
        self
    }

    /// Registers a resizable container for an embed token
    pub fn register_container(&mut self, token: EmbedToken) -> Result<ContainerId, HostError> {
        if self.containers.contains_key(&token) {
            return Err(HostError::TokenAlreadyRegistered(token));
        }

        let container_id = ContainerId::new();
        self.containers.insert(
            token,
            ContainerRecord {
                container_id,
                height: None,
            },
        );
        Ok(container_id)
    }

    /// Handles one inbound cross-document payload
    ///
    /// Checks the sender origin against the configured policy, decodes the
    /// wire triple, reacts to the literal `setHeight` action, and applies
    /// the height to the container registered for the report's token.
    pub fn handle_message(
        &mut self,
        raw: &[u8],
        sender: &MessageOrigin,
    ) -> Result<HeightUpdate, HostError> {
        match self.apply_message(raw, sender) {
            Ok(update) => {
                self.log.record(
                    LogEntry::new(LogLevel::Info, "container resized")
                        .with_field("token", update.token.as_str())
                        .with_field("height", update.height.to_string())
                        .with_field("origin", sender.as_str()),
                );
                Ok(update)
            }
            Err(error) => {
                self.log.record(
                    LogEntry::new(LogLevel::Warn, "height report rejected")
                        .with_field("origin", sender.as_str())
                        .with_field("reason", error.to_string()),
                );
                Err(error)
            }
        }
    }

    fn apply_message(
        &mut self,
        raw: &[u8],
        sender: &MessageOrigin,
    ) -> Result<HeightUpdate, HostError> {
        if !self.config.origin_policy.allows(sender) {
            return Err(HostError::OriginRejected(sender.clone()));
        }

        let report = HeightReport::decode(raw)?;

        let record = self
            .containers
            .get_mut(report.token())
            .ok_or_else(|| HostError::UnknownToken(report.token().clone()))?;

        let previous = record.height.replace(report.height());
        Ok(HeightUpdate {
            container_id: record.container_id,
            token: report.token().clone(),
            height: report.height(),
            previous,
        })
    }

    /// Returns the currently applied height for a token's container
    pub fn container_height(&self, token: &EmbedToken) -> Option<ContentHeight> {
        self.containers.get(token).and_then(|record| record.height)
    }

    /// Returns the container ID registered for a token
    pub fn container_id(&self, token: &EmbedToken) -> Option<ContainerId> {
        self.containers
            .get(token)
            .map(|record| record.container_id)
    }

    /// Returns how many containers are registered
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }
}
