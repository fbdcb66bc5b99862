//! The click-to-popup pipeline.
//!
//! ```text
//! click ─▶ fetch key ┐
//!          fetch raw ┴─▶ validate ─▶ [report-name override] ─▶ encrypt ─▶ build URL ─▶ popup
//! ```
//!
//! Each run reads the key and payload afresh and shares no state with any
//! other run; overlapping clicks produce independent runs.

use memolink_cipher::{CipherError, CipherKey, encrypt};
use memolink_schema::{
    ActionType, MissingConfiguration, Rejection, ValidationContext, apply_report_name_override,
    validate,
};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::host::{HostMode, Notifier, PopupOpener, PopupRequest, VariableError, VariableSource};
use crate::url::{DispatchUrl, build_url};

/// Why a run stopped before opening the popup.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Fetch(#[from] VariableError),

    /// Payload failed validation; the message is meant for the user.
    #[error("{0}")]
    Rejected(Rejection),

    #[error(transparent)]
    MissingConfiguration(#[from] MissingConfiguration),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

impl From<Rejection> for DispatchError {
    fn from(value: Rejection) -> Self {
        Self::Rejected(value)
    }
}

impl DispatchError {
    /// Misconfiguration and host failures, as opposed to user input the
    /// user can correct.
    pub fn is_hard_failure(&self) -> bool {
        match self {
            Self::Fetch(_) | Self::Cipher(_) | Self::MissingConfiguration(_) => true,
            Self::Rejected(reason) => !reason.kind.is_user_recoverable(),
        }
    }
}

/// Runs dispatches against one set of host collaborators.
pub struct Dispatcher<S, O, N> {
    source: S,
    opener: O,
    notifier: N,
}

impl<S, O, N> Dispatcher<S, O, N>
where
    S: VariableSource,
    O: PopupOpener,
    N: Notifier,
{
    pub fn new(source: S, opener: O, notifier: N) -> Self {
        Self {
            source,
            opener,
            notifier,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Builds the popup request without opening it.
    pub async fn prepare(&self, config: &WidgetConfig) -> Result<PopupRequest, DispatchError> {
        let span = info_span!(
            "dispatch",
            run_id = %Uuid::new_v4(),
            action = %config.action_type
        );
        self.prepare_inner(config).instrument(span).await
    }

    async fn prepare_inner(&self, config: &WidgetConfig) -> Result<PopupRequest, DispatchError> {
        let (key, raw) = tokio::try_join!(
            self.source.fetch(&config.key_variable_name),
            self.source.fetch(&config.payload_variable_name)
        )?;
        debug!(payload_len = raw.len(), "fetched key and payload");

        let ctx = ValidationContext {
            report_name: config.configured_report_name(),
        };
        let parsed = validate(&raw, config.action_type, ctx).into_result()?;

        let body = match config.action_type {
            ActionType::QCostCreate => apply_report_name_override(parsed, &config.report_name)?,
            ActionType::IssueNote | ActionType::Reliability | ActionType::QCostUpdate => raw,
        };

        let fingerprint = CipherKey::parse(&key)?.fingerprint();
        let cipher_text = encrypt(&body, &key)?;
        debug!(key = %fingerprint, cipher_len = cipher_text.len(), "payload encrypted");

        let url = build_url(&config.server_address, config.action_type, &cipher_text);
        Ok(PopupRequest {
            url,
            width: config.pop_width,
            height: config.pop_height,
        })
    }

    /// Runs the pipeline and opens the popup. Returns the dispatched URL.
    pub async fn run(&self, config: &WidgetConfig) -> Result<DispatchUrl, DispatchError> {
        let request = self.prepare(config).await?;
        self.opener.open(&request);
        Ok(request.url)
    }

    /// Click handler: every failure becomes a user alert and a log line.
    pub async fn on_click(&self, config: &WidgetConfig, mode: HostMode) {
        if mode == HostMode::Edit {
            debug!(action = %config.action_type, "click ignored in edit mode");
            return;
        }
        match self.run(config).await {
            Ok(url) => info!(
                action = %config.action_type,
                url_len = url.as_str().len(),
                "popup opened"
            ),
            Err(err) => {
                if err.is_hard_failure() {
                    warn!(action = %config.action_type, error = %err, "dispatch failed");
                } else {
                    info!(
                        action = %config.action_type,
                        reason = %err,
                        "dispatch needs a selection"
                    );
                }
                self.notifier.alert(&err.to_string());
            }
        }
    }
}
