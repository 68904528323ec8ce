//! Logging utilities for the Stepcheck functions
//!
//! This module provides:
//! - Structured logging setup (compact, full, JSON)
//! - Environment overrides for level, format and PII handling
//! - Per-invocation spans carrying the runtime request id
//! - Masking of personal data in diagnostic lines
//! - Invocation timing

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use tracing::{field, Span};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter, in `EnvFilter` directive syntax
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Mask SSN and email values in diagnostic lines
    pub redact_pii: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            thread_ids: false,
            source_location: false,
            redact_pii: true,
        }
    }
}

impl LoggingConfig {
    /// Apply overrides from the process environment
    ///
    /// Returns one warning per rejected value. Logging is not up yet at this
    /// point, so the caller reports them once it is.
    pub fn merge_with_env(&mut self) -> Vec<String> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    ///
    /// Runtime-provided settings are applied first so that the function's
    /// own variables win. Unrecognised values leave the prior setting in place.
    #[must_use = "rejected values are only reported through the returned warnings"]
    pub fn merge_from<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(level) = lookup("AWS_LAMBDA_LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "fatal" => self.level = "error".to_string(),
                l @ ("trace" | "debug" | "info" | "warn" | "error") => self.level = l.to_string(),
                _ => warnings.push(format!(
                    "Invalid AWS_LAMBDA_LOG_LEVEL: {}, keeping {}",
                    level, self.level
                )),
            }
        }

        if let Some(format) = lookup("AWS_LAMBDA_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => self.format = LogFormat::Json,
                "text" => self.format = LogFormat::Compact,
                _ => warnings.push(format!(
                    "Invalid AWS_LAMBDA_LOG_FORMAT: {}, keeping {:?}",
                    format, self.format
                )),
            }
        }

        // RUST_LOG takes precedence over the runtime level
        if let Some(rust_log) = lookup("RUST_LOG") {
            if !rust_log.trim().is_empty() {
                self.level = rust_log;
            }
        }

        if let Some(format) = lookup("STEPCHECK_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "compact" => self.format = LogFormat::Compact,
                "full" => self.format = LogFormat::Full,
                "json" => self.format = LogFormat::Json,
                _ => warnings.push(format!(
                    "Invalid STEPCHECK_LOG_FORMAT: {}, keeping {:?}",
                    format, self.format
                )),
            }
        }

        if let Some(pii) = lookup("STEPCHECK_LOG_PII") {
            match pii.to_lowercase().as_str() {
                "true" | "1" => self.redact_pii = false,
                "false" | "0" => self.redact_pii = true,
                _ => warnings.push(format!("Invalid STEPCHECK_LOG_PII: {}, keeping redaction", pii)),
            }
        }

        warnings
    }
}

/// Initialize the global logging system
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(config)?;

    // One arm per format keeps the subscriber types apart
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(std::io::stdout().is_terminal())
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .with_current_span(true)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(std::io::stdout().is_terminal())
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(format!("Failed to initialize logging: {}", e)))?;
        }
    }

    tracing::debug!(config = ?config, "Logging system initialized");

    Ok(())
}

fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::logging(format!("Invalid filter directive '{}': {}", config.level, e)))
}

/// Create the span one invocation runs in
pub fn invocation_span(function: &'static str, request_id: &str) -> Span {
    tracing::info_span!(
        "invocation",
        function = function,
        request_id = request_id,
        duration_ms = field::Empty,
    )
}

/// Masking of personal data in log output
pub mod redaction {
    const MASK: &str = "***";

    /// Mask an SSN, keeping only the last four characters and any hyphens
    ///
    /// `123-45-6789` becomes `***-**-6789`. Values too short to keep a
    /// tail are masked completely.
    pub fn mask_ssn(value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() < 5 {
            return MASK.to_string();
        }

        let keep_from = chars.len() - 4;
        chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if i >= keep_from || c == '-' { c } else { '*' })
            .collect()
    }

    /// Mask the local part of an email, keeping its first character and the domain
    pub fn mask_email(value: &str) -> String {
        match value.rsplit_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{}{}@{}", first, MASK, domain),
                None => format!("{}@{}", MASK, domain),
            },
            None => MASK.to_string(),
        }
    }

    /// Render an optional field the way it appears in diagnostic lines
    pub fn shown(value: Option<&str>) -> &str {
        value.unwrap_or("<absent>")
    }
}

/// Invocation timing
pub mod timing {
    use std::time::{Duration, Instant};
    use tracing::Span;

    /// Records elapsed time on the current span when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: &'static str,
    }

    impl Timer {
        pub fn new(operation: &'static str) -> Self {
            Self {
                start: Instant::now(),
                span: Span::current(),
                operation,
            }
        }

        pub fn elapsed(&self) -> Duration {
            self.start.elapsed()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed"
            );
        }
    }
}
