//! CLI module for health-probe
//!
//! Runs a single health probe and reports the outcome on stdout.

use crate::common::config::ProbeConfig;
use crate::common::error::CommonError;
use crate::health::{HealthProbe, ProbeError, ProbeReport};
use clap::Parser;
use serde::Serialize;

/// Exit code: endpoint is healthy
pub const EXIT_OK: i32 = 0;

/// Exit code: probe failed
pub const EXIT_PROBE_FAILED: i32 = 1;

/// Exit code: invalid arguments or configuration (same as clap's usage errors)
pub const EXIT_INVALID_CONFIG: i32 = 2;

/// health-probe - Check a service's /health endpoint once
#[derive(Parser, Debug)]
#[command(name = "health-probe")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HEALTH_PROBE_URL           Health endpoint URL (default: http://localhost:8000/health)
    HEALTH_PROBE_TIMEOUT_SECS  Request timeout in seconds (default: 5)
    HEALTH_PROBE_LOG_LEVEL     Log level (default: info)
    HEALTH_PROBE_LOG_FORMAT    Log format: text or json (default: text)

EXIT STATUS:
    0  endpoint returned 200 with {"status":"ok"}
    1  probe failed (unreachable, wrong status, or wrong body)
    2  invalid arguments or configuration (e.g. malformed URL, zero timeout)
"#)]
pub struct Cli {
    /// Health endpoint URL (overrides HEALTH_PROBE_URL)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Request timeout in seconds (overrides HEALTH_PROBE_TIMEOUT_SECS)
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, env = "HEALTH_PROBE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the probe configuration: CLI flags over environment over defaults
    ///
    /// Environment values are not validated on their own, so a valid flag
    /// replaces an invalid environment value.
    pub fn resolve_config(&self) -> Result<ProbeConfig, CommonError> {
        let mut config = ProbeConfig::from_env_unvalidated();
        if let Some(url) = &self.url {
            config.url = url.trim().to_string();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config.validate()?;
        Ok(config)
    }

    /// URL the user asked for (flag, then environment, then default), unvalidated
    pub fn requested_url(&self) -> String {
        match &self.url {
            Some(url) => url.trim().to_string(),
            None => ProbeConfig::from_env_unvalidated().url,
        }
    }
}

/// JSON output of a probe run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeOutcome {
    /// Whether the probe passed
    pub success: bool,
    /// Probed URL
    pub url: String,
    /// Received status code (pass only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Request latency in milliseconds (pass only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Received body (pass only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Failure label, see [`ProbeError::kind`] (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Failure message (failure only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// Build an outcome from a probe result
    pub fn from_result(url: &str, result: &Result<ProbeReport, ProbeError>) -> Self {
        match result {
            Ok(report) => Self {
                success: true,
                url: report.url.clone(),
                status_code: Some(report.status_code),
                latency_ms: Some(report.latency_ms),
                body: Some(report.body.clone()),
                kind: None,
                error: None,
            },
            Err(e) => Self {
                success: false,
                url: url.to_string(),
                status_code: None,
                latency_ms: None,
                body: None,
                kind: Some(e.kind()),
                error: Some(e.to_string()),
            },
        }
    }

    /// Outcome for a configuration that was rejected before any request
    pub fn config_failure(url: &str, error: &CommonError) -> Self {
        Self {
            success: false,
            url: url.to_string(),
            status_code: None,
            latency_ms: None,
            body: None,
            kind: Some("config"),
            error: Some(error.to_string()),
        }
    }

    /// Human-readable single line
    pub fn to_line(&self) -> String {
        if self.success {
            format!(
                "OK\t{}\t{}\t{}ms",
                self.url,
                self.status_code.unwrap_or_default(),
                self.latency_ms.unwrap_or_default()
            )
        } else {
            format!("FAIL\t{}", self.error.as_deref().unwrap_or("unknown error"))
        }
    }
}

/// Execute the probe and print the outcome
///
/// Returns the process exit code. `Err` only for output failures.
pub async fn execute(cli: &Cli) -> Result<i32, anyhow::Error> {
    let probe = match cli.resolve_config().and_then(|config| {
        HealthProbe::new(config).map_err(|e| match e {
            ProbeError::Config(inner) => inner,
            other => CommonError::Config(other.to_string()),
        })
    }) {
        Ok(probe) => probe,
        Err(e) => {
            if cli.json {
                let outcome = ProbeOutcome::config_failure(&cli.requested_url(), &e);
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                eprintln!("Error: {}", e);
            }
            return Ok(EXIT_INVALID_CONFIG);
        }
    };

    let url = probe.url().to_string();
    let result = probe.check().await;
    let outcome = ProbeOutcome::from_result(&url, &result);

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}", outcome.to_line());
    }

    Ok(if outcome.success {
        EXIT_OK
    } else {
        EXIT_PROBE_FAILED
    })
}
