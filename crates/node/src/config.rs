//! Node configuration
//!
//! Loaded from an optional YAML file. Every field has a default, so an
//! empty file (or no file) yields the stock maneuver at 10 Hz over UDP.
//!
//! ```yaml
//! maneuver:
//!   forward_duration: 3.0
//!   steer_right: -1200
//! driver:
//!   rate_hz: 20.0
//! transport:
//!   kind: stdout
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use erp42_park_core::parameters::{MAX_SPEED, MAX_STEER, MIN_STEER};
use erp42_park_core::{ParamError, ParkingParams};
use serde::Deserialize;

use crate::error::ConfigError;

/// Default UDP target for the actuator bridge
pub const DEFAULT_TARGET: &str = "127.0.0.1:9100";

/// Default tick rate
pub const DEFAULT_RATE_HZ: f64 = 10.0;

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub maneuver: ManeuverConfig,
    pub driver: DriverConfig,
    pub transport: TransportConfig,
}

/// Maneuver tunables as written in the file.
///
/// Integer fields are wider than the actuator types so out-of-range values
/// are reported as validation errors instead of YAML type errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManeuverConfig {
    /// APPROACH length in seconds
    pub forward_duration: f64,
    /// ENTRY length in seconds
    pub entry_duration: f64,
    /// ADJUST length in seconds
    pub adjust_duration: f64,
    /// STRAIGHT length in seconds
    pub straight_duration: f64,
    pub forward_speed: u16,
    pub reverse_speed: u16,
    pub steer_right: i32,
    pub steer_left: i32,
    pub steer_straight: i32,
}

impl Default for ManeuverConfig {
    fn default() -> Self {
        let params = ParkingParams::default();
        Self {
            forward_duration: params.forward_duration.as_secs_f64(),
            entry_duration: params.entry_duration.as_secs_f64(),
            adjust_duration: params.adjust_duration.as_secs_f64(),
            straight_duration: params.straight_duration.as_secs_f64(),
            forward_speed: params.forward_speed.into(),
            reverse_speed: params.reverse_speed.into(),
            steer_right: params.steer_right.into(),
            steer_left: params.steer_left.into(),
            steer_straight: params.steer_straight.into(),
        }
    }
}

impl ManeuverConfig {
    /// Convert to validated sequencer parameters.
    pub fn to_params(&self) -> Result<ParkingParams, ConfigError> {
        let params = ParkingParams {
            forward_duration: duration("forward_duration", self.forward_duration)?,
            entry_duration: duration("entry_duration", self.entry_duration)?,
            adjust_duration: duration("adjust_duration", self.adjust_duration)?,
            straight_duration: duration("straight_duration", self.straight_duration)?,
            forward_speed: speed("forward_speed", self.forward_speed)?,
            reverse_speed: speed("reverse_speed", self.reverse_speed)?,
            steer_right: steer("steer_right", self.steer_right)?,
            steer_left: steer("steer_left", self.steer_left)?,
            steer_straight: steer("steer_straight", self.steer_straight)?,
        };
        params.validate()?;
        Ok(params)
    }
}

fn duration(name: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidDuration { name, value })
}

fn speed(name: &'static str, value: u16) -> Result<u8, ParamError> {
    match u8::try_from(value) {
        Ok(v) if v <= MAX_SPEED => Ok(v),
        _ => Err(ParamError::SpeedOutOfRange { name, value }),
    }
}

fn steer(name: &'static str, value: i32) -> Result<i16, ParamError> {
    match i16::try_from(value) {
        Ok(v) if (MIN_STEER..=MAX_STEER).contains(&v) => Ok(v),
        _ => Err(ParamError::SteerOutOfRange { name, value }),
    }
}

/// Tick loop settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Tick rate in Hz
    pub rate_hz: f64,
    /// Stop the loop after this many seconds in DONE; run forever if unset
    pub stop_after_done: Option<f64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            rate_hz: DEFAULT_RATE_HZ,
            stop_after_done: None,
        }
    }
}

impl DriverConfig {
    /// Interval between ticks.
    pub fn period(&self) -> Result<Duration, ConfigError> {
        if !self.rate_hz.is_finite() || self.rate_hz <= 0.0 {
            return Err(ConfigError::InvalidRate(self.rate_hz));
        }
        match Duration::try_from_secs_f64(1.0 / self.rate_hz) {
            Ok(period) if !period.is_zero() => Ok(period),
            _ => Err(ConfigError::InvalidRate(self.rate_hz)),
        }
    }

    /// Linger time in DONE, if configured.
    pub fn linger(&self) -> Result<Option<Duration>, ConfigError> {
        self.stop_after_done
            .map(|secs| duration("stop_after_done", secs))
            .transpose()
    }
}

/// Which sink receives the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// JSON datagrams to `target`
    #[default]
    Udp,
    /// JSON lines on stdout
    Stdout,
}

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    pub kind: TransportKind,
    /// UDP destination
    pub target: SocketAddr,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            target: SocketAddr::from(([127, 0, 0, 1], 9100)),
        }
    }
}

impl NodeConfig {
    /// Parse a YAML document. Blank input yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Check every section without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maneuver.to_params()?;
        self.driver.period()?;
        self.driver.linger()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_defaults() {
        let config = NodeConfig::from_yaml_str("").unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.maneuver.to_params().unwrap(), ParkingParams::default());
        assert_eq!(config.driver.period().unwrap(), Duration::from_millis(100));
        assert_eq!(config.transport.target.to_string(), DEFAULT_TARGET);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = "maneuver:\n  entry_duration: 2.5\n  steer_right: -1500\ndriver:\n  rate_hz: 20\n";
        let config = NodeConfig::from_yaml_str(yaml).unwrap();
        let params = config.maneuver.to_params().unwrap();

        assert_eq!(params.entry_duration, Duration::from_millis(2_500));
        assert_eq!(params.steer_right, -1500);
        assert_eq!(params.forward_duration, Duration::from_secs(3));
        assert_eq!(params.steer_left, 1000);
        assert_eq!(config.driver.period().unwrap(), Duration::from_millis(50));
        assert_eq!(config.transport.kind, TransportKind::Udp);
    }

    #[test]
    fn transport_section() {
        let yaml = "transport:\n  kind: stdout\n  target: 10.0.0.5:7000\n";
        let config = NodeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.transport.kind, TransportKind::Stdout);
        assert_eq!(config.transport.target.port(), 7000);
    }

    #[test]
    fn speed_out_of_range_is_invalid() {
        let config = NodeConfig::from_yaml_str("maneuver:\n  forward_speed: 250\n").unwrap();
        let err = config.maneuver.to_params().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ParamError::SpeedOutOfRange {
                name: "forward_speed",
                value: 250
            })
        ));

        // Wider than u8 is still a validation error, not a parse error
        let config = NodeConfig::from_yaml_str("maneuver:\n  reverse_speed: 900\n").unwrap();
        assert!(matches!(
            config.maneuver.to_params(),
            Err(ConfigError::Invalid(ParamError::SpeedOutOfRange { value: 900, .. }))
        ));
    }

    #[test]
    fn steer_out_of_range_is_invalid() {
        let config = NodeConfig::from_yaml_str("maneuver:\n  steer_left: 40000\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(ParamError::SteerOutOfRange {
                name: "steer_left",
                value: 40000
            }))
        ));
    }

    #[test]
    fn negative_duration_is_invalid() {
        let config = NodeConfig::from_yaml_str("maneuver:\n  adjust_duration: -1.0\n").unwrap();
        assert!(matches!(
            config.maneuver.to_params(),
            Err(ConfigError::InvalidDuration {
                name: "adjust_duration",
                ..
            })
        ));
    }

    #[test]
    fn bad_rate_is_rejected() {
        for rate in [0.0, -5.0, f64::NAN, f64::INFINITY, 1e300] {
            let driver = DriverConfig {
                rate_hz: rate,
                stop_after_done: None,
            };
            assert!(matches!(driver.period(), Err(ConfigError::InvalidRate(_))));
        }
    }

    #[test]
    fn stop_after_done_parses() {
        let config = NodeConfig::from_yaml_str("driver:\n  stop_after_done: 1.5\n").unwrap();
        assert_eq!(
            config.driver.linger().unwrap(),
            Some(Duration::from_millis(1_500))
        );
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = NodeConfig::from_yaml_str("maneuver:\n  forward_speeed: 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = NodeConfig::load(Path::new("/nonexistent/park.yaml")).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, Path::new("/nonexistent/park.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
