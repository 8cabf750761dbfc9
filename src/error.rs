//! Error taxonomy
//!
//! `InvalidParameter` is never fatal: the offending value is replaced and the
//! error is kept as a warning. Contract violations (e.g. a color table that is
//! not 360 entries long) panic instead of appearing here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    /// A wheel parameter was out of range and has been substituted
    #[error("wheel {layer}: {name} = {value} is invalid, using {used}")]
    InvalidParameter {
        layer: usize,
        name: &'static str,
        value: f64,
        used: f64,
    },

    /// Configuration could not be parsed or serialized
    #[error("invalid wheel configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl WheelError {
    pub fn is_warning(&self) -> bool {
        matches!(self, WheelError::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = WheelError::InvalidParameter {
            layer: 2,
            name: "divisions",
            value: -3.0,
            used: 1.0,
        };
        assert!(err.is_warning());
        assert_eq!(err.to_string(), "wheel 2: divisions = -3 is invalid, using 1");
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: WheelError = parse.into();
        assert!(!err.is_warning());
        assert!(err.to_string().starts_with("invalid wheel configuration"));
    }
}
