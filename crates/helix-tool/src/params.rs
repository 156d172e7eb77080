//! The four helix parameters and their Maya-style flag parser.

use crate::error::{HelixError, Result};
use serde::{Deserialize, Serialize};

/// Short and long spelling of the pitch flag.
pub const PITCH_FLAG: (&str, &str) = ("-p", "-pitch");
/// Short and long spelling of the radius flag.
pub const RADIUS_FLAG: (&str, &str) = ("-r", "-radius");
/// Short and long spelling of the CV-count flag.
pub const NUM_CVS_FLAG: (&str, &str) = ("-ncv", "-numCVs");
/// Short and long spelling of the upside-down flag.
pub const UPSIDE_DOWN_FLAG: (&str, &str) = ("-ud", "-upsideDown");

/// The parameter set driving helix generation.
///
/// Setters are unconstrained; the `numCVs > degree` requirement is enforced
/// by generation, which is the single place the values are interpreted.
/// One command instance reads one frozen set of these for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelixParams {
    radius: f64,
    pitch: f64,
    num_cvs: u32,
    upside_down: bool,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            pitch: 0.25,
            num_cvs: 20,
            upside_down: false,
        }
    }
}

impl HelixParams {
    /// Parameters at their documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coil radius. Sign flips the winding orientation.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Vertical distance per unit parameter step.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Number of control vertices.
    pub fn num_cvs(&self) -> u32 {
        self.num_cvs
    }

    /// Whether vertical displacement is flipped.
    pub fn upside_down(&self) -> bool {
        self.upside_down
    }

    /// Set the coil radius. Any value is accepted.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Set the pitch. Any value is accepted.
    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch;
    }

    /// Set the CV count. Values at or below the degree are only rejected
    /// later, by generation.
    pub fn set_num_cvs(&mut self, num_cvs: u32) {
        self.num_cvs = num_cvs;
    }

    /// Set the upside-down flag.
    pub fn set_upside_down(&mut self, upside_down: bool) {
        self.upside_down = upside_down;
    }

    /// Apply Maya-style flag tokens: `-r/-radius <f64>`, `-p/-pitch <f64>`,
    /// `-ncv/-numCVs <u32>`, `-ud/-upsideDown <bool>`.
    ///
    /// Absent flags leave the current value unchanged. The parse is atomic:
    /// an unknown token, a missing value, or a malformed value aborts the
    /// whole call and no parameter is updated.
    pub fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        let mut parsed = *self;
        let mut tokens = args.iter().map(|s| s.as_ref());

        while let Some(token) = tokens.next() {
            if token == PITCH_FLAG.0 || token == PITCH_FLAG.1 {
                parsed.pitch = parse_value(token, tokens.next())?;
            } else if token == RADIUS_FLAG.0 || token == RADIUS_FLAG.1 {
                parsed.radius = parse_value(token, tokens.next())?;
            } else if token == NUM_CVS_FLAG.0 || token == NUM_CVS_FLAG.1 {
                parsed.num_cvs = parse_value(token, tokens.next())?;
            } else if token == UPSIDE_DOWN_FLAG.0 || token == UPSIDE_DOWN_FLAG.1 {
                parsed.upside_down = parse_bool(token, tokens.next())?;
            } else {
                return Err(HelixError::argument_parse(token, "unknown flag"));
            }
        }

        *self = parsed;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&str>) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = value.ok_or_else(|| HelixError::argument_parse(flag, "missing value"))?;
    raw.parse()
        .map_err(|e| HelixError::argument_parse(flag, format!("bad value {raw:?}: {e}")))
}

fn parse_bool(flag: &str, value: Option<&str>) -> Result<bool> {
    let raw = value.ok_or_else(|| HelixError::argument_parse(flag, "missing value"))?;
    // Maya's kBoolean accepts the usual spellings.
    match raw {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(HelixError::argument_parse(
            flag,
            format!("bad value {raw:?}: expected a boolean"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = HelixParams::new();
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.pitch(), 0.25);
        assert_eq!(params.num_cvs(), 20);
        assert!(!params.upside_down());
    }

    #[test]
    fn test_setters_are_unconstrained() {
        let mut params = HelixParams::new();
        params.set_radius(-3.5);
        params.set_pitch(-0.1);
        params.set_num_cvs(2); // below the degree; generation rejects this later
        params.set_upside_down(true);
        assert_eq!(params.radius(), -3.5);
        assert_eq!(params.pitch(), -0.1);
        assert_eq!(params.num_cvs(), 2);
        assert!(params.upside_down());
    }

    #[test]
    fn test_parse_all_flags_short_and_long() {
        let mut params = HelixParams::new();
        params
            .parse_args(&["-r", "5.5", "-pitch", "0.5", "-ncv", "32", "-upsideDown", "true"])
            .unwrap();
        assert_eq!(params.radius(), 5.5);
        assert_eq!(params.pitch(), 0.5);
        assert_eq!(params.num_cvs(), 32);
        assert!(params.upside_down());
    }

    #[test]
    fn test_absent_flags_keep_current_values() {
        let mut params = HelixParams::new();
        params.parse_args(&["-ncv", "8"]).unwrap();
        assert_eq!(params.num_cvs(), 8);
        assert_eq!(params.radius(), 2.0);
        assert_eq!(params.pitch(), 0.25);
    }

    #[test]
    fn test_parse_is_atomic_on_trailing_failure() {
        let mut params = HelixParams::new();
        let err = params
            .parse_args(&["-r", "9.0", "-p", "not-a-number"])
            .unwrap_err();
        assert!(matches!(err, HelixError::ArgumentParse { ref flag, .. } if flag == "-p"));
        // The valid -r earlier in the list must not have been applied.
        assert_eq!(params.radius(), 2.0);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut params = HelixParams::new();
        let err = params.parse_args(&["-bogus", "1"]).unwrap_err();
        assert!(matches!(err, HelixError::ArgumentParse { ref flag, .. } if flag == "-bogus"));
    }

    #[test]
    fn test_missing_value_rejected() {
        let mut params = HelixParams::new();
        let err = params.parse_args(&["-ncv"]).unwrap_err();
        assert!(
            matches!(err, HelixError::ArgumentParse { ref message, .. } if message == "missing value")
        );
        assert_eq!(params.num_cvs(), 20);
    }

    #[test]
    fn test_bool_spellings() {
        let mut params = HelixParams::new();
        params.parse_args(&["-ud", "on"]).unwrap();
        assert!(params.upside_down());
        params.parse_args(&["-ud", "0"]).unwrap();
        assert!(!params.upside_down());
        assert!(params.parse_args(&["-ud", "maybe"]).is_err());
    }

    #[test]
    fn test_negative_num_cvs_fails_to_parse() {
        let mut params = HelixParams::new();
        assert!(params.parse_args(&["-ncv", "-4"]).is_err());
    }
}
