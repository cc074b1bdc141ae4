//! Which fields a keyed literal has to spell out.

use crate::oracle::FieldDescriptor;

/// The nominal duration type checked in default mode.
pub const DURATION_TYPE: &str = "std::time::Duration";

/// Name fragments that mark a field as a timeout or keep-alive.
///
/// `Timeout` and `KeepAlive` cover PascalCase fields; the lowercase forms
/// cover idiomatic snake_case names such as `read_timeout` or
/// `tcp_keepalive`. Setting `name_patterns = ["Timeout", "KeepAlive"]` in
/// `keyedlit.toml` restores the PascalCase-only rule exactly.
pub const DEFAULT_NAME_PATTERNS: &[&str] =
    &["Timeout", "KeepAlive", "timeout", "keep_alive", "keepalive"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Only timeout and keep-alive durations must be specified.
    #[default]
    Default,
    /// Every exported field must be specified.
    Strict,
}

/// The field rule for one run. Built once from configuration and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub mode: Mode,
    pub name_patterns: Vec<String>,
    pub duration_types: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            mode: Mode::Default,
            name_patterns: DEFAULT_NAME_PATTERNS.iter().map(|p| p.to_string()).collect(),
            duration_types: vec![DURATION_TYPE.to_string()],
        }
    }
}

impl Rules {
    pub fn strict() -> Self {
        Rules {
            mode: Mode::Strict,
            ..Rules::default()
        }
    }

    /// Whether a keyed literal has to name `field` explicitly.
    pub fn must_be_specified(&self, field: &FieldDescriptor) -> bool {
        match self.mode {
            // Fields that aren't exported can't be keyed from other crates.
            Mode::Strict => field.exported,
            Mode::Default => {
                self.duration_types.iter().any(|t| *t == field.type_identity)
                    && self
                        .name_patterns
                        .iter()
                        .any(|p| field.name.contains(p.as_str()))
            }
        }
    }
}
