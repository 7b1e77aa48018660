use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use iplog_etc::ValidationConfig;

static HOSTNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap());

/// The reason why a candidate hostname was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort { min: usize },
    TooLong { max: usize },
    Malformed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooShort { min } => {
                write!(f, "hostname must be at least {} characters long", min)
            }
            Rejection::TooLong { max } => {
                write!(f, "hostname must be at most {} characters long", max)
            }
            Rejection::Malformed => write!(
                f,
                "expect dot-separated labels of letters, digits and hyphens"
            ),
        }
    }
}

/// Syntactic checks of candidate hostnames. It never touches the network.
#[derive(Debug, Clone)]
pub struct Validator {
    min_length: usize,
    max_length: Option<usize>,
}

impl Validator {
    pub const MIN_LENGTH: usize = 5;

    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            max_length: None,
        }
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length.replace(max_length);
        self
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }

    /// Length rules come first, so short input is always reported as too short.
    pub fn validate(&self, candidate: &str) -> Result<(), Rejection> {
        let size = candidate.chars().count();

        if size < self.min_length {
            return Err(Rejection::TooShort {
                min: self.min_length,
            });
        }

        if let Some(max) = self.max_length {
            if size > max {
                return Err(Rejection::TooLong { max });
            }
        }

        if !HOSTNAME_PATTERN.is_match(candidate) {
            return Err(Rejection::Malformed);
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new(Self::MIN_LENGTH)
    }
}

/// The configured minimum can only tighten the length rule, never loosen it.
impl From<&ValidationConfig> for Validator {
    fn from(c: &ValidationConfig) -> Self {
        if c.min_length < Self::MIN_LENGTH {
            warn!(
                "validation.min_length {} is below {}, use {} instead",
                c.min_length,
                Self::MIN_LENGTH,
                Self::MIN_LENGTH
            );
        }
        let v = Validator::new(usize::max(Self::MIN_LENGTH, c.min_length));
        match c.max_length {
            Some(max) => v.max_length(max),
            None => v,
        }
    }
}
