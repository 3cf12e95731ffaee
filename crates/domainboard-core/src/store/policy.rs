//! Store behaviour switches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// What `list` does when the persisted collection cannot be read or parsed.
///
/// With `MaskAsEmpty` a corrupt store looks exactly like an empty one, and
/// the next write replaces the corrupt file with a fresh collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadFailurePolicy {
    /// Log the failure and read an empty collection.
    #[default]
    #[serde(rename = "mask")]
    MaskAsEmpty,
    /// Return the read error to the caller.
    Surface,
}

/// Whether `create` accepts an id that is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIds {
    #[default]
    Allow,
    Reject,
}

impl FromStr for ReadFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" => Ok(ReadFailurePolicy::MaskAsEmpty),
            "surface" => Ok(ReadFailurePolicy::Surface),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "unknown read failure policy '{}' (expected mask or surface)",
                    other
                ),
            }
            .into()),
        }
    }
}

impl fmt::Display for ReadFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadFailurePolicy::MaskAsEmpty => f.write_str("mask"),
            ReadFailurePolicy::Surface => f.write_str("surface"),
        }
    }
}

impl FromStr for DuplicateIds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(DuplicateIds::Allow),
            "reject" => Ok(DuplicateIds::Reject),
            other => Err(InvalidInputError::Other {
                message: format!(
                    "unknown duplicate id policy '{}' (expected allow or reject)",
                    other
                ),
            }
            .into()),
        }
    }
}

impl fmt::Display for DuplicateIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateIds::Allow => f.write_str("allow"),
            DuplicateIds::Reject => f.write_str("reject"),
        }
    }
}
