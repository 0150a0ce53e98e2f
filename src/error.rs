//! Error type shared by the address primitives, the subtraction engine and
//! the job file collaborator.

use std::fmt;
use thiserror::Error;

/// Which input set a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSet {
    Sources,
    Excludes,
}

impl fmt::Display for BlockSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlockSet::Sources => write!(f, "source"),
            BlockSet::Excludes => write!(f, "exclude"),
        }
    }
}

/// Errors raised while building blocks or subtracting them.
///
/// Offending values are carried already rendered in address notation so the
/// error is independent of the address width.
#[derive(Debug, Error)]
pub enum CidrError {
    #[error("block {block} has host bits set below its prefix length")]
    MisalignedBlock { block: String },

    #[error("prefix length /{prefix} is longer than the {bits} bit address width")]
    InvalidPrefix { prefix: u8, bits: u8 },

    #[error("invalid range: lo {lo} is above hi {hi}")]
    InvalidRange { lo: String, hi: String },

    #[error("successor of {addr} is past the top of the address space")]
    RangeOverflow { addr: String },

    #[error("predecessor of {addr} is below the bottom of the address space")]
    RangeUnderflow { addr: String },

    #[error("{set} blocks {first} and {second} overlap")]
    OverlappingBlocks {
        set: BlockSet,
        first: String,
        second: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("job file error: {0}")]
    Job(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CidrError {
    /// True for arithmetic guard violations, which point at a logic defect in
    /// the engine rather than at bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CidrError::RangeOverflow { .. } | CidrError::RangeUnderflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_internal() {
        let overflow = CidrError::RangeOverflow {
            addr: "255.255.255.255".to_string(),
        };
        let misaligned = CidrError::MisalignedBlock {
            block: "10.0.0.1/24".to_string(),
        };
        assert!(overflow.is_internal());
        assert!(!misaligned.is_internal());
    }

    #[test]
    fn test_error_messages() {
        let err = CidrError::OverlappingBlocks {
            set: BlockSet::Excludes,
            first: "10.0.0.0/8".to_string(),
            second: "10.1.0.0/16".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "exclude blocks 10.0.0.0/8 and 10.1.0.0/16 overlap"
        );
        let err = CidrError::InvalidPrefix { prefix: 33, bits: 32 };
        assert_eq!(
            err.to_string(),
            "prefix length /33 is longer than the 32 bit address width"
        );
    }
}
