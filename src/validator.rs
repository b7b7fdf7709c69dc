//! Tracks open groups and look aheads so a pattern is only finished balanced.
//!
//! A single stack, rather than one counter per kind, enforces proper nesting:
//! after `(` then `(?=`, the look ahead has to be closed before the group.

use log::trace;

use crate::construct::ConstructKind;
use crate::error::StructuralError;

/// Stack of constructs that have been opened but not yet closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructStack {
    open: Vec<ConstructKind>,
}

impl ConstructStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: ConstructKind) {
        self.open.push(kind);
        trace!("opened {kind:?}, depth {}", self.open.len());
    }

    /// Close the innermost construct, which must be of `kind`.
    ///
    /// On failure the stack is left untouched. If another construct is
    /// innermost, the error names that construct.
    pub fn close(&mut self, kind: ConstructKind) -> Result<(), StructuralError> {
        match self.open.last() {
            None => Err(StructuralError::begin_missing(kind)),
            Some(&top) if top != kind => {
                trace!("rejected close of {kind:?}, innermost is {top:?}");
                Err(StructuralError::begin_missing(top))
            }
            Some(_) => {
                self.open.pop();
                trace!("closed {kind:?}, depth {}", self.open.len());
                Ok(())
            }
        }
    }

    /// Succeeds only if nothing is left open. Reports the innermost construct.
    pub fn check_closed(&self) -> Result<(), StructuralError> {
        match self.open.last() {
            None => Ok(()),
            Some(&top) => Err(StructuralError::end_missing(top)),
        }
    }

    pub fn innermost(&self) -> Option<ConstructKind> {
        self.open.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}
