//! Confirmation seam for destructive operations
//!
//! Removing a category and resetting the month only go ahead once the caller
//! says yes. Any `FnMut(&str) -> bool` works as a confirmer; the CLI asks on
//! stdin, tests pass closures.

/// Asks the user to approve a destructive operation
pub trait Confirm {
    /// Return true to proceed
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
