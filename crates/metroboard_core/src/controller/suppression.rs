//! Scoped suppression of field-change feedback.

use std::cell::Cell;

/// Flag marking programmatic field updates.
#[derive(Debug, Default)]
pub struct Suppression {
    active: Cell<bool>,
}

impl Suppression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Raises the flag until the returned guard is dropped.
    ///
    /// Nested scopes restore the state they found, so an inner guard never
    /// lowers a flag raised by an outer one.
    pub fn scope(&self) -> SuppressionGuard<'_> {
        let previous = self.active.replace(true);
        SuppressionGuard {
            flag: &self.active,
            previous,
        }
    }
}

/// Restores the suppression flag on drop.
#[must_use = "suppression ends as soon as the guard is dropped"]
pub struct SuppressionGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl Drop for SuppressionGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::Suppression;

    #[test]
    fn guard_raises_and_restores_flag() {
        let suppression = Suppression::new();
        {
            let _guard = suppression.scope();
            assert!(suppression.is_active());
        }
        assert!(!suppression.is_active());
    }

    #[test]
    fn nested_guards_keep_outer_scope_active() {
        let suppression = Suppression::new();
        let outer = suppression.scope();
        {
            let _inner = suppression.scope();
        }
        assert!(suppression.is_active());
        drop(outer);
        assert!(!suppression.is_active());
    }

    #[test]
    fn guard_releases_during_unwind() {
        let suppression = Suppression::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = suppression.scope();
            panic!("assignment failed partway");
        }));
        assert!(result.is_err());
        assert!(!suppression.is_active());
    }
}
