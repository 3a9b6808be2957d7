//! Validation-based audit of a transition table.
//!
//! The table accepts duplicate `(from, token)` edges and lets the engine's
//! tie-break pick between them. An audit surfaces where that happens, along
//! with edges that can never apply, using Stillwater's `Validation` so that
//! every finding is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use mindstack::audit::{AuditFinding, TableAudit};
//! use mindstack::core::{State, StateRegistry, Transition, TransitionTable};
//! use stillwater::validation::Validation;
//!
//! #[derive(Debug)]
//! struct Screen(&'static str);
//!
//! impl State for Screen {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let mut registry = StateRegistry::new();
//! let root = registry.add(Screen("root"));
//! let menu = registry.add(Screen("menu"));
//!
//! let mut table = TransitionTable::new();
//! table.add(Transition::push(root, "open", menu), &registry).unwrap();
//! table.add(Transition::replace(root, "open", menu), &registry).unwrap();
//!
//! match TableAudit::default().run(&table, &registry) {
//!     Validation::Failure(findings) => assert!(findings
//!         .iter()
//!         .any(|f| matches!(f, AuditFinding::AmbiguousEdge { count: 2, .. }))),
//!     Validation::Success(_) => panic!("expected an ambiguous edge"),
//! }
//! ```

mod findings;

pub use findings::{AuditFinding, Origin};

use crate::core::{Mode, State, StateRegistry, TransitionTable};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result type of an audit.
pub type AuditResult = Validation<(), NonEmptyVec<AuditFinding>>;

/// Which checks an audit runs. All are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAudit {
    pub ambiguous_edges: bool,
    pub pops_without_target: bool,
    pub unused_states: bool,
}

impl Default for TableAudit {
    fn default() -> Self {
        Self {
            ambiguous_edges: true,
            pops_without_target: true,
            unused_states: true,
        }
    }
}

impl TableAudit {
    /// Run every enabled check, accumulating ALL findings.
    pub fn run<S: State>(
        &self,
        table: &TransitionTable,
        registry: &StateRegistry<S>,
    ) -> AuditResult {
        let mut checks: Vec<AuditResult> = Vec::new();

        if self.ambiguous_edges {
            let mut edges: BTreeMap<(Origin, &str), usize> = BTreeMap::new();
            for t in table.iter() {
                *edges.entry((Origin(t.from), t.token.as_str())).or_default() += 1;
            }
            for ((from, token), count) in edges {
                if count > 1 {
                    checks.push(Validation::fail(AuditFinding::AmbiguousEdge {
                        from,
                        token: token.to_string(),
                        count,
                    }));
                }
            }
        }

        if self.pops_without_target {
            for t in table.iter().filter(|t| t.mode == Mode::Pop && t.to.is_none()) {
                checks.push(Validation::fail(AuditFinding::PopWithoutTarget {
                    from: Origin(t.from),
                    token: t.token.clone(),
                }));
            }
        }

        if self.unused_states {
            let used: BTreeSet<_> = table
                .iter()
                .flat_map(|t| [t.from, t.to])
                .flatten()
                .collect();
            for state in registry.ids().filter(|id| !used.contains(id)) {
                checks.push(Validation::fail(AuditFinding::UnusedState { state }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateId, Transition};

    #[derive(Debug)]
    struct Named(&'static str);

    impl State for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn registry() -> (StateRegistry<Named>, StateId, StateId, StateId) {
        let mut registry = StateRegistry::new();
        let a = registry.add(Named("A"));
        let b = registry.add(Named("B"));
        let c = registry.add(Named("C"));
        (registry, a, b, c)
    }

    #[test]
    fn clean_table_passes() {
        let (registry, a, b, c) = registry();
        let mut table = TransitionTable::new();
        table.add(Transition::push(a, "open", b), &registry).unwrap();
        table.add(Transition::push(b, "deeper", c), &registry).unwrap();
        table.add(Transition::pop(c, "back", a), &registry).unwrap();

        assert!(TableAudit::default().run(&table, &registry).is_success());
    }

    #[test]
    fn audit_accumulates_all_findings() {
        let (registry, a, b, _) = registry();
        let mut table = TransitionTable::new();
        table.add(Transition::push(a, "open", b), &registry).unwrap();
        table.add(Transition::pop(a, "open", b), &registry).unwrap();
        table
            .add(Transition::new(Some(b), "back", None, Mode::Pop), &registry)
            .unwrap();

        match TableAudit::default().run(&table, &registry) {
            Validation::Failure(findings) => {
                assert_eq!(findings.len(), 3);

                let has_ambiguous = findings.iter().any(|f| {
                    matches!(
                        f,
                        AuditFinding::AmbiguousEdge { count: 2, token, .. } if token == "open"
                    )
                });
                let has_dead_pop = findings
                    .iter()
                    .any(|f| matches!(f, AuditFinding::PopWithoutTarget { .. }));
                let has_unused = findings.iter().any(|f| {
                    matches!(f, AuditFinding::UnusedState { state } if state.index() == 2)
                });

                assert!(has_ambiguous);
                assert!(has_dead_pop);
                assert!(has_unused);
            }
            Validation::Success(_) => panic!("Expected findings, got success"),
        }
    }

    #[test]
    fn entry_points_are_grouped_separately() {
        let (registry, a, b, c) = registry();
        let mut table = TransitionTable::new();
        table
            .add(Transition::new(None, "go", Some(a), Mode::Push), &registry)
            .unwrap();
        table.add(Transition::push(a, "go", b), &registry).unwrap();
        table.add(Transition::push(b, "go", c), &registry).unwrap();

        assert!(TableAudit::default().run(&table, &registry).is_success());
    }

    #[test]
    fn disabled_checks_are_skipped() {
        let (registry, a, b, _) = registry();
        let mut table = TransitionTable::new();
        table.add(Transition::push(a, "open", b), &registry).unwrap();
        table.add(Transition::push(a, "open", b), &registry).unwrap();

        let audit = TableAudit {
            ambiguous_edges: false,
            pops_without_target: true,
            unused_states: false,
        };
        assert!(audit.run(&table, &registry).is_success());
    }

    #[test]
    fn finding_messages() {
        let finding = AuditFinding::AmbiguousEdge {
            from: Origin(None),
            token: "boot".to_string(),
            count: 2,
        };
        assert_eq!(finding.to_string(), "2 transitions leave <empty> on 'boot'");

        let finding = AuditFinding::UnusedState { state: StateId::detached(3) };
        assert_eq!(finding.to_string(), "state #3 is not used by any transition");
    }
}
