// Visibility policy
//
// Decides once, at construction, whether a symbol appears in the outline.
// The decision is a pure function of the candidate and the language policy.

use super::types::SymbolKind;

/// What the visibility filter sees of a freshly built symbol
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'s> {
    pub kind: SymbolKind,
    pub name: &'s str,
    pub modifiers: &'s [String],
    /// 0 for module level, 1 for class members, and so on
    pub depth: usize,
}

/// Per-language inclusion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// Every symbol is rendered
    IncludeAll,
    /// Functions, methods and classes named with a leading `_` are hidden.
    /// Each level is judged by its own name only.
    UnderscorePrivate,
}

impl VisibilityPolicy {
    pub fn is_included(self, candidate: &Candidate) -> bool {
        match self {
            VisibilityPolicy::IncludeAll => true,
            VisibilityPolicy::UnderscorePrivate => {
                let filtered_kind = matches!(
                    candidate.kind,
                    SymbolKind::Function | SymbolKind::Method | SymbolKind::Class
                );
                !(filtered_kind && candidate.name.starts_with('_'))
            }
        }
    }
}

#[cfg(test)]
mod visibility_tests {
    use super::*;

    fn candidate(kind: SymbolKind, name: &str, depth: usize) -> Candidate<'_> {
        Candidate {
            kind,
            name,
            modifiers: &[],
            depth,
        }
    }

    #[test]
    fn test_include_all_keeps_everything() {
        let policy = VisibilityPolicy::IncludeAll;
        assert!(policy.is_included(&candidate(SymbolKind::Function, "_hidden", 0)));
        assert!(policy.is_included(&candidate(SymbolKind::Class, "__Private", 0)));
    }

    #[test]
    fn test_underscore_names_are_excluded() {
        let policy = VisibilityPolicy::UnderscorePrivate;
        assert!(!policy.is_included(&candidate(SymbolKind::Function, "_helper", 0)));
        assert!(!policy.is_included(&candidate(SymbolKind::Class, "_Private", 0)));
        assert!(!policy.is_included(&candidate(SymbolKind::Method, "__init__", 1)));
        assert!(policy.is_included(&candidate(SymbolKind::Function, "helper", 0)));
        assert!(policy.is_included(&candidate(SymbolKind::Method, "run", 1)));
    }

    #[test]
    fn test_imports_are_never_filtered() {
        let policy = VisibilityPolicy::UnderscorePrivate;
        assert!(policy.is_included(&candidate(SymbolKind::Import, "_thread", 0)));
    }

    #[test]
    fn test_modifiers_do_not_affect_inclusion() {
        let modifiers = vec!["private".to_string()];
        let candidate = Candidate {
            kind: SymbolKind::Method,
            name: "secret",
            modifiers: &modifiers,
            depth: 1,
        };
        assert!(VisibilityPolicy::IncludeAll.is_included(&candidate));
        assert!(VisibilityPolicy::UnderscorePrivate.is_included(&candidate));
    }
}
