use crate::line_diff::LineChange;
use jdiff_common::{DiffEntry, DiffResult};

/// Collapses adjacent removed/added pairs into changed entries.
pub struct DiffMerger;

impl DiffMerger {
    /// Single left-to-right scan with one-token lookahead: a `Removed`
    /// immediately followed by an `Added` becomes one `Changed`, consuming
    /// both. Strictly positional and non-greedy beyond a single pair: in
    /// `Removed, Removed, Added, Added` only the middle pair collapses and
    /// the outer two entries pass through unchanged.
    pub fn merge(changes: Vec<LineChange>) -> DiffResult {
        let mut entries = Vec::with_capacity(changes.len());
        let mut iter = changes.into_iter().peekable();

        while let Some(change) = iter.next() {
            let entry = match change {
                LineChange::Same(text) => DiffEntry::Same { text },
                LineChange::Added(text) => DiffEntry::Added { text },
                LineChange::Removed(left) => match iter.peek() {
                    Some(LineChange::Added(_)) => {
                        let right = match iter.next() {
                            Some(LineChange::Added(text)) => text,
                            _ => unreachable!(),
                        };
                        DiffEntry::Changed { left, right }
                    }
                    _ => DiffEntry::Removed { text: left },
                },
            };
            entries.push(entry);
        }

        DiffResult::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(text: &str) -> LineChange {
        LineChange::Same(text.to_string())
    }

    fn added(text: &str) -> LineChange {
        LineChange::Added(text.to_string())
    }

    fn removed(text: &str) -> LineChange {
        LineChange::Removed(text.to_string())
    }

    #[test]
    fn adjacent_pair_collapses() {
        let result = DiffMerger::merge(vec![same("a"), removed("b"), added("x"), same("c")]);
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::Same {
                    text: "a".to_string()
                },
                DiffEntry::Changed {
                    left: "b".to_string(),
                    right: "x".to_string()
                },
                DiffEntry::Same {
                    text: "c".to_string()
                },
            ]
        );
    }

    #[test]
    fn merge_is_non_greedy() {
        let result =
            DiffMerger::merge(vec![removed("x"), removed("y"), added("p"), added("q")]);
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::Removed {
                    text: "x".to_string()
                },
                DiffEntry::Changed {
                    left: "y".to_string(),
                    right: "p".to_string()
                },
                DiffEntry::Added {
                    text: "q".to_string()
                },
            ]
        );
    }

    #[test]
    fn added_before_removed_does_not_merge() {
        let result = DiffMerger::merge(vec![added("p"), removed("x")]);
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::Added {
                    text: "p".to_string()
                },
                DiffEntry::Removed {
                    text: "x".to_string()
                },
            ]
        );
    }

    #[test]
    fn removed_separated_by_same_does_not_merge() {
        let result = DiffMerger::merge(vec![removed("x"), same("m"), added("p")]);
        assert_eq!(
            result.entries,
            vec![
                DiffEntry::Removed {
                    text: "x".to_string()
                },
                DiffEntry::Same {
                    text: "m".to_string()
                },
                DiffEntry::Added {
                    text: "p".to_string()
                },
            ]
        );
    }

    #[test]
    fn no_removed_then_added_adjacency_survives() {
        let result = DiffMerger::merge(vec![
            removed("a"),
            removed("b"),
            removed("c"),
            added("1"),
            added("2"),
            added("3"),
        ]);
        for window in result.entries.windows(2) {
            assert!(
                !matches!(
                    (&window[0], &window[1]),
                    (DiffEntry::Removed { .. }, DiffEntry::Added { .. })
                ),
                "removed entry left adjacent to added entry: {:?}",
                window
            );
        }
    }

    #[test]
    fn empty_input_yields_empty_sentinel() {
        let result = DiffMerger::merge(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result, DiffResult::default());
    }
}
