//! Selection transitions.
//!
//! These functions are pure: they compute the next selection from the
//! current one and never store anything. The dropdown reports the result to
//! its `on_select` callback and waits for the owner to pass the new values
//! back in.

use super::types::OptionId;

/// Result of a selection action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next selection. `None` is the single-select "no selection" value.
    pub values: Option<Vec<OptionId>>,
    /// Whether the option list should close.
    pub close: bool,
}

/// Computes the selection after `clicked` is activated.
///
/// Single-select always yields `[clicked]` and closes the list. Multi-select
/// removes `clicked` if present (keeping the order of the rest) and appends
/// it otherwise.
///
/// ```rust
/// use bubbletea_dropdown::dropdown::{selection, OptionId};
///
/// let current = vec![OptionId::from(1), OptionId::from(3)];
/// let next = selection::select(&current, &OptionId::from(2), true);
/// assert_eq!(
///     next.values,
///     Some(vec![OptionId::from(1), OptionId::from(3), OptionId::from(2)])
/// );
/// assert!(!next.close);
/// ```
pub fn select(current: &[OptionId], clicked: &OptionId, multi: bool) -> Transition {
    if !multi {
        return Transition {
            values: Some(vec![clicked.clone()]),
            close: true,
        };
    }

    let values = if current.contains(clicked) {
        current.iter().filter(|id| *id != clicked).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(clicked.clone());
        next
    };
    Transition {
        values: Some(values),
        close: false,
    }
}

/// Computes the selection after clearing: empty for multi-select, `None`
/// for single-select.
pub fn clear(multi: bool) -> Transition {
    Transition {
        values: multi.then(Vec::new),
        close: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[i64]) -> Vec<OptionId> {
        raw.iter().copied().map(OptionId::from).collect()
    }

    #[test]
    fn test_single_select_replaces_and_closes() {
        let t = select(&ids(&[2]), &OptionId::from(3), false);
        assert_eq!(t.values, Some(ids(&[3])));
        assert!(t.close);
    }

    #[test]
    fn test_multi_select_removes_selected() {
        let t = select(&ids(&[1, 3]), &OptionId::from(1), true);
        assert_eq!(t.values, Some(ids(&[3])));
        assert!(!t.close);
    }

    #[test]
    fn test_multi_select_appends_unselected() {
        let t = select(&ids(&[1, 3]), &OptionId::from(2), true);
        assert_eq!(t.values, Some(ids(&[1, 3, 2])));
    }

    #[test]
    fn test_multi_select_preserves_order_on_removal() {
        let t = select(&ids(&[1, 2, 3]), &OptionId::from(2), true);
        assert_eq!(t.values, Some(ids(&[1, 3])));
    }

    #[test]
    fn test_multi_select_accepts_unknown_id() {
        let current = vec![OptionId::from("ghost")];
        let t = select(&current, &OptionId::from("other"), true);
        assert_eq!(
            t.values,
            Some(vec![OptionId::from("ghost"), OptionId::from("other")])
        );
    }

    #[test]
    fn test_clear() {
        assert_eq!(clear(true).values, Some(vec![]));
        assert_eq!(clear(false).values, None);
        assert!(!clear(true).close);
    }

    proptest! {
        #[test]
        fn prop_single_select_is_idempotent(start in proptest::collection::vec(0i64..20, 0..5), id in 0i64..20, clicks in 1usize..6) {
            let clicked = OptionId::from(id);
            let mut values = ids(&start);
            for _ in 0..clicks {
                values = select(&values, &clicked, false).values.unwrap_or_default();
            }
            prop_assert_eq!(values, vec![clicked]);
        }

        #[test]
        fn prop_multi_toggle_is_its_own_inverse(start in proptest::collection::hash_set(0i64..20, 0..8), id in 0i64..20) {
            prop_assume!(!start.contains(&id));
            let original: Vec<OptionId> = start.into_iter().map(OptionId::from).collect();
            let clicked = OptionId::from(id);
            let once = select(&original, &clicked, true).values.unwrap_or_default();
            let twice = select(&once, &clicked, true).values.unwrap_or_default();
            prop_assert_eq!(twice, original);
        }

        #[test]
        fn prop_multi_removal_keeps_relative_order(start in proptest::collection::hash_set(0i64..20, 1..8), pick in any::<prop::sample::Index>()) {
            let original: Vec<OptionId> = start.into_iter().map(OptionId::from).collect();
            let clicked = original[pick.index(original.len())].clone();
            let next = select(&original, &clicked, true).values.unwrap_or_default();
            let expected: Vec<OptionId> = original.iter().filter(|id| **id != clicked).cloned().collect();
            prop_assert_eq!(next, expected);
        }
    }
}
