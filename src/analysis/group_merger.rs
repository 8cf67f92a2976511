use crate::utils::LabelType;

/// Merges the label-sets sharing at least one label into groups.
///
/// The merge is transitive: two sets belong to the same group if they share a label,
/// directly or through a chain of shared labels with other sets.
/// Each group is emitted as a sorted, deduplicated list of its labels,
/// in the order the group's first set appears in the input.
/// If the input contains at least one empty set, a single empty group is appended, last,
/// regardless of how many empty sets existed.
///
/// # Example
///
/// ```
/// # use rungcheck::analysis::merge_into_groups;
/// let sets = vec![vec!["a", "b"], vec!["b", "c"], vec!["d"]];
/// let groups = merge_into_groups(&sets);
/// assert_eq!(vec![vec!["a", "b", "c"], vec!["d"]], groups);
/// ```
pub fn merge_into_groups<T>(label_sets: &[Vec<T>]) -> Vec<Vec<T>>
where
    T: LabelType + Ord,
{
    let mut in_groups = vec![false; label_sets.len()];
    let mut groups = Vec::new();
    let mut has_empty_set = false;
    for (i, seed) in label_sets.iter().enumerate() {
        if in_groups[i] {
            continue;
        }
        in_groups[i] = true;
        if seed.is_empty() {
            has_empty_set = true;
            continue;
        }
        let mut group = seed.clone();
        // fixed point: a merge may connect the group to sets already scanned over
        loop {
            let mut merged_some = false;
            for (j, set) in label_sets.iter().enumerate() {
                if !in_groups[j] && set.iter().any(|l| group.contains(l)) {
                    in_groups[j] = true;
                    group.extend(set.iter().cloned());
                    merged_some = true;
                }
            }
            if !merged_some {
                break;
            }
        }
        group.sort_unstable();
        group.dedup();
        groups.push(group);
    }
    if has_empty_set {
        groups.push(Vec::new());
    }
    groups
}

/// Returns the group a single label-set belongs to.
///
/// The first group (in the provided sequence order) whose labels intersect `single` is returned;
/// if no group intersects it, `single` itself is returned unchanged.
/// This is a first-match policy, used to normalize a local match against a global grouping.
///
/// # Example
///
/// ```
/// # use rungcheck::analysis::find_group_for;
/// let groups = vec![vec!["a", "b", "c"], vec!["d"]];
/// assert_eq!(vec!["a", "b", "c"], find_group_for(&["c"], &groups));
/// assert_eq!(vec!["e"], find_group_for(&["e"], &groups));
/// ```
pub fn find_group_for<T>(single: &[T], groups: &[Vec<T>]) -> Vec<T>
where
    T: LabelType,
{
    groups
        .iter()
        .find(|g| g.iter().any(|l| single.contains(l)))
        .cloned()
        .unwrap_or_else(|| single.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(slices: &[&[&str]]) -> Vec<Vec<String>> {
        slices
            .iter()
            .map(|s| s.iter().map(|l| l.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_merge_transitive() {
        let groups = merge_into_groups(&sets(&[&["a", "b"], &["b", "c"], &["d"]]));
        assert_eq!(sets(&[&["a", "b", "c"], &["d"]]), groups);
    }

    #[test]
    fn test_merge_connects_sets_scanned_before_the_bridge() {
        // the third set bridges the first two groups discovered from the second seed
        let groups = merge_into_groups(&sets(&[&["a"], &["b"], &["a", "b"]]));
        assert_eq!(sets(&[&["a", "b"]]), groups);
    }

    #[test]
    fn test_merge_empty_placeholder_appended_once_and_last() {
        let groups = merge_into_groups(&sets(&[&[], &["a"], &[]]));
        assert_eq!(sets(&[&["a"], &[]]), groups);
    }

    #[test]
    fn test_merge_empty_input() {
        assert!(merge_into_groups(&[] as &[Vec<String>]).is_empty());
    }

    #[test]
    fn test_merge_groups_are_sorted_and_deduplicated() {
        let groups = merge_into_groups(&sets(&[&["c", "a"], &["a", "b", "c"]]));
        assert_eq!(sets(&[&["a", "b", "c"]]), groups);
    }

    #[test]
    fn test_merge_group_order_is_first_seed_order() {
        let groups = merge_into_groups(&sets(&[&["z"], &["a"], &["z", "y"]]));
        assert_eq!(sets(&[&["y", "z"], &["a"]]), groups);
    }

    #[test]
    fn test_merged_groups_are_disjoint_and_complete() {
        let input = sets(&[&["a", "b"], &["c"], &["b", "d"], &["e", "c"], &["f"]]);
        let groups = merge_into_groups(&input);
        for (i, g1) in groups.iter().enumerate() {
            for g2 in groups.iter().skip(1 + i) {
                assert!(g1.iter().all(|l| !g2.contains(l)));
            }
        }
        for set in &input {
            for label in set {
                assert_eq!(1, groups.iter().filter(|g| g.contains(label)).count());
            }
        }
    }

    #[test]
    fn test_merge_determinism() {
        let input = sets(&[&["a", "b"], &["c"], &["b", "d"], &["e", "c"]]);
        assert_eq!(merge_into_groups(&input), merge_into_groups(&input));
    }

    #[test]
    fn test_find_group_first_match() {
        let groups = sets(&[&["a", "b", "c"], &["c", "d"]]);
        assert_eq!(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            find_group_for(&["c".to_string()], &groups)
        );
    }

    #[test]
    fn test_find_group_no_match_returns_input() {
        let groups = sets(&[&["a", "b", "c"], &["d"]]);
        assert_eq!(
            vec!["e".to_string()],
            find_group_for(&["e".to_string()], &groups)
        );
    }

    #[test]
    fn test_find_group_empty_single_never_matches() {
        let groups = sets(&[&["a"]]);
        assert!(find_group_for(&[] as &[String], &groups).is_empty());
    }

    #[test]
    fn test_find_group_empty_groups() {
        assert_eq!(
            vec!["a".to_string()],
            find_group_for(&["a".to_string()], &[] as &[Vec<String>])
        );
    }
}
