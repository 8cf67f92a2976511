use crate::ladder::Element;
use crate::utils::LabelType;
use anyhow::{anyhow, Result};

/// The default ceiling on the number of chains a single [`ChainBuilder`] invocation may produce.
pub const DEFAULT_MAX_CHAINS: usize = 1 << 16;

/// A maximal series chain: an ordered sequence of elements in which each element feeds the next one.
///
/// Chains are built by [`ChainBuilder`] objects.
/// A chain is maximal in the sense that the traversal that produced it could not extend it further;
/// a chain of length 1 is thus valid (an isolated element with no successor).
/// Within one chain, no element position repeats.
pub struct Chain<'a, T>
where
    T: LabelType,
{
    members: Vec<&'a Element<T>>,
    indices: Vec<usize>,
}

impl<'a, T> Chain<'a, T>
where
    T: LabelType,
{
    /// Returns the number of elements in the chain.
    ///
    /// A chain contains at least one element.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `false`, as a chain contains at least one element.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Provides an iterator to the elements of the chain, from the first fed element to the last feeding one.
    pub fn iter(&self) -> impl Iterator<Item = &'a Element<T>> + '_ {
        self.members.iter().copied()
    }

    /// Returns the positions (in the sequence the chain was built from) of the elements of the chain.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

/// An object used to build all maximal series chains of a sequence of elements.
///
/// Element adjacency is given by shared connection labels: an element feeds another one
/// if its output labels intersect the other's input labels (see [`Element::feeds`]).
/// Every starting position launches a traversal, and every valid successor forks a new branch;
/// the enumeration is thus exhaustive, and a single element may appear in multiple chains
/// (once per branch that reaches it).
///
/// On densely interconnected inputs the number of branches grows combinatorially;
/// a ceiling on the total number of produced chains makes the builder fail fast
/// instead of running unbounded.
///
/// # Example
///
/// ```
/// # use rungcheck::analysis::ChainBuilder;
/// # use rungcheck::ladder::{Element, ElementKind};
/// let elements = vec![
///     Element::new(ElementKind::Contact, "X000", vec![], vec!["w1"]),
///     Element::new(ElementKind::Contact, "X001", vec!["w1"], vec!["w2"]),
///     Element::new(ElementKind::Coil, "Y000", vec!["w2"], vec![]),
/// ];
/// let chains = ChainBuilder::default().build_chains(&elements).unwrap();
/// assert_eq!(3, chains.len());
/// assert_eq!(vec![0, 1, 2], chains[0].indices());
/// ```
pub struct ChainBuilder {
    max_chains: usize,
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::with_max_chains(DEFAULT_MAX_CHAINS)
    }
}

impl ChainBuilder {
    /// Builds a chain builder enforcing the provided ceiling on the number of produced chains.
    pub fn with_max_chains(max_chains: usize) -> Self {
        ChainBuilder { max_chains }
    }

    /// Builds all maximal series chains of the provided sequence of elements.
    ///
    /// The elements are traversed in sequence order, making the output deterministic:
    /// chains are emitted in the depth-first order of their starting position and successor positions.
    /// Every position of the input sequence starts at least one chain.
    ///
    /// An error is returned if the number of chains to produce exceeds the builder's ceiling.
    pub fn build_chains<'a, T>(&self, elements: &'a [Element<T>]) -> Result<Vec<Chain<'a, T>>>
    where
        T: LabelType,
    {
        let mut chains = Vec::new();
        for start in 0..elements.len() {
            let mut visited = vec![false; elements.len()];
            visited[start] = true;
            // each stack entry is a branch: the path so far and the positions it consumed
            let mut branches = vec![(vec![start], visited)];
            while let Some((path, visited)) = branches.pop() {
                let tail = &elements[*path.last().unwrap()];
                let successors = (0..elements.len())
                    .filter(|c| !visited[*c] && tail.feeds(&elements[*c]))
                    .collect::<Vec<usize>>();
                if successors.is_empty() {
                    if chains.len() == self.max_chains {
                        return Err(anyhow!(
                            "too many chains; the maximal allowed count is {}",
                            self.max_chains
                        ));
                    }
                    chains.push(Chain {
                        members: path.iter().map(|i| &elements[*i]).collect(),
                        indices: path,
                    });
                    continue;
                }
                // push in reverse so the lowest successor position is explored first
                for c in successors.into_iter().rev() {
                    let mut new_path = path.clone();
                    new_path.push(c);
                    let mut new_visited = visited.clone();
                    new_visited[c] = true;
                    branches.push((new_path, new_visited));
                }
            }
        }
        Ok(chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::ElementKind;

    fn contact(var: &str, in_list: &[&str], out_list: &[&str]) -> Element<String> {
        Element::new(
            ElementKind::Contact,
            var.to_string(),
            in_list.iter().map(|s| s.to_string()).collect(),
            out_list.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn indices_of(chains: &[Chain<String>]) -> Vec<Vec<usize>> {
        chains.iter().map(|c| c.indices().to_vec()).collect()
    }

    macro_rules! test_for_builder {
        ($builder:expr, $suffix:literal) => {
            paste::item! {
    #[test]
    fn [< test_single_series_chain_ $suffix >] () {
        let elements = vec![
            contact("X000", &[], &["a"]),
            contact("X001", &["a"], &["b"]),
            contact("X002", &["b"], &[]),
        ];
        let chains = $builder.build_chains(&elements).unwrap();
        assert_eq!(
            vec![vec![0, 1, 2], vec![1, 2], vec![2]],
            indices_of(&chains)
        );
    }

    #[test]
    fn [< test_unconnected_starts_ $suffix >] () {
        let elements = vec![contact("X000", &[], &["a"]), contact("X001", &[], &["a"])];
        let chains = $builder.build_chains(&elements).unwrap();
        assert_eq!(vec![vec![0], vec![1]], indices_of(&chains));
    }

    #[test]
    fn [< test_branching_explores_all_successors_ $suffix >] () {
        let elements = vec![
            contact("X000", &[], &["a"]),
            contact("X001", &["a"], &[]),
            contact("X002", &["a"], &[]),
        ];
        let chains = $builder.build_chains(&elements).unwrap();
        assert_eq!(
            vec![vec![0, 1], vec![0, 2], vec![1], vec![2]],
            indices_of(&chains)
        );
    }

    #[test]
    fn [< test_empty_input_ $suffix >] () {
        let chains = $builder.build_chains(&[] as &[Element<String>]).unwrap();
        assert!(chains.is_empty());
    }
            }
        };
    }

    test_for_builder!(ChainBuilder::default(), "default");
    test_for_builder!(ChainBuilder::with_max_chains(16), "small_ceiling");

    #[test]
    fn test_self_feeding_element_does_not_loop() {
        let elements = vec![contact("X000", &["a"], &["a"])];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        assert_eq!(vec![vec![0]], indices_of(&chains));
    }

    #[test]
    fn test_two_element_loop_is_cut_by_visited_positions() {
        let elements = vec![
            contact("X000", &["b"], &["a"]),
            contact("X001", &["a"], &["b"]),
        ];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        assert_eq!(vec![vec![0, 1], vec![1, 0]], indices_of(&chains));
    }

    #[test]
    fn test_every_position_starts_a_chain() {
        let elements = vec![
            contact("X000", &[], &["a"]),
            contact("X001", &["a"], &["b"]),
            contact("X002", &["b"], &[]),
            contact("X003", &[], &[]),
        ];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        for i in 0..elements.len() {
            assert!(chains.iter().any(|c| c.indices()[0] == i));
        }
    }

    #[test]
    fn test_no_position_repeats_within_a_chain() {
        let elements = vec![
            contact("X000", &["c"], &["a"]),
            contact("X001", &["a"], &["b", "c"]),
            contact("X002", &["b"], &["a"]),
        ];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        for chain in &chains {
            let mut seen = chain.indices().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(chain.len(), seen.len());
        }
    }

    #[test]
    fn test_chains_are_maximal() {
        let elements = vec![
            contact("X000", &[], &["a"]),
            contact("X001", &["a"], &["b"]),
            contact("X002", &["a"], &["b"]),
            contact("X003", &["b"], &[]),
        ];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        for chain in &chains {
            let last = &elements[*chain.indices().last().unwrap()];
            for (i, e) in elements.iter().enumerate() {
                if !chain.indices().contains(&i) {
                    assert!(!last.feeds(e));
                }
            }
        }
    }

    #[test]
    fn test_determinism() {
        let elements = vec![
            contact("X000", &[], &["a", "b"]),
            contact("X001", &["a"], &["c"]),
            contact("X002", &["b"], &["c"]),
            contact("X003", &["c"], &[]),
        ];
        let builder = ChainBuilder::default();
        let first = indices_of(&builder.build_chains(&elements).unwrap());
        let second = indices_of(&builder.build_chains(&elements).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_chain_iter_follows_indices() {
        let elements = vec![
            contact("X000", &[], &["a"]),
            contact("X001", &["a"], &[]),
        ];
        let chains = ChainBuilder::default().build_chains(&elements).unwrap();
        let variables = chains[0]
            .iter()
            .map(|e| e.variable().clone())
            .collect::<Vec<String>>();
        assert_eq!(vec!["X000".to_string(), "X001".to_string()], variables);
        assert_eq!(2, chains[0].len());
        assert!(!chains[0].is_empty());
    }

    #[test]
    fn test_max_chains_exceeded() {
        let elements = vec![contact("X000", &[], &["a"]), contact("X001", &[], &["a"])];
        let builder = ChainBuilder::with_max_chains(1);
        assert!(builder.build_chains(&elements).is_err());
    }

    #[test]
    fn test_max_chains_reached_but_not_exceeded() {
        let elements = vec![contact("X000", &[], &["a"]), contact("X001", &[], &["a"])];
        let builder = ChainBuilder::with_max_chains(2);
        assert_eq!(2, builder.build_chains(&elements).unwrap().len());
    }
}
