use super::{Rule, Violation};
use crate::analysis::{find_group_for, merge_into_groups, ChainBuilder};
use crate::ladder::{Element, ElementKind, LadderProgram};
use crate::utils::LabelType;
use anyhow::Result;

/// The rule checking that no contact network drives more than one coil.
///
/// For each rung, the maximal chains over its contacts and coils are enumerated;
/// each chain contributes one label-set made of the connection labels it traverses
/// and the variables of the coils it reaches.
/// As the same network is usually reached by several branches,
/// the overlapping sets are merged into groups before judgment;
/// a group holding more than one distinct coil variable is reported once.
pub struct CoilGroupsRule;

impl CoilGroupsRule {
    fn labels_of_chain<T>(elements: &[&Element<T>]) -> Vec<T>
    where
        T: LabelType,
    {
        let mut labels = Vec::new();
        for e in elements {
            labels.extend(e.in_list().iter().cloned());
            labels.extend(e.out_list().iter().cloned());
            if e.kind() == ElementKind::Coil {
                labels.push(e.variable().clone());
            }
        }
        labels
    }
}

impl<T> Rule<T> for CoilGroupsRule
where
    T: LabelType + Ord,
{
    fn name(&self) -> &str {
        "coil-groups"
    }

    fn description(&self) -> &str {
        "Reports contact networks driving more than one coil"
    }

    fn check(&self, program: &LadderProgram<T>) -> Result<Vec<Violation>> {
        let builder = ChainBuilder::default();
        let mut violations = Vec::new();
        for rung in program.iter_rungs() {
            let elements = rung.elements_of_kinds(&[ElementKind::Contact, ElementKind::Coil]);
            let chains = builder.build_chains(&elements)?;
            let label_sets = chains
                .iter()
                .map(|c| Self::labels_of_chain(&c.iter().collect::<Vec<&Element<T>>>()))
                .collect::<Vec<Vec<T>>>();
            let groups = merge_into_groups(&label_sets);
            let coil_variables = elements
                .iter()
                .filter(|e| e.kind() == ElementKind::Coil)
                .map(|e| e.variable().clone())
                .collect::<Vec<T>>();
            let mut reported = Vec::new();
            for coil_variable in &coil_variables {
                let group = find_group_for(std::slice::from_ref(coil_variable), &groups);
                let driven = coil_variables
                    .iter()
                    .filter(|v| group.contains(*v))
                    .fold(Vec::new(), |mut acc, v| {
                        if !acc.contains(&v) {
                            acc.push(v);
                        }
                        acc
                    });
                if driven.len() > 1 && !reported.contains(&group) {
                    let variables = driven
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<String>>()
                        .join(", ");
                    violations.push(Violation::new(
                        <CoilGroupsRule as Rule<T>>::name(self),
                        rung.label().to_string(),
                        format!("coils {} are driven by the same contact network", variables),
                    ));
                    reported.push(group);
                }
            }
        }
        Ok(violations)
    }
}
