//! Grouping of services by role domain

use crate::core::ServiceNode;

/// One diagram group and its member services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Domain part of the members' roles, e.g. `DB`
    pub label: String,
    /// Member service names, sorted
    pub members: Vec<String>,
}

/// Services partitioned by the domain prefix of their role
///
/// Groups appear in the order their first member appears in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    groups: Vec<Group>,
}

impl Grouping {
    /// Partition nodes by group label
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a ServiceNode>) -> Self {
        let mut groups: Vec<Group> = Vec::new();

        for node in nodes {
            let label = node.group();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.members.push(node.name.clone()),
                None => groups.push(Group {
                    label: label.to_string(),
                    members: vec![node.name.clone()],
                }),
            }
        }

        for group in &mut groups {
            group.members.sort();
        }

        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Look up a group by label
    pub fn get(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Label of the group containing `name`
    pub fn group_of(&self, name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.members.iter().any(|m| m == name))
            .map(|g| g.label.as_str())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
