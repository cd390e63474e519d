use std::{fmt, rc::Rc};

use crate::ast::Node;

/// An immutable, shared sequence of nodes such as `[1 2 x]`.
///
/// Elements are kept as nodes, so identifiers inside a sequence literal are
/// resolved only when a primitive reads them. A sequence returned from a
/// function call has its identifiers replaced by their values before the
/// call's scope is dropped, so it never names a parameter that is gone.
/// Cloning a sequence shares its storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence(Rc<[Node]>);

impl Sequence {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl From<Vec<Node>> for Sequence {
    fn from(nodes: Vec<Node>) -> Self {
        Self(Rc::from(nodes))
    }
}

impl FromIterator<Node> for Sequence {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type IntoIter = std::slice::Iter<'a, Node>;
    type Item = &'a Node;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_space_separated_elements() {
        let sequence = Sequence::from(vec![Node::Number(1),
                                           Node::Identifier("x".into()),
                                           Node::Number(3)]);
        assert_eq!(sequence.to_string(), "[1 x 3]");
        assert_eq!(Sequence::default().to_string(), "[]");
    }

    #[test]
    fn clones_share_storage() {
        let sequence = Sequence::from(vec![Node::Number(4)]);
        let copy = sequence.clone();

        assert!(Rc::ptr_eq(&sequence.0, &copy.0));
        assert_eq!(copy.len(), 1);
    }
}
