use std::{fmt, rc::Rc};

#[derive(Debug)]
struct Cell {
    value: i64,
    next:  Option<Rc<Cell>>,
}

/// An immutable singly linked list of integers such as `'(9 8 7)`.
///
/// Cells are reference counted and never mutated after construction, so
/// [`List::tail`] hands out a view that shares every cell but the first.
#[derive(Debug, Clone, Default)]
pub struct List {
    head: Option<Rc<Cell>>,
}

/// Iterator over the values of a [`List`].
pub struct Iter<'a> {
    cell: Option<&'a Cell>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cell = self.cell?;
        self.cell = cell.next.as_deref();
        Some(cell.value)
    }
}

impl List {
    /// Returns the first value, or `None` for the empty list.
    ///
    /// # Example
    /// ```
    /// use lispy::interpreter::value::list::List;
    ///
    /// let list: List = [9, 8, 7].into_iter().collect();
    /// assert_eq!(list.head(), Some(9));
    /// assert_eq!(List::default().head(), None);
    /// ```
    #[must_use]
    pub fn head(&self) -> Option<i64> {
        self.head.as_ref().map(|cell| cell.value)
    }

    /// Returns a list of every value but the first, sharing the remaining
    /// cells. Returns `None` for the empty list.
    ///
    /// # Example
    /// ```
    /// use lispy::interpreter::value::list::List;
    ///
    /// let list: List = [9, 8, 7].into_iter().collect();
    /// let tail = list.tail().unwrap();
    ///
    /// assert_eq!(tail.iter().collect::<Vec<_>>(), vec![8, 7]);
    /// ```
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.head.as_ref().map(|cell| Self { head: cell.next.clone() })
    }

    /// Returns the value at zero-based `position`, if present.
    #[must_use]
    pub fn nth(&self, position: usize) -> Option<i64> {
        self.iter().nth(position)
    }

    /// Counts the cells of the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { cell: self.head.as_deref() }
    }
}

impl FromIterator<i64> for List {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let values: Vec<i64> = iter.into_iter().collect();
        let head = values.into_iter()
                         .rev()
                         .fold(None, |next, value| Some(Rc::new(Cell { value, next })));
        Self { head }
    }
}

impl Drop for List {
    // Unlinks uniquely owned cells one at a time so long lists do not recurse.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell) {
                Ok(mut cell) => cell.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_shares_cells() {
        let list: List = (1..=3).collect();
        let tail = list.tail().unwrap();

        let second = list.head.as_ref().unwrap().next.as_ref().unwrap();
        assert!(Rc::ptr_eq(second, tail.head.as_ref().unwrap()));
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn tail_survives_dropping_the_original() {
        let list: List = [9, 8, 7].into_iter().collect();
        let tail = list.tail().unwrap();
        drop(list);

        assert_eq!(tail.to_string(), "'(8 7)");
    }

    #[test]
    fn nth_and_bounds() {
        let list: List = [9, 8, 7].into_iter().collect();

        assert_eq!(list.nth(0), Some(9));
        assert_eq!(list.nth(2), Some(7));
        assert_eq!(list.nth(3), None);
    }

    #[test]
    fn empty_list() {
        let list = List::default();

        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
        assert_eq!(list.to_string(), "'()");
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow_the_stack() {
        let list: List = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
    }
}
