use crate::pair::Pair;
use std::{fmt, ptr};

/// Chain of left and right hand side pairs.
///
/// A chain is a singly-linked stack of borrowed `(left, right)` pairs. The
/// chain is nothing more than a head reference; a chain holding nothing is
/// valid and behaves the same as a freshly created one. Pushing stacks a new
/// pair on top and every scan runs from the top down, so the most recently
/// pushed pair for a left shadows older ones until it is popped.
///
/// Lefts and rights are matched by reference identity: a query matches a
/// stored side only when both refer to the very same object, never merely an
/// equal value. This keeps the chain generic over arbitrary payloads. Chains
/// whose lefts are text also offer lookup by case-insensitive content via
/// [`right_for_left_ignore_ascii_case`](Self::right_for_left_ignore_ascii_case).
pub struct Chain<'a, L: ?Sized, R: ?Sized> {
    top: Option<Box<Pair<'a, L, R>>>,
}

impl<'a, L: ?Sized, R: ?Sized> Chain<'a, L, R> {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self { top: None }
    }

    /// Checks if a chain holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Counts the pairs in a chain by walking it.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pushes a left and right hand side pair on top of a chain.
    ///
    /// Pushing never refuses a duplicate left: the new pair simply shadows
    /// any older pair with the same left for forward lookups until popped.
    pub fn push(&mut self, left: &'a L, right: &'a R) {
        let below = self.top.take();

        self.top = Some(Box::new(Pair::new(left, right, below)));
    }

    /// Removes the topmost pair whose left is the given reference and returns
    /// its right hand side.
    ///
    /// Removes only one pair, stopping at the first match; older pairs with
    /// the same left stay in place, as does the relative order of every
    /// survivor. Returns `None` and leaves the chain untouched when no pair
    /// matches, which is the normal "no association" outcome rather than an
    /// error.
    pub fn pop_left(&mut self, left: &L) -> Option<&'a R> {
        let mut cursor = &mut self.top;

        loop {
            let is_match = match cursor {
                Some(pair) => ptr::eq(pair.left(), left),
                None => return None,
            };

            if is_match {
                let (_, right, below) = cursor.take().unwrap().into_parts();

                *cursor = below;

                return Some(right);
            }

            cursor = cursor.as_mut().unwrap().below_mut();
        }
    }

    /// Releases every pair and returns the chain to its empty condition.
    ///
    /// A no-op on an empty chain. Pairs are unlinked one by one from the top
    /// so tearing down an arbitrarily long chain cannot overflow the stack.
    pub fn clear(&mut self) {
        let mut top = self.top.take();

        while let Some(mut pair) = top {
            top = pair.below_mut().take();
        }
    }

    /// Walks the pairs from top to bottom until the visitor answers a result.
    ///
    /// Calls `visit` once per pair with that pair's left and right hand
    /// sides. The walk stops and returns as soon as a call answers `Some`,
    /// without touching the pairs further down; it returns `None` once the
    /// bottom is passed with no call having done so. Any context the visitor
    /// needs travels in its captures, and the shared borrow on the chain
    /// rules out mutation while the walk is in progress.
    pub fn for_left_and_right<T>(
        &self,
        mut visit: impl FnMut(&'a L, &'a R) -> Option<T>,
    ) -> Option<T> {
        self.iter().find_map(|(left, right)| visit(left, right))
    }

    /// Walks the pairs like [`for_left_and_right`](Self::for_left_and_right),
    /// handing the same extra arguments to every visit.
    ///
    /// The visitor sees a fresh shared view of the one `args` value at each
    /// pair; only the left and right hand sides differ between calls.
    pub fn for_left_and_right_with<A: ?Sized, T>(
        &self,
        args: &A,
        mut visit: impl FnMut(&'a L, &'a R, &A) -> Option<T>,
    ) -> Option<T> {
        self.iter().find_map(|(left, right)| visit(left, right, args))
    }

    /// Finds the right hand side paired with a left.
    ///
    /// Answers the right of the first, topmost pair whose left is the given
    /// reference. There could be more matches further down if the same left
    /// was pushed more than once; the search always stops at the first.
    pub fn right_for_left(&self, left: &L) -> Option<&'a R> {
        self.for_left_and_right(|candidate, right| ptr::eq(candidate, left).then_some(right))
    }

    /// Finds the left hand side paired with a right.
    ///
    /// Lookups typically run from left to right, but not always: when pairing
    /// names with arbitrary references, the reverse translation answers the
    /// name for a given reference. Rights match by identity, like lefts.
    pub fn left_for_right(&self, right: &R) -> Option<&'a L> {
        self.for_left_and_right(|left, candidate| ptr::eq(candidate, right).then_some(left))
    }

    /// Iterates over the pairs from top to bottom.
    pub fn iter(&self) -> Iter<'_, 'a, L, R> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<'a, L: AsRef<str> + ?Sized, R: ?Sized> Chain<'a, L, R> {
    /// Finds the right hand side paired with a left spelling the same name.
    ///
    /// Unlike [`right_for_left`](Self::right_for_left) this compares the left
    /// contents as text, ignoring ASCII case, so a distinct but equally
    /// spelled string matches. Only chains whose lefts can be read as strings
    /// offer this lookup.
    pub fn right_for_left_ignore_ascii_case(&self, left: &str) -> Option<&'a R> {
        self.for_left_and_right(|candidate, right| {
            candidate
                .as_ref()
                .eq_ignore_ascii_case(left)
                .then_some(right)
        })
    }
}

impl<'a, L: ?Sized, R: ?Sized> Default for Chain<'a, L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, L: ?Sized, R: ?Sized> Drop for Chain<'a, L, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, L: fmt::Debug + ?Sized, R: fmt::Debug + ?Sized> fmt::Debug for Chain<'a, L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, L: ?Sized, R: ?Sized> Extend<(&'a L, &'a R)> for Chain<'a, L, R> {
    fn extend<I: IntoIterator<Item = (&'a L, &'a R)>>(&mut self, pairs: I) {
        for (left, right) in pairs {
            self.push(left, right);
        }
    }
}

impl<'a, L: ?Sized, R: ?Sized> FromIterator<(&'a L, &'a R)> for Chain<'a, L, R> {
    fn from_iter<I: IntoIterator<Item = (&'a L, &'a R)>>(pairs: I) -> Self {
        let mut chain = Self::new();

        chain.extend(pairs);

        chain
    }
}

impl<'c, 'a, L: ?Sized, R: ?Sized> IntoIterator for &'c Chain<'a, L, R> {
    type IntoIter = Iter<'c, 'a, L, R>;
    type Item = (&'a L, &'a R);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`Chain`], from top to bottom.
pub struct Iter<'c, 'a, L: ?Sized, R: ?Sized> {
    next: Option<&'c Pair<'a, L, R>>,
}

impl<'c, 'a, L: ?Sized, R: ?Sized> Iterator for Iter<'c, 'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|pair| {
            self.next = pair.below();

            (pair.left(), pair.right())
        })
    }
}
