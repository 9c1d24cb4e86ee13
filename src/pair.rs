pub struct Pair<'a, L: ?Sized, R: ?Sized> {
    left: &'a L,
    right: &'a R,
    // The pair that was on top before this one was pushed. Owning it here
    // keeps every pair owned by exactly one predecessor or by the chain head.
    below: Option<Box<Pair<'a, L, R>>>,
}

impl<'a, L: ?Sized, R: ?Sized> Pair<'a, L, R> {
    pub fn new(left: &'a L, right: &'a R, below: Option<Box<Self>>) -> Self {
        Self { left, right, below }
    }

    pub fn left(&self) -> &'a L {
        self.left
    }

    pub fn right(&self) -> &'a R {
        self.right
    }

    pub fn below(&self) -> Option<&Self> {
        self.below.as_deref()
    }

    pub fn below_mut(&mut self) -> &mut Option<Box<Self>> {
        &mut self.below
    }

    pub fn into_parts(self) -> (&'a L, &'a R, Option<Box<Self>>) {
        (self.left, self.right, self.below)
    }
}
