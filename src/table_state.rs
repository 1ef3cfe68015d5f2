/// An edge table whose links have not been assigned.
#[derive(Debug, Clone, Copy)]
pub struct Unbuilt;

/// An edge table linked into a tree rooted at index 0.
#[derive(Debug, Clone, Copy)]
pub struct Built {
    pub(crate) depth: usize,
}
