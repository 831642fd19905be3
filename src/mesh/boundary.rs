//! Named boundary patches.

use std::collections::HashMap;
use std::fmt;

use super::point::PointId;

/// Physical role of a boundary patch, matching the external mesher's type
/// keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
    /// Solid wall.
    Wall,
    /// Generic far-field boundary.
    Patch,
    /// Symmetry plane.
    Symmetry,
}

impl PatchKind {
    /// Keyword emitted into the `boundary` section.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PatchKind::Wall => "wall",
            PatchKind::Patch => "patch",
            PatchKind::Symmetry => "symmetry",
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of boundary faces sharing one boundary condition.
#[derive(Debug, Clone)]
pub struct Patch {
    /// Patch name; the identity key within the boundary set.
    pub name: String,
    /// Kind recorded when the patch was first created.
    pub kind: PatchKind,
    /// Oriented quad faces in registration order.
    pub faces: Vec<[PointId; 4]>,
}

/// Aggregates oriented boundary faces under named, typed patches.
///
/// A name maps to exactly one patch. Faces registered under an existing
/// name accumulate in order, and the patch keeps the kind supplied at
/// creation; kinds passed on later registrations are ignored without
/// error. Patches iterate in first-registration order.
#[derive(Debug, Default)]
pub struct Boundary {
    patches: Vec<Patch>,
    by_name: HashMap<String, usize>,
}

impl Boundary {
    /// Creates an empty boundary set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one face to the named patch, creating the patch on first use.
    pub fn add_face(&mut self, name: &str, face: [PointId; 4], kind: PatchKind) {
        if let Some(&slot) = self.by_name.get(name) {
            self.patches[slot].faces.push(face);
            return;
        }
        self.by_name.insert(name.to_owned(), self.patches.len());
        self.patches.push(Patch {
            name: name.to_owned(),
            kind,
            faces: vec![face],
        });
    }

    /// Returns the patches in first-registration order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Number of distinct patches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Returns `true` if no face has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}
