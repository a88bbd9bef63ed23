//! Core data types: one extracted declaration and the collection that
//! accumulates them over a single extraction run.

use serde::{Deserialize, Serialize};

/// A single top-level function or method declaration.
///
/// Line numbers are 1-based and refer to the file that was analyzed.
/// The name is an owned copy made at extraction time; nothing here
/// borrows from the syntax tree it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl FunctionDecl {
    /// Whether a 1-based line number falls inside this declaration's span.
    #[must_use]
    pub const fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }
}

impl std::fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}-{}]", self.name, self.start_line, self.end_line)
    }
}

/// Ordered, append-only collection of declarations from one run.
///
/// Insertion order equals tree visitation order (pre-order). Records are
/// never removed individually; the whole collection is released when it
/// is dropped. Growth doubles the backing storage, so appends are
/// amortized O(1) from whatever initial capacity the creator chose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionList {
    decls: Vec<FunctionDecl>,
}

impl FunctionList {
    /// Create an empty list with room for `capacity` records.
    ///
    /// A capacity of 0 is clamped to 1.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            decls: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Append a record as the new last element.
    pub fn push(&mut self, decl: FunctionDecl) {
        self.decls.push(decl);
    }

    /// Bounds-checked access to the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FunctionDecl> {
        self.decls.get(index)
    }

    /// First record with the given name, if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FunctionDecl> {
        self.decls.iter().find(|d| d.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Allocated slots in the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.decls.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionDecl> {
        self.decls.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FunctionDecl] {
        &self.decls
    }
}

impl std::ops::Index<usize> for FunctionList {
    type Output = FunctionDecl;

    /// Caller-trusted access; panics if `index >= len`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.decls[index]
    }
}

impl IntoIterator for FunctionList {
    type Item = FunctionDecl;
    type IntoIter = std::vec::IntoIter<FunctionDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.into_iter()
    }
}

impl<'a> IntoIterator for &'a FunctionList {
    type Item = &'a FunctionDecl;
    type IntoIter = std::slice::Iter<'a, FunctionDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.iter()
    }
}
