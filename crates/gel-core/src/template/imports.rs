//! Ordered, duplicate-free Go import sets

use super::header::HeaderConfig;
use super::segment::{packages, Segment};
use indexmap::IndexSet;

/// Import paths in first-seen order, always starting with `io`
#[derive(Debug, Clone)]
pub struct ImportSet {
    paths: IndexSet<String>,
}

impl ImportSet {
    /// Set holding only `io`
    pub fn new() -> Self {
        let mut paths = IndexSet::new();
        paths.insert(packages::IO.to_string());
        Self { paths }
    }

    /// Imports of one template: `io`, then segment imports in segment
    /// order, then the header's extra imports
    pub fn for_template(header: &HeaderConfig, segments: &[Segment]) -> Self {
        let mut set = Self::new();
        for segment in segments {
            set.extend(segment.imports().iter().copied());
        }
        set.extend(header.imports.iter().map(String::as_str));
        set
    }

    /// Add one path; returns false if it was already present
    pub fn insert(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }

    /// Add several paths, keeping first-seen order
    pub fn extend<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) {
        for path in paths {
            self.insert(path);
        }
    }

    /// Union with another set, appending its new paths in its order
    pub fn merge(&mut self, other: &ImportSet) {
        self.extend(other.iter());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Go import block
    pub fn render(&self) -> String {
        let mut block = String::from("import (\n");
        for path in self.iter() {
            block.push_str(&format!("\t\"{}\"\n", path));
        }
        block.push_str(")\n");
        block
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::new()
    }
}
