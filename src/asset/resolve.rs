use std::path::{Component, Path, PathBuf};

use log::info;

use super::{FileResolver, Listing, Root, TraversalPolicy};
use crate::{config::ResolverConfig, error::ErrorKind, Result};

/// Resolves asset names against a fixed [`Root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputResolver {
    root: Root,
    traversal: TraversalPolicy,
}

impl OutputResolver {
    pub fn new(root: Root) -> Self {
        Self {
            root,
            traversal: TraversalPolicy::default(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.root.clone()).with_traversal(config.traversal)
    }

    pub fn with_traversal(mut self, traversal: TraversalPolicy) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn traversal(&self) -> TraversalPolicy {
        self.traversal
    }

    /// Join `name` onto the root. This never touches the file system, so the
    /// returned path may not exist.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Ok(self.root.path().to_owned());
        }
        let relative = Path::new(name);
        if self.traversal == TraversalPolicy::Reject && escapes_root(relative) {
            return Err(ErrorKind::Traversal(name.to_owned()).into());
        }
        Ok(self.root.path().join(relative))
    }

    /// Enumerate the entries directly inside the resolved directory `name`.
    pub fn list_directory(&self, name: &str) -> Result<Listing> {
        Listing::new(self.resolve(name)?)
    }

    /// List the directory `name` to the log and return how many entries it has.
    pub fn report_directory(&self, name: &str) -> Result<usize> {
        let listing = self.list_directory(name)?;
        info!("listing {}", listing.directory().display());
        let mut count = 0;
        for entry in listing {
            info!("  {}", entry?.display());
            count += 1;
        }
        Ok(count)
    }
}

impl Default for OutputResolver {
    fn default() -> Self {
        Self::new(Root::default())
    }
}

impl FileResolver for OutputResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        OutputResolver::resolve(self, name)
    }
}

fn escapes_root(path: &Path) -> bool {
    path.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
