mod listing;
mod resolve;

#[cfg(test)]
mod test;

use std::path::{Path, PathBuf};

pub use listing::Listing;
pub use resolve::OutputResolver;

use crate::Result;

/// Maps a logical asset name to a location on disk.
pub trait FileResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

impl<R: FileResolver + ?Sized> FileResolver for &R {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        (**self).resolve(name)
    }
}

/// The directory every asset name is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root(PathBuf);

impl Root {
    /// Location of the converted models, relative to the working directory.
    pub const OUTPUTS: &'static str = "core/outputs";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn outputs() -> Self {
        Self::new(Self::OUTPUTS)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for Root {
    fn default() -> Self {
        Self::outputs()
    }
}

impl AsRef<Path> for Root {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// What to do with names that would leave the root, such as `../model.g3dj` or
/// `/etc/passwd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalPolicy {
    #[default]
    Reject,
    /// Join the name verbatim. Parent components and absolute names escape the root.
    Allow,
}
