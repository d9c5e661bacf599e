use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where source list files come from.
pub trait SourceTree {
    /// Every regular file below `root`, recursively. A missing root yields
    /// an empty list, not an error.
    fn files_under(&self, root: &Path) -> Vec<PathBuf>;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn dns_dir(&self) -> &Path;
    fn content_dir(&self) -> &Path;
    fn output_path(&self) -> Option<&Path>;

    fn source_dirs(&self) -> Vec<&Path> {
        vec![self.dns_dir(), self.content_dir()]
    }
}
