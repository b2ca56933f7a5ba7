//! Project-relative paths.

use crate::Readable;

impl Readable {
    /// Strip the configured root path from the front of `path`.
    ///
    /// Paths outside the root are returned unchanged.
    ///
    /// ```
    /// use readable::{Config, Readable};
    ///
    /// let readable = Readable::new(Config::default().with_root_path("/srv/app/"));
    ///
    /// assert_eq!(readable.normalize_path("/srv/app/test/test.x"), "test/test.x");
    /// assert_eq!(readable.normalize_path("/outside/root"), "/outside/root");
    /// ```
    pub fn normalize_path(&self, path: &str) -> String {
        path.strip_prefix(self.config().root_path.as_str())
            .unwrap_or(path)
            .to_string()
    }
}
