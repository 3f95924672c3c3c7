// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixtures shared by the integration tests.

pub mod engine;

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory containing one regular file and one subdirectory.
///
/// Everything is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct PathFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl PathFixture {
    /// Creates the fixture, writing `contents` into the regular file.
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("hosts")).unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        Self { dir }
    }

    /// Path of the regular file.
    pub fn file(&self) -> String {
        self.path("hosts")
    }

    /// Path of the subdirectory.
    pub fn subdir(&self) -> String {
        self.path("subdir")
    }

    /// Path inside the fixture that does not exist.
    pub fn missing(&self) -> String {
        self.path("hostsDEFINITELYMISSING")
    }

    fn path(&self, name: &str) -> String {
        let path: PathBuf = self.dir.path().join(name);
        path.to_str().unwrap().to_string()
    }
}
