//! Checks that the unit test tree mirrors the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Every `.rs` file below `root`, as paths relative to `root`
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|_| io::Error::other("path outside scanned root"))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn is_wiring(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == "mod.rs" || name == "lib.rs" || name == "main.rs")
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source module has a unit test file at the same relative path
    // Verified by deleting tests/unit/algorithm/mask.rs
    #[test]
    fn test_every_module_has_unit_tests() {
        let src = rust_files(Path::new(SRC)).expect("scan src");
        let unit = rust_files(Path::new(UNIT)).expect("scan tests/unit");

        let missing: Vec<&PathBuf> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            listing(&missing)
        );
    }

    // Tests no unit test file outlives its source module
    // Verified by adding tests/unit/catalog/closet.rs
    #[test]
    fn test_no_orphaned_unit_tests() {
        let src = rust_files(Path::new(SRC)).expect("scan src");
        let unit = rust_files(Path::new(UNIT)).expect("scan tests/unit");

        let orphaned: Vec<&PathBuf> = unit
            .iter()
            .filter(|path| !is_wiring(path) && !src.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            listing(&orphaned)
        );
    }

    // Tests each unit test file is declared in its parent mod.rs
    // Verified by removing `pub mod scoring;` from tests/unit/algorithm/mod.rs
    #[test]
    fn test_unit_tests_are_wired() {
        let root = Path::new(UNIT);
        let unit = rust_files(root).expect("scan tests/unit");

        let mut unwired = Vec::new();
        for path in unit.iter().filter(|path| !is_wiring(path)) {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = root.join(path).with_file_name("mod.rs");
            let declarations = fs::read_to_string(&parent).unwrap_or_default();
            let declared = declarations.lines().any(|line| {
                let line = line.trim();
                line == format!("pub mod {stem};") || line == format!("mod {stem};")
            });
            if !declared {
                unwired.push(path);
            }
        }

        assert!(
            unwired.is_empty(),
            "Unit test files not declared in their mod.rs:\n{}",
            listing(&unwired)
        );
    }

    // Tests every test file other than module wiring contains a test
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new("tests");
        let files = rust_files(root).expect("scan tests");

        let mut empty = Vec::new();
        for path in files.iter().filter(|path| !is_wiring(path)) {
            let content = fs::read_to_string(root.join(path)).expect("read test file");
            if !content.contains("#[test]") {
                empty.push(path);
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty)
        );
    }
}
