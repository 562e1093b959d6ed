//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't need a unit test counterpart
    fn is_organisational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn walk(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_prefix_error| io::Error::other("path escaped base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                out.insert(relative);
                walk(&path, base, out)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn relative_paths(dir: &str) -> BTreeSet<String> {
        let base = PathBuf::from(dir);
        let mut paths = BTreeSet::new();
        walk(&base, &base, &mut paths)
            .unwrap_or_else(|error| panic!("Failed to scan {dir}: {error}"));
        paths
    }

    #[test]
    fn test_every_src_file_has_unit_tests() {
        let unit_paths = relative_paths(UNIT_DIR);

        let missing: Vec<String> = relative_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !is_organisational(path) && !unit_paths.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_src_counterpart() {
        let src_paths = relative_paths(SRC_DIR);

        let orphaned: Vec<String> = relative_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let mut paths = BTreeSet::new();
        walk(Path::new("tests"), Path::new("tests"), &mut paths)
            .unwrap_or_else(|error| panic!("Failed to scan tests: {error}"));

        let empty: Vec<String> = paths
            .into_iter()
            .filter(|path| Path::new("tests").join(path).is_file() && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
