//! Keeps `tests/unit/` a mirror of `src/`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Tests every source file has a unit test file at the same relative path
    // Verified by adding a source file without tests
    #[test]
    fn test_every_source_file_is_tested() {
        let sources = mirrored_paths(Path::new(SRC_ROOT)).unwrap();
        let tests = mirrored_paths(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<String> = sources
            .difference(&tests)
            .map(|path| format!("  src/{path} has no tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file still has a source file
    // Verified by adding a test file for a removed module
    #[test]
    fn test_no_orphaned_unit_tests() {
        let sources = mirrored_paths(Path::new(SRC_ROOT)).unwrap();
        let tests = mirrored_paths(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<String> = tests
            .difference(&sources)
            .map(|path| format!("  tests/unit/{path} has no src/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Entry points and module declarations are not mirrored
    fn is_mirrored(relative: &str) -> bool {
        !matches!(relative, "main.rs" | "lib.rs") && !relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        collect(root, root, &mut paths)?;
        Ok(paths)
    }

    fn collect(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = match path.strip_prefix(root) {
                Ok(stripped) => stripped.to_string_lossy().replace('\\', "/"),
                Err(_original_error) => return Err(io::Error::other("path outside root")),
            };

            if path.is_dir() {
                paths.insert(format!("{relative}/"));
                collect(&path, root, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") && is_mirrored(&relative) {
                paths.insert(relative);
            }
        }
        Ok(())
    }
}
