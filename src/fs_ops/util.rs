use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Hidden temp name inside `dst_dir`; same directory keeps the final rename atomic.
pub(super) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dst_dir.join(format!(".cmdfm.{}.{}.tmp", pid, nanos))
}

/// True when both paths exist and are the same file (device + inode on unix,
/// volume + file index on windows), so hard links count as the same file.
pub(super) fn same_file(a: &Path, b: &Path) -> bool {
    ::same_file::is_same_file(a, b).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn temp_paths_are_hidden_and_distinct() {
        let dir = tempdir().unwrap();
        let a = unique_temp_path(dir.path());
        std::thread::sleep(std::time::Duration::from_millis(1));
        let b = unique_temp_path(dir.path());
        assert_ne!(a, b);
        assert!(a.file_name().unwrap().to_string_lossy().starts_with(".cmdfm."));
        assert_eq!(a.parent().unwrap(), dir.path());
    }

    #[test]
    fn same_file_sees_through_dot_segments() {
        let dir = tempdir().unwrap();
        let f = dir.path().join("x.txt");
        fs::write(&f, "x").unwrap();
        let alt = dir.path().join(".").join("x.txt");
        assert!(same_file(&f, &alt));
        assert!(!same_file(&f, &dir.path().join("y.txt")));
    }

    #[test]
    fn same_file_sees_hard_links() {
        let dir = tempdir().unwrap();
        let f = dir.path().join("x.txt");
        fs::write(&f, "x").unwrap();
        let link = dir.path().join("link.txt");
        fs::hard_link(&f, &link).unwrap();
        assert!(same_file(&f, &link));

        let copy = dir.path().join("copy.txt");
        fs::copy(&f, &copy).unwrap();
        assert!(!same_file(&f, &copy));
    }
}
