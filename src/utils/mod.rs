use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Counts `.sql` files below `scripts_folder`, recursing into sub-folders.
pub fn count_sql_scripts(scripts_folder: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(scripts_folder) {
        let entry = entry.with_context(|| {
            format!("Failed to walk scripts folder: {}", scripts_folder.display())
        })?;
        let is_sql = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"));
        if entry.file_type().is_file() && is_sql {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_count_sql_scripts_recurses() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("Update"))?;
        fs::create_dir_all(dir.path().join("TestData"))?;
        fs::write(dir.path().join("Update/0001_create_orders.sql"), "")?;
        fs::write(dir.path().join("Update/0002_add_index.SQL"), "")?;
        fs::write(dir.path().join("TestData/0001_seed.sql"), "")?;
        fs::write(dir.path().join("README.md"), "")?;

        assert_eq!(count_sql_scripts(dir.path())?, 3);
        Ok(())
    }

    #[test]
    fn test_count_sql_scripts_missing_folder_errors() {
        assert!(count_sql_scripts(Path::new("/definitely/not/here")).is_err());
    }
}
