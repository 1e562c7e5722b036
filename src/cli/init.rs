//! `init` command: scaffold a new brick project

use anyhow::{bail, Context, Result};
use console::style;
use std::path::Path;

const CATEGORY_FOLDERS: &[&str] = &[
    "bricks/auth",
    "bricks/data",
    "bricks/api",
    "bricks/transform",
    "tests",
    "specs",
];

pub fn run(project_name: &str) -> Result<i32> {
    let project_path = Path::new(project_name);

    if project_path.exists() {
        bail!("directory '{project_name}' already exists");
    }

    for folder in CATEGORY_FOLDERS {
        std::fs::create_dir_all(project_path.join(folder))
            .with_context(|| format!("failed to create {folder}"))?;
    }

    let readme = format!(
        "# {project_name}\n\n\
         A Brick Architecture project.\n\n\
         ## Structure\n\
         - bricks/auth/ - Authentication bricks\n\
         - bricks/data/ - Data access bricks\n\
         - bricks/api/ - API integration bricks\n\
         - bricks/transform/ - Data transformation bricks\n\
         - tests/ - Test files\n\
         - specs/ - Specification files (JSON/TOML)\n\n\
         ## Usage\n\
         Generate: bricklint generate <name> --spec specs/<spec>.json\n\
         Validate: bricklint validate bricks/<category>/<name>.py\n\
         Inspect: bricklint inspect bricks/<category>/<name>.py\n"
    );
    std::fs::write(project_path.join("README.md"), readme).context("failed to write README")?;

    println!(
        "{} Project '{project_name}' created successfully",
        style("✓").green()
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_layout() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let project = dir.path().join("myproject");
        let code = run(project.to_str().expect("utf-8 path")).expect("init should succeed");
        assert_eq!(code, 0);
        for folder in CATEGORY_FOLDERS {
            assert!(project.join(folder).is_dir(), "missing {folder}");
        }
        assert!(project.join("README.md").is_file());
    }

    #[test]
    fn test_init_refuses_existing_directory() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let project = dir.path().join("taken");
        std::fs::create_dir(&project).expect("should create dir");
        let err = run(project.to_str().expect("utf-8 path"))
            .expect_err("init into an existing directory should fail");
        assert!(err.to_string().contains("already exists"));
    }
}
