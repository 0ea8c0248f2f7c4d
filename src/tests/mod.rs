use std::fs;
use std::path::Path;

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::{convert_directory, ConvertOptions};

fn quiet_options() -> ConvertOptions {
    ConvertOptions {
        show_progress: false,
        ..ConvertOptions::default()
    }
}

// Helper function to create a stylesheet below the test directory
fn create_css_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[tokio::test]
async fn test_converts_pixels_and_leaves_plain_files() -> Result<()> {
    let dir = tempdir()?;
    create_css_file(dir.path(), "a.css", "margin: 20px;")?;
    create_css_file(dir.path(), "b.css", "font-family: Arial;")?;

    let stats = convert_directory(dir.path(), quiet_options()).await?;

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.converted_files, 2);
    assert_eq!(fs::read_to_string(dir.path().join("a.css"))?, "margin: 1.25rem;");
    assert_eq!(fs::read_to_string(dir.path().join("b.css"))?, "font-family: Arial;");
    Ok(())
}

#[tokio::test]
async fn test_realistic_stylesheet() -> Result<()> {
    let dir = tempdir()?;
    let source = r#"@media (max-width: 768px) {
    .card {
        border: 1px solid #ccc;
        border-radius: 4px;
        padding: 12px 24px;
        width: 50%;
        line-height: 1.4;
        font-size: 0.9em;
    }
}
"#;
    let expected = r#"@media (max-width: 48.00rem) {
    .card {
        border: 0.06rem solid #ccc;
        border-radius: 0.25rem;
        padding: 0.75rem 1.50rem;
        width: 50%;
        line-height: 1.4;
        font-size: 0.9em;
    }
}
"#;
    create_css_file(dir.path(), "components/card.css", source)?;

    let stats = convert_directory(dir.path(), quiet_options()).await?;

    assert_eq!(stats.replaced_values, 5);
    assert_eq!(fs::read_to_string(dir.path().join("components/card.css"))?, expected);
    Ok(())
}

#[tokio::test]
async fn test_only_css_files_are_touched() -> Result<()> {
    let dir = tempdir()?;
    create_css_file(dir.path(), "deep/nested/tree/site.css", "top: 32px;")?;
    create_css_file(dir.path(), "deep/site.scss", "top: 32px;")?;
    create_css_file(dir.path(), "deep/nested/NOTES.CSS", "top: 32px;")?;
    create_css_file(dir.path(), "index.html", "<div style=\"top: 32px\"></div>")?;

    let stats = convert_directory(dir.path(), quiet_options()).await?;

    assert_eq!(stats.total_files, 1);
    assert_eq!(fs::read_to_string(dir.path().join("deep/nested/tree/site.css"))?, "top: 2.00rem;");
    assert_eq!(fs::read_to_string(dir.path().join("deep/site.scss"))?, "top: 32px;");
    assert_eq!(fs::read_to_string(dir.path().join("deep/nested/NOTES.CSS"))?, "top: 32px;");
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html"))?,
        "<div style=\"top: 32px\"></div>"
    );
    Ok(())
}

#[tokio::test]
async fn test_second_run_is_stable() -> Result<()> {
    let dir = tempdir()?;
    create_css_file(dir.path(), "a.css", "h1 { margin: 40px 0; }")?;

    convert_directory(dir.path(), quiet_options()).await?;
    let first = fs::read_to_string(dir.path().join("a.css"))?;
    let stats = convert_directory(dir.path(), quiet_options()).await?;

    assert_eq!(stats.replaced_values, 0);
    assert_eq!(fs::read_to_string(dir.path().join("a.css"))?, first);
    assert_eq!(first, "h1 { margin: 2.50rem 0; }");
    Ok(())
}
