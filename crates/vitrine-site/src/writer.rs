//! Persists generated assets as a static website on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::SiteAssets;

/// Filename for the synthesized document.
pub const INDEX_FILE: &str = "index.html";

/// Filename for the stylesheet, referenced from the document head.
pub const STYLES_FILE: &str = "styles.css";

/// Filename for the script, referenced at the end of the body.
pub const SCRIPT_FILE: &str = "script.js";

/// Errors that can occur while writing the site.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create output directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFile { path: String, message: String },
}

/// Writes the three site files, fully overwriting previous output.
///
/// There is intentionally no locking, versioning, or backup: the site is
/// always exactly the most recent successful build, and concurrent
/// builds race with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    output_dir: PathBuf,
}

impl SiteWriter {
    /// Create a writer targeting the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory the three files are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the site: a full HTML document wrapping the markup
    /// fragment, then the stylesheet and script verbatim.
    pub fn write(&self, assets: &SiteAssets) -> Result<(), WriteError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| WriteError::CreateDir {
            path: self.output_dir.display().to_string(),
            message: e.to_string(),
        })?;

        self.write_file(INDEX_FILE, &render_document(&assets.html))?;
        self.write_file(STYLES_FILE, &assets.css)?;
        self.write_file(SCRIPT_FILE, &assets.js)?;

        tracing::info!("Wrote site to {}", self.output_dir.display());

        Ok(())
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<(), WriteError> {
        let path = self.output_dir.join(name);
        fs::write(&path, contents).map_err(|e| WriteError::WriteFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Wrap a markup fragment in the fixed document shell: UTF-8 charset,
/// viewport meta, fixed title, stylesheet link, trailing script tag.
fn render_document(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Generated Site</title>
  <link rel="stylesheet" href="/{}">
</head>
<body>
{}
<script src="/{}"></script>
</body>
</html>"#,
        STYLES_FILE, fragment, SCRIPT_FILE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_assets() -> SiteAssets {
        SiteAssets {
            html: "<h1>Hello</h1>".to_string(),
            css: "body { color: red; }".to_string(),
            js: "console.log('hi');".to_string(),
        }
    }

    #[test]
    fn writes_three_files() {
        let temp = tempdir().unwrap();
        let writer = SiteWriter::new(temp.path().join("site"));

        writer.write(&sample_assets()).unwrap();

        let dir = writer.output_dir();
        assert!(dir.join(INDEX_FILE).exists());
        assert!(dir.join(STYLES_FILE).exists());
        assert!(dir.join(SCRIPT_FILE).exists());
    }

    #[test]
    fn wraps_fragment_in_full_document() {
        let temp = tempdir().unwrap();
        let writer = SiteWriter::new(temp.path());

        writer.write(&sample_assets()).unwrap();

        let index = fs::read_to_string(temp.path().join(INDEX_FILE)).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains(r#"<meta charset="utf-8">"#));
        assert!(index.contains(r#"<meta name="viewport""#));
        assert!(index.contains(r#"<link rel="stylesheet" href="/styles.css">"#));
        assert!(index.contains("<h1>Hello</h1>"));
        assert!(index.contains(r#"<script src="/script.js"></script>"#));
    }

    #[test]
    fn stylesheet_and_script_are_verbatim() {
        let temp = tempdir().unwrap();
        let writer = SiteWriter::new(temp.path());
        let assets = sample_assets();

        writer.write(&assets).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join(STYLES_FILE)).unwrap(),
            assets.css
        );
        assert_eq!(
            fs::read_to_string(temp.path().join(SCRIPT_FILE)).unwrap(),
            assets.js
        );
    }

    #[test]
    fn fully_overwrites_previous_build() {
        let temp = tempdir().unwrap();
        let writer = SiteWriter::new(temp.path());

        writer.write(&sample_assets()).unwrap();

        let second = SiteAssets {
            html: "<p>second</p>".to_string(),
            css: "p { margin: 0; }".to_string(),
            js: "// second".to_string(),
        };
        writer.write(&second).unwrap();

        let index = fs::read_to_string(temp.path().join(INDEX_FILE)).unwrap();
        assert!(index.contains("<p>second</p>"));
        assert!(!index.contains("<h1>Hello</h1>"));
        assert_eq!(
            fs::read_to_string(temp.path().join(SCRIPT_FILE)).unwrap(),
            "// second"
        );
    }

    #[test]
    fn creates_missing_output_directory() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        let writer = SiteWriter::new(&nested);

        writer.write(&sample_assets()).unwrap();

        assert!(nested.join(INDEX_FILE).exists());
    }
}
