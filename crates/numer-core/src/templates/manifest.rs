//! Rewriting the template's package manifest

use crate::error::{Result, ScaffoldError};
use crate::fs::FileSystem;
use serde_json::Value;
use std::path::Path;

/// Load the manifest at `src`, set its `name` and write it to `dst`.
///
/// Key order is preserved; output uses 2-space indentation and ends with a
/// newline. A manifest without a `name` gets one appended.
pub fn rewrite_manifest<F: FileSystem>(
    fs: &F,
    src: &Path,
    dst: &Path,
    package_name: &str,
) -> Result<()> {
    let content = fs
        .read_to_string(src)
        .map_err(|e| ScaffoldError::fs("read", src, e))?;

    let rendered = render_manifest(&content, package_name).map_err(|err| match err {
        RenderError::Parse(source) => ScaffoldError::Manifest {
            path: src.to_path_buf(),
            source,
        },
        RenderError::NotAnObject => ScaffoldError::ManifestShape {
            path: src.to_path_buf(),
        },
    })?;

    fs.write(dst, rendered.as_bytes())
        .map_err(|e| ScaffoldError::fs("write", dst, e))
}

#[derive(Debug)]
enum RenderError {
    Parse(serde_json::Error),
    NotAnObject,
}

fn render_manifest(content: &str, package_name: &str) -> Result<String, RenderError> {
    let mut manifest: Value = serde_json::from_str(content).map_err(RenderError::Parse)?;
    let object = manifest.as_object_mut().ok_or(RenderError::NotAnObject)?;
    object.insert("name".to_string(), Value::String(package_name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&manifest).map_err(RenderError::Parse)?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_replaced_in_place() {
        let input = r#"{"name":"template","private":true,"scripts":{"dev":"vite"}}"#;
        let rendered = render_manifest(input, "demo").unwrap();
        assert_eq!(
            rendered,
            "{\n  \"name\": \"demo\",\n  \"private\": true,\n  \"scripts\": {\n    \"dev\": \"vite\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_missing_name_is_appended() {
        let rendered = render_manifest(r#"{"version":"0.0.0"}"#, "demo").unwrap();
        assert_eq!(rendered, "{\n  \"version\": \"0.0.0\",\n  \"name\": \"demo\"\n}\n");
    }

    #[test]
    fn test_non_object_manifest() {
        let fs = MemoryFs::new()
            .with_file("/tpl/package.json", "[1, 2]")
            .with_dir("/out");
        let err = rewrite_manifest(
            &fs,
            Path::new("/tpl/package.json"),
            Path::new("/out/package.json"),
            "demo",
        )
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestShape { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let fs = MemoryFs::new()
            .with_file("/tpl/package.json", "{ nope")
            .with_dir("/out");
        let err = rewrite_manifest(
            &fs,
            Path::new("/tpl/package.json"),
            Path::new("/out/package.json"),
            "demo",
        )
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::Manifest { .. }));
        assert!(fs.file("/out/package.json").is_none());
    }
}
