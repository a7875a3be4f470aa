//! Filesystem snapshot loader.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use buildlens_core::{
    application::{ApplicationError, ModelAssembler},
    error::BuildLensResult,
};

use super::{SnapshotHost, manifest::SnapshotManifest};
use crate::types::TypeRegistry;

/// Encoding of a snapshot document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Toml,
    Json,
}

impl SnapshotFormat {
    /// Infer the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ApplicationError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ApplicationError::UnsupportedFormat { extension }),
        }
    }

    fn parse(self, content: &str) -> Result<SnapshotManifest, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// A loaded snapshot: the host plus the capability types it declares.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub host: SnapshotHost,
    pub types: TypeRegistry,
}

impl Snapshot {
    /// Wire both adapters into a [`ModelAssembler`].
    pub fn into_assembler(self) -> ModelAssembler {
        ModelAssembler::new(Box::new(self.host), Box::new(self.types))
    }
}

/// Loads a [`Snapshot`] from a `.toml` or `.json` file.
///
/// # Example
///
/// ```no_run
/// use buildlens_adapters::SnapshotLoader;
///
/// let snapshot = SnapshotLoader::new("./build-snapshot.toml").load()?;
/// let model = snapshot.into_assembler().assemble()?;
/// println!("{} root tasks", model.root.tasks.len());
/// # Ok::<(), buildlens_core::error::BuildLensError>(())
/// ```
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and materialize the snapshot.
    ///
    /// Relative project directories resolve against the directory holding
    /// the snapshot file.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::UnsupportedFormat`] for an unknown extension
    /// - [`ApplicationError::SnapshotUnreadable`] if the file cannot be read
    /// - [`ApplicationError::SnapshotInvalid`] if the document does not parse
    /// - any error of [`SnapshotHost::from_manifest`]
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> BuildLensResult<Snapshot> {
        let format = SnapshotFormat::from_path(&self.path)?;

        let unreadable = |e: std::io::Error| ApplicationError::SnapshotUnreadable {
            path: self.path.clone(),
            reason: e.to_string(),
        };
        let absolute = std::path::absolute(&self.path).map_err(unreadable)?;
        let content = fs::read_to_string(&absolute).map_err(unreadable)?;
        debug!(%format, bytes = content.len(), "snapshot read");

        let manifest = format
            .parse(&content)
            .map_err(|reason| ApplicationError::SnapshotInvalid {
                path: self.path.clone(),
                reason,
            })?;

        let base_dir = absolute.parent().unwrap_or(Path::new("/"));
        let snapshot = materialize(&manifest, base_dir)?;

        info!(
            projects = snapshot.host.len(),
            types = snapshot.types.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Materialize a snapshot document held in memory.
    ///
    /// `base_dir` anchors relative project directories and is reported as the
    /// location of parse failures.
    pub fn parse_str(content: &str, format: SnapshotFormat, base_dir: &Path) -> BuildLensResult<Snapshot> {
        let manifest = format
            .parse(content)
            .map_err(|reason| ApplicationError::SnapshotInvalid {
                path: base_dir.to_path_buf(),
                reason,
            })?;

        materialize(&manifest, base_dir)
    }
}

fn materialize(manifest: &SnapshotManifest, base_dir: &Path) -> BuildLensResult<Snapshot> {
    let host = SnapshotHost::from_manifest(manifest, base_dir)?;
    let types = manifest
        .types
        .iter()
        .fold(TypeRegistry::new(), |registry, entry| {
            registry.with_type(entry.name.clone(), entry.description())
        });

    Ok(Snapshot { host, types })
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildlens_core::{
        application::ports::{BuildHost, CapabilityDescriber},
        error::BuildLensError,
    };
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"
root = ":"

[[projects]]
path = ":"
name = "demo"
subprojects = [":app"]
plugins = ["base"]

[[projects.tasks]]
name = "clean"

[[projects]]
path = ":app"
name = "app"
build_file = "app.gradle.kts"
script_classpath = ["libs/plugin.jar"]

[[projects.extensions]]
name = "application"
type = "org.example.ApplicationExtension"

[[projects.tasks]]
name = "run"
group = "application"
description = "Runs the app"

[[projects.configurations]]
name = "runtimeClasspath"

[[projects.configurations.components]]
coordinate = "demo:app:"
dependencies = ["com.a:a:1"]

[[projects.configurations.components]]
coordinate = "com.a:a:1"

[[types]]
name = "org.example.ApplicationExtension"

[[types.methods]]
name = "getMainClass"
abstract = true
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_toml_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "snapshot.toml", SNAPSHOT);

        let snapshot = SnapshotLoader::new(&path).load().unwrap();
        let host = &snapshot.host;

        let root = host.root().unwrap();
        assert_eq!(root.name(), "demo");
        assert_eq!(root.subproject_paths().to_vec(), vec![":app".to_string()]);
        assert_eq!(root.tasks()[0].path, ":clean");
        assert_eq!(root.build_file(), Path::new("build.gradle"));

        let app = host.project(":app").unwrap();
        assert_eq!(app.parent_path(), Some(":"));
        assert!(app.directory().ends_with("app"));
        assert!(app.directory().is_absolute());
        assert_eq!(app.tasks()[0].path, ":app:run");
        assert_eq!(app.tasks()[0].description.as_deref(), Some("Runs the app"));
        assert_eq!(app.configurations().len(), 1);
        assert_eq!(app.extension_schemas()[0].capability_type, "org.example.ApplicationExtension");

        let described = snapshot
            .types
            .describe("org.example.ApplicationExtension")
            .unwrap();
        assert_eq!(described.methods[0].name, "getMainClass");
        assert!(described.methods[0].is_abstract);
        assert!(described.methods[0].public);
    }

    #[test]
    fn loads_json_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "snapshot.JSON",
            r#"{
                "root": ":",
                "projects": [
                    { "path": ":", "name": "demo", "directory": "/work/demo",
                      "tasks": [{ "name": "build", "group": "build" }] }
                ]
            }"#,
        );

        let snapshot = SnapshotLoader::new(&path).load().unwrap();
        let root = snapshot.host.root().unwrap();
        assert_eq!(root.directory(), Path::new("/work/demo"));
        assert_eq!(root.tasks()[0].group.as_deref(), Some("build"));
        assert!(snapshot.types.is_empty());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "snapshot.yaml", "root: ':'");

        let err = SnapshotLoader::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            BuildLensError::Application(ApplicationError::UnsupportedFormat { ref extension })
                if extension == "yaml"
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let err = SnapshotLoader::new(dir.path().join("nope.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildLensError::Application(ApplicationError::SnapshotUnreadable { .. })
        ));
    }

    #[test]
    fn parse_errors_report_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.toml", "[[projects]]\npath = ");

        let err = SnapshotLoader::new(&path).load().unwrap_err();
        match err {
            BuildLensError::Application(ApplicationError::SnapshotInvalid { path: reported, .. }) => {
                assert_eq!(reported, path)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn project_without_directory_uses_path_segments() {
        let snapshot = SnapshotLoader::parse_str(
            r#"
            [[projects]]
            path = ":libs:core"
            name = "core"
            "#,
            SnapshotFormat::Toml,
            Path::new("/w"),
        )
        .unwrap();

        let core = snapshot.host.project(":libs:core").unwrap();
        assert_eq!(core.directory(), Path::new("/w/libs/core"));
        assert_eq!(core.parent_path(), Some(":libs"));
    }

    #[test]
    fn into_assembler_builds_a_model() {
        let snapshot =
            SnapshotLoader::parse_str(SNAPSHOT, SnapshotFormat::Toml, Path::new("/w")).unwrap();

        let model = snapshot.into_assembler().assemble().unwrap();
        assert_eq!(model.root.name, "demo");
        assert_eq!(model.root.children[0].script_classpath, vec!["/w/app/libs/plugin.jar"]);
        assert_eq!(model.root.task_names().collect::<Vec<_>>(), vec!["clean", "run"]);
    }
}
