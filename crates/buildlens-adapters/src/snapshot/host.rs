//! In-memory build host.
//!
//! [`SnapshotHost`] holds fully materialized projects and answers the core's
//! [`BuildHost`] lookups. It is filled either from a parsed snapshot document
//! or directly through the builder methods on [`SnapshotProject`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use buildlens_core::{
    application::{
        ApplicationError,
        ports::{BuildHost, HostProject},
    },
    domain::{
        DeclaredTask, DomainError, ExtensionSchema, HostConfiguration, value_objects::PATH_SEPARATOR,
        task_path,
    },
    error::BuildLensResult,
};

use super::manifest::{ProjectEntry, SnapshotManifest};

const DEFAULT_BUILD_FILE: &str = "build.gradle";

// ── Project ───────────────────────────────────────────────────────────────────

/// One materialized project.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotProject {
    name: String,
    path: String,
    directory: PathBuf,
    parent_path: Option<String>,
    build_file: PathBuf,
    script_classpath: Vec<PathBuf>,
    configurations: Vec<HostConfiguration>,
    plugins: Vec<String>,
    extensions: Vec<ExtensionSchema>,
    tasks: Vec<DeclaredTask>,
    subprojects: Vec<String>,
}

impl SnapshotProject {
    pub fn new(path: impl Into<String>, name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            directory: directory.into(),
            parent_path: None,
            build_file: PathBuf::from(DEFAULT_BUILD_FILE),
            script_classpath: Vec::new(),
            configurations: Vec::new(),
            plugins: Vec::new(),
            extensions: Vec::new(),
            tasks: Vec::new(),
            subprojects: Vec::new(),
        }
    }

    /// Set the parent explicitly. Without it [`SnapshotHost::add_project`]
    /// derives the parent from the project path.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_path = Some(parent.into());
        self
    }

    pub fn with_build_file(mut self, build_file: impl Into<PathBuf>) -> Self {
        self.build_file = build_file.into();
        self
    }

    pub fn with_script_classpath(mut self, entry: impl Into<PathBuf>) -> Self {
        self.script_classpath.push(entry.into());
        self
    }

    pub fn with_configuration(mut self, configuration: HostConfiguration) -> Self {
        self.configurations.push(configuration);
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    pub fn with_extension(mut self, extension: ExtensionSchema) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Declare a task at the conventional path for this project.
    pub fn with_task(mut self, name: impl Into<String>, group: Option<&str>) -> Self {
        let name = name.into();
        self.tasks.push(DeclaredTask {
            path: task_path(&self.path, &name),
            name,
            group: group.map(str::to_string),
            description: None,
        });
        self
    }

    pub fn with_declared_task(mut self, task: DeclaredTask) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_subproject(mut self, path: impl Into<String>) -> Self {
        self.subprojects.push(path.into());
        self
    }

    fn from_entry(entry: &ProjectEntry, base_dir: &Path, parent: Option<&str>) -> BuildLensResult<Self> {
        let directory = match &entry.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base_dir.join(dir),
            None => entry
                .path
                .split(PATH_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .fold(base_dir.to_path_buf(), |dir, segment| dir.join(segment)),
        };

        let configurations = entry
            .configurations
            .iter()
            .map(|c| c.to_host(&entry.path))
            .collect::<BuildLensResult<Vec<_>>>()?;

        let tasks = entry
            .tasks
            .iter()
            .map(|t| DeclaredTask {
                name: t.name.clone(),
                group: t.group.clone(),
                path: t
                    .path
                    .clone()
                    .unwrap_or_else(|| task_path(&entry.path, &t.name)),
                description: t.description.clone(),
            })
            .collect();

        Ok(Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            directory,
            parent_path: parent.map(str::to_string),
            build_file: entry
                .build_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_FILE)),
            script_classpath: entry.script_classpath.clone(),
            configurations,
            plugins: entry.plugins.clone(),
            extensions: entry.extensions.clone(),
            tasks,
            subprojects: entry.subprojects.clone(),
        })
    }
}

impl HostProject for SnapshotProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn directory(&self) -> &Path {
        &self.directory
    }

    fn parent_path(&self) -> Option<&str> {
        self.parent_path.as_deref()
    }

    fn build_file(&self) -> &Path {
        &self.build_file
    }

    fn script_classpath(&self) -> &[PathBuf] {
        &self.script_classpath
    }

    fn configurations(&self) -> &[HostConfiguration] {
        &self.configurations
    }

    fn plugins(&self) -> &[String] {
        &self.plugins
    }

    fn extension_schemas(&self) -> &[ExtensionSchema] {
        &self.extensions
    }

    fn tasks(&self) -> &[DeclaredTask] {
        &self.tasks
    }

    fn subproject_paths(&self) -> &[String] {
        &self.subprojects
    }
}

// ── Host ──────────────────────────────────────────────────────────────────────

/// Project registry keyed by project path.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHost {
    root: String,
    projects: Vec<SnapshotProject>,
    index: HashMap<String, usize>,
}

impl SnapshotHost {
    /// Empty host whose build root will be the project at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Register a project.
    ///
    /// A project without an explicit parent gets one derived from its path,
    /// except the build root, which never has a parent.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidProjectPath`] if the path is not `:` or a
    ///   sequence of non-empty `:segment`s
    /// - [`ApplicationError::DuplicateProject`] if the path is already taken
    pub fn add_project(&mut self, mut project: SnapshotProject) -> BuildLensResult<()> {
        validate_project_path(&project.path)?;
        if self.index.contains_key(&project.path) {
            return Err(ApplicationError::DuplicateProject { path: project.path }.into());
        }

        if project.path == self.root {
            project.parent_path = None;
        } else if project.parent_path.is_none() {
            project.parent_path = Some(parent_of(&project.path));
        }

        self.index.insert(project.path.clone(), self.projects.len());
        self.projects.push(project);
        Ok(())
    }

    pub fn with_project(mut self, project: SnapshotProject) -> BuildLensResult<Self> {
        self.add_project(project)?;
        Ok(self)
    }

    /// Materialize every `[[projects]]` entry of `manifest`.
    ///
    /// Relative directories resolve against `base_dir`. A project listed as
    /// another project's subproject takes that project as its parent.
    #[instrument(skip_all, fields(root = %manifest.root, projects = manifest.projects.len()))]
    pub fn from_manifest(manifest: &SnapshotManifest, base_dir: &Path) -> BuildLensResult<Self> {
        let listed_parents: HashMap<&str, &str> = manifest
            .projects
            .iter()
            .flat_map(|p| p.subprojects.iter().map(move |s| (s.as_str(), p.path.as_str())))
            .collect();

        let mut host = Self::new(manifest.root.clone());
        for entry in &manifest.projects {
            let parent = listed_parents.get(entry.path.as_str()).copied();
            let project = SnapshotProject::from_entry(entry, base_dir, parent)?;
            debug!(path = %project.path, directory = %project.directory.display(), "loaded project");
            host.add_project(project)?;
        }
        Ok(host)
    }

    pub fn root_path(&self) -> &str {
        &self.root
    }

    pub fn projects(&self) -> impl Iterator<Item = &SnapshotProject> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl BuildHost for SnapshotHost {
    fn root(&self) -> Option<&dyn HostProject> {
        self.project(&self.root)
    }

    fn project(&self, path: &str) -> Option<&dyn HostProject> {
        let idx = *self.index.get(path)?;
        self.projects.get(idx).map(|p| p as &dyn HostProject)
    }
}

fn validate_project_path(path: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectPath {
        value: path.to_string(),
        reason: reason.to_string(),
    };

    if path == ":" {
        return Ok(());
    }
    let Some(rest) = path.strip_prefix(PATH_SEPARATOR) else {
        return Err(invalid("must start with ':'"));
    };
    if rest.split(PATH_SEPARATOR).any(str::is_empty) {
        return Err(invalid("contains an empty segment"));
    }
    Ok(())
}

/// `:libs:core` -> `:libs`, `:app` -> `:`.
fn parent_of(path: &str) -> String {
    match path.rfind(PATH_SEPARATOR) {
        Some(0) | None => ":".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}
