use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{LogsFile, Profile, ToolsFile};

/// One data-backed section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Tools,
    Logs,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Profile, Section::Tools, Section::Logs];

    /// File name under the data root
    pub fn file_name(self) -> &'static str {
        match self {
            Section::Profile => "profile.json",
            Section::Tools => "tools.json",
            Section::Logs => "logs.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Tools => "tools",
            Section::Logs => "logs",
        }
    }

    /// Notice shown when the section has no content
    pub fn empty_notice(self) -> &'static str {
        match self {
            Section::Profile => "Profile: no data. Check profile.json.",
            Section::Tools => "Tools: no data. Add an items list to tools.json.",
            Section::Logs => "Learning logs: nothing yet. Add entries to logs.json.",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure reading one section's data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{section}: cannot read {}: {source}", path.display())]
    Io {
        section: Section,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{section}: invalid JSON in {}: {source}", path.display())]
    Json {
        section: Section,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    pub fn section(&self) -> Section {
        match self {
            DataError::Io { section, .. } | DataError::Json { section, .. } => *section,
        }
    }
}

/// Everything the page renders from `public/data`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub profile: Option<Profile>,
    pub tools: ToolsFile,
    pub logs: LogsFile,
}

fn read_section<T: DeserializeOwned>(root: &Path, section: Section) -> Result<T, DataError> {
    let path = root.join(section.file_name());
    let text = fs::read_to_string(&path).map_err(|source| DataError::Io {
        section,
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Json {
        section,
        path,
        source,
    })
}

/// Read and parse `profile.json` alone
pub fn load_profile<P: AsRef<Path>>(root: P) -> Result<Profile, DataError> {
    read_section(root.as_ref(), Section::Profile)
}

impl SiteData {
    /// Load all three files, failing on the first unreadable one
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self, DataError> {
        let root = root.as_ref();
        let data = Self {
            profile: Some(read_section(root, Section::Profile)?),
            tools: read_section(root, Section::Tools)?,
            logs: read_section(root, Section::Logs)?,
        };
        tracing::debug!(
            root = %root.display(),
            tools = data.tools.items.len(),
            logs = data.logs.items.len(),
            "site data loaded"
        );
        Ok(data)
    }

    /// Load whatever is readable; each failed section stays empty and its
    /// error is returned alongside.
    pub fn load_lenient<P: AsRef<Path>>(root: P) -> (Self, Vec<DataError>) {
        let root = root.as_ref();
        let mut data = Self::default();
        let mut errors = Vec::new();

        match read_section(root, Section::Profile) {
            Ok(profile) => data.profile = Some(profile),
            Err(err) => errors.push(err),
        }
        match read_section(root, Section::Tools) {
            Ok(tools) => data.tools = tools,
            Err(err) => errors.push(err),
        }
        match read_section(root, Section::Logs) {
            Ok(logs) => data.logs = logs,
            Err(err) => errors.push(err),
        }

        for err in &errors {
            tracing::warn!(section = %err.section(), error = %err, "section data unavailable");
        }
        (data, errors)
    }

    /// Whether a section has nothing to show
    pub fn is_empty(&self, section: Section) -> bool {
        match section {
            Section::Profile => self.profile.is_none(),
            Section::Tools => self.tools.items.is_empty(),
            Section::Logs => self.logs.items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_files() {
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names, ["profile.json", "tools.json", "logs.json"]);
        assert_eq!(Section::Tools.to_string(), "tools");
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let err = SiteData::load("/nonexistent/site/data").expect_err("no files");
        assert!(matches!(err, DataError::Io { section: Section::Profile, .. }));
        assert!(err.to_string().starts_with("profile: cannot read"));
    }

    #[test]
    fn test_lenient_collects_every_section() {
        let (data, errors) = SiteData::load_lenient("/nonexistent/site/data");
        assert_eq!(errors.len(), 3);
        assert!(Section::ALL.iter().all(|&s| data.is_empty(s)));
        let sections: Vec<Section> = errors.iter().map(DataError::section).collect();
        assert_eq!(sections, Section::ALL);
    }
}
