//! Deferred side effects.
//!
//! Mapping stages never touch the filesystem. External actions are
//! described as values, accumulated in production order, and executed
//! later by an external collaborator. Ordering is preserved end to end;
//! whether a deletion may precede a write it depends on is the
//! executor's concern, not this crate's.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A deferred external action produced by a mapping stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SideEffectDescriptor {
    /// Create, overwrite, or remove a file
    File(FileDescriptor),

    /// Run an external command
    Command(CommandDescriptor),
}

impl SideEffectDescriptor {
    /// Describe a file write.
    pub fn file_write(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        SideEffectDescriptor::File(FileDescriptor {
            path: path.into(),
            contents: Some(contents.into()),
            state: FileState::Present,
        })
    }

    /// Describe a file deletion.
    pub fn file_deletion(path: impl Into<PathBuf>) -> Self {
        SideEffectDescriptor::File(FileDescriptor {
            path: path.into(),
            contents: None,
            state: FileState::Absent,
        })
    }

    /// Describe an external command invocation.
    pub fn command(components: Vec<String>) -> Self {
        SideEffectDescriptor::Command(CommandDescriptor { components })
    }
}

/// Desired end state of a file after the effect is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileState {
    Present,
    Absent,
}

/// A deferred file write or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Path the effect applies to
    pub path: PathBuf,

    /// Contents to write; `None` for deletions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<u8>>,

    /// Desired end state
    pub state: FileState,
}

/// A deferred command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Program and arguments
    pub components: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_write_descriptor() {
        let effect = SideEffectDescriptor::file_write("/ws/out.plist", "contents");

        match effect {
            SideEffectDescriptor::File(file) => {
                assert_eq!(file.path, PathBuf::from("/ws/out.plist"));
                assert_eq!(file.contents.as_deref(), Some(b"contents".as_slice()));
                assert_eq!(file.state, FileState::Present);
            }
            other => panic!("expected file effect, got {other:?}"),
        }
    }

    #[test]
    fn test_file_deletion_has_no_contents() {
        let effect = SideEffectDescriptor::file_deletion("/ws/Derived");

        match effect {
            SideEffectDescriptor::File(file) => {
                assert_eq!(file.contents, None);
                assert_eq!(file.state, FileState::Absent);
            }
            other => panic!("expected file effect, got {other:?}"),
        }
    }

    #[test]
    fn test_serialization_is_tagged() {
        let effect = SideEffectDescriptor::command(vec!["touch".to_string(), "a".to_string()]);
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("\"type\":\"command\""));

        let deserialized: SideEffectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, effect);
    }
}
