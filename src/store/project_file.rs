// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::export::export_nodes;
use super::records::{nodes_from_records, records_from_nodes, NodeRecord};
use crate::layout::GridConfig;
use crate::model::{GridError, IdError, ScenarioNode};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    InvalidGrid {
        node_id: String,
        field: &'static str,
        source: GridError,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::InvalidGrid {
                node_id,
                field,
                source,
            } => write!(f, "invalid {field} on node {node_id:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidGrid { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place. No fsync.
    #[default]
    BestEffort,

    /// Also flushes the file contents and the rename to stable storage where the platform
    /// allows it.
    Durable,
}

/// A project file: one JSON array of node records.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl ProjectFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load_nodes(&self) -> Result<Vec<ScenarioNode>, StoreError> {
        let records: Vec<NodeRecord> = read_json(&self.path)?;
        let nodes = nodes_from_records(records)?;
        debug!(path = %self.path.display(), count = nodes.len(), "loaded project file");
        Ok(nodes)
    }

    /// Loads the node set, or an empty one when the file does not exist yet.
    pub fn load_or_init_nodes(&self) -> Result<Vec<ScenarioNode>, StoreError> {
        match fs::metadata(&self.path) {
            Ok(_) => self.load_nodes(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn save_nodes(&self, nodes: &[ScenarioNode]) -> Result<(), StoreError> {
        let contents = to_json_bytes(&self.path, &records_from_nodes(nodes))?;
        write_atomic(&self.path, &contents, self.durability)?;
        debug!(path = %self.path.display(), count = nodes.len(), "saved project file");
        Ok(())
    }

    /// Writes the export projection of `nodes` to `path`, with this file's durability.
    pub fn save_export(&self, path: &Path, nodes: &[ScenarioNode]) -> Result<(), StoreError> {
        let contents = to_json_bytes(path, &export_nodes(nodes))?;
        write_atomic(path, &contents, self.durability)
    }
}

/// Reads a [`GridConfig`]; absent fields keep their defaults.
pub fn load_grid_config(path: impl AsRef<Path>) -> Result<GridConfig, StoreError> {
    read_json(path.as_ref())
}

// Extracted filesystem helpers for `ProjectFile`.
include!("project_file/helpers.rs");
