//! JSON snapshot-backed collection.
//!
//! The whole collection (projects, plans with their suite trees, and work
//! items) lives in one JSON document. Every successful save writes the
//! document back through a temp file and rename, so the file always reflects
//! what has been persisted.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use align_core::entities::{PlanRef, SuiteNode, WorkItem};
use align_core::fields::{AREA_PATH, PlanId, WorkItemId};
use align_core::{AreaPath, StoreError};
use serde::{Deserialize, Serialize};

use crate::collection::{PlanSource, WorkItemStore};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub projects: Vec<ProjectSnapshot>,
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    /// Valid area paths. Empty means any path under the project is accepted.
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub plans: Vec<PlanSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub id: PlanId,
    pub name: String,
    #[serde(default)]
    pub root_suite: SuiteNode,
}

pub struct SnapshotCollection {
    path: PathBuf,
    collection: String,
    projects: Vec<ProjectSnapshot>,
    items: BTreeMap<WorkItemId, WorkItem>,
}

impl SnapshotCollection {
    /// Open and parse the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be read, `StoreError::Snapshot`
    /// if it is not a valid document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = Self::read_document(&path)?;
        let mut collection = Self {
            path,
            collection: String::new(),
            projects: Vec::new(),
            items: BTreeMap::new(),
        };
        collection.load(document);
        tracing::debug!(
            path = %collection.path.display(),
            items = collection.items.len(),
            projects = collection.projects.len(),
            "opened collection snapshot"
        );
        Ok(collection)
    }

    /// Collection name recorded in the snapshot.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(path: &Path) -> Result<SnapshotDocument, StoreError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn load(&mut self, document: SnapshotDocument) {
        self.collection = document.collection;
        self.projects = document.projects;
        self.items = document
            .items
            .into_iter()
            .map(|item| (item.id, item))
            .collect();
    }

    fn document(&self) -> SnapshotDocument {
        SnapshotDocument {
            collection: self.collection.clone(),
            projects: self.projects.clone(),
            items: self.items.values().cloned().collect(),
        }
    }

    fn write_document(&self) -> Result<(), StoreError> {
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(&mut writer, &self.document())?;
        writer.flush()?;
        drop(writer);

        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn plan(&self, plan: PlanId) -> Result<&PlanSnapshot, StoreError> {
        self.projects
            .iter()
            .flat_map(|project| project.plans.iter())
            .find(|entry| entry.id == plan)
            .ok_or(StoreError::PlanNotFound(plan))
    }

    fn validate_area(&self, item: &WorkItem) -> Result<(), StoreError> {
        let path = item.area_path();
        let root = AreaPath::new(path).root();
        let Some(project) = self.projects.iter().find(|project| project.name == root) else {
            return Err(StoreError::Rejected {
                id: item.id,
                reason: format!("area path '{path}' is not under any project in the collection"),
            });
        };

        let known = path == project.name
            || project.areas.is_empty()
            || project.areas.iter().any(|area| area == path);
        if known {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                id: item.id,
                reason: format!(
                    "area path '{path}' does not exist in project '{}'",
                    project.name
                ),
            })
        }
    }
}

impl WorkItemStore for SnapshotCollection {
    fn get_item(&self, id: WorkItemId) -> Result<WorkItem, StoreError> {
        self.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn save_item(&mut self, item: &mut WorkItem) -> Result<(), StoreError> {
        let stored = self.items.get(&item.id).ok_or(StoreError::NotFound(item.id))?;
        if stored.rev != item.rev {
            return Err(StoreError::Conflict {
                id: item.id,
                expected: item.rev,
                actual: stored.rev,
            });
        }
        if stored.field(AREA_PATH) != item.field(AREA_PATH) && !self.projects.is_empty() {
            self.validate_area(item)?;
        }

        let mut updated = item.clone();
        updated.rev += 1;
        let previous = self.items.insert(item.id, updated.clone());

        if let Err(error) = self.write_document() {
            if let Some(previous) = previous {
                self.items.insert(item.id, previous);
            }
            return Err(error);
        }

        item.rev = updated.rev;
        Ok(())
    }
}

impl PlanSource for SnapshotCollection {
    fn plans(&self, project: &str) -> Result<Vec<PlanRef>, StoreError> {
        let Some(project) = self.projects.iter().find(|p| p.name == project) else {
            return Err(StoreError::ProjectNotFound(project.to_string()));
        };

        Ok(project
            .plans
            .iter()
            .map(|plan| PlanRef {
                id: plan.id,
                name: plan.name.clone(),
            })
            .collect())
    }

    fn refresh_plan(&mut self, plan: PlanId) -> Result<(), StoreError> {
        let document = Self::read_document(&self.path)?;
        self.load(document);
        self.plan(plan).map(|_| ())
    }

    fn test_cases(&self, plan: PlanId) -> Result<Vec<WorkItem>, StoreError> {
        let ids = self.plan(plan)?.root_suite.all_test_cases();
        Ok(ids
            .into_iter()
            .filter_map(|id| {
                let item = self.items.get(&id).cloned();
                if item.is_none() {
                    tracing::warn!(plan, id, "suite references a missing test case");
                }
                item
            })
            .collect())
    }
}
