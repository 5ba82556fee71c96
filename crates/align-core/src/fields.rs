//! Field reference names and well-known constants.

/// Comment prefix the copy tool writes on every link it creates between a
/// copied item and its source.
pub const MIGRATION_MARKER: &str = "TF237027";

/// Separator between area path segments.
pub const AREA_DELIMITER: char = '\\';

pub const TITLE: &str = "System.Title";
pub const HISTORY: &str = "System.History";
pub const DESCRIPTION: &str = "System.Description";
pub const AREA_PATH: &str = "System.AreaPath";

/// Work item identifier as issued by the store.
pub type WorkItemId = u32;

/// Test plan identifier.
pub type PlanId = i64;
