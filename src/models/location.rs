//! Location model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical work site where shifts occur.
///
/// Referenced by schedules (via the schedule key) and by employee
/// location lists. Deletion is refused while any schedule references the
/// location; on success the id is removed from employee location lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier for the location.
    pub id: String,
    /// Display name of the site.
    pub name: String,
    /// Street address of the site.
    pub address: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
