//! Reading generated indexes the way the site pages do
//!
//! The pages fetch `index.json`, treat an empty array as "nothing yet" and a
//! failed fetch as a hint to the visitor, and lay teachers out per
//! department. Teachers whose department is not one of the configured
//! departments are not shown anywhere.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::config::DepartmentConfig;
use crate::content::{Collation, Teacher};
use crate::error::{Error, Result};

pub const POSTS_EMPTY_HINT: &str = "Поки немає новин.";
pub const POSTS_UNAVAILABLE_HINT: &str =
    "Не вдалося завантажити новини (перевір шлях до content/posts/index.json).";
pub const TEACHERS_EMPTY_HINT: &str = "Поки немає викладачів у цьому відділі.";
pub const TEACHERS_UNAVAILABLE_HINT: &str =
    "Не вдалося завантажити викладачів (перевір шлях до content/teachers/index.json та що build зроблений).";

/// Department used for teachers with a blank department
pub const FALLBACK_DEPARTMENT: &str = "Оркестровий відділ";

/// Load a generated index.
///
/// Any failure is reported as [`Error::IndexUnavailable`]; callers show a
/// hint instead of failing.
pub fn load_index<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let unavailable = |message: String| Error::IndexUnavailable {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| unavailable(e.to_string()))
}

/// Teachers laid out by department
#[derive(Debug, Default)]
pub struct DepartmentGroups<'a> {
    /// Every configured department, in configured order, possibly empty
    pub groups: IndexMap<&'a str, Vec<&'a Teacher>>,
    /// Teachers whose department matched no configured label
    pub dropped: usize,
}

impl<'a> DepartmentGroups<'a> {
    pub fn get(&self, label: &str) -> Option<&[&'a Teacher]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Number of teachers that made it into a group
    pub fn shown(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group `teachers` under the configured `departments`, each group ordered
/// by name.
pub fn group_by_department<'a>(
    teachers: &'a [Teacher],
    departments: &'a [DepartmentConfig],
    collation: &Collation,
) -> DepartmentGroups<'a> {
    let mut groups: IndexMap<&'a str, Vec<&'a Teacher>> = departments
        .iter()
        .map(|d| (d.label.as_str(), Vec::new()))
        .collect();
    let mut dropped = 0;

    for teacher in teachers {
        let label = match teacher.department.trim() {
            "" => FALLBACK_DEPARTMENT,
            label => label,
        };

        match groups.get_mut(label) {
            Some(group) => group.push(teacher),
            None => {
                tracing::debug!(
                    "Teacher {} is in unknown department {:?}, not shown",
                    teacher.slug,
                    teacher.department
                );
                dropped += 1;
            }
        }
    }

    for group in groups.values_mut() {
        group.sort_by(|a, b| collation.compare(&a.name, &b.name));
    }

    DepartmentGroups { groups, dropped }
}
