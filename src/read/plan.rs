//! Extraction planning: collision-aware destination assignment.
//!
//! Archives routinely contain several members with the same filename (two
//! translation units both named `foo.o`, contributed by different
//! libraries). Extracting naively into one directory silently overwrites
//! one with the other and corrupts the link that consumes the output.
//!
//! The plan resolves collisions by *directory* disambiguation, never by
//! renaming: downstream consumers expect the original member filename to
//! be preserved exactly, so only the containing path may vary. The first
//! occurrence of each name goes directly into the destination root; every
//! later occurrence gets a fresh numbered subdirectory that is never
//! reused within the extraction.
//!
//! Planning is strictly sequential over archive order and completes before
//! any file is written; the directory assigned to member *k* depends on
//! all same-named members at earlier positions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::member::ArchiveMember;

/// Prefix of the numbered subdirectories allocated for duplicates.
const DUP_DIR_PREFIX: &str = "dup.";

/// Destination assignment for one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAssignment {
    /// Position of the member in archive order.
    pub index: usize,
    /// The member's filename (unchanged from the archive).
    pub name: String,
    /// Assigned path relative to the destination root.
    ///
    /// The final component is always `name`; duplicates differ in the
    /// directory component only.
    pub relative_path: PathBuf,
}

/// A computed mapping from member positions to destination paths.
///
/// The plan guarantees that no two members are assigned the same path,
/// including members that share a filename. Members with distinct names
/// may share a directory.
#[derive(Debug, Clone)]
pub struct ExtractionPlan {
    assignments: Vec<MemberAssignment>,
}

impl ExtractionPlan {
    /// Computes the plan for a member sequence.
    ///
    /// The occurrence-count state is local to this call; repeated
    /// invocations over the same sequence yield identical plans.
    pub fn new(members: &[ArchiveMember]) -> Self {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        // Monotonic across all names so a directory handed to one
        // duplicate is never reassigned to another.
        let mut next_dup_dir = 0usize;

        let assignments = members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let occurrence = seen.entry(member.name.as_str()).or_insert(0);
                *occurrence += 1;
                let relative_path = if *occurrence == 1 {
                    PathBuf::from(&member.name)
                } else {
                    next_dup_dir += 1;
                    log::debug!(
                        "member '{}' (index {}) collides, assigned {}{}",
                        member.name,
                        index,
                        DUP_DIR_PREFIX,
                        next_dup_dir
                    );
                    PathBuf::from(format!("{}{}", DUP_DIR_PREFIX, next_dup_dir)).join(&member.name)
                };
                MemberAssignment {
                    index,
                    name: member.name.clone(),
                    relative_path,
                }
            })
            .collect();

        Self { assignments }
    }

    /// Returns the assignments in archive order.
    pub fn assignments(&self) -> &[MemberAssignment] {
        &self.assignments
    }

    /// Returns the number of planned members.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if the plan covers no members.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Resolves an assignment against a destination root.
    pub fn destination(&self, root: &Path, assignment: &MemberAssignment) -> PathBuf {
        root.join(&assignment.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_members(names: &[&str]) -> Vec<ArchiveMember> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| ArchiveMember {
                name: name.to_string(),
                offset: 8 + index as u64 * 60,
                size: 0,
                data: Vec::new(),
                mtime: None,
                uid: None,
                gid: None,
                mode: None,
                index,
            })
            .collect()
    }

    fn planned_paths(names: &[&str]) -> Vec<PathBuf> {
        let members = make_members(names);
        ExtractionPlan::new(&members)
            .assignments()
            .iter()
            .map(|a| a.relative_path.clone())
            .collect()
    }

    #[test]
    fn test_unique_names_land_in_root() {
        let paths = planned_paths(&["a.o", "b.o", "c.o"]);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.o"),
                PathBuf::from("b.o"),
                PathBuf::from("c.o")
            ]
        );
    }

    #[test]
    fn test_duplicate_gets_fresh_directory() {
        let paths = planned_paths(&["foo.o", "foo.o"]);
        assert_eq!(paths[0], PathBuf::from("foo.o"));
        assert_eq!(paths[1], PathBuf::from("dup.1/foo.o"));
    }

    #[test]
    fn test_three_duplicates_never_share_a_directory() {
        let paths = planned_paths(&["foo.o", "foo.o", "foo.o"]);
        assert_eq!(paths[0], PathBuf::from("foo.o"));
        assert_eq!(paths[1], PathBuf::from("dup.1/foo.o"));
        assert_eq!(paths[2], PathBuf::from("dup.2/foo.o"));
    }

    #[test]
    fn test_interleaved_duplicates_do_not_reuse_directories() {
        // Two colliding names; the counter is global so no dup dir is
        // handed out twice even across different names
        let paths = planned_paths(&["foo.o", "bar.o", "foo.o", "bar.o", "foo.o"]);
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
        assert_eq!(paths[2], PathBuf::from("dup.1/foo.o"));
        assert_eq!(paths[3], PathBuf::from("dup.2/bar.o"));
        assert_eq!(paths[4], PathBuf::from("dup.3/foo.o"));
    }

    #[test]
    fn test_filename_component_is_preserved() {
        let members = make_members(&["x.o", "x.o"]);
        let plan = ExtractionPlan::new(&members);
        for assignment in plan.assignments() {
            assert_eq!(
                assignment.relative_path.file_name().unwrap().to_str(),
                Some(assignment.name.as_str())
            );
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let names = &["a.o", "foo.o", "foo.o", "b.o", "foo.o"];
        assert_eq!(planned_paths(names), planned_paths(names));
    }

    #[test]
    fn test_empty_plan() {
        let plan = ExtractionPlan::new(&[]);
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_destination_joins_root() {
        let members = make_members(&["foo.o", "foo.o"]);
        let plan = ExtractionPlan::new(&members);
        let root = Path::new("/out");
        assert_eq!(
            plan.destination(root, &plan.assignments()[1]),
            PathBuf::from("/out/dup.1/foo.o")
        );
    }
}
