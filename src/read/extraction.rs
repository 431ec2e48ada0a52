//! Writing planned members to disk.

use std::fs;
use std::path::Path;

use crate::member::ArchiveMember;
use crate::read::info::{ExtractResult, ExtractedMember};
use crate::read::options::ExtractOptions;
use crate::read::plan::ExtractionPlan;
use crate::{Error, Result};

/// Writes every planned member under the destination root.
///
/// Directories are created as needed and reused if they already exist.
/// Members are written strictly in archive order. Nothing written is ever
/// rolled back: on an abort-mode failure, files already on disk remain.
pub(crate) fn extract_members(
    members: &[ArchiveMember],
    plan: &ExtractionPlan,
    root: &Path,
    options: &ExtractOptions,
) -> Result<ExtractResult> {
    fs::create_dir_all(root).map_err(|source| Error::DirectoryCreateFailed {
        path: root.to_path_buf(),
        source,
    })?;

    let mut result = ExtractResult::default();

    for assignment in plan.assignments() {
        let member = &members[assignment.index];
        let dest = plan.destination(root, assignment);

        match write_member(member, &dest) {
            Ok(()) => {
                result.members_extracted += 1;
                result.bytes_extracted += member.size;
                result.extracted.push(ExtractedMember {
                    index: assignment.index,
                    name: assignment.name.clone(),
                    path: dest,
                    size: member.size,
                });
            }
            Err(err) if options.failure_policy.is_abort() => return Err(err),
            Err(err) => {
                log::warn!("continuing past failed member: {}", err);
                result.members_failed += 1;
                result.failures.push((member.name.clone(), err.to_string()));
            }
        }
    }

    Ok(result)
}

fn write_member(member: &ArchiveMember, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreateFailed {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(dest, &member.data).map_err(|source| Error::WriteFailed {
        member: member.name.clone(),
        path: dest.to_path_buf(),
        source,
    })
}
