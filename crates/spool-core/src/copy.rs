use std::path::PathBuf;

use spool_format::{CommandFile, Receive, ScopedWriter, Send};
use spool_naming::FileKind;

use crate::context::SubmissionContext;
use crate::error::SubmitError;
use crate::grade::resolve_grade;
use crate::job::JobId;
use crate::stage::stage_copy;

/// Which way a file moves relative to the submitting host (§4.D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDirection {
    /// A local file travels to the peer (`uucp source host!dest`).
    Out,
    /// A peer's file travels to this host (`uucp host!source dest`).
    In,
}

/// One `uucp`-style request, already split into its local token, peer, and
/// remote token (§6).
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub user: String,
    pub peer: String,
    pub local_token: String,
    pub remote_token: String,
    pub direction: CopyDirection,
    pub grade: Option<char>,
    /// `-C`: stage the source into the spool directory immediately rather
    /// than reading it again when the transfer actually runs (§8 S2).
    pub force_copy: bool,
    pub notify: Option<String>,
}

/// Queues a copy request, producing one command file under the peer's
/// spool directory (§4.D, §8 S1/S2).
///
/// # Errors
///
/// See [`SubmitError`]; most commonly [`SubmitError::UnknownHost`] for an
/// unlisted peer or [`SubmitError::UnknownUser`] for an unresolvable
/// `~user` token.
pub fn submit_copy(ctx: &SubmissionContext, request: CopyRequest) -> Result<JobId, SubmitError> {
    let host = ctx.config.host(&request.peer)?;
    let (grade, substituted) = resolve_grade(request.grade, host.default_grade)?;
    if substituted {
        ctx.log_queued(
            &host.name,
            &request.user,
            format!("illegal grade requested, using default {grade}"),
        );
    }

    let lock_name = spool_lock::peer_lock_name(&host.name);
    let _lock = ctx
        .locks
        .acquire(&lock_name)?
        .ok_or_else(|| SubmitError::LockBusy(lock_name.clone()))?;

    ctx.ensure_dir(&host.spool_dir)?;
    let cwd = std::env::current_dir().map_err(|source| SubmitError::IoFail {
        path: PathBuf::from("."),
        source,
    })?;
    let mode = ctx.config.site.default_mode()?;

    let mut command_file = CommandFile::new();
    match request.direction {
        CopyDirection::Out => {
            let local_path = spool_paths::resolve_local(
                &request.local_token,
                &ctx.config.site.public_dir,
                &cwd,
                ctx.users.as_ref(),
            )?;

            let (zto, ztemp, opts) = if request.force_copy {
                let data = ctx
                    .namer
                    .mint_job(&host.spool_dir, &host.name, grade, &[FileKind::Data])?;
                let data_name = data.name(FileKind::Data).expect("requested above");
                let data_path = data.path(FileKind::Data).expect("requested above");
                stage_copy(ctx, &host.spool_dir, &local_path, &data_path)?;
                (data_name.clone(), data_name, "C".to_string())
            } else {
                let remote_path = spool_paths::resolve_remote(
                    &request.remote_token,
                    &host.public_dir,
                    ctx.users.as_ref(),
                )?;
                (remote_path.to_string_lossy().into_owned(), "D.0".to_string(), "c".to_string())
            };

            command_file.push_send(Send {
                zfrom: local_path.to_string_lossy().into_owned(),
                zto,
                zuser: request.user.clone(),
                opts,
                ztemp,
                mode,
                znotify: request.notify.clone().unwrap_or_default(),
            });
        }
        CopyDirection::In => {
            let remote_path = spool_paths::resolve_remote(
                &request.remote_token,
                &host.public_dir,
                ctx.users.as_ref(),
            )?;
            let local_path = spool_paths::resolve_local(
                &request.local_token,
                &ctx.config.site.public_dir,
                &cwd,
                ctx.users.as_ref(),
            )?;
            command_file.push_receive(Receive {
                zfrom: remote_path.to_string_lossy().into_owned(),
                zto: local_path.to_string_lossy().into_owned(),
                zuser: request.user.clone(),
                opts: String::new(),
            });
        }
    }

    let names = ctx
        .namer
        .mint_job(&host.spool_dir, &host.name, grade, &[FileKind::Command])?;
    let command_name = names.name(FileKind::Command).expect("requested above");
    let command_path = names.path(FileKind::Command).expect("requested above");

    let temp = ctx.mint_temp(&host.spool_dir)?;
    let mut writer = ScopedWriter::create(&temp)?;
    writer.write_all(command_file.render().as_bytes())?;
    writer.commit(&command_path)?;

    ctx.log_queued(&host.name, &request.user, format!("queued {command_name}"));
    Ok(JobId {
        command_file: command_name,
        peer: host.name,
    })
}
