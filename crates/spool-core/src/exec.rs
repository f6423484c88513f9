use spool_format::{tokenize_exec_args, CommandFile, ExecArg, ExecuteFile, FileSpec, OutputTarget, ScopedWriter, Send};
use spool_naming::FileKind;

use crate::context::SubmissionContext;
use crate::error::SubmitError;
use crate::grade::resolve_grade;
use crate::job::JobId;
use crate::stage::{stage_bytes, stage_copy};

/// Internal-file mode for staged stdin/input-redirect data, matching
/// `uux.c`'s `IPRIVATE_FILE_MODE` (tighter than the `0666` used for a
/// plain `uucp` transfer since these files are never meant to be read by
/// anyone but the executing command).
const PRIVATE_FILE_MODE: u32 = 0o600;

/// The cover execute-file `S` line uses the same mode an ordinary
/// `uucp` transfer would.
const EXECUTE_COVER_MODE: u32 = 0o666;

/// One `uux`-style request: a command, its already-split arguments, and
/// the mail/status options from §6.
#[derive(Debug, Clone, Default)]
pub struct ExecRequest {
    pub user: String,
    pub peer: String,
    pub cmd: String,
    pub args: Vec<String>,
    pub grade: Option<char>,
    /// `-n`/`--no-ack`: suppress mail on success.
    pub no_ack: bool,
    /// `-z`/`--error-ack`: mail only on error.
    pub error_ack: bool,
    /// `-m`/`--notify`: mail status to this address regardless of
    /// outcome.
    pub notify: Option<String>,
    /// `--status`: write status to this file on the peer instead of
    /// mailing it.
    pub status_file: Option<String>,
    /// `-b`/`--stdin-return`: return the captured stdin file to the
    /// submitter if the command fails.
    pub stdin_return: bool,
    /// Bytes already read from the submitting process's standard input,
    /// present when one of `args` tokenises to a bare `-`. Reading the
    /// process's actual stdin is the CLI layer's job, not this one's.
    pub stdin_data: Option<Vec<u8>>,
}

/// Queues a remote command execution, producing a data file for any
/// staged input, an execute (`X.`) file describing the run, and a command
/// file that ships both to the peer (§4.E, §8 S3/S4/S5).
///
/// # Errors
///
/// See [`SubmitError`].
pub fn submit_exec(ctx: &SubmissionContext, request: ExecRequest) -> Result<JobId, SubmitError> {
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

    let tokens = tokenize_exec_args(&request.args);
    let needs_cover = tokens
        .iter()
        .any(|t| matches!(t, ExecArg::StdinMarker | ExecArg::InputRedirect(_)));

    let kinds = if needs_cover {
        vec![FileKind::Command, FileKind::Data, FileKind::Execute]
    } else {
        vec![FileKind::Command, FileKind::Execute]
    };
    let names = ctx
        .namer
        .mint_job(&host.spool_dir, &host.name, grade, &kinds)?;
    let command_name = names.name(FileKind::Command).expect("requested above");
    let command_path = names.path(FileKind::Command).expect("requested above");
    let execute_name = names.name(FileKind::Execute).expect("requested above");
    let execute_path = names.path(FileKind::Execute).expect("requested above");

    let mut execute_file = ExecuteFile::new(&request.user, &ctx.config.site.local_host);
    let mut command_file = CommandFile::new();
    let mut command_words = vec![request.cmd.clone()];
    let mut cover_claimed = false;

    for token in tokens {
        match token {
            ExecArg::Literal(text) | ExecArg::Word(text) => command_words.push(text),
            ExecArg::StdinMarker => {
                let bytes = request.stdin_data.clone().unwrap_or_default();
                let (data_name, data_path) = if cover_claimed {
                    let extra = ctx
                        .namer
                        .mint_job(&host.spool_dir, &host.name, grade, &[FileKind::Data])?;
                    (
                        extra.name(FileKind::Data).expect("requested above"),
                        extra.path(FileKind::Data).expect("requested above"),
                    )
                } else {
                    (
                        names.name(FileKind::Data).expect("needs_cover ensured Data"),
                        names.path(FileKind::Data).expect("needs_cover ensured Data"),
                    )
                };
                stage_bytes(ctx, &host.spool_dir, &bytes, &data_path)?;
                execute_file.with_file(FileSpec {
                    local_name: data_name.clone(),
                    real_name: None,
                });
                if !cover_claimed {
                    execute_file.with_stdin(data_name.clone());
                    cover_claimed = true;
                }
                command_file.push_send(Send {
                    zfrom: data_name.clone(),
                    zto: data_name.clone(),
                    zuser: request.user.clone(),
                    opts: "C".to_string(),
                    ztemp: data_name,
                    mode: PRIVATE_FILE_MODE,
                    znotify: String::new(),
                });
            }
            ExecArg::InputRedirect(token) => {
                let cwd = std::env::current_dir().map_err(|source| SubmitError::IoFail {
                    path: std::path::PathBuf::from("."),
                    source,
                })?;
                let local_path = spool_paths::resolve_local(
                    &token,
                    &ctx.config.site.public_dir,
                    &cwd,
                    ctx.users.as_ref(),
                )?;

                let (data_name, data_path) = if cover_claimed {
                    let extra = ctx
                        .namer
                        .mint_job(&host.spool_dir, &host.name, grade, &[FileKind::Data])?;
                    (
                        extra.name(FileKind::Data).expect("requested above"),
                        extra.path(FileKind::Data).expect("requested above"),
                    )
                } else {
                    (
                        names.name(FileKind::Data).expect("needs_cover ensured Data"),
                        names.path(FileKind::Data).expect("needs_cover ensured Data"),
                    )
                };
                stage_copy(ctx, &host.spool_dir, &local_path, &data_path)?;
                execute_file.with_file(FileSpec {
                    local_name: data_name.clone(),
                    real_name: None,
                });
                if !cover_claimed {
                    execute_file.with_stdin(data_name.clone());
                    cover_claimed = true;
                }
                command_file.push_send(Send {
                    zfrom: local_path.to_string_lossy().into_owned(),
                    zto: data_name.clone(),
                    zuser: request.user.clone(),
                    opts: "C".to_string(),
                    ztemp: data_name,
                    mode: PRIVATE_FILE_MODE,
                    znotify: String::new(),
                });
            }
            ExecArg::OutputRedirect { target, host: output_host } => {
                execute_file.with_stdout(OutputTarget {
                    local_name: target,
                    host: output_host,
                });
            }
        }
    }

    execute_file.with_command(command_words);
    if request.no_ack {
        execute_file.suppress_success_mail();
    }
    if request.error_ack {
        execute_file.mail_only_on_error();
    }
    if let Some(address) = &request.notify {
        execute_file.with_notify(address.clone());
    }
    if request.stdin_return {
        execute_file.return_stdin_on_error();
    }
    if let Some(status_file) = &request.status_file {
        execute_file.with_status_file(status_file.clone());
    }

    let temp = ctx.mint_temp(&host.spool_dir)?;
    let mut writer = ScopedWriter::create(&temp)?;
    writer.write_all(execute_file.render().as_bytes())?;
    writer.commit(&execute_path)?;

    command_file.push_send(Send {
        zfrom: execute_name.clone(),
        zto: execute_name.clone(),
        zuser: request.user.clone(),
        opts: "C".to_string(),
        ztemp: execute_name,
        mode: EXECUTE_COVER_MODE,
        znotify: String::new(),
    });

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
