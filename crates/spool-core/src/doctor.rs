use spool_lock::peer_lock_name;
use spool_naming::Grade;

use crate::context::SubmissionContext;

/// Severity of one [`DoctorFinding`], mirroring the original `uuchk`
/// checker's distinction between a note worth mentioning and a
/// misconfiguration that will break transfers (`uuchk.c`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One line of a [`DoctorReport`].
#[derive(Debug, Clone)]
pub struct DoctorFinding {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

/// The result of running [`check`]: every finding, in the order checks
/// were performed.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub findings: Vec<DoctorFinding>,
}

impl DoctorReport {
    /// Whether any finding is [`Severity::Error`].
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        !self.findings.iter().any(|f| f.severity == Severity::Error)
    }
}

/// Validates the site configuration and host table the way `uuchk`
/// validates `Permissions`/`Systems`/`Devices`: that the directories the
/// rest of this repository assumes exist actually do, that every grade is
/// legal, and that every peer lock is reported.
#[must_use]
pub fn check(ctx: &SubmissionContext) -> DoctorReport {
    let mut report = DoctorReport::default();
    let site = &ctx.config.site;

    for (label, dir) in [
        ("spool_root", &site.spool_root),
        ("lock_dir", &site.lock_dir),
        ("public_dir", &site.public_dir),
    ] {
        if !dir.is_dir() {
            report.findings.push(DoctorFinding {
                severity: Severity::Error,
                subject: label.to_string(),
                message: format!("{} does not exist or is not a directory", dir.display()),
            });
        }
    }

    if site.default_mode().is_err() {
        report.findings.push(DoctorFinding {
            severity: Severity::Error,
            subject: "default_mode".to_string(),
            message: format!("{:?} is not a valid octal mode", site.default_mode),
        });
    }

    if Grade::parse(site.default_grade).is_err() {
        report.findings.push(DoctorFinding {
            severity: Severity::Error,
            subject: "default_grade".to_string(),
            message: format!("{:?} is not a legal grade character", site.default_grade),
        });
    }

    for name in ctx.config.known_hosts() {
        let Ok(host) = ctx.config.host(name) else {
            continue;
        };

        if !host.spool_dir.is_dir() {
            report.findings.push(DoctorFinding {
                severity: Severity::Warning,
                subject: name.to_string(),
                message: format!("spool directory {} does not exist yet", host.spool_dir.display()),
            });
        }
        if Grade::parse(host.default_grade).is_err() {
            report.findings.push(DoctorFinding {
                severity: Severity::Error,
                subject: name.to_string(),
                message: format!("default grade {:?} is not legal", host.default_grade),
            });
        }

        let lock_name = peer_lock_name(name);
        match ctx.locks.is_locked(&lock_name) {
            Ok(true) => report.findings.push(DoctorFinding {
                severity: Severity::Info,
                subject: name.to_string(),
                message: format!("{lock_name} is currently held"),
            }),
            Ok(false) => {}
            Err(err) => report.findings.push(DoctorFinding {
                severity: Severity::Warning,
                subject: name.to_string(),
                message: format!("could not check {lock_name}: {err}"),
            }),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SystemTable;

    fn table(spool_root: &std::path::Path) -> SystemTable {
        let text = format!(
            "[site]\nspool_root = {root:?}\nlock_dir = {root:?}\npublic_dir = {root:?}\nlocal_host = \"here\"\ndefault_grade = \"n\"\n\n[hosts.there]\n",
            root = spool_root,
        );
        SystemTable::parse(&text).unwrap()
    }

    #[test]
    fn healthy_site_reports_no_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("there")).unwrap();
        let ctx = SubmissionContext::new(table(dir.path()), "uucheck");
        let report = check(&ctx);
        assert!(report.is_healthy());
    }

    #[test]
    fn missing_spool_root_is_an_error() {
        let ctx = SubmissionContext::new(table(std::path::Path::new("/no/such/dir")), "uucheck");
        let report = check(&ctx);
        assert!(!report.is_healthy());
    }
}
