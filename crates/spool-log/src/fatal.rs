use std::sync::atomic::{AtomicBool, Ordering};

static ABORTING: AtomicBool = AtomicBool::new(false);

/// Marks that the process is aborting because of a `LOG_FATAL` event, so a
/// signal handler can distinguish this self-induced abort from an external
/// one (§7, §9).
pub fn aborting() {
    ABORTING.store(true, Ordering::SeqCst);
}

/// Reports whether [`aborting`] has been called.
#[must_use]
pub fn is_aborting() -> bool {
    ABORTING.load(Ordering::SeqCst)
}
