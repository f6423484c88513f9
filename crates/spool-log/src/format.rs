/// The three on-disk logging dialects this sink supports (§4.F).
///
/// Selected once at config load and threaded through every render call;
/// never baked into a call site, per the design note in §9 ("format is a
/// policy choice, not baked into the call sites").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// The original package's own format: `prog system user (ts [id])`.
    Taylor,
    /// Version 2 UUCP compatible format: `user system (ts)`.
    V2,
    /// HoneyDanBer/BNU compatible format: `user system (ts) [,id,seq]`.
    Hdb,
}
