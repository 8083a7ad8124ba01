//! User-acknowledgment seam.

/// Blocks until the user acknowledges launcher output.
///
/// The launcher pauses after help output and after a toolkit failure so
/// a console window opened just for this run does not vanish before the
/// text can be read. Waiting is infallible by contract: an
/// implementation with no interactive terminal returns immediately,
/// since there is no window to hold open.
pub trait Acknowledge {
    fn wait(&mut self);
}
