//! Process-wide configuration.
//!
//! The only option is the repetition cap: the number of repeats an unbounded
//! [`Repeat`](crate::Repeat) (`*`, `+`, `{n,}`) is counted up to when
//! computing cardinalities and indexing.
//!
//! The cap is fixed the first time it is read. Set it explicitly with
//! [`set_max_repeat`] before building any output, or through the
//! `REGEX_EXPLODE_MAX_REPEAT` environment variable.
use crate::{Error, Result};
use std::sync::OnceLock;

/// The cap used when nothing else is configured.
pub const DEFAULT_MAX_REPEAT: usize = 5;

/// Environment variable consulted on first read of the cap.
pub const MAX_REPEAT_ENV: &str = "REGEX_EXPLODE_MAX_REPEAT";

static MAX_REPEAT: OnceLock<usize> = OnceLock::new();

/// Fix the repetition cap to `n`.
///
/// Fails if the cap was already set, or already read by an unbounded repeat.
pub fn set_max_repeat(n: usize) -> Result<()> {
    MAX_REPEAT.set(n).map_err(|_| Error::MaxRepeatAlreadySet {
        current: max_repeat(),
    })?;
    log::debug!("max repeat set to {n}");
    Ok(())
}

/// The repetition cap for unbounded repeats.
pub fn max_repeat() -> usize {
    *MAX_REPEAT.get_or_init(|| {
        let value = std::env::var(MAX_REPEAT_ENV).ok();
        let cap = parse_max_repeat(value.as_deref());
        log::debug!("max repeat resolved to {cap}");
        cap
    })
}

fn parse_max_repeat(value: Option<&str>) -> usize {
    let Some(value) = value else {
        return DEFAULT_MAX_REPEAT;
    };

    match value.trim().parse() {
        Ok(cap) => cap,
        Err(e) => {
            log::warn!(
                "ignoring {MAX_REPEAT_ENV}={value:?} ({e}), using {DEFAULT_MAX_REPEAT}"
            );
            DEFAULT_MAX_REPEAT
        }
    }
}
