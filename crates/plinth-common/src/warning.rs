//! Layout warnings with colored terminal output.
//!
//! Provides deduplication so a layout pass that runs once per frame does not
//! repeat the same warning every frame. Used by the block layout core to
//! report inputs that are legal but collapse content to nothing.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a suspicious layout input (prints once per unique message)
///
/// # Example
/// ```
/// use plinth_common::warning::{has_warned, warn_once};
///
/// warn_once("insets", "relative left + right exceed 100% of the width");
/// assert!(has_warned("insets", "relative left + right exceed 100% of the width"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Plinth {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already recorded this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before laying out a new chart)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
