use glob::Pattern;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::TaskRunner;
use crate::{error::Result, task::Task};

/// Whether a file-system event should trigger a re-run
pub fn is_relevant(event: &Event, patterns: &[Pattern]) -> bool {
    let changed = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    changed
        && event
            .paths
            .iter()
            .any(|path| patterns.iter().any(|pattern| pattern.matches_path(path)))
}

/// Run `task` once, then again after every relevant change. Returns only when
/// the watcher shuts down.
pub(super) fn watch_and_rerun(
    runner: &TaskRunner,
    paths: &[PathBuf],
    patterns: &[Pattern],
    task: &Task,
    debounce: Duration,
) -> Result<()> {
    if let Err(e) = runner.execute(task) {
        warn!("[{}] initial run failed: {}", task.display_name, e);
    }

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    for path in paths {
        if path.exists() {
            watcher.watch(path, RecursiveMode::Recursive)?;
            debug!("Watching {}", path.display());
        } else {
            warn!("Not watching missing path {}", path.display());
        }
    }
    info!("[{}] waiting for changes", task.display_name);

    while let Ok(event) = rx.recv() {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                warn!("Watch error: {}", e);
                continue;
            }
        };
        if !is_relevant(&event, patterns) {
            continue;
        }

        // Coalesce bursts of events (editors often write several times per save)
        loop {
            match rx.recv_timeout(debounce) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        info!("[{}] change detected in {:?}, re-running", task.display_name, event.paths);
        if let Err(e) = runner.execute(task) {
            warn!("[{}] failed: {}", task.display_name, e);
        }
    }

    Ok(())
}
