use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use quickpane::kernel::services::adapters::{
    load_settings, AppMessage, AsyncRuntime, LocalFileProvider,
};
use quickpane::kernel::{Action, AppState, DispatchResult, Store};

mod logging;

const MESSAGE_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(root) = args.next() else {
        eprintln!("usage: quickpane <workspace-root> [query...]");
        std::process::exit(2);
    };
    let query = args.collect::<Vec<_>>().join(" ");

    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let root = std::fs::canonicalize(PathBuf::from(&root))?;
    let (tx, rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(tx, Arc::new(LocalFileProvider::new()))?;
    let mut store = Store::new(AppState::new(root, load_settings()));

    if query.trim().is_empty() {
        let result = store.dispatch(Action::IndexWorkspace);
        run_until_idle(&mut store, &runtime, &rx, result)?;
        println!("{} files indexed", store.state().file_search.index().len());
        return Ok(());
    }

    let now = Instant::now();
    store.dispatch(Action::FileSearchOpen);
    store.dispatch(Action::FileSearchSetQuery { query, now });
    let debounce = store.state().search_dialog.debounce();
    let result = store.dispatch(Action::Tick {
        now: now + debounce,
    });
    run_until_idle(&mut store, &runtime, &rx, result)?;

    let dialog = &store.state().search_dialog;
    if let Some(error) = dialog.error() {
        eprintln!("{error}");
        std::process::exit(1);
    }
    for result in dialog.results() {
        println!("{}  {}", result.match_score, result.relative_path);
    }
    Ok(())
}

fn is_idle(store: &Store) -> bool {
    let state = store.state();
    !state.file_search.is_indexing()
        && state.pending_search.is_none()
        && !state.search_dialog.is_loading()
}

/// Feeds effects to the runtime and runtime messages back to the store
/// until nothing is in flight.
fn run_until_idle(
    store: &mut Store,
    runtime: &AsyncRuntime,
    rx: &Receiver<AppMessage>,
    first: DispatchResult,
) -> io::Result<()> {
    let mut effects = first.effects;
    loop {
        for effect in effects.drain(..) {
            if let Some(host) = runtime.handle(effect) {
                tracing::debug!(effect = ?host, "host effect ignored");
            }
        }
        if is_idle(store) {
            return Ok(());
        }

        let msg = match rx.recv_timeout(MESSAGE_TIMEOUT) {
            Ok(msg) => msg,
            Err(RecvTimeoutError::Timeout) => {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "runtime timed out"));
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "runtime channel closed",
                ));
            }
        };
        if let Some(action) = msg.into_action() {
            effects = store.dispatch(action).effects;
        }
    }
}
