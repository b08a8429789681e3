use std::future::Future;

/// Runs a page flow in the background without awaiting it.
#[cfg(all(target_arch = "wasm32", feature = "wasm-web"))]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(all(target_arch = "wasm32", not(feature = "wasm-web")))]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    drop(future);
    log::error!("background tasks on wasm32 require the `wasm-web` feature");
}

/// Runs a page flow in the background without awaiting it.
///
/// Uses the ambient tokio runtime when there is one, otherwise drives the future to completion
/// on a dedicated thread with its own current-thread runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    use tokio::runtime::{Builder, Handle};

    if let Ok(handle) = Handle::try_current() {
        handle.spawn(future);
        return;
    }

    std::thread::spawn(move || match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(future),
        Err(err) => log::error!("failed to build background tokio runtime: {err}"),
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn runs_without_ambient_runtime() {
        let (sender, receiver) = mpsc::channel();
        spawn_detached(async move {
            let _ = sender.send(42);
        });
        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok(42));
    }
}
