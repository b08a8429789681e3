use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::platform::environment::{DEFAULTS_PATH_VARIABLE, DEFAULTS_VARIABLE};

static ENV_LOCK: Mutex<()> = Mutex::new(());
static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Holds the process-wide environment for one test and clears the bootstrap variables on entry
/// and on drop.
pub struct DefaultsEnv {
    _guard: MutexGuard<'static, ()>,
    files: Vec<PathBuf>,
}

impl DefaultsEnv {
    pub fn acquire() -> Self {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_variables();
        Self {
            _guard: guard,
            files: Vec::new(),
        }
    }

    pub fn set_inline(&self, raw: &str) {
        env::set_var(DEFAULTS_VARIABLE, raw);
    }

    pub fn set_path(&self, path: &str) {
        env::set_var(DEFAULTS_PATH_VARIABLE, path);
    }

    /// Writes `content` to a fresh temp file and points the path variable at it.
    pub fn set_file(&mut self, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!(
            "web_login_demo_defaults_{}_{}.json",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            FILE_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        fs::write(&path, content).unwrap();
        self.set_path(&path.to_string_lossy());
        self.files.push(path.clone());
        path
    }
}

impl Drop for DefaultsEnv {
    fn drop(&mut self) {
        clear_variables();
        for path in &self.files {
            let _ = fs::remove_file(path);
        }
    }
}

fn clear_variables() {
    env::remove_var(DEFAULTS_VARIABLE);
    env::remove_var(DEFAULTS_PATH_VARIABLE);
}
