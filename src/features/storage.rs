use std::fs;
use std::path::PathBuf;

#[cfg(test)]
use std::sync::{Mutex, OnceLock};

#[cfg(test)]
pub fn test_env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

const COUNTER_KEY: &str = "counter";
const ONBOARDING_KEY: &str = "onboarding_seen";

pub fn data_dir() -> PathBuf {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(custom) = std::env::var("HUSNA_DATA_DIR") {
        candidates.push(PathBuf::from(custom));
    }
    candidates.push(PathBuf::from("/data/user/0/app.husna/files"));
    candidates.push(PathBuf::from("/data/data/app.husna/files"));

    for dir in candidates {
        if let Ok(meta) = fs::metadata(&dir) {
            if meta.is_dir() {
                return dir;
            }
        }
    }
    std::env::temp_dir()
}

fn key_path(key: &str) -> PathBuf {
    data_dir().join(key)
}

fn write_key(key: &str, value: &str) -> Result<(), String> {
    let path = key_path(key);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("mkdir_failed:{e}"))?;
    }
    fs::write(&path, value).map_err(|e| format!("write_failed:{e}"))
}

fn read_key(key: &str) -> Option<String> {
    fs::read_to_string(key_path(key)).ok()
}

/// Absent or malformed persisted counts are a valid state, not an error.
pub fn read_counter() -> u64 {
    read_key(COUNTER_KEY)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn write_counter(count: u64) -> Result<(), String> {
    write_key(COUNTER_KEY, &count.to_string())
}

pub fn onboarding_seen() -> bool {
    read_key(ONBOARDING_KEY)
        .map(|raw| raw.trim() == "true")
        .unwrap_or(false)
}

pub fn mark_onboarding_seen() -> Result<(), String> {
    write_key(ONBOARDING_KEY, "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn with_temp_dir<T>(f: impl FnOnce() -> T) -> T {
        let _guard = test_env_lock().lock().unwrap();
        let dir = TempDir::new().unwrap();
        std::env::set_var("HUSNA_DATA_DIR", dir.path());
        let out = f();
        std::env::remove_var("HUSNA_DATA_DIR");
        out
    }

    #[test]
    fn counter_round_trips_across_reload() {
        with_temp_dir(|| {
            assert_eq!(read_counter(), 0);
            write_counter(7).unwrap();
            // A fresh read models a process restart against the same store.
            assert_eq!(read_counter(), 7);
        });
    }

    #[test]
    fn malformed_counter_reads_as_zero() {
        with_temp_dir(|| {
            let path = data_dir().join("counter");
            std::fs::write(&path, "not a number").unwrap();
            assert_eq!(read_counter(), 0);
            std::fs::write(&path, "-4").unwrap();
            assert_eq!(read_counter(), 0);
        });
    }

    #[test]
    fn onboarding_flag_is_one_shot() {
        with_temp_dir(|| {
            assert!(!onboarding_seen());
            mark_onboarding_seen().unwrap();
            assert!(onboarding_seen());
        });
    }
}
