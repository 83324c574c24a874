use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A realistic config covering the common section, quoting, comments and
/// several named sections.
pub const SAMPLE: &[u8] = b"# service config
name = sample-app
debug = on
retries = 3

[db]
host = localhost
port = 5432
password = \"s3cret =tricky\"

[db-replica]
host = replica.local

[limits]
ratio = 0.75
burst 128
";

pub fn temp_dir(prefix: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut dir = std::env::temp_dir();
    dir.push(format!("inicfg_{prefix}_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_file(path: &Path, data: &[u8]) {
    std::fs::write(path, data).unwrap();
}
