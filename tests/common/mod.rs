use std::io::Write;
use tempfile::NamedTempFile;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write `lines`, each followed by `\n`, to a fresh temp file.
pub fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    raw_file(content.as_bytes())
}

pub fn raw_file(bytes: &[u8]) -> NamedTempFile {
    init_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
