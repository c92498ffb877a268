#![allow(dead_code)]

pub mod command;
pub mod file;

use std::io::Write;
use std::sync::{Arc, Mutex};

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Cloneable in-memory writer for driving `Repository` directly
///
/// Every clone shares the same buffer, so a test can hand one clone to the
/// repository and keep another to read the captured output.
#[derive(Debug, Clone, Default)]
pub struct MemWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemWriter {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap().clear();
    }
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
