//! Test harness for flattener integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub use flattener::test_utils::TestTree;

pub fn flattener_cmd() -> Command {
    Command::cargo_bin("flattener").expect("binary should be built")
}

/// Run the binary on `dir` with an output file in a separate temp dir.
///
/// Returns (document, stderr, success). The document is empty if the run
/// did not produce one.
pub fn run_flattener(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let out_dir = TempDir::new().expect("Failed to create output dir");
    let output_path = out_dir.path().join("flat.txt");

    let output = flattener_cmd()
        .arg(dir)
        .arg("--output")
        .arg(&output_path)
        .args(args)
        .output()
        .expect("Failed to run flattener");

    let document = fs::read_to_string(&output_path).unwrap_or_default();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (document, stderr, output.status.success())
}

/// Contents of every FILE block in document order, keyed by path.
pub fn file_blocks(document: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut rest = document;
    while let Some(start) = rest.find("\n--- FILE: ") {
        let after = &rest[start + "\n--- FILE: ".len()..];
        let header_end = after.find(" ---\n").expect("unterminated file header");
        let path = after[..header_end].to_string();
        let body = &after[header_end + " ---\n".len()..];
        let end = body
            .find("\n--- END OF FILE ---\n")
            .expect("missing END OF FILE marker");
        blocks.push((path, body[..end].to_string()));
        rest = &body[end..];
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_file_blocks_parsing() {
        let doc = "head\n\n--- FILE: /a.txt ---\none\n--- END OF FILE ---\n\n\n--- FILE: /b.txt ---\n\n--- END OF FILE ---\n\n";
        assert_eq!(
            file_blocks(doc),
            vec![
                ("/a.txt".to_string(), "one".to_string()),
                ("/b.txt".to_string(), String::new()),
            ]
        );
    }
}
