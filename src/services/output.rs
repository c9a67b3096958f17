//! Output stage: formatted blocks -> single flat-text artifact.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::services::ServiceResult;

/// Fixed delimiter written after every product block.
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Destination of the generated artifact.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Concatenates the formatted blocks into one document.
pub fn build_document(blocks: &[String]) -> String {
    let mut document = String::new();
    for block in blocks {
        document.push_str(block);
        document.push_str(BLOCK_SEPARATOR);
    }
    document
}

/// Writes the assembled document to the target, creating parent directories
/// for file destinations.
pub fn generate(blocks: &[String], target: &OutputTarget) -> ServiceResult<()> {
    let document = build_document(blocks);

    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, document)?;
            log::info!("Wrote output artifact to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_blocks_with_the_fixed_delimiter() {
        let blocks = vec!["Product: A".to_string(), "Product: B".to_string()];

        assert_eq!(
            build_document(&blocks),
            "Product: A\n\n---\n\nProduct: B\n\n---\n\n"
        );
    }

    #[test]
    fn an_empty_catalog_yields_an_empty_document() {
        assert_eq!(build_document(&[]), "");
    }

    #[test]
    fn writes_the_document_and_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("products.txt");
        let blocks = vec!["Product: A".to_string()];

        generate(&blocks, &OutputTarget::File(path.clone())).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "Product: A\n\n---\n\n");
    }
}
