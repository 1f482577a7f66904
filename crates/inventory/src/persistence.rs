//! Flat-file persistence shared by the inventory and the order book.
//!
//! Files are rewritten wholesale on save. A missing file on load means "nothing
//! to load" and leaves in-memory state untouched.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use ishop_core::{DomainError, DomainResult, FileOperation, LineRecord};

use crate::container::Inventory;
use ishop_products::StockItem;

/// Result of a load call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; nothing was changed.
    Missing,
    /// The file was read and the in-memory contents replaced.
    Loaded {
        /// Lines decoded into records.
        records: usize,
        /// Non-empty lines that could not be decoded.
        skipped: usize,
    },
}

/// Overwrite `path` with one line per item. Returns the number of lines written.
///
/// A failure partway through leaves the file truncated and is reported, not retried.
pub fn write_lines<I, S>(path: &Path, lines: I) -> DomainResult<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let save_err = |e: std::io::Error| DomainError::file_io(path, FileOperation::Save, &e);

    let file = File::create(path).map_err(save_err)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(save_err)?;
        written += 1;
    }
    writer.flush().map_err(save_err)?;
    Ok(written)
}

/// Read the raw file bytes, or `None` when it does not exist.
///
/// Text decoding happens per line in [`non_empty_lines`], so one bad byte costs
/// one line rather than the whole file.
pub fn read_source(path: &Path) -> DomainResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::file_io(path, FileOperation::Load, &e)),
    }
}

/// Non-empty lines of a persisted file, in file order.
///
/// Accepts `\n` and `\r\n` endings. A line that is not valid UTF-8 comes out
/// as `None` so the caller can count it as skipped.
pub fn non_empty_lines(content: &[u8]) -> impl Iterator<Item = Option<&str>> {
    content
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| std::str::from_utf8(line).ok())
}

impl<T> Inventory<T>
where
    T: StockItem + LineRecord,
{
    /// Write every product, in container order, one encoded line each.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> DomainResult<()> {
        let path = path.as_ref();
        let written = write_lines(path, self.iter().map(|product| product.to_line()))?;
        tracing::debug!("saved {written} products to {}", path.display());
        Ok(())
    }

    /// Replace the container contents with the products decoded from `path`.
    ///
    /// A missing file is a no-op. An existing file (even an empty one) clears the
    /// container first; undecodable lines are skipped silently.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> DomainResult<LoadOutcome> {
        let path = path.as_ref();
        let Some(content) = read_source(path)? else {
            tracing::debug!("{} not found; inventory left unchanged", path.display());
            return Ok(LoadOutcome::Missing);
        };

        let mut loaded = Vec::new();
        let mut skipped = 0;
        for line in non_empty_lines(&content) {
            match line.and_then(T::from_line) {
                Some(product) => loaded.push(product),
                None => skipped += 1,
            }
        }

        let records = loaded.len();
        self.replace_all(loaded);
        tracing::debug!(
            "loaded {records} products from {} ({skipped} skipped)",
            path.display()
        );
        Ok(LoadOutcome::Loaded { records, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ishop_products::{Accessory, Clothing, Product, ProductDetails, Stationery};
    use tempfile::TempDir;

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::new("Test");
        inventory.add(
            Product::new(
                "C1",
                "Hoodie",
                20.0,
                5,
                ProductDetails::Clothing(Clothing {
                    size: "M".to_string(),
                    color: "Navy".to_string(),
                    material: "Fleece".to_string(),
                }),
            )
            .unwrap(),
        );
        inventory.add(
            Product::new(
                "S1",
                "Pen",
                0.75,
                120,
                ProductDetails::Stationery(Stationery {
                    brand: "Parker".to_string(),
                    item_type: "Pen".to_string(),
                }),
            )
            .unwrap(),
        );
        inventory.add(
            Product::new(
                "A1",
                "Earbuds",
                1499.0,
                3,
                ProductDetails::Accessory(Accessory {
                    is_electronic: true,
                    accessory_type: "Audio".to_string(),
                }),
            )
            .unwrap(),
        );
        inventory
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        let original = sample_inventory();
        original.save_to_file(&path).unwrap();

        let mut restored: Inventory = Inventory::new("Restored");
        let outcome = restored.load_from_file(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { records: 3, skipped: 0 });
        assert_eq!(restored.products(), original.products());
        assert_eq!(restored.live_count(), 3);
    }

    #[test]
    fn saved_file_has_one_line_per_product() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        sample_inventory().save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Clothing,C1,Hoodie,20,5,M,Navy,Fleece\n\
             Stationery,S1,Pen,0.75,120,Parker,Pen\n\
             Accessory,A1,Earbuds,1499,3,1,Audio\n"
        );
    }

    #[test]
    fn missing_file_leaves_inventory_untouched() {
        let dir = TempDir::new().unwrap();
        let mut inventory = sample_inventory();

        let outcome = inventory
            .load_from_file(dir.path().join("absent.txt"))
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn empty_file_clears_inventory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        std::fs::write(&path, "").unwrap();
        let mut inventory = sample_inventory();

        let outcome = inventory.load_from_file(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { records: 0, skipped: 0 });
        assert!(inventory.is_empty());
        assert_eq!(inventory.live_count(), 0);
    }

    #[test]
    fn malformed_lines_are_skipped_silently() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        std::fs::write(
            &path,
            "Clothing,C1,Hoodie,20,5,M,Navy,Fleece\n\
             \n\
             Clothing,C2,Cap,10,1\n\
             Gadget,G1,Widget,1,1,x,y\n\
             Stationery,S1,Pen,abc,1,Parker,Pen\n\
             Stationery,S2,Pencil,0.5,10,Faber,Pencil\n",
        )
        .unwrap();

        let mut inventory: Inventory = Inventory::new("Test");
        let outcome = inventory.load_from_file(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { records: 2, skipped: 3 });
        let ids: Vec<&str> = inventory.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["C1", "S2"]);
    }

    #[test]
    fn non_utf8_line_is_skipped_and_the_rest_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        let mut content = b"Clothing,C1,Hoodie,20,5,M,Navy,Fleece\r\n".to_vec();
        content.extend_from_slice(b"Clothing,C2,Caf\xe9,10,1,S,Red,Wool\n");
        content.extend_from_slice(b"Stationery,S1,Pen,0.75,120,Parker,Pen\n");
        std::fs::write(&path, content).unwrap();

        let mut inventory: Inventory = Inventory::new("Test");
        let outcome = inventory.load_from_file(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { records: 2, skipped: 1 });
        let ids: Vec<&str> = inventory.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["C1", "S1"]);
        let expected = sample_inventory();
        assert_eq!(
            inventory.find("C1").unwrap().details(),
            expected.find("C1").unwrap().details()
        );
    }

    #[test]
    fn line_splitting_handles_endings_and_blank_lines() {
        let lines: Vec<Option<&str>> = non_empty_lines(b"a,b\r\n\n\xff\nc").collect();
        assert_eq!(lines, vec![Some("a,b"), None, Some("c")]);
    }

    #[test]
    fn save_into_missing_directory_reports_file_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("products.txt");

        let err = sample_inventory().save_to_file(&path).unwrap_err();

        match err {
            DomainError::FileIo { operation, .. } => assert_eq!(operation, FileOperation::Save),
            _ => panic!("Expected FileIo error"),
        }
    }
}
