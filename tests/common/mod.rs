use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an order CSV with the standard header to a temp file.
pub fn order_file(rows: &[(&str, u32, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "product, quantity, gift_wrap")?;
    for (product, quantity, gift_wrap) in rows {
        writeln!(file, "{product}, {quantity}, {gift_wrap}")?;
    }
    file.flush()?;
    Ok(file)
}
