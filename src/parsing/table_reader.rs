use super::{ParsingError, Result};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zstd::Decoder;

/// Field separator used by all benchmark tables.
pub const DELIMITER: u8 = b';';

/// Opens a table file, decompressing it if its name ends in `.zst`.
pub fn open_table(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| ParsingError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "zst") {
        let decoder = Decoder::new(file).map_err(|e| ParsingError::Decompression {
            path: path.to_path_buf(),
            message: format!("Failed to create decoder: {}", e),
        })?;
        return Ok(Box::new(decoder));
    }

    Ok(Box::new(file))
}

/// Creates a CSV reader configured for the headerless `;` separated benchmark tables.
///
/// Rows are allowed to vary in length so that the callers can report the
/// offending line themselves. Blank lines (the solver leaves one after each
/// `ctime` timestamp) are skipped by the reader.
pub fn table_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

/// Reads every record of a table, attaching `origin` to any error.
pub fn read_records<R: Read>(source: R, origin: &Path) -> Result<Vec<StringRecord>> {
    let mut reader = table_reader(source);
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ParsingError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;

        // A line holding only whitespace trims down to a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Line number of a record, for error messages.
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;

    #[test]
    fn skips_blank_lines() {
        let data = "a;b\n\nc;d\n   \ne;f\n";
        let records = read_records(Cursor::new(data), Path::new("test.csv")).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[2][1], "f");
    }

    #[test]
    fn trims_fields() {
        let data = "  a ; b\n";
        let records = read_records(Cursor::new(data), Path::new("test.csv")).unwrap();
        assert_eq!(&records[0][0], "a");
        assert_eq!(&records[0][1], "b");
    }

    #[test]
    fn reads_plain_and_compressed_files() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("rows.csv");
        let compressed = temp_dir.path().join("rows.csv.zst");
        let data = b"1;2;3\n4;5;6\n";

        File::create(&plain).unwrap().write_all(data).unwrap();
        let encoded = zstd::encode_all(Cursor::new(data), 3).unwrap();
        File::create(&compressed).unwrap().write_all(&encoded).unwrap();

        for path in [&plain, &compressed] {
            let records = read_records(open_table(path).unwrap(), path).unwrap();
            assert_eq!(records.len(), 2);
            assert_eq!(&records[1][2], "6");
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let Err(err) = open_table(Path::new("does/not/exist.csv")) else {
            panic!("expected an error");
        };
        assert!(matches!(err, ParsingError::FileRead { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
