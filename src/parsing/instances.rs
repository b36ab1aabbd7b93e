//! Instance list parsing
//!
//! An instance list names every instance of a batch, one per line. Instances
//! missing from the solver output are still part of the merged table, which is
//! what lets unsolved instances be counted.

use super::table_reader::{line_of, open_table, read_records};
use super::{ParsingError, Result};
use crate::api::enums::BatchLayout;
use crate::records::InstanceRecord;
use std::io::Read;
use std::path::Path;

/// Loads the instance list at `path`.
///
/// # Arguments
/// * `path` - Path to the `.inst` file (optionally `.zst` compressed)
/// * `layout` - Column layout of the list
///
/// # Returns
/// * `Ok(Vec<InstanceRecord>)` - Instances in file order
/// * `Err(ParsingError)` - If the file could not be read or a line is malformed
pub fn load_instances(path: &Path, layout: BatchLayout) -> Result<Vec<InstanceRecord>> {
    parse_instances(open_table(path)?, layout, path)
}

/// Parses an instance list from any reader. `origin` is only used in error messages.
pub fn parse_instances<R: Read>(
    source: R,
    layout: BatchLayout,
    origin: &Path,
) -> Result<Vec<InstanceRecord>> {
    let records = read_records(source, origin)?;
    let expected = layout.instance_columns();

    let mut instances = Vec::with_capacity(records.len());
    for record in &records {
        let invalid = |message: String| ParsingError::InvalidRecord {
            path: origin.to_path_buf(),
            line: line_of(record),
            message,
        };

        if record.len() != expected {
            return Err(invalid(format!(
                "expected {} column(s) for a {} instance list, found {}",
                expected,
                layout,
                record.len()
            )));
        }

        let instance = match layout {
            BatchLayout::Santos => InstanceRecord::named(&record[0]),
            BatchLayout::Grid => {
                let instance = InstanceRecord::grid(&record[0], &record[1], &record[2]);
                if instance.nodes.is_none() {
                    return Err(invalid(format!(
                        "instance name '{}' does not start with a node count",
                        instance.instance
                    )));
                }
                instance
            }
        };

        if instance.instance.is_empty() {
            return Err(invalid("empty instance name".to_string()));
        }
        instances.push(instance);
    }

    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(data: &str, layout: BatchLayout) -> Result<Vec<InstanceRecord>> {
        parse_instances(Cursor::new(data), layout, Path::new("batch.inst"))
    }

    #[test]
    fn parses_santos_list() {
        let instances = parse("s_50_1.txt\ns_50_2.txt\n", BatchLayout::Santos).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].instance, "s_50_2.txt");
        assert_eq!(instances[1].nodes, None);
    }

    #[test]
    fn parses_grid_list() {
        let data = "GRID;corr;100.1.gr\nGRID;corr;400.2.gr\n";
        let instances = parse(data, BatchLayout::Grid).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].graph_type, "GRID");
        assert_eq!(instances[0].nodes, Some(100));
        assert_eq!(instances[1].nodes, Some(400));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse("GRID;corr\n", BatchLayout::Grid).unwrap_err();
        match err {
            ParsingError::InvalidRecord { line, message, .. } => {
                assert_eq!(line, 1);
                assert!(message.contains("expected 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_grid_name_without_node_count() {
        let err = parse("GRID;corr;100.1.gr\nGRID;corr;big.gr\n", BatchLayout::Grid).unwrap_err();
        match err {
            ParsingError::InvalidRecord { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("big.gr"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(parse("", BatchLayout::Santos).unwrap().is_empty());
    }
}
