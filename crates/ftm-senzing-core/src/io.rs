//! JSONL input and output.
//!
//! Input is either a single JSONL file or a directory whose `*.jsonl` files
//! are read in name order. Lines that fail to parse are logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::feature::SenzingRecord;
use crate::partition::SchemaType;
use crate::record::FtmRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub files_read: usize,
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub entity_records: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOutput {
    pub records: Vec<FtmRecord>,
    pub stats: LoadStats,
}

impl LoadOutput {
    fn push(&mut self, record: FtmRecord) {
        if record
            .schema()
            .and_then(SchemaType::parse)
            .is_some_and(|s| s.is_entity())
        {
            self.stats.entity_records += 1;
        }
        self.records.push(record);
    }

    fn limit_reached(&self, options: &LoadOptions) -> bool {
        options
            .sample_limit
            .is_some_and(|limit| self.stats.entity_records >= limit)
    }
}

pub fn load_records(path: &Path, options: &LoadOptions) -> Result<LoadOutput> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let mut output = LoadOutput::default();

    if path.is_dir() {
        for file in jsonl_files(path)? {
            if output.limit_reached(options) {
                break;
            }
            load_file(&file, options, &mut output)?;
        }
    } else {
        load_file(path, options, &mut output)?;
    }

    tracing::info!(
        "Loaded {} records ({} entities) from {} files, skipped {} malformed lines",
        output.records.len(),
        output.stats.entity_records,
        output.stats.files_read,
        output.stats.malformed_lines
    );

    Ok(output)
}

fn jsonl_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonl") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

fn load_file(path: &Path, options: &LoadOptions, output: &mut LoadOutput) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    output.stats.files_read += 1;

    read_jsonl(
        BufReader::new(file),
        &path.display().to_string(),
        options,
        output,
    )
    .map_err(|e| Error::io(path, e))
}

/// Lines are read as raw bytes so that invalid UTF-8 only costs that line.
fn read_jsonl<R: BufRead>(
    mut reader: R,
    origin: &str,
    options: &LoadOptions,
    output: &mut LoadOutput,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let parsed = match std::str::from_utf8(&buf) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => serde_json::from_str::<FtmRecord>(text.trim()).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        output.stats.lines_read += 1;

        match parsed {
            Ok(record) => {
                output.push(record);
                if output.limit_reached(options) {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Invalid record at {}:{}: {}", origin, line_number, e);
                output.stats.malformed_lines += 1;
            }
        }
    }
    Ok(())
}

/// Writes one compact JSON object per line and returns the number written.
pub fn write_records<W: Write>(writer: &mut W, records: &[SenzingRecord]) -> std::io::Result<usize> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}

pub fn write_jsonl(records: &[SenzingRecord], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapperConfig;
    use crate::mapping::map_ftm_to_senzing;
    use std::fs;
    use tempfile::TempDir;

    const PERSON: &str = r#"{"id": "p1", "schema": "Person", "properties": {"name": ["A"]}}"#;
    const COMPANY: &str = r#"{"id": "c1", "schema": "Company", "properties": {"name": ["B"]}}"#;
    const OWNERSHIP: &str =
        r#"{"id": "o1", "schema": "Ownership", "properties": {"owner": ["p1"], "asset": ["c1"]}}"#;

    fn write(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_load_file_skips_blank_and_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            tmp.path(),
            "input.jsonl",
            &[PERSON, "", "{not json", r#"{"schema": "Person"}"#, "   ", COMPANY],
        );

        let output = load_records(&path, &LoadOptions::default()).unwrap();

        assert_eq!(output.records.len(), 2);
        assert_eq!(
            output.stats,
            LoadStats {
                files_read: 1,
                lines_read: 4,
                malformed_lines: 2,
                entity_records: 2,
            }
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("input.jsonl");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(PERSON.as_bytes());
        bytes.extend_from_slice(b"\n\xff\xfe bad line\n");
        bytes.extend_from_slice(COMPANY.as_bytes());
        fs::write(&path, bytes).unwrap();

        let output = load_records(&path, &LoadOptions::default()).unwrap();

        let ids: Vec<&str> = output.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "c1"]);
        assert_eq!(output.stats.lines_read, 3);
        assert_eq!(output.stats.malformed_lines, 1);
    }

    #[test]
    fn test_load_directory_sorted_jsonl_only() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.jsonl", &[COMPANY]);
        write(tmp.path(), "a.jsonl", &[PERSON]);
        write(tmp.path(), "c.json", &[OWNERSHIP]);
        fs::create_dir(tmp.path().join("nested.jsonl")).unwrap();

        let output = load_records(tmp.path(), &LoadOptions::default()).unwrap();

        let ids: Vec<&str> = output.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "c1"]);
        assert_eq!(output.stats.files_read, 2);
    }

    #[test]
    fn test_sample_limit_counts_entities_only() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            tmp.path(),
            "input.jsonl",
            &[OWNERSHIP, PERSON, OWNERSHIP, COMPANY, PERSON],
        );
        let options = LoadOptions::default().with_sample_limit(Some(2));

        let output = load_records(&path, &options).unwrap();

        assert_eq!(output.records.len(), 4);
        assert_eq!(output.stats.entity_records, 2);
    }

    #[test]
    fn test_sample_limit_spans_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "1.jsonl", &[PERSON]);
        write(tmp.path(), "2.jsonl", &[OWNERSHIP, COMPANY]);
        write(tmp.path(), "3.jsonl", &[PERSON]);
        let options = LoadOptions::default().with_sample_limit(Some(2));

        let output = load_records(tmp.path(), &options).unwrap();

        assert_eq!(output.records.len(), 3);
        assert_eq!(output.stats.files_read, 2);
    }

    #[test]
    fn test_missing_input() {
        let tmp = TempDir::new().unwrap();
        let result = load_records(&tmp.path().join("nope.jsonl"), &LoadOptions::default());
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_write_records_one_per_line() {
        let records: Vec<FtmRecord> = [PERSON, COMPANY]
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let mapped = map_ftm_to_senzing(&records, &MapperConfig::default());

        let mut buffer = Vec::new();
        let written = write_records(&mut buffer, &mapped).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(written, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"{"DATA_SOURCE":"SANCTIONS","RECORD_ID":"p1","#));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_write_jsonl_to_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let result = write_jsonl(&[], &tmp.path().join("missing").join("out.jsonl"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
