use crate::cli::OnMalformed;
use crate::domain::models::{EntryReport, ScanReport};
use crate::ocr::{self, ShapeError};

/// Lines per source group: three glyph rows plus one separator row.
const LINES_PER_GROUP: usize = 4;
const ROWS_PER_ENTRY: usize = 3;

/// A structurally invalid entry, identified by its 1-based position in the
/// source document.
#[derive(thiserror::Error, Debug)]
#[error("entry {index}: {source}")]
pub struct MalformedEntry {
    pub index: usize,
    #[source]
    pub source: ShapeError,
}

pub struct EntryBlock {
    pub index: usize,
    pub rows: Vec<String>,
}

pub fn read_entry_blocks(path: &str) -> anyhow::Result<Vec<EntryBlock>> {
    let raw = std::fs::read_to_string(path)?;
    let lines: Vec<String> = raw.lines().map(|l| l.to_string()).collect();
    Ok(blocks_from_lines(&lines))
}

/// Groups the document into entries of `LINES_PER_GROUP` lines and drops
/// groups whose lines are all empty. Whitespace-only rows are real glyph
/// rows and stay in. A short trailing group is kept; shape validation
/// rejects it later with the row-count reason.
fn blocks_from_lines(lines: &[String]) -> Vec<EntryBlock> {
    let mut out = Vec::new();
    for (i, group) in lines.chunks(LINES_PER_GROUP).enumerate() {
        if group.iter().all(|l| l.is_empty()) {
            continue;
        }
        out.push(EntryBlock {
            index: i + 1,
            rows: group.iter().take(ROWS_PER_ENTRY).cloned().collect(),
        });
    }
    out
}

pub fn scan_file(path: &str, on_malformed: OnMalformed) -> anyhow::Result<ScanReport> {
    let blocks = read_entry_blocks(path)?;
    let mut report = ScanReport {
        scanned: blocks.len(),
        ..ScanReport::default()
    };
    for block in blocks {
        match ocr::decode_entry(&block.rows) {
            Ok(number) => {
                match number.status() {
                    "ill" => report.illegible += 1,
                    "err" => report.checksum_errors += 1,
                    _ => report.clean += 1,
                }
                report.entries.push(EntryReport {
                    index: block.index,
                    digits: Some(number.digits().to_string()),
                    status: number.status().to_string(),
                    line: Some(number.output_line()),
                    reason: None,
                });
            }
            Err(source) => {
                report.malformed += 1;
                match on_malformed {
                    OnMalformed::Abort => {
                        return Err(MalformedEntry {
                            index: block.index,
                            source,
                        }
                        .into())
                    }
                    OnMalformed::Skip => {}
                    OnMalformed::Report => report.entries.push(EntryReport {
                        index: block.index,
                        digits: None,
                        status: "malformed".to_string(),
                        line: None,
                        reason: Some(source.to_string()),
                    }),
                }
            }
        }
    }
    Ok(report)
}

/// Shape-checks every entry without decoding any glyph. Fails on the first
/// malformed entry; returns the entry count otherwise.
pub fn validate_file(path: &str) -> anyhow::Result<usize> {
    let blocks = read_entry_blocks(path)?;
    for block in &blocks {
        if let Err(source) = ocr::validate_shape(&block.rows) {
            return Err(MalformedEntry {
                index: block.index,
                source,
            }
            .into());
        }
    }
    Ok(blocks.len())
}
