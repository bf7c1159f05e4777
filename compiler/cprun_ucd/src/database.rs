//! `UnicodeData.txt` decoding and code point lookup.
//!
//! The file holds one semicolon-separated record of 15 fields per line,
//! sorted by code point. Large blocks of identically-classified code points
//! (CJK ideographs, Hangul syllables, private use planes) are written as a
//! pair of lines whose names end in `, First>` and `, Last>`; every code
//! point between the two shares the pair's properties.
//!
//! Format reference: <https://www.unicode.org/reports/tr44/#UnicodeData.txt>.

use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{GeneralCategory, MAX_CODE_POINT};

/// Number of fields on every `UnicodeData.txt` line.
const FIELD_COUNT: usize = 15;

const RANGE_FIRST_SUFFIX: &str = ", First>";
const RANGE_LAST_SUFFIX: &str = ", Last>";

/// The properties of one assigned code point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodePointRecord {
    /// The character name (field 1). Range members carry the range label,
    /// e.g. `<CJK Ideograph>`.
    pub name: String,
    /// The general category (field 2).
    pub category: GeneralCategory,
}

impl CodePointRecord {
    pub fn new(name: impl Into<String>, category: GeneralCategory) -> Self {
        CodePointRecord {
            name: name.into(),
            category,
        }
    }
}

/// Read access to per-code-point Unicode properties.
///
/// `None` means the code point is unassigned.
pub trait UnicodeDatabase {
    fn lookup(&self, code_point: u32) -> Option<&CodePointRecord>;

    fn category(&self, code_point: u32) -> Option<GeneralCategory> {
        self.lookup(code_point).map(|record| record.category)
    }
}

/// Failure to load a Unicode database.
#[derive(Debug, Error)]
pub enum UcdError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {kind}")]
    Malformed { line: usize, kind: UcdErrorKind },
    #[error("range U+{first:04X}..U+{last:04X} is empty or extends beyond U+{max:04X}", max = MAX_CODE_POINT)]
    InvalidRange { first: u32, last: u32 },
    #[error(
        "range U+{first:04X}..U+{last:04X} overlaps U+{existing_first:04X}..U+{existing_last:04X}"
    )]
    OverlappingRange {
        first: u32,
        last: u32,
        existing_first: u32,
        existing_last: u32,
    },
}

/// What was wrong with a malformed `UnicodeData.txt` line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UcdErrorKind {
    #[error("expected {expected} fields, found {found}", expected = FIELD_COUNT)]
    FieldCount { found: usize },
    #[error("`{text}` is not a hexadecimal code point")]
    InvalidCodePoint { text: String },
    #[error("U+{code_point:04X} is beyond U+{max:04X}", max = MAX_CODE_POINT)]
    CodePointOutOfRange { code_point: u32 },
    #[error("unknown general category `{abbr}` for U+{code_point:04X}")]
    UnknownCategory { code_point: u32, abbr: String },
    #[error("U+{code_point:04X} does not follow U+{previous:04X}; entries must ascend")]
    OutOfOrder { previous: u32, code_point: u32 },
    #[error("range opened at U+{first:04X} is not closed by a matching `Last>` entry")]
    UnterminatedRange { first: u32 },
    #[error("range end U+{code_point:04X} has no matching `First>` entry")]
    UnopenedRange { code_point: u32 },
}

/// A block of code points sharing one record.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RangeEntry {
    first: u32,
    last: u32,
    record: CodePointRecord,
}

/// An in-memory Unicode database built from `UnicodeData.txt`.
#[derive(Clone, Debug, Default)]
pub struct UnicodeData {
    entries: FxHashMap<u32, CodePointRecord>,
    /// Sorted by `first`, non-overlapping.
    ranges: Vec<RangeEntry>,
}

impl UnicodeData {
    /// An empty database: every code point is unassigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and decode the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UcdError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| UcdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Decode the contents of a `UnicodeData.txt` file.
    pub fn parse(text: &str) -> Result<Self, UcdError> {
        let mut data = UnicodeData::new();
        let mut previous: Option<u32> = None;
        // `(line, first code point, record)` of a `First>` entry awaiting its `Last>`.
        let mut open_range: Option<(usize, u32, CodePointRecord)> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let malformed = |kind| UcdError::Malformed { line, kind };

            let fields: Vec<&str> = raw.split(';').collect();
            if fields.len() != FIELD_COUNT {
                return Err(malformed(UcdErrorKind::FieldCount {
                    found: fields.len(),
                }));
            }
            let code_point = parse_code_point(fields[0]).map_err(malformed)?;
            if let Some(previous) = previous {
                if code_point <= previous {
                    return Err(malformed(UcdErrorKind::OutOfOrder {
                        previous,
                        code_point,
                    }));
                }
            }
            previous = Some(code_point);

            let abbr = fields[2];
            let category =
                GeneralCategory::from_abbr(abbr).ok_or_else(|| {
                    malformed(UcdErrorKind::UnknownCategory {
                        code_point,
                        abbr: abbr.to_string(),
                    })
                })?;
            let name = fields[1];

            if let Some(label) = name.strip_suffix(RANGE_FIRST_SUFFIX) {
                if let Some((open_line, first, _)) = open_range {
                    return Err(UcdError::Malformed {
                        line: open_line,
                        kind: UcdErrorKind::UnterminatedRange { first },
                    });
                }
                let record = CodePointRecord::new(format!("{label}>"), category);
                open_range = Some((line, code_point, record));
                continue;
            }

            if let Some(label) = name.strip_suffix(RANGE_LAST_SUFFIX) {
                let Some((open_line, first, record)) = open_range.take() else {
                    return Err(malformed(UcdErrorKind::UnopenedRange { code_point }));
                };
                if record.name != format!("{label}>") || record.category != category {
                    return Err(UcdError::Malformed {
                        line: open_line,
                        kind: UcdErrorKind::UnterminatedRange { first },
                    });
                }
                data.ranges.push(RangeEntry {
                    first,
                    last: code_point,
                    record,
                });
                continue;
            }

            if let Some((open_line, first, _)) = open_range {
                return Err(UcdError::Malformed {
                    line: open_line,
                    kind: UcdErrorKind::UnterminatedRange { first },
                });
            }
            data.entries
                .insert(code_point, CodePointRecord::new(name, category));
        }

        if let Some((line, first, _)) = open_range {
            return Err(UcdError::Malformed {
                line,
                kind: UcdErrorKind::UnterminatedRange { first },
            });
        }
        Ok(data)
    }

    /// Define (or redefine) a single code point, returning the record it
    /// replaced.
    pub fn insert(&mut self, code_point: u32, record: CodePointRecord) -> Option<CodePointRecord> {
        self.entries.insert(code_point, record)
    }

    /// Define every code point in `range` with one shared record.
    ///
    /// Single entries still take precedence over a range covering them.
    /// Ranges must not be empty and must not overlap one another.
    pub fn insert_range(
        &mut self,
        range: RangeInclusive<u32>,
        record: CodePointRecord,
    ) -> Result<(), UcdError> {
        let (first, last) = (*range.start(), *range.end());
        if range.is_empty() || last > MAX_CODE_POINT {
            return Err(UcdError::InvalidRange { first, last });
        }
        let at = self.ranges.partition_point(|entry| entry.first < first);
        let before = at.checked_sub(1).and_then(|idx| self.ranges.get(idx));
        let after = self.ranges.get(at);
        let clash = before
            .filter(|entry| entry.last >= first)
            .or(after.filter(|entry| entry.first <= last));
        if let Some(entry) = clash {
            return Err(UcdError::OverlappingRange {
                first,
                last,
                existing_first: entry.first,
                existing_last: entry.last,
            });
        }
        self.ranges.insert(at, RangeEntry { first, last, record });
        Ok(())
    }

    /// All defined entries in ascending order. Ranges are yielded once,
    /// with their full extent.
    pub fn iter(&self) -> impl Iterator<Item = (RangeInclusive<u32>, &CodePointRecord)> + '_ {
        let mut items: Vec<(RangeInclusive<u32>, &CodePointRecord)> = self
            .entries
            .iter()
            .map(|(&code_point, record)| (code_point..=code_point, record))
            .chain(
                self.ranges
                    .iter()
                    .map(|entry| (entry.first..=entry.last, &entry.record)),
            )
            .collect();
        items.sort_by_key(|(range, _)| *range.start());
        items.into_iter()
    }

    fn lookup_range(&self, code_point: u32) -> Option<&CodePointRecord> {
        let after = self.ranges.partition_point(|entry| entry.first <= code_point);
        let entry = self.ranges[..after].last()?;
        (code_point <= entry.last).then_some(&entry.record)
    }
}

impl UnicodeDatabase for UnicodeData {
    fn lookup(&self, code_point: u32) -> Option<&CodePointRecord> {
        self.entries
            .get(&code_point)
            .or_else(|| self.lookup_range(code_point))
    }
}

fn parse_code_point(text: &str) -> Result<u32, UcdErrorKind> {
    let code_point = u32::from_str_radix(text, 16).map_err(|_| UcdErrorKind::InvalidCodePoint {
        text: text.to_string(),
    })?;
    if code_point > MAX_CODE_POINT {
        return Err(UcdErrorKind::CodePointOutOfRange { code_point });
    }
    Ok(code_point)
}
