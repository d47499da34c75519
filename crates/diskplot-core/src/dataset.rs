// File: crates/diskplot-core/src/dataset.rs
// Summary: Loads the simulator's CSV into an immutable, column-major dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::algorithm::Algorithm;
use crate::error::{ChartError, Result, RowDefect};
use crate::series::Series;

/// Number of fields in every data row.
pub const COLUMNS: usize = 5;

/// Header the simulator writes. Only checked for a warning; the header row is discarded.
pub const EXPECTED_HEADER: [&str; COLUMNS] = ["NumReqs", "FIFO", "LIFO", "SSTF", "SCAN"];

/// One data row: `(requestCount, fifoTime, lifoTime, sstfTime, scanTime)`.
pub type Row = [f64; COLUMNS];

/// Parsed table, stored by column so series can borrow their slices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: [Vec<f64>; COLUMNS],
}

impl Dataset {
    /// Read `path`. The first row is a header; every other row must hold five numbers.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ChartError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::read(file, path)?;
        info!("Loaded {} rows from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse CSV text already in memory.
    pub fn parse(text: &str) -> Result<Self> {
        Self::read(text.as_bytes(), Path::new("<memory>"))
    }

    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut ds = Self::default();
        for row in rows {
            ds.push(row);
        }
        ds
    }

    fn read<R: Read>(reader: R, source: &Path) -> Result<Self> {
        // Flexible so a short or long row surfaces as our own arity error.
        // Byte records and per-field trimming keep the row exactly as written for error reports.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        match rdr.byte_headers() {
            Ok(headers) => {
                let names = headers
                    .iter()
                    .map(|h| String::from_utf8_lossy(h).trim().to_string())
                    .collect::<Vec<_>>();
                if !names.is_empty() && names != EXPECTED_HEADER {
                    warn!("Unexpected header {:?} in {}; expected {:?}", names, source.display(), EXPECTED_HEADER);
                }
            }
            Err(err) => return Err(classify(err, source, None)),
        }

        let mut ds = Self::default();
        for (row, rec) in rdr.byte_records().enumerate() {
            let rec = rec.map_err(|err| classify(err, source, Some(row)))?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            let malformed = |defect| ChartError::MalformedRow { row, line, raw: raw_text(&rec), defect };
            if rec.len() != COLUMNS {
                return Err(malformed(RowDefect::WrongFieldCount { expected: COLUMNS, found: rec.len() }));
            }
            let mut values = [0.0; COLUMNS];
            for (column, field) in rec.iter().enumerate() {
                let text = std::str::from_utf8(field).map_err(|_| malformed(RowDefect::Encoding { column }))?;
                values[column] = text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| malformed(RowDefect::NotNumeric { column }))?;
            }
            ds.push(values);
        }
        debug!("Parsed {} data rows from {}", ds.len(), source.display());
        Ok(ds)
    }

    fn push(&mut self, row: Row) {
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, index: usize) -> Option<Row> {
        if index >= self.len() {
            return None;
        }
        Some(std::array::from_fn(|c| self.columns[c][index]))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Column `index` (0 = request count), `None` past the last column.
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Shared x-axis of every series.
    pub fn request_counts(&self) -> &[f64] {
        &self.columns[0]
    }

    pub fn series(&self, algorithm: Algorithm) -> Series<'_> {
        Series::new(algorithm, self.request_counts(), &self.columns[algorithm.column()])
    }

    /// All four series in drawing order.
    pub fn all_series(&self) -> [Series<'_>; 4] {
        Algorithm::ALL.map(|a| self.series(a))
    }
}

/// The row as written, fields rejoined with commas; invalid UTF-8 is replaced.
fn raw_text(rec: &csv::ByteRecord) -> String {
    rec.iter().map(String::from_utf8_lossy).collect::<Vec<_>>().join(",")
}

/// Map a CSV reader error onto the taxonomy: I/O is an unreadable input, anything else a bad row.
/// `row` is `None` for the header line.
fn classify(err: csv::Error, source: &Path, row: Option<usize>) -> ChartError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source_err) => ChartError::InputNotFound {
            path: source.to_path_buf(),
            source: source_err,
        },
        _ => match row {
            Some(row) => ChartError::MalformedRow { row, line, raw: String::new(), defect: RowDefect::Unreadable },
            None => ChartError::MalformedRow { row: 0, line, raw: String::new(), defect: RowDefect::Header },
        },
    }
}
