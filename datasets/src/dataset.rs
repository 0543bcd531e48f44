use std::io::Read;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use logit::Dataset;
use ndarray::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("could not parse `{value}` in row {row}, column {column} as a number")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a dataset needs at least one feature column and the target column")]
    TooFewColumns,
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Empty fields, `NA` and `NaN` are read as missing values
fn parse_field(field: &str) -> Option<f64> {
    match field.trim() {
        "" | "NA" | "NaN" | "nan" => Some(f64::NAN),
        value => value.parse().ok(),
    }
}

/// Parse a CSV table into its header (if present) and a matrix of values
fn read_table<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> Result<(Vec<String>, Array2<f64>), ReadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .flexible(true)
        .from_reader(csv);

    let headers = if has_headers {
        reader.headers()?.iter().map(|h| h.trim().to_string()).collect()
    } else {
        Vec::new()
    };

    let mut values = Vec::new();
    let mut ncols = None;
    let mut nrows = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let expected = *ncols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(ReadError::RaggedRow {
                row,
                expected,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            let value = parse_field(field).ok_or_else(|| ReadError::Parse {
                row,
                column,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        nrows += 1;
    }

    let shape = (nrows, ncols.unwrap_or(headers.len()));
    Ok((headers, Array2::from_shape_vec(shape, values)?))
}

/// Split the last column off as targets, the header names the remaining columns
fn into_dataset(headers: Vec<String>, table: Array2<f64>) -> Result<Dataset<f64>, ReadError> {
    let ncols = table.ncols();
    if ncols < 2 {
        return Err(ReadError::TooFewColumns);
    }

    let records = table.slice(s![.., ..ncols - 1]).to_owned();
    let targets = table.column(ncols - 1).to_owned();
    let dataset = Dataset::new(records, targets);

    if headers.len() == ncols {
        Ok(dataset.with_feature_names(headers[..ncols - 1].to_vec()))
    } else {
        Ok(dataset)
    }
}

/// Convert Gzipped CSV bytes into 2D array
pub fn array_from_gz_csv<R: Read>(
    gz: R,
    has_headers: bool,
    separator: u8,
) -> Result<Array2<f64>, ReadError> {
    // unzip file
    let file = GzDecoder::new(gz);
    array_from_csv(file, has_headers, separator)
}

/// Convert CSV bytes into 2D array
///
/// Empty fields as well as `NA` and `NaN` become `NaN`, every other field must be a number.
pub fn array_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> Result<Array2<f64>, ReadError> {
    read_table(csv, has_headers, separator).map(|(_, table)| table)
}

/// Read a gzipped CSV table as dataset, see [`dataset_from_csv`]
pub fn dataset_from_gz_csv<R: Read>(
    gz: R,
    has_headers: bool,
    separator: u8,
) -> Result<Dataset<f64>, ReadError> {
    dataset_from_csv(GzDecoder::new(gz), has_headers, separator)
}

/// Read a CSV table as dataset
///
/// The last column holds the targets, all other columns are features. With `has_headers` the
/// header fields of the feature columns become the feature names. Missing values are kept as
/// `NaN`, use [`Dataset::drop_missing`] to remove them.
pub fn dataset_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> Result<Dataset<f64>, ReadError> {
    let (headers, table) = read_table(csv, has_headers, separator)?;
    into_dataset(headers, table)
}
