use csv::{ReaderBuilder, StringRecord, Trim};

use std::path::Path;
use std::fs::File;
use std::io::Read;

use super::datum::{Datum, Label};
use super::feature::Value;
use crate::{ForestError, Result};


/// A struct that reads a comma-separated file into a sample pool.
///
/// If the file has no header row,
/// each column is named by its 0-based position (`"0"`, `"1"`, ...).
///
/// # Example
/// ```no_run
/// use miniforest::SampleReader;
///
/// let pool = SampleReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .id_feature("id")
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
    id: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// Each item of the column must be a positive integer.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }


    /// Set the column name that is used for the identifier.
    /// Without it, the identifier of a row is its 0-based position.
    pub fn id_feature(mut self, column: S) -> Self {
        self.id = Some(column);
        self
    }


    /// Reads the rows of `reader`.
    /// Fields are trimmed and may be quoted.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Datum>> {
        let target = self.target.as_ref()
            .ok_or_else(|| ForestError::InvalidInput(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`.".into()
            ))?;
        let target = target.as_ref();

        let mut reader = ReaderBuilder::new()
            .has_headers(self.has_header)
            .trim(Trim::All)
            .from_reader(reader);

        let mut names: Option<Vec<String>> = None;
        if self.has_header {
            let header = reader.headers().map_err(csv_error)?;
            names = Some(header.iter().map(str::to_string).collect());
        }

        let mut pool = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let lineno = line_of(&record);

            // Without a header, columns are named by their position.
            let names = names.get_or_insert_with(|| {
                (0..record.len()).map(|k| k.to_string()).collect()
            });
            if names.len() != record.len() {
                return Err(ForestError::Sample {
                    line: lineno,
                    reason: format!(
                        "expected {} fields, got {}",
                        names.len(), record.len(),
                    ),
                });
            }

            let target_pos = position(names, target, lineno)?;
            let id_pos = match self.id.as_ref() {
                Some(id) => Some(position(names, id.as_ref(), lineno)?),
                None => None,
            };

            let class = record[target_pos].parse::<Label>()
                .map_err(|_| ForestError::Sample {
                    line: lineno,
                    reason: format!(
                        "class `{}` is not a positive integer",
                        &record[target_pos],
                    ),
                })?;
            let id = match id_pos {
                Some(k) => record[k].to_string(),
                None => pool.len().to_string(),
            };
            let features = record.iter()
                .enumerate()
                .filter(|(k, _)| *k != target_pos && Some(*k) != id_pos)
                .map(|(_, x)| Value::parse(x))
                .collect::<Vec<_>>();

            let datum = Datum::new(id, features, class)
                .map_err(|e| ForestError::Sample {
                    line: lineno,
                    reason: e.to_string(),
                })?;
            pool.push(datum);
        }

        Ok(pool)
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns the sample pool in file order.
    pub fn read(self) -> Result<Vec<Datum>> {
        let file = self.file.as_ref()
            .ok_or_else(|| ForestError::InvalidInput(
                "The file name for the sample is not set".into()
            ))?;
        let path = file.as_ref();
        let file = File::open(path)
            .map_err(|e| ForestError::io(path, e))?;
        self.read_from(file)
    }
}


/// 1-based line on which `record` starts.
fn line_of(record: &StringRecord) -> usize {
    record.position().map_or(0, |pos| pos.line() as usize)
}


fn csv_error(e: csv::Error) -> ForestError {
    let line = e.position().map_or(0, |pos| pos.line() as usize);
    let reason = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => ForestError::io("<sample>", source),
        _ => ForestError::Sample { line, reason },
    }
}


fn position(names: &[String], name: &str, line: usize) -> Result<usize> {
    names.iter()
        .position(|n| n == name)
        .ok_or_else(|| ForestError::Sample {
            line,
            reason: format!("column `{name}` does not exist"),
        })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> SampleReader<&'static str, &'static str> {
        SampleReader::default()
    }

    #[test]
    fn read_with_header() {
        let bytes = b"\
            id,x,flag,proto,class\n\
            a,0.1,true,tcp,1\n\
            b,-8.0,false,udp,2\n\
            c,3.0,true,tcp,1\n";
        let pool = reader()
            .has_header(true)
            .target_feature("class")
            .id_feature("id")
            .read_from(&bytes[..])
            .unwrap();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[1].id(), "b");
        assert_eq!(pool[1].class(), 2);
        assert_eq!(
            pool[1].features(),
            &[Value::Numeric(-8.0), Value::Boolean(false), Value::from("udp")]
        );
    }

    #[test]
    fn read_without_header() {
        let bytes = b"1.0,2.0,1\n3.0,4.0,2\n";
        let pool = reader()
            .target_feature("2")
            .read_from(&bytes[..])
            .unwrap();

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].id(), "0");
        assert_eq!(pool[1].id(), "1");
        assert_eq!(pool[1].features().len(), 2);
    }

    #[test]
    fn zero_class_is_reported_with_line() {
        let bytes = b"x,class\n1.0,1\n2.0,0\n";
        let err = reader()
            .has_header(true)
            .target_feature("class")
            .read_from(&bytes[..])
            .unwrap_err();
        assert!(matches!(err, ForestError::Sample { line: 3, .. }));
    }

    #[test]
    fn quoted_fields_keep_their_commas() {
        let bytes = b"id,name,x,class\n0,\"Smith, J\",1.0,1\n";
        let pool = reader()
            .has_header(true)
            .target_feature("class")
            .id_feature("id")
            .read_from(&bytes[..])
            .unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(
            pool[0].features(),
            &[Value::from("Smith, J"), Value::Numeric(1.0)]
        );
    }

    #[test]
    fn ragged_row_is_reported_with_line() {
        let bytes = b"x,y,class\n1.0,2.0,1\n3.0,2\n";
        let err = reader()
            .has_header(true)
            .target_feature("class")
            .read_from(&bytes[..])
            .unwrap_err();
        assert!(matches!(err, ForestError::Sample { line: 3, .. }));
    }

    #[test]
    fn missing_target_column() {
        let bytes = b"x,y\n1.0,1\n";
        let err = reader()
            .has_header(true)
            .target_feature("class")
            .read_from(&bytes[..])
            .unwrap_err();
        assert!(matches!(err, ForestError::Sample { .. }));
    }
}
