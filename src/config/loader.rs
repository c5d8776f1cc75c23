//! CSV loading of contribution checkpoints
//!
//! Expected header: `start_year,amount,frequency`. Unknown frequency names
//! are read as monthly.

use super::ConfigError;
use crate::schedule::ContributionSegment;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load checkpoints from any CSV reader
pub fn load_checkpoints_from_reader<R: Read>(reader: R) -> Result<Vec<ContributionSegment>, ConfigError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut segments = Vec::new();
    for record in rdr.deserialize() {
        let segment: ContributionSegment = record?;
        segments.push(segment);
    }

    log::debug!("Loaded {} checkpoint(s)", segments.len());
    Ok(segments)
}

/// Load checkpoints from a CSV file
pub fn load_checkpoints<P: AsRef<Path>>(path: P) -> Result<Vec<ContributionSegment>, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_checkpoints_from_reader(file)
}
