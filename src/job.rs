//! JSON job files.
//!
//! A job lists IPv4 source and exclude blocks in `a.b.c.d/p` form:
//!
//! ```json
//! { "sources": ["10.0.16.0/23"], "excludes": ["10.0.16.0/24", "10.0.17.0/32"] }
//! ```

use crate::error::CidrError;
use crate::models::Ipv4Block;
use crate::processing::subtract;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input of one subtraction run.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Job {
    /// Blocks to keep.
    pub sources: Vec<Ipv4Block>,
    /// Blocks to remove from the sources.
    #[serde(default)]
    pub excludes: Vec<Ipv4Block>,
}

/// Output of one subtraction run.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct JobResult {
    /// Number of source blocks in the job.
    pub source_count: usize,
    /// Number of exclude blocks in the job.
    pub exclude_count: usize,
    /// Number of blocks left after subtraction.
    pub remaining_count: usize,
    /// Blocks left after subtraction, ascending.
    pub remaining: Vec<Ipv4Block>,
}

/// Parse a job from JSON text.
///
/// A bad entry is reported together with its JSON path, e.g. `excludes[2]`.
pub fn parse_job(json: &str) -> Result<Job, CidrError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        CidrError::Job(format!("Error parsing job: path={} error={}", e.path(), e.inner()))
    })
}

/// Read a job file.
///
/// # Returns
/// * `Ok(Job)` - The parsed job
/// * `Err` - If the file doesn't exist or an entry is not a valid block
pub fn read_job(job_file: &str) -> Result<Job, CidrError> {
    if !Path::new(job_file).exists() {
        return Err(CidrError::Job(format!("Job file does not exist: {job_file}")));
    }
    log::info!("Reading job file: {job_file}");
    let json = std::fs::read_to_string(job_file)?;
    parse_job(&json)
}

/// Subtract the job's excludes from its sources.
pub fn run_job(job: &Job) -> Result<JobResult, CidrError> {
    let remaining = subtract(&job.sources, &job.excludes)?;
    log::info!(
        "job: {} source(s) - {} exclude(s) => {} block(s)",
        job.sources.len(),
        job.excludes.len(),
        remaining.len()
    );
    Ok(JobResult {
        source_count: job.sources.len(),
        exclude_count: job.excludes.len(),
        remaining_count: remaining.len(),
        remaining,
    })
}

/// Serialize a result as pretty JSON, writing it to `result_file` when given.
///
/// # Returns
/// The JSON text.
pub fn write_result(result: &JobResult, result_file: Option<&str>) -> Result<String, CidrError> {
    let json = serde_json::to_string_pretty(result)?;
    if let Some(file) = result_file {
        log::warn!("Writing result to file: {file}");
        std::fs::write(file, &json)?;
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_JOB: &str = "src/tests/test_data/job_01.json";

    #[test]
    fn test_read_job() {
        let job = read_job(TEST_JOB).expect("Error reading job file");
        assert_eq!(job.sources.len(), 4);
        assert_eq!(job.excludes.len(), 4);
        assert_eq!(job.sources[0].to_string(), "192.168.2.0/24");
    }

    #[test]
    fn test_read_job_missing_file() {
        let err = read_job("src/tests/test_data/no_such_job.json").unwrap_err();
        assert!(err.to_string().contains("Job file does not exist"));
    }

    #[test]
    fn test_parse_job_reports_path() {
        let err = parse_job(r#"{"sources": ["10.0.0.0/24"], "excludes": ["10.0.0.0/31", "10.0.0.3/31"]}"#)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("excludes[1]"), "unexpected message: {msg}");
        assert!(msg.contains("10.0.0.3/31"), "unexpected message: {msg}");
    }

    #[test]
    fn test_parse_job_default_excludes() {
        let job = parse_job(r#"{"sources": ["10.0.0.0/24"]}"#).unwrap();
        assert!(job.excludes.is_empty());
        let result = run_job(&job).unwrap();
        assert_eq!(result.remaining, job.sources);
    }

    #[test]
    fn test_run_job() {
        let job = read_job(TEST_JOB).expect("Error reading job file");
        let result = run_job(&job).expect("Error running job");
        assert_eq!(result.source_count, 4);
        assert_eq!(result.exclude_count, 4);
        assert_eq!(result.remaining_count, 16);
        assert_eq!(result.remaining[0].to_string(), "10.0.14.0/23");
        assert_eq!(result.remaining[15].to_string(), "192.168.2.128/25");
    }

    #[test]
    fn test_write_result_json() {
        let job = parse_job(r#"{"sources": ["10.0.0.0/28"], "excludes": ["10.0.0.4/30"]}"#).unwrap();
        let json = write_result(&run_job(&job).unwrap(), None).unwrap();
        let back: JobResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.remaining_count, 2);
        assert!(json.contains("\"10.0.0.8/29\""));
    }
}
