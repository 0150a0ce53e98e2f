//! Runtime configuration for the `cidr-subtract` binary.

/// log4rs configuration file read at start-up.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Environment variable (or `.env` entry) naming the job file.
pub const JOB_FILE_ENV: &str = "CIDR_SUBTRACT_JOB";

/// Job file used when [`JOB_FILE_ENV`] is not set.
pub const DEFAULT_JOB_FILE: &str = "cidr_job.json";

/// Environment variable (or `.env` entry) naming an output file. Unset means stdout.
pub const RESULT_FILE_ENV: &str = "CIDR_SUBTRACT_RESULT";

/// Path of the job file to run.
pub fn job_file() -> String {
    std::env::var(JOB_FILE_ENV).unwrap_or_else(|_| DEFAULT_JOB_FILE.to_string())
}

/// Path of the result file, if one is configured.
pub fn result_file() -> Option<String> {
    std::env::var(RESULT_FILE_ENV).ok().filter(|s| !s.trim().is_empty())
}
