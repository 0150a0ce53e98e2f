//! Integration tests for cidr-subtract
//!
//! These tests verify the complete workflow from reading a job file to the
//! subtracted block list.

use cidr_subtract::{
    job::{read_job, run_job, write_result},
    subtract, subtract_parallel, BlockSet, CidrError, Ipv4Block,
};

fn cidrs(blocks: &[Ipv4Block]) -> Vec<String> {
    blocks.iter().map(|b| b.to_string()).collect()
}

#[test]
fn test_full_workflow_with_job_file() {
    let job = read_job("src/tests/test_data/job_01.json").expect("Failed to read job file");
    let result = run_job(&job).expect("Failed to run job");

    assert_eq!(
        cidrs(&result.remaining),
        vec![
            "10.0.14.0/23",
            "10.0.17.1/32",
            "10.0.17.2/31",
            "10.0.17.4/30",
            "10.0.17.8/29",
            "10.0.17.16/28",
            "10.0.17.32/27",
            "10.0.17.64/26",
            "10.0.17.128/25",
            "192.168.2.2/31",
            "192.168.2.4/30",
            "192.168.2.8/29",
            "192.168.2.16/28",
            "192.168.2.32/27",
            "192.168.2.64/26",
            "192.168.2.128/25",
        ]
    );

    let json = write_result(&result, None).expect("Failed to serialize result");
    assert!(json.contains("\"remaining_count\": 16"));
}

#[test]
fn test_overlapping_job_rejected() {
    let job = read_job("src/tests/test_data/job_02_overlap.json").expect("Failed to read job file");
    let err = run_job(&job).unwrap_err();
    assert!(matches!(
        err,
        CidrError::OverlappingBlocks {
            set: BlockSet::Sources,
            ..
        }
    ));
}

#[test]
fn test_sorted_disjoint_output() {
    let job = read_job("src/tests/test_data/job_01.json").expect("Failed to read job file");
    let result = subtract(&job.sources, &job.excludes).expect("Failed to subtract");

    for i in 1..result.len() {
        let prev = &result[i - 1];
        let curr = &result[i];
        assert!(
            prev.last() < curr.first(),
            "Blocks should be ascending and disjoint: {} then {}",
            prev,
            curr
        );
    }
    assert_eq!(
        subtract_parallel(&job.sources, &job.excludes).expect("Failed to subtract"),
        result
    );
}

#[test]
fn test_excluded_addresses_absent() {
    let job = read_job("src/tests/test_data/job_01.json").expect("Failed to read job file");
    let result = subtract(&job.sources, &job.excludes).expect("Failed to subtract");

    for exclude in &job.excludes {
        assert!(
            !result.iter().any(|b| b.intersects(exclude)),
            "{} should have been removed",
            exclude
        );
    }
}
