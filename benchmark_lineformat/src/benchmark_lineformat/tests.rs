//!
//! Tests for the benchmark line format converter.
//!

#![cfg(test)]

#[test]
fn convert() {
    let summary = r#"
    {
        "context": {
            "benchmark_version": "1.0",
            "datafusion_version": "30.0",
            "num_cpus": 4,
            "start_time": 1000,
            "arguments": ["mybench", "--iterations", "2"]
        },
        "queries": [ {
            "query": 1,
            "start_time": 1000,
            "iterations": [
                { "elapsed": 0.05, "row_count": 10 },
                { "elapsed": 0.07, "row_count": 10 }
            ]
        } ]
    }"#;
    let run = serde_json::from_str::<benchmark_lineformat::BenchmarkRun>(summary)
        .expect("Failed to parse the benchmark summary");

    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("mybench.lp");
    let output = benchmark_lineformat::Output::File(path.clone());
    let written = output
        .write(&benchmark_lineformat::LineProtocol::from(&run))
        .expect("Failed to write the line protocol");
    assert_eq!(written, run.iteration_count());

    let contents = std::fs::read_to_string(path).expect("Failed to read the output");
    assert_eq!(
        contents,
        r#"benchmark,name=mybench,version=1.0,datafusion_version=30.0,num_cpus=4 query="1",iteration=0,row_count=10,elapsed_ms=50 1000000000000
benchmark,name=mybench,version=1.0,datafusion_version=30.0,num_cpus=4 query="1",iteration=1,row_count=10,elapsed_ms=70 1000000000000
"#
    );
}

#[test]
fn arguments() {
    use clap::Parser;

    let arguments = super::arguments::Arguments::try_parse_from([
        "benchmark-lineformat",
        "--summary",
        "--output-path",
        "out.lp",
        "baseline.json",
    ])
    .expect("Failed to parse arguments");

    assert!(arguments.summary);
    assert_eq!(arguments.baseline_path, std::path::PathBuf::from("baseline.json"));
    assert_eq!(arguments.log_level(), log::LevelFilter::Warn);
    assert!(super::arguments::Arguments::try_parse_from([
        "benchmark-lineformat",
        "--quiet",
        "--verbose",
        "baseline.json",
    ])
    .is_err());
}
