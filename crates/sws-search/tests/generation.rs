use sws_graph::GraphConfig;
use sws_pattern::Siteswap;
use sws_search::{GenerationReport, Generator, PeriodRange};

#[test]
fn range_collects_every_period() {
    let generator = Generator::new(GraphConfig::new(3, 5)).unwrap();
    let generation = generator.generate(PeriodRange::new(1, 3)).unwrap();
    assert_eq!(generation.patterns.len(), 8);
    let periods: Vec<usize> = generation.stats.iter().map(|s| s.period).collect();
    assert_eq!(periods, vec![1, 2, 3]);
    assert_eq!(generation.patterns.first(), Some(&Siteswap::new(vec![3])));
}

#[test]
fn inverted_range_is_rejected() {
    let generator = Generator::new(GraphConfig::new(3, 5)).unwrap();
    let err = generator.generate(PeriodRange::new(3, 2)).unwrap_err();
    assert_eq!(err.info().code, "period-range");
}

#[test]
fn report_summarises_the_run() {
    let generator = Generator::new(GraphConfig::new(3, 5)).unwrap();
    let periods = PeriodRange::new(1, 2);
    let generation = generator.generate(periods).unwrap();
    let report = GenerationReport::build(&generator, periods, &generation);

    assert_eq!(report.graph_nodes, 10);
    assert_eq!(report.unique_patterns, 3);
    assert_eq!(report.per_period.len(), 2);
    assert_eq!(report.provenance.graph_hash, sws_graph::canonical_hash(generator.graph()));
    assert_eq!(report.provenance.pattern_hash.len(), 64);
    assert!(report.provenance.tool_versions.contains_key("sws-search"));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"51\""));
    let restored: GenerationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn report_is_written_to_disk() {
    let generator = Generator::new(GraphConfig::new(2, 4)).unwrap();
    let periods = PeriodRange::single(2);
    let generation = generator.generate(periods).unwrap();
    let report = GenerationReport::build(&generator, periods, &generation);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.write(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, report.to_json().unwrap());
}

#[test]
fn report_write_failure_is_an_io_error() {
    let generator = Generator::new(GraphConfig::new(2, 3)).unwrap();
    let periods = PeriodRange::single(1);
    let generation = generator.generate(periods).unwrap();
    let report = GenerationReport::build(&generator, periods, &generation);

    let dir = tempfile::tempdir().unwrap();
    let err = report.write(&dir.path().join("missing").join("report.json")).unwrap_err();
    assert_eq!(err.info().code, "write-output");
}
