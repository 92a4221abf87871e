use rusim::interpreter::engine::Evaluator;
use rusim::interpreter::record::ExecutionRecord;
use rusim::memory::value::Value;
use rusim::parser::parse::collect_signatures;
use std::fs;
use std::path::Path;

fn load_tour() -> String {
    let path = Path::new("demos/tour.rsim");
    fs::read_to_string(path).expect("Failed to read demo file")
}

fn line_of(source: &str, needle: &str) -> usize {
    source
        .lines()
        .position(|l| l.starts_with(needle))
        .map(|i| i + 1)
        .expect("line not found in demo")
}

#[test]
fn test_tour_runs_to_completion() {
    let source = load_tour();
    let mut evaluator = Evaluator::new();
    let records = evaluator.run(&source);

    let error_lines: Vec<usize> = records
        .iter()
        .filter(|r| !r.success())
        .map(ExecutionRecord::line)
        .collect();
    assert_eq!(
        error_lines,
        [
            line_of(&source, "frobnicate(1);"),
            line_of(&source, "add(1);")
        ]
    );

    assert_eq!(
        evaluator.terminal().get_output(),
        ["Hello from rusim", "rusim", "still running"]
    );
}

#[test]
fn test_tour_bindings() {
    let mut evaluator = Evaluator::new();
    evaluator.run(&load_tour());
    let env = evaluator.environment();

    assert_eq!(env.get("width"), Some(&Value::Int(3)));
    assert_eq!(env.get("height"), Some(&Value::Float(2.5)));
    assert_eq!(env.get("big"), Some(&Value::Int(42)));
    assert!(env.binding("name").is_some_and(|b| b.is_mut));
    // Declarations never dispatch their value
    assert_eq!(env.get("numbers"), Some(&Value::from("vec_new()")));
}

#[test]
fn test_tour_call_results() {
    let source = load_tour();
    let mut evaluator = Evaluator::new();
    let records = evaluator.run(&source);

    let result_on = |needle: &str| {
        let line = line_of(&source, needle);
        records
            .iter()
            .find(|r| r.line() == line)
            .and_then(|r| r.result())
            .cloned()
    };

    assert_eq!(result_on("multiply(width, height);"), Some(Value::Float(7.5)));
    assert_eq!(result_on("divide(1, 0);"), Some(Value::Float(f64::INFINITY)));
    assert_eq!(result_on("pow(2, 10);"), Some(Value::Int(1024)));
    assert_eq!(result_on("to_uppercase(name);"), Some(Value::from("RUSIM")));
    assert_eq!(result_on("len(numbers);"), Some(Value::Int(9)));
    assert_eq!(result_on("Some(42);"), Some(Value::some(Value::Int(42))));
    assert_eq!(result_on("Err(\"boom\");"), Some(Value::err(Value::from("boom"))));
    assert_eq!(result_on("println(add(width, 1));"), Some(Value::Int(4)));
}

#[test]
fn test_tour_signatures() {
    let signatures = collect_signatures(&load_tour());
    let names: Vec<&str> = signatures.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, ["area", "async_fetch"]);
    assert_eq!(signatures[0].return_type, "f64");
    assert!(signatures[1].is_async);
}
