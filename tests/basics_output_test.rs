use first_steps::{Lesson, LessonRunner, MemoryConsole, WriterConsole};

const EXPECTED: &[&str] = &[
    "Hello World",
    "Hello World!",
    "I am learning Java.",
    "It is awesome!",
    "The value of a is 10",
    "The value of b is 20.5",
    "The value of c is Hello",
    "The value of d is true",
    "The value of e is A",
    "After reassignment, the value of a is 15",
    "After reassignment, the value of b is 25.5",
    "After reassignment, the value of c is World",
    "After reassignment, the value of d is false",
    "After reassignment, the value of e is B",
    "Hello, John!",
];

#[test]
fn test_basics_prints_expected_lines() {
    let mut console = MemoryConsole::new();
    LessonRunner::new(Lesson::basics(), &mut console)
        .run()
        .unwrap();

    assert_eq!(console.lines(), EXPECTED);
    assert_eq!(console.lines().first().map(String::as_str), Some("Hello World"));
    assert_eq!(console.lines().last().map(String::as_str), Some("Hello, John!"));
}

#[test]
fn test_rerun_is_identical() {
    let mut first = MemoryConsole::new();
    let mut second = MemoryConsole::new();
    LessonRunner::new(Lesson::basics(), &mut first).run().unwrap();
    LessonRunner::new(Lesson::basics(), &mut second).run().unwrap();

    assert_eq!(first.contents(), second.contents());
}

#[test]
fn test_writer_console_bytes() {
    let mut console = WriterConsole::new(Vec::new());
    LessonRunner::new(Lesson::basics(), &mut console)
        .run()
        .unwrap();

    let mut expected = EXPECTED.join("\n");
    expected.push('\n');
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), expected);
}

#[test]
fn test_explain_keeps_lesson_lines_in_order() {
    let mut console = MemoryConsole::new();
    let summary = LessonRunner::new(Lesson::basics(), &mut console)
        .with_explain(true)
        .run()
        .unwrap();

    let notes: Vec<&String> = console
        .lines()
        .iter()
        .filter(|l| l.starts_with("  // "))
        .collect();
    assert!(!notes.is_empty());
    assert!(notes.iter().any(|l| l.as_str() == "  // integer variable"));
    assert_eq!(summary.lines_written, EXPECTED.len() + notes.len());

    let lesson_lines: Vec<&str> = console
        .lines()
        .iter()
        .map(String::as_str)
        .filter(|l| !l.starts_with("  // "))
        .collect();
    assert_eq!(lesson_lines, EXPECTED);
}
