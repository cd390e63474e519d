use std::fs::{self};

use lispy::{Interpreter, get_result};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_lispy_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No lispy examples found in book/src");
}

fn extract_lispy_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lispy") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs every line of `src` in one interpreter and checks how the last
/// result prints.
fn assert_prints(src: &str, expected: &str) {
    let mut interpreter = Interpreter::new();
    let mut last = None;

    for line in src.lines().filter(|l| !l.trim().is_empty()) {
        match interpreter.eval_line(line) {
            Ok(node) => last = Some(node.to_string()),
            Err(e) => panic!("Line '{line}' failed: {e}"),
        }
    }

    assert_eq!(last.as_deref(), Some(expected), "script:\n{src}");
}

#[test]
fn arithmetic() {
    assert_prints("(+ 1 2 3)", "6");
    assert_prints("(* 2 3 4)", "24");
    assert_prints("(- 10 3)", "7");
    assert_prints("(- 4)", "-4");
    assert_prints("(/ 10 3)", "3");
    assert_prints("(rem 10 3)", "1");
    assert_prints("(+)", "0");
    assert_prints("(*)", "1");
    assert_prints("(+ 1 (* 2 (- 5 1)))", "9");
}

#[test]
fn comparisons_read_left_to_right() {
    assert_prints("(> 3 2)", "true");
    assert_prints("(< 3 2)", "false");
    assert_prints("(< 2 3)", "true");
    assert_prints("(= 4 4)", "true");
    assert_prints("(= 4 5)", "false");
}

#[test]
fn definitions_persist_across_lines() {
    assert_prints("(def 5 x)\n(* x x)", "25");
    assert_prints("(def x 5)\n(def y (+ x 1))\n(* x y)", "30");
    assert_prints("(def x 5)", "#x");
}

#[test]
fn user_functions() {
    assert_prints("(defn (+ a b) [a b] add2)\n(add2 3 4)", "7");
    assert_prints("(defn add2 [a b] (+ a b))\n(add2 3 4)", "7");
    assert_prints("(defn add2 [a b] (+ a b))", "#add2/2");
    assert_prints("(defn add2 [a b] (+ a b))\nadd2", "#add2/2");
    assert_prints("(defn sq [x] (* x x))\n(sq (sq 3))", "81");
}

#[test]
fn recursion() {
    assert_prints("(defn fact [n] (if (< n 2) (1) (* n (fact (- n 1)))))\n(fact 10)",
                  "3628800");
    assert_prints("(defn fib [n] (if (< n 2) (n) (+ (fib (- n 1)) (fib (- n 2)))))\n(fib 15)",
                  "610");
}

#[test]
fn conditionals() {
    assert_prints("(if (> 3 2) (1) (0))", "1");
    assert_prints("(if (> 2 3) (1) (0))", "0");
    assert_prints("(def flag true)\n(if (flag) (10) (20))", "10");
    assert_prints("(if (true) ((if (false) (1) (2))) (3))", "2");
}

#[test]
fn sequences() {
    assert_prints("(range 1 5)", "[1 2 3 4 5]");
    assert_prints("(size (range 1 5))", "5");
    assert_prints("(range 5 1)", "[]");
    assert_prints("[1 2 3]", "[1 2 3]");
    assert_prints("(def xs [1 2 3])\n(size xs)", "3");
}

#[test]
fn higher_order_functions() {
    assert_prints("(defn sq [x] (* x x))\n(map sq [1 2 3])", "[1 4 9]");
    assert_prints("(map sqrt (range 1 9))", "[1 1 1 2 2 2 2 2 3]");
    assert_prints("(defn odd [x] (= (rem x 2) 1))\n(filter odd (range 1 10))", "[1 3 5 7 9]");
    assert_prints("(defn add2 [a b] (+ a b))\n(reduce add2 (range 1 100))", "5050");
    assert_prints("(def k 10)\n(defn add2 [a b] (+ a b))\n(reduce add2 [k 1 2])", "13");
}

#[test]
fn lists() {
    assert_prints("(head '(9 8 7))", "9");
    assert_prints("(len '(9 8 7))", "3");
    assert_prints("(tail '(9 8 7))", "'(8 7)");
    assert_prints("(nth 1 '(9 8 7))", "8");
    assert_prints("'()", "'()");
    assert_prints("(def l '(1 2 3))\n(head (tail (tail l)))", "3");
}

#[test]
fn blank_lines_are_skipped() {
    assert_success("\n(def x 1)\n\n   \n(+ x 1)\n");
}

#[test]
fn failures() {
    assert_failure("(+ y 1)");
    assert_failure("(/ 1 0)");
    assert_failure("(rem 1 0)");
    assert_failure("(sqrt (- 4))");
    assert_failure("(head '())");
    assert_failure("(nth 3 '(9 8 7))");
    assert_failure("(reduce sqrt [])");
    assert_failure("(map 5 [1 2])");
    assert_failure("[1 (2)]");
    assert_failure("'(1 x)");
    assert_failure("(if (1) (2) (3))");
    assert_failure("(1 2 3");
}

#[test]
fn errors_name_the_failing_line() {
    let err = get_result("(def x 1)\n(+ x true)", false).unwrap_err();
    assert!(err.to_string().starts_with("Error on line 2:"), "{err}");
}
