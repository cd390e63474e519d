use lispy::{
    Interpreter, Node,
    interpreter::{evaluator::function::core::NATIVE_FUNCTIONS, value::core::Kind},
};

fn eval_all(lines: &[&str]) -> Vec<String> {
    let mut interpreter = Interpreter::new();
    lines.iter()
         .map(|line| match interpreter.eval_line(line) {
             Ok(node) => node.to_string(),
             Err(e) => panic!("'{line}' failed: {e}"),
         })
         .collect()
}

#[test]
fn every_native_is_bound_at_startup() {
    let interpreter = Interpreter::new();

    for name in NATIVE_FUNCTIONS {
        let variable = interpreter.environment()
                                  .lookup(name)
                                  .unwrap_or_else(|| panic!("{name} is not bound"));
        assert_eq!(variable.kind(), Kind::NativeFunction);
    }
}

#[test]
fn sqrt_truncates() {
    assert_eq!(eval_all(&["(sqrt 0)", "(sqrt 15)", "(sqrt 16)", "(sqrt 17)"]),
               vec!["0", "3", "4", "4"]);
}

#[test]
fn natives_accept_bound_identifiers() {
    assert_eq!(eval_all(&["(def n 49)", "(sqrt n)", "(def l '(4 5 6))", "(nth 2 l)", "(len l)"]),
               vec!["#n", "7", "#l", "6", "3"]);
}

#[test]
fn tail_of_a_single_element_list_is_empty() {
    assert_eq!(eval_all(&["(tail '(1))", "(len (tail '(1)))"]), vec!["'()", "0"]);
}

#[test]
fn map_and_filter_accept_natives_and_functions() {
    assert_eq!(eval_all(&["(defn inc [x] (+ x 1))",
                          "(map inc [1 2 3])",
                          "(map sqrt [4 9])",
                          "(defn pos [x] (> x 0))",
                          "(filter pos (range (- 1) 2))"]),
               vec!["#inc/1", "[2 3 4]", "[2 3]", "#pos/1", "[1 2]"]);
}

#[test]
fn sequence_identifiers_are_resolved_on_use() {
    assert_eq!(eval_all(&["(def a 3)", "(def xs [a 4])", "(defn sq [x] (* x x))", "(map sq xs)"]),
               vec!["#a", "#xs", "#sq/1", "[9 16]"]);
}

#[test]
fn reduce_of_a_single_element() {
    assert_eq!(eval_all(&["(defn add2 [a b] (+ a b))", "(reduce add2 [42])"]),
               vec!["#add2/2", "42"]);
}

#[test]
fn nested_higher_order_calls() {
    let mut interpreter = Interpreter::new();
    interpreter.eval_line("(defn sq [x] (* x x))").unwrap();
    interpreter.eval_line("(defn add2 [a b] (+ a b))").unwrap();

    assert_eq!(interpreter.eval_line("(reduce add2 (map sq (range 1 4)))").unwrap(),
               Node::Number(30));
}
