use lispy::{Error, Interpreter, Node, error::RuntimeError};
use proptest::prelude::*;

/// Writes an integer as source text; negatives have no literal syntax.
fn lit(n: i64) -> String {
    if n < 0 { format!("(- {})", n.unsigned_abs()) } else { n.to_string() }
}

fn eval(line: &str) -> Result<Node, Error> {
    Interpreter::new().eval_line(line)
}

fn number(line: &str) -> i64 {
    match eval(line) {
        Ok(Node::Number(n)) => n,
        other => panic!("'{line}' did not produce a number: {other:?}"),
    }
}

fn joined(values: &[i64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

proptest! {
    #[test]
    fn literals_evaluate_to_themselves(n in 0_i64..=i64::MAX, b in any::<bool>(),
                                       values in prop::collection::vec(0_i64..1000, 0..8)) {
        prop_assert_eq!(eval(&n.to_string()), Ok(Node::Number(n)));
        prop_assert_eq!(eval(&b.to_string()), Ok(Node::Bool(b)));

        let sequence = format!("[{}]", joined(&values));
        prop_assert_eq!(eval(&sequence).unwrap().to_string(), sequence);

        let list = format!("'({})", joined(&values));
        prop_assert_eq!(eval(&list).unwrap().to_string(), list);
    }

    #[test]
    fn add_and_multiply_are_commutative_and_associative(a in -1000_i64..1000,
                                                        b in -1000_i64..1000,
                                                        c in -1000_i64..1000) {
        let (a, b, c) = (lit(a), lit(b), lit(c));

        for op in ["+", "*"] {
            let flat = number(&format!("({op} {a} {b} {c})"));
            prop_assert_eq!(flat, number(&format!("({op} {c} {b} {a})")));
            prop_assert_eq!(flat, number(&format!("({op} ({op} {a} {b}) {c})")));
            prop_assert_eq!(flat, number(&format!("({op} {a} ({op} {b} {c}))")));
        }
    }

    #[test]
    fn division_and_remainder_agree(dividend in -100_000_i64..100_000,
                                    divisor in (-1000_i64..1000).prop_filter("non-zero", |d| *d != 0)) {
        let (b, a) = (lit(dividend), lit(divisor));

        let recombined = number(&format!("(+ (* (/ {b} {a}) {a}) (rem {b} {a}))"));
        prop_assert_eq!(recombined, dividend);

        prop_assert_eq!(eval(&format!("(/ {b} 0)")),
                        Err(Error::Runtime(RuntimeError::DivisionByZero)));
        prop_assert_eq!(eval(&format!("(rem {b} 0)")),
                        Err(Error::Runtime(RuntimeError::DivisionByZero)));
    }

    #[test]
    fn range_length(a in -50_i64..50, b in -50_i64..50) {
        let size = number(&format!("(size (range {} {}))", lit(a), lit(b)));
        prop_assert_eq!(size, (b - a + 1).max(0));
    }

    #[test]
    fn map_preserves_size(values in prop::collection::vec(0_i64..1000, 0..16)) {
        let mut interpreter = Interpreter::new();
        interpreter.eval_line("(defn sq [x] (* x x))").unwrap();

        let mapped = interpreter.eval_line(&format!("(size (map sq [{}]))", joined(&values))).unwrap();
        prop_assert_eq!(mapped, Node::Number(i64::try_from(values.len()).unwrap()));
    }

    #[test]
    fn filter_is_an_ordered_subsequence(values in prop::collection::vec(0_i64..100, 0..16),
                                        threshold in 0_i64..100) {
        let mut interpreter = Interpreter::new();
        interpreter.eval_line(&format!("(defn above [x] (> x {threshold}))")).unwrap();

        let kept = interpreter.eval_line(&format!("(filter above [{}])", joined(&values))).unwrap();
        let expected: Vec<i64> = values.iter().copied().filter(|v| *v > threshold).collect();

        prop_assert_eq!(kept.to_string(), format!("[{}]", joined(&expected)));
    }
}
