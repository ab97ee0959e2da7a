use casebook::{Case, Outcome, Value};

pub fn case() -> Case<()> {
    Case::stateless(
        "Division by a zero denominator",
        vec![Value::from(1), Value::from(0)],
        Value::from(0),
        |args| match (&args[0], &args[1]) {
            (Value::Number(_), Value::Number(d)) if *d == 0.0 => {
                anyhow::bail!("division by zero")
            }
            (Value::Number(n), Value::Number(d)) => Ok(Value::from(n / d)),
            _ => anyhow::bail!("expected numeric arguments"),
        },
    )
}

#[test]
fn test() {
    match case().check().outcome {
        Outcome::RuntimeFailure(err) => assert_eq!(err.to_string(), "division by zero"),
        other => panic!("expected a runtime failure, got {:?}", other),
    }
}
