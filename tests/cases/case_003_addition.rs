use casebook::{Case, Value};

pub fn case() -> Case<()> {
    Case::stateless(
        "Addition of declared arguments",
        vec![Value::from(1), Value::from(2)],
        Value::from(3),
        |args| {
            let mut total = 0.0;
            for arg in args {
                match arg {
                    Value::Number(n) => total += n,
                    other => anyhow::bail!("expected a number, got {}", other.type_name()),
                }
            }
            Ok(Value::from(total))
        },
    )
}

#[test]
fn test() {
    assert!(case().check().outcome.is_pass());
}
