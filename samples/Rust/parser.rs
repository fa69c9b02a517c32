use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

pub fn parse(input: &str) -> Result<HashMap<String, Value>, String> {
    let mut out = HashMap::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, raw) = line
            .split_once('=')
            .ok_or_else(|| format!("line {}: missing '='", lineno + 1))?;
        let value = match raw.trim().parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(raw.trim().to_string()),
        };
        out.insert(key.trim().to_string(), value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ints() {
        let map = parse("a = 1").unwrap();
        assert_eq!(map["a"], Value::Int(1));
    }
}
