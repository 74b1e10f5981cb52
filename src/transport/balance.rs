use serde::Deserialize;

use super::DecodeError;

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// Balance value returned by the gateway as either JSON number or string.
enum TransportNumber {
    Number(f64),
    String(String),
}

impl TransportNumber {
    fn into_f64(self) -> Result<f64, DecodeError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::String(value) => value
                .trim()
                .parse::<f64>()
                .map_err(|_| DecodeError::BalanceNotNumeric { value }),
        }
    }
}

pub fn decode_balance_json_response(json: &str) -> Result<f64, DecodeError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    parsed.balance.into_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_balance_supports_numeric_and_string_values() {
        let numeric = r#"{ "balance": 42.5 }"#;
        assert_eq!(decode_balance_json_response(numeric).unwrap(), 42.5);

        let string = r#"{ "balance": "42.5" }"#;
        assert_eq!(decode_balance_json_response(string).unwrap(), 42.5);
    }

    #[test]
    fn decode_balance_rejects_missing_or_non_numeric_field() {
        assert!(matches!(
            decode_balance_json_response(r#"{}"#),
            Err(DecodeError::Json(_))
        ));

        assert!(matches!(
            decode_balance_json_response(r#"{ "balance": "lots" }"#),
            Err(DecodeError::BalanceNotNumeric { .. })
        ));
    }

    #[test]
    fn decode_balance_rejects_malformed_json() {
        assert!(matches!(
            decode_balance_json_response("{ not json }"),
            Err(DecodeError::Json(_))
        ));
    }
}
