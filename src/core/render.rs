use crate::config::OutputFormat;
use crate::core::Client;
use crate::utils::error::{DemoError, Result};

/// Text printed to stdout for a finished client. `Blank` yields an empty
/// string so the caller's `println!` emits a single blank line.
pub fn render(client: &Client, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Blank => Ok(String::new()),
        OutputFormat::Debug => Ok(format!("{:#?}", client)),
        OutputFormat::Json => {
            // JSON has no NaN or infinity; serde_json would write null.
            if !client.weight().is_finite() {
                return Err(DemoError::InvalidConfigValueError {
                    field: "weight".to_string(),
                    value: client.weight().to_string(),
                    reason: "JSON output needs a finite number".to_string(),
                });
            }
            Ok(serde_json::to_string_pretty(client)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{City, Pokemon};
    use std::rc::Rc;

    fn sample() -> Client {
        let mut client = Client::new();
        client.set_name("Lucas");
        client.set_age(30);
        client.set_weight(70.0);
        client.set_city(Rc::new(City::new("Joinville")));
        client.pokemon_list_mut().push(Pokemon::new("Charmander"));
        client
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(render(&sample(), OutputFormat::Blank).unwrap(), "");
    }

    #[test]
    fn test_json_shape() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Lucas",
                "age": 30,
                "weight": 70.0,
                "city": {"name": "Joinville"},
                "pokemon_list": [{"name": "Charmander"}]
            })
        );
    }

    #[test]
    fn test_json_unset_city_is_null() {
        let text = render(&Client::new(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["city"].is_null());
    }

    #[test]
    fn test_json_rejects_non_finite_weight() {
        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut client = sample();
            client.set_weight(weight);

            match render(&client, OutputFormat::Json) {
                Err(DemoError::InvalidConfigValueError { field, .. }) => assert_eq!(field, "weight"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_finite_weight_still_renders_outside_json() {
        let mut client = sample();
        client.set_weight(f64::NAN);

        assert_eq!(render(&client, OutputFormat::Blank).unwrap(), "");
        assert!(render(&client, OutputFormat::Debug).unwrap().contains("NaN"));
    }

    #[test]
    fn test_debug_mentions_fields() {
        let text = render(&sample(), OutputFormat::Debug).unwrap();
        assert!(text.contains("Joinville"));
        assert!(text.contains("Charmander"));
    }
}
