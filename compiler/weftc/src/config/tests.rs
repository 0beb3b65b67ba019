use super::*;
use pretty_assertions::assert_eq;

fn env<'a>(pairs: &'a [(&'static str, &'a str)]) -> impl Fn(&'static str) -> Option<String> + 'a {
    move |var| {
        pairs
            .iter()
            .find(|(key, _)| *key == var)
            .map(|(_, value)| (*value).to_owned())
    }
}

#[test]
fn defaults_match_parser() {
    let config = InterpreterConfig::default();
    assert_eq!(config.parse_options(), ParseOptions::default());
    assert!(!config.denylist_only);
}

#[test]
fn empty_environment_keeps_defaults() {
    let config = InterpreterConfig::default().with_overrides(env(&[]));
    assert_eq!(config, Ok(InterpreterConfig::default()));
}

#[test]
fn environment_overrides() {
    let config = InterpreterConfig::default()
        .with_overrides(env(&[
            (ENV_MAX_DEPTH, "8"),
            (ENV_MAX_CHAIN, " 16 "),
            (ENV_STRICT, "yes"),
        ]))
        .unwrap();
    assert_eq!(config.max_depth, 8);
    assert_eq!(config.max_chain_length, 16);
    assert!(config.strict_literals);
}

#[test]
fn invalid_values_are_reported() {
    assert_eq!(
        InterpreterConfig::default().with_overrides(env(&[(ENV_MAX_DEPTH, "0")])),
        Err(ConfigError::InvalidNumber {
            var: ENV_MAX_DEPTH,
            value: "0".into()
        })
    );
    assert!(InterpreterConfig::default()
        .with_overrides(env(&[(ENV_MAX_CHAIN, "many")]))
        .is_err());
    assert_eq!(
        InterpreterConfig::default()
            .with_overrides(env(&[(ENV_STRICT, "maybe")]))
            .unwrap_err()
            .to_string(),
        "WEFT_STRICT must be one of 1/0/true/false/yes/no/on/off, got `maybe`"
    );
}

#[test]
fn builder_methods_feed_parse_options() {
    let options = InterpreterConfig::default()
        .with_max_depth(3)
        .with_max_chain_length(5)
        .with_strict_literals(true)
        .parse_options();
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.max_chain_length, 5);
    assert!(options.strict_literals);
}
