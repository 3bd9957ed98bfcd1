use argument_encoding::{
    encode_with_formatters, impl_arguments, Command, Flag, Formatters, Opt, OptSet, Positional,
    UnwrapRegistry,
};
use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct OptionContainer {
    option: Opt<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct OptionSetContainer {
    option: OptSet<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Invocation {
    tool: Command,
    verbose: Flag,
    jobs: Opt<u32>,
    defines: OptSet<String>,
    path: Positional<String>,
}

impl_arguments! {
    #[formatters = Formatters::double_dash()]
    Invocation { tool, verbose, jobs, defines, path }
}

fn registry() -> UnwrapRegistry {
    let mut registry = UnwrapRegistry::new();
    registry
        .register_opt_display::<String>()
        .register_opt_display::<u32>()
        .register_opt_set_display::<String>()
        .register_positional_display::<String>();
    registry
}

#[test]
fn test_decode_option() {
    let option = Opt::new("value".to_string());
    let json = serde_json::to_string(&option).unwrap();
    assert_eq!(json, "\"value\"");

    let registry = registry();
    let mut de = serde_json::Deserializer::from_str(&json);
    let decoded = registry.seed::<Opt<String>>().deserialize(&mut de).unwrap();
    assert_eq!(decoded, option);
    assert_eq!(decoded.unwrapped().as_deref(), Some("value"));
}

#[test]
fn test_decode_option_container() {
    let container = OptionContainer {
        option: Opt::new("value".to_string()),
    };
    let json = serde_json::to_string(&container).unwrap();

    let decoded: OptionContainer = registry()
        .scope(|| serde_json::from_str(&json))
        .unwrap();
    assert_eq!(decoded, container);
}

#[test]
fn test_decode_option_set() {
    let set = OptSet::new(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let registry = registry();
    let mut de = serde_json::Deserializer::from_str(&json);
    let decoded = registry.seed::<OptSet<String>>().deserialize(&mut de).unwrap();
    assert_eq!(decoded, set);
}

#[test]
fn test_decode_option_set_container() {
    let container = OptionSetContainer {
        option: OptSet::new(vec!["value".to_string()]),
    };
    let json = serde_json::to_string(&container).unwrap();

    let decoded: OptionSetContainer = registry()
        .scope(|| serde_json::from_str(&json))
        .unwrap();
    assert_eq!(decoded, container);
}

#[test]
fn test_decoded_leaves_encode_like_the_originals() {
    let invocation = Invocation {
        tool: Command::from("make"),
        verbose: Flag::new(true),
        jobs: Opt::new(8),
        defines: OptSet::new(vec!["DEBUG".to_string()]),
        path: Positional::new("src".to_string()),
    };
    let json = serde_json::to_string(&invocation).unwrap();

    let decoded: Invocation = registry().scope(|| serde_json::from_str(&json)).unwrap();
    assert_eq!(decoded, invocation);
    assert_eq!(
        encode_with_formatters(&decoded, Formatters::unimplemented()).unwrap(),
        vec!["make", "--verbose", "--jobs", "8", "--defines", "DEBUG", "src"]
    );
}

#[test]
fn test_decode_with_custom_unwrap() {
    let mut registry = UnwrapRegistry::new();
    registry.register_opt::<u32, _>(|level| (*level > 0).then(|| level.to_string()));

    let mut de = serde_json::Deserializer::from_str("0");
    let quiet = registry.seed::<Opt<u32>>().deserialize(&mut de).unwrap();
    assert_eq!(quiet.unwrapped(), None);

    let mut de = serde_json::Deserializer::from_str("3");
    let loud = registry.seed::<Opt<u32>>().deserialize(&mut de).unwrap();
    assert_eq!(loud.unwrapped().as_deref(), Some("3"));
}

#[test]
fn test_missing_registration_is_an_error() {
    let registry = UnwrapRegistry::new();
    let mut de = serde_json::Deserializer::from_str("\"value\"");
    let err = registry
        .seed::<Opt<String>>()
        .deserialize(&mut de)
        .unwrap_err();
    assert!(err.to_string().contains("no unwrap function registered"));

    let result: Result<OptionContainer, _> = serde_json::from_str(r#"{"option": "value"}"#);
    assert!(result.is_err());
}

#[test]
fn test_decode_positional_group() {
    #[derive(Serialize, Deserialize)]
    struct Filter {
        skip: Flag,
    }

    impl_arguments! {
        Filter { skip }
    }

    let mut registry = UnwrapRegistry::new();
    registry.register_positional_group::<Filter>();

    let mut de = serde_json::Deserializer::from_str(r#"{"skip": true}"#);
    let filter = registry
        .seed::<Positional<Filter>>()
        .deserialize(&mut de)
        .unwrap();
    assert_eq!(
        encode_with_formatters(&filter, Formatters::double_dash()).unwrap(),
        vec!["--skip"]
    );
}
