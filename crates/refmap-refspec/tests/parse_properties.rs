use proptest::prelude::*;
use refmap_refspec::{RefSpec, RefSpecDirection, RefSpecView};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,7}"
}

fn exact_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|parts| parts.join("/"))
}

fn glob_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..4).prop_map(|parts| {
        let mut parts = parts;
        parts.push("*".to_string());
        parts.join("/")
    })
}

/// Source/destination pairs that satisfy wildcard symmetry.
fn sides() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        (exact_pattern(), exact_pattern()),
        (glob_pattern(), glob_pattern()),
    ]
}

fn direction() -> impl Strategy<Value = RefSpecDirection> {
    prop_oneof![Just(RefSpecDirection::Fetch), Just(RefSpecDirection::Push)]
}

proptest! {
    #[test]
    fn parse_preserves_specification(
        force in any::<bool>(),
        (src, dst) in sides(),
        dir in direction(),
    ) {
        let text = format!("{}{}:{}", if force { "+" } else { "" }, src, dst);
        let rs = RefSpec::parse(&text, dir).unwrap();

        prop_assert_eq!(rs.specification(), text.as_str());
        prop_assert_eq!(rs.force_update(), force);
        prop_assert_eq!(rs.source(), src.as_str());
        prop_assert_eq!(rs.destination(), dst.as_str());
        prop_assert_eq!(rs.direction(), dir);

        let rebuilt = format!(
            "{}{}:{}",
            if rs.force_update() { "+" } else { "" },
            rs.source(),
            rs.destination()
        );
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn asymmetric_wildcards_are_rejected(src in glob_pattern(), dst in exact_pattern()) {
        let forward = format!("{src}:{dst}");
        let backward = format!("{dst}:{src}");
        prop_assert!(RefSpec::fetch(&forward).is_err());
        prop_assert!(RefSpec::fetch(&backward).is_err());
    }

    #[test]
    fn text_without_colon_is_rejected(pattern in exact_pattern(), force in any::<bool>()) {
        let text = format!("{}{}", if force { "+" } else { "" }, pattern);
        prop_assert!(RefSpec::push(&text).is_err());
    }

    #[test]
    fn glob_transform_round_trips(
        (src, dst) in (glob_pattern(), glob_pattern()),
        name in exact_pattern(),
    ) {
        let rs = RefSpec::fetch(&format!("{src}:{dst}")).unwrap();
        let concrete = src.replacen('*', &name, 1);
        let mapped = rs.transform(&concrete).unwrap();
        prop_assert_eq!(mapped.clone(), dst.replacen('*', &name, 1));
        prop_assert_eq!(rs.rtransform(&mapped), Some(concrete));
    }
}
