//! End-to-end tests for TreeService: raw block in, rendered block out.

use std::collections::BTreeMap;

use rstest::{fixture, rstest};

use monotree::application::services::TreeService;
use monotree::application::{ApplicationError, TreeOptions};
use monotree::config::{Settings, SymbolSetConfig};
use monotree::domain::{DepthPolicy, DomainError};

const BLOCK: &str = "\
> project
>> src
>>> main.rs
>>> lib.rs
>> tests
>>> it.rs
>> Cargo.toml";

#[fixture]
fn service() -> TreeService {
    TreeService::default()
}

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn raw(block: &str) -> Vec<&str> {
    block.lines().collect()
}

#[rstest]
fn given_block_when_rendering_with_defaults_then_fancy_tree(service: TreeService) {
    let options = TreeOptions::from_attributes(&BTreeMap::new(), "fancy");

    let block = service.render_block(&raw(BLOCK), &options).unwrap();

    assert_eq!(
        block.lines,
        vec![
            "project",
            "├── src",
            "│   ├── main.rs",
            "│   └── lib.rs",
            "├── tests",
            "│   └── it.rs",
            "└── Cargo.toml",
        ]
    );
    assert!(block.attributes.is_empty());
}

#[rstest]
fn given_simple_set_with_short_alias_when_rendering_then_alias_applies(service: TreeService) {
    let options = TreeOptions::from_attributes(
        &attrs(&[("symbols", "simple"), ("symbol_terminal", "L-- "), ("t", "\\-- ")]),
        "fancy",
    );

    let block = service.render_block(&raw(BLOCK), &options).unwrap();

    assert_eq!(block.lines[3], "|   \\-- lib.rs");
    assert_eq!(block.lines[6], "\\-- Cargo.toml");
    assert_eq!(block.lines[1], "+-- src");
}

#[rstest]
fn given_unknown_set_when_rendering_then_fails_instead_of_blank_glyphs(service: TreeService) {
    let options = TreeOptions::from_attributes(&attrs(&[("symbols", "curly")]), "fancy");

    let err = service.render_block(&raw(BLOCK), &options).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::UnknownSymbolSet { ref name, .. }) if name == "curly"
    ));
}

#[rstest]
#[case(DepthPolicy::Lenient, true)]
#[case(DepthPolicy::Strict, false)]
fn given_depth_jump_when_rendering_then_policy_decides(
    service: TreeService,
    #[case] policy: DepthPolicy,
    #[case] accepted: bool,
) {
    let result = service
        .with_policy(policy)
        .render_block(&["> a", ">>>> b", ">> c"], &TreeOptions::new("fancy"));

    assert_eq!(result.is_ok(), accepted, "{:?}", result);
    if let Ok(block) = result {
        assert_eq!(block.lines, vec!["a", "│       └── b", "└── c"]);
    }
}

#[rstest]
fn given_strict_jump_when_rendering_then_message_uses_source_line_only(service: TreeService) {
    let err = service
        .with_policy(DepthPolicy::Strict)
        .render_block(&["> a", ">> b", ">>>> c"], &TreeOptions::new("fancy"))
        .unwrap_err();

    assert_eq!(err.to_string(), "line 3: depth jumps from 1 to 3");
}

#[rstest]
fn given_unconsumed_attributes_when_rendering_then_block_keeps_them(service: TreeService) {
    let options = TreeOptions::from_attributes(
        &attrs(&[("title", "Layout"), ("j", "+-- "), ("subs", "none")]),
        "simple",
    );

    let block = service.render_block(&["> a", ">> b"], &options).unwrap();

    assert_eq!(block.attributes, attrs(&[("subs", "none"), ("title", "Layout")]));
    assert_eq!(
        block.to_listing(),
        "[listing,subs=\"none\",title=\"Layout\"]\n----\na\n`-- b\n----"
    );
}

#[test]
fn given_settings_with_custom_set_when_building_service_then_set_is_usable() {
    let mut settings = Settings::default();
    settings.marker = '#';
    settings.symbol_sets.insert(
        "rounded".to_string(),
        SymbolSetConfig {
            empty: "    ".to_string(),
            passthrough: "│   ".to_string(),
            junction: "├── ".to_string(),
            terminal: "╰── ".to_string(),
        },
    );

    let service = TreeService::from_settings(&settings).unwrap();
    let block = service
        .render_block(&["# a", "## b", "## c"], &TreeOptions::new("rounded"))
        .unwrap();

    assert_eq!(block.lines, vec!["a", "├── b", "╰── c"]);
}

#[test]
fn given_whitespace_marker_in_settings_when_building_service_then_fails() {
    let settings = Settings {
        marker: ' ',
        ..Settings::default()
    };
    assert!(matches!(
        TreeService::from_settings(&settings),
        Err(ApplicationError::Domain(DomainError::InvalidMarker { marker: ' ' }))
    ));
}
