// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn default_rejects_duplicates_and_bounds_depth() {
    let config = HubConfig::default();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(config.max_dispatch_depth, Some(DEFAULT_MAX_DISPATCH_DEPTH));
}

#[test]
fn empty_table_uses_defaults() {
    let config: HubConfig = toml::from_str("").unwrap();
    assert_eq!(config, HubConfig::default());
}

#[test]
fn parses_replace_policy_and_depth() {
    let config: HubConfig = toml::from_str(
        r#"
        duplicate_policy = "replace"
        max_dispatch_depth = 8
        "#,
    )
    .unwrap();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
    assert_eq!(config.max_dispatch_depth, Some(8));
}

#[test]
fn zero_depth_means_unbounded() {
    let config: HubConfig = toml::from_str("max_dispatch_depth = 0").unwrap();
    assert_eq!(config.max_dispatch_depth, None);

    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("max_dispatch_depth = 0"));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<HubConfig>("max_depth = 3").is_err());
}

#[test]
fn builder_methods_override_fields() {
    let config = HubConfig::default()
        .with_duplicate_policy(DuplicatePolicy::Replace)
        .with_max_dispatch_depth(None);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
    assert_eq!(config.max_dispatch_depth, None);
}

#[test]
fn zero_limit_is_stored_as_unbounded_and_round_trips() {
    let config = HubConfig::default().with_max_dispatch_depth(Some(0));
    assert_eq!(config.max_dispatch_depth, None);

    let rendered = toml::to_string(&config).unwrap();
    let parsed: HubConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn zero_limit_set_directly_is_treated_as_unbounded() {
    let config = HubConfig {
        max_dispatch_depth: Some(0),
        ..HubConfig::default()
    };
    assert_eq!(config.depth_limit(), None);
    assert_eq!(HubConfig::default().depth_limit(), Some(DEFAULT_MAX_DISPATCH_DEPTH));
}
