// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;

use prefkit::preferences::keys;
use prefkit::preferences::types::{
    BuiltInSuggestionFeatureProvider, CodeFont, CustomCommand, CustomCommandFeature, ModelConfig,
    ModelFormat, NodeRunner, PresentationMode, SuggestionFeatureProvider, WidgetColorScheme,
};
use prefkit::preferences::{
    setup_default_settings, Data, KeyId, PreferenceKey, PreferenceStoreExt, Value,
};
use prefkit::store::{MemoryStore, PreferenceStore};

#[test]
fn test_empty_store_reads_defaults() {
    let store = MemoryStore::new();
    for id in KeyId::ALL {
        let descriptor = id.descriptor();
        assert_eq!(
            descriptor.effective(store.value(descriptor.name).as_ref()),
            descriptor.default
        );
    }
    assert!(store.get(&keys::REALTIME_SUGGESTION_TOGGLE));
    assert_eq!(store.get(&keys::RUN_NODE_WITH), NodeRunner::Env);
    assert_eq!(store.get(&keys::WIDGET_COLOR_SCHEME), WidgetColorScheme::System);
    assert!(store.get(&keys::CUSTOM_COMMANDS).is_empty());
    assert_eq!(store.get(&keys::SUGGESTION_CODE_FONT), CodeFont::default());
}

#[test]
fn test_debounce_example() {
    let store = MemoryStore::new();
    assert_eq!(store.get(&keys::REALTIME_SUGGESTION_DEBOUNCE), 0.3);
    store.set(&keys::REALTIME_SUGGESTION_DEBOUNCE, &1.2);
    assert_eq!(store.get(&keys::REALTIME_SUGGESTION_DEBOUNCE), 1.2);
}

#[test]
fn test_raw_representable_round_trips() {
    let store = MemoryStore::new();

    store.set(&keys::SUGGESTION_PRESENTATION_MODE, &PresentationMode::FloatingWidget);
    assert_eq!(
        store.get(&keys::SUGGESTION_PRESENTATION_MODE),
        PresentationMode::FloatingWidget
    );
    assert_eq!(store.value("SuggestionPresentationMode"), Some(Value::Integer(1)));

    store.set(&keys::WIDGET_COLOR_SCHEME, &WidgetColorScheme::Dark);
    assert_eq!(store.get(&keys::WIDGET_COLOR_SCHEME), WidgetColorScheme::Dark);
    assert_eq!(store.value("WidgetColorScheme"), Some(Value::String("dark".into())));

    let provider = SuggestionFeatureProvider::Extension {
        name: "Tabby".into(),
        bundle_identifier: "com.example.tabby".into(),
    };
    store.set(&keys::SUGGESTION_FEATURE_PROVIDER, &provider);
    assert_eq!(store.get(&keys::SUGGESTION_FEATURE_PROVIDER), provider);
}

#[test]
fn test_out_of_range_raw_values_read_as_default() {
    let store = MemoryStore::with_values([
        ("SuggestionPresentationMode", Value::Integer(42)),
        ("RunNodeWith", Value::Integer(-1)),
        ("WidgetColorScheme", Value::String("sepia".into())),
        ("NewSuggestionFeatureProvider", Value::String("{\"builtIn\":7}".into())),
    ]);

    assert_eq!(
        store.get(&keys::SUGGESTION_PRESENTATION_MODE),
        PresentationMode::NearbyTextCursor
    );
    assert_eq!(store.get(&keys::RUN_NODE_WITH), NodeRunner::Env);
    assert_eq!(store.get(&keys::WIDGET_COLOR_SCHEME), WidgetColorScheme::System);
    assert_eq!(
        store.get(&keys::SUGGESTION_FEATURE_PROVIDER),
        SuggestionFeatureProvider::BuiltIn(BuiltInSuggestionFeatureProvider::GitHubCopilot)
    );
}

#[test]
fn test_type_mismatch_reads_as_default() {
    let store = MemoryStore::with_values([
        ("RealtimeSuggestionToggle", Value::String("yes".into())),
        ("RealtimeSuggestionDebounce", Value::Bool(true)),
        ("SuggestionPresentationMode", Value::String("1".into())),
    ]);
    assert!(store.get(&keys::REALTIME_SUGGESTION_TOGGLE));
    assert_eq!(store.get(&keys::REALTIME_SUGGESTION_DEBOUNCE), 0.3);
    assert_eq!(
        store.get(&keys::SUGGESTION_PRESENTATION_MODE),
        PresentationMode::NearbyTextCursor
    );
}

#[test]
fn test_corrupted_sequence_reads_as_empty() {
    let store = MemoryStore::with_values([(
        "SuggestionFeatureEnabledProjectList",
        Value::String("{broken".into()),
    )]);
    assert!(store.get(&keys::SUGGESTION_FEATURE_ENABLED_PROJECT_LIST).is_empty());
}

#[test]
fn test_sequence_of_structs_preserves_order() {
    let store = MemoryStore::new();
    let commands = vec![
        CustomCommand {
            command_id: "b".into(),
            name: "Refactor".into(),
            feature: CustomCommandFeature::PromptToCode {
                extra_system_prompt: None,
                prompt: Some("Refactor".into()),
                continuous_mode: false,
                generate_description: true,
            },
        },
        CustomCommand {
            command_id: "a".into(),
            name: "Summarize".into(),
            feature: CustomCommandFeature::SingleRoundDialog {
                system_prompt: None,
                prompt: "Summarize".into(),
                receive_reply_in_notification: true,
            },
        },
    ];
    store.set(&keys::CUSTOM_COMMANDS, &commands);
    assert_eq!(store.get(&keys::CUSTOM_COMMANDS), commands);

    let models = vec![ModelConfig {
        id: "local".into(),
        name: "Local".into(),
        format: ModelFormat::Ollama,
        base_url: "http://localhost:11434".into(),
        model_name: "llama3".into(),
        max_tokens: Some(4096),
    }];
    store.set(&keys::CHAT_MODELS, &models);
    assert_eq!(store.get(&keys::CHAT_MODELS), models);
    assert!(store.get(&keys::EMBEDDING_MODELS).is_empty());
}

#[test]
fn test_initialize_default_is_noop_when_set() {
    let store = MemoryStore::new();
    store.set(&keys::REALTIME_SUGGESTION_TOGGLE, &false);
    store.initialize_default(&keys::REALTIME_SUGGESTION_TOGGLE);
    assert!(!store.get(&keys::REALTIME_SUGGESTION_TOGGLE));

    store.initialize_default(&keys::ACCEPT_SUGGESTION_WITH_TAB);
    assert_eq!(store.value("AcceptSuggestionWithTab"), Some(Value::Bool(true)));
}

#[test]
fn test_initialize_default_with_override_for_raw_value() {
    let store = MemoryStore::new();
    store.initialize_default_with(&keys::RUN_NODE_WITH, Some(NodeRunner::Bash));
    assert_eq!(store.get(&keys::RUN_NODE_WITH), NodeRunner::Bash);
    store.initialize_default_with(&keys::RUN_NODE_WITH, Some(NodeRunner::Shell));
    assert_eq!(store.get(&keys::RUN_NODE_WITH), NodeRunner::Bash);
}

#[test]
fn test_deprecated_read() {
    let store = MemoryStore::new();
    assert_eq!(
        store.get_deprecated(&keys::OLD_SUGGESTION_FEATURE_PROVIDER),
        BuiltInSuggestionFeatureProvider::GitHubCopilot
    );
    store.set_value("SuggestionFeatureProvider", Value::Integer(1));
    assert_eq!(
        store.get_deprecated(&keys::OLD_SUGGESTION_FEATURE_PROVIDER),
        BuiltInSuggestionFeatureProvider::Codeium
    );
    store.set_value("SuggestionFeatureProvider", Value::Integer(5));
    assert_eq!(
        store.get_deprecated(&keys::OLD_SUGGESTION_FEATURE_PROVIDER),
        BuiltInSuggestionFeatureProvider::GitHubCopilot
    );
}

#[test]
fn test_migration_never_writes_old_key() {
    let store = MemoryStore::new();
    store.set_value("SuggestionFeatureProvider", Value::Integer(1));

    setup_default_settings(&store);
    assert_eq!(
        store.get(&keys::SUGGESTION_FEATURE_PROVIDER),
        SuggestionFeatureProvider::BuiltIn(BuiltInSuggestionFeatureProvider::Codeium)
    );

    // A later change to the new key sticks across relaunches.
    let ext = SuggestionFeatureProvider::Extension {
        name: "Tabby".into(),
        bundle_identifier: "com.example.tabby".into(),
    };
    store.set(&keys::SUGGESTION_FEATURE_PROVIDER, &ext);
    setup_default_settings(&store);
    assert_eq!(store.get(&keys::SUGGESTION_FEATURE_PROVIDER), ext);
    assert_eq!(store.value("SuggestionFeatureProvider"), Some(Value::Integer(1)));
}

#[test]
fn test_custom_key_with_data() {
    const TOKEN: PreferenceKey<Data> = PreferenceKey::new("Token", Data::default);
    let store = MemoryStore::new();
    assert_eq!(store.get(&TOKEN), Data::default());
    store.set(&TOKEN, &Data(vec![0xde, 0xad]));
    assert_eq!(store.get(&TOKEN), Data(vec![0xde, 0xad]));
}

proptest! {
    #[test]
    fn prop_project_list_round_trips(list in proptest::collection::vec(".*", 0..8)) {
        let store = MemoryStore::new();
        store.set(&keys::SUGGESTION_FEATURE_ENABLED_PROJECT_LIST, &list);
        prop_assert_eq!(store.get(&keys::SUGGESTION_FEATURE_ENABLED_PROJECT_LIST), list);
    }

    #[test]
    fn prop_debounce_round_trips(v in -1.0e6f64..1.0e6) {
        let store = MemoryStore::new();
        store.set(&keys::REALTIME_SUGGESTION_DEBOUNCE, &v);
        prop_assert_eq!(store.get(&keys::REALTIME_SUGGESTION_DEBOUNCE), v);
    }
}
