// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! First-run seeding of the application preferences

use super::accessor::PreferenceStoreExt;
use super::keys;
use super::types::{NodeRunner, SuggestionFeatureProvider};
use crate::store::PreferenceStore;

/// Seed every current key that has no stored value.
///
/// Existing user values are left alone, so this is safe to call on every
/// launch. The feature provider is seeded from the deprecated built-in
/// provider key, carrying an old choice over to the new key.
pub fn setup_default_settings<S: PreferenceStore + ?Sized>(store: &S) {
    store.initialize_default(&keys::QUIT_XPC_SERVICE_ON_XCODE_AND_APP_QUIT);
    store.initialize_default(&keys::REALTIME_SUGGESTION_TOGGLE);
    store.initialize_default(&keys::REALTIME_SUGGESTION_DEBOUNCE);
    store.initialize_default(&keys::AUTOMATICALLY_CHECK_FOR_UPDATE);
    store.initialize_default(&keys::SUGGESTION_PRESENTATION_MODE);
    store.initialize_default(&keys::WIDGET_COLOR_SCHEME);
    store.initialize_default(&keys::CUSTOM_COMMANDS);
    store.initialize_default_with(&keys::RUN_NODE_WITH, Some(NodeRunner::Env));
    store.initialize_default(&keys::CHAT_MODELS);
    store.initialize_default(&keys::EMBEDDING_MODELS);

    let migrated = store.migrate_deprecated(
        &keys::OLD_SUGGESTION_FEATURE_PROVIDER,
        &keys::SUGGESTION_FEATURE_PROVIDER,
        SuggestionFeatureProvider::BuiltIn,
    );
    if migrated {
        tracing::debug!(
            from = keys::OLD_SUGGESTION_FEATURE_PROVIDER.name(),
            to = keys::SUGGESTION_FEATURE_PROVIDER.name(),
            "Seeded suggestion feature provider from deprecated key"
        );
    }
}
