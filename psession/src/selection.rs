//! Selection state and the initial-selection decision.

use pprovider::ProviderKind;

/// Which provider/model the session currently points at. `model_id` is only
/// meaningful while `provider` is `Local`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub provider: Option<ProviderKind>,
    pub model_id: Option<String>,
}

/// Which capabilities the host actually configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigShape {
    pub has_local: bool,
    pub has_cloud: bool,
}

/// Raw preference values as read from the store, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedSelection {
    pub provider: Option<String>,
    pub model_id: Option<String>,
}

/// Decides the post-initialization selection in one place:
///
/// 1. A persisted `cloud` choice is restored only if a cloud capability is
///    still configured.
/// 2. A persisted `local` choice is restored only if a local capability is
///    still configured AND a model id was persisted with it.
/// 3. Otherwise, if exactly one provider is configured it is auto-selected
///    (a lone local provider starts without a model, so the model picker
///    shows next).
/// 4. Otherwise no selection: the picker screen.
///
/// Unknown persisted values count as "no preference", never an error.
pub fn resolve_initial_selection(shape: ConfigShape, persisted: &PersistedSelection) -> Selection {
    let restored = persisted
        .provider
        .as_deref()
        .and_then(|value| value.parse::<ProviderKind>().ok());

    match restored {
        Some(ProviderKind::Cloud) if shape.has_cloud => {
            return Selection {
                provider: Some(ProviderKind::Cloud),
                model_id: None,
            };
        }
        Some(ProviderKind::Local) if shape.has_local && persisted.model_id.is_some() => {
            return Selection {
                provider: Some(ProviderKind::Local),
                model_id: persisted.model_id.clone(),
            };
        }
        _ => {}
    }

    Selection {
        provider: auto_select_provider(shape),
        model_id: None,
    }
}

/// The auto-select rule on its own: the provider to pick when no usable
/// preference exists. Applies whenever no provider is selected, not just at
/// startup, so a host with a single configured provider never lands on the
/// selection screen.
pub fn auto_select_provider(shape: ConfigShape) -> Option<ProviderKind> {
    match (shape.has_local, shape.has_cloud) {
        (true, false) => Some(ProviderKind::Local),
        (false, true) => Some(ProviderKind::Cloud),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pprovider::ProviderKind;

    use super::{ConfigShape, PersistedSelection, Selection, resolve_initial_selection};

    const BOTH: ConfigShape = ConfigShape {
        has_local: true,
        has_cloud: true,
    };

    fn persisted(provider: Option<&str>, model: Option<&str>) -> PersistedSelection {
        PersistedSelection {
            provider: provider.map(str::to_string),
            model_id: model.map(str::to_string),
        }
    }

    #[test]
    fn persisted_cloud_is_restored_when_cloud_is_configured() {
        let selection = resolve_initial_selection(BOTH, &persisted(Some("cloud"), None));
        assert_eq!(selection.provider, Some(ProviderKind::Cloud));
        assert!(selection.model_id.is_none());
    }

    #[test]
    fn persisted_local_requires_a_model_id() {
        let with_model =
            resolve_initial_selection(BOTH, &persisted(Some("local"), Some("llama-3.2-3b")));
        assert_eq!(with_model.provider, Some(ProviderKind::Local));
        assert_eq!(with_model.model_id.as_deref(), Some("llama-3.2-3b"));

        let without_model = resolve_initial_selection(BOTH, &persisted(Some("local"), None));
        assert_eq!(without_model, Selection::default());
    }

    #[test]
    fn stale_persisted_provider_falls_back_to_the_picker() {
        let cloud_only = ConfigShape {
            has_local: false,
            has_cloud: true,
        };
        let selection =
            resolve_initial_selection(cloud_only, &persisted(Some("local"), Some("llama-3.2-1b")));
        // Cloud is the only configured capability, so auto-select kicks in
        // instead of honoring the stale local preference.
        assert_eq!(selection.provider, Some(ProviderKind::Cloud));

        let none = ConfigShape {
            has_local: false,
            has_cloud: false,
        };
        let selection =
            resolve_initial_selection(none, &persisted(Some("local"), Some("llama-3.2-1b")));
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn a_single_configured_provider_is_auto_selected() {
        let local_only = ConfigShape {
            has_local: true,
            has_cloud: false,
        };
        let selection = resolve_initial_selection(local_only, &PersistedSelection::default());
        assert_eq!(selection.provider, Some(ProviderKind::Local));
        assert!(selection.model_id.is_none());

        let cloud_only = ConfigShape {
            has_local: false,
            has_cloud: true,
        };
        let selection = resolve_initial_selection(cloud_only, &PersistedSelection::default());
        assert_eq!(selection.provider, Some(ProviderKind::Cloud));
    }

    #[test]
    fn two_providers_and_no_preference_mean_no_selection() {
        let selection = resolve_initial_selection(BOTH, &PersistedSelection::default());
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn junk_preference_values_are_ignored() {
        let selection = resolve_initial_selection(BOTH, &persisted(Some("mainframe"), None));
        assert_eq!(selection, Selection::default());
    }
}
