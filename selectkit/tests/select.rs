use std::cell::RefCell;
use std::rc::Rc;

use selectkit::{SelectAria, SelectConfig, SelectError, SelectKind, SelectModel};
use serde_json::{Value, json};

fn recording<T: selectkit::ComboOption + 'static>(
    config: SelectConfig,
) -> (SelectModel<T>, Rc<RefCell<Vec<Option<T>>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let model = SelectModel::new(config, move |value| sink.borrow_mut().push(value));
    (model, changes)
}

fn priorities() -> Vec<Value> {
    vec![
        json!({ "value": "low", "label": "Low" }),
        json!({ "value": "mid", "label": "Medium" }),
        json!({ "value": "high", "label": "High", "disabled": true }),
    ]
}

// ============================================================================
// Entries
// ============================================================================

#[test]
fn test_entries_use_value_and_label_keys() {
    let (mut model, _) = recording::<Value>(SelectConfig::listbox());
    model.set_options(priorities());
    model.set_selected(Some(priorities()[1].clone()));

    let entries = model.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].value, "low");
    assert_eq!(entries[1].label, "Medium");
    assert!(entries[1].is_selected);
    assert!(!entries[0].is_selected);
    assert!(entries[2].disabled);
}

#[test]
fn test_custom_keys() {
    let (mut model, _) =
        recording::<Value>(SelectConfig::native().value_key("code").label_key("title"));
    model.set_options(vec![json!({ "code": "de", "title": "Germany" })]);

    let entries = model.entries();
    assert_eq!(entries[0].value, "de");
    assert_eq!(entries[0].label, "Germany");
}

#[test]
fn test_plain_options_are_their_own_value_and_label() {
    let (mut model, _) = recording::<String>(SelectConfig::listbox());
    model.set_options(vec!["one".to_string(), "two".to_string()]);
    let entries = model.entries();
    assert_eq!(entries[1].value, "two");
    assert_eq!(entries[1].label, "two");
}

#[test]
fn test_placeholder_and_clear_visibility() {
    let (mut model, _) =
        recording::<String>(SelectConfig::native().placeholder("Pick one").allow_clear());
    model.set_options(vec!["a".to_string()]);
    assert!(model.show_placeholder());
    assert!(!model.show_clear());

    model.set_selected(Some("a".to_string()));
    assert!(!model.show_placeholder());
    assert!(model.show_clear());
}

// ============================================================================
// Resolving raw values
// ============================================================================

#[test]
fn test_listbox_resolves_numbers_as_indices() {
    let (mut model, _) = recording::<String>(SelectConfig::listbox());
    model.set_options(vec!["10".to_string(), "20".to_string()]);

    assert_eq!(model.resolve("1").map(String::as_str), Some("20"));
    assert_eq!(model.resolve("20"), None);
}

#[test]
fn test_native_resolves_values_before_indices() {
    let (mut model, _) = recording::<String>(SelectConfig::native());
    model.set_options(vec!["10".to_string(), "1".to_string(), "x".to_string()]);

    assert_eq!(model.resolve("1").map(String::as_str), Some("1"));
    assert_eq!(model.resolve("2").map(String::as_str), Some("x"));
    assert_eq!(model.resolve("nope"), None);
}

// ============================================================================
// Changes
// ============================================================================

#[test]
fn test_change_reports_resolved_option() {
    let (mut model, changes) = recording::<Value>(SelectConfig::listbox());
    model.set_options(priorities());

    model.change("mid").unwrap();
    model.change("0").unwrap();

    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].as_ref(), Some(&priorities()[1]));
    assert_eq!(changes[1].as_ref(), Some(&priorities()[0]));
}

#[test]
fn test_change_rejects_unknown_and_disabled_options() {
    let (mut model, changes) = recording::<Value>(SelectConfig::listbox());
    model.set_options(priorities());

    assert_eq!(
        model.change("urgent"),
        Err(SelectError::UnknownOption("urgent".to_string()))
    );
    assert_eq!(
        model.change("high"),
        Err(SelectError::DisabledOption("High".to_string()))
    );
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_disabled_select_rejects_changes() {
    let (mut model, changes) = recording::<String>(SelectConfig::native().disabled());
    model.set_options(vec!["a".to_string()]);

    assert_eq!(model.change("a"), Err(SelectError::Disabled));
    assert_eq!(model.clear(), Err(SelectError::Disabled));
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_clear() {
    let (mut model, changes) = recording::<String>(SelectConfig::listbox());
    assert_eq!(model.clear(), Err(SelectError::ClearNotAllowed));

    let (mut model, changes_allowed) = recording::<String>(SelectConfig::listbox().allow_clear());
    model.set_selected(Some("a".to_string()));
    model.clear().unwrap();

    assert!(changes.borrow().is_empty());
    assert_eq!(*changes_allowed.borrow(), vec![None]);
}

// ============================================================================
// Focus and config
// ============================================================================

#[test]
fn test_focus_hooks() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let on_focus = Rc::clone(&events);
    let on_blur = Rc::clone(&events);
    let mut model = SelectModel::<String>::new(SelectConfig::listbox(), |_| {})
        .with_on_focus(move || on_focus.borrow_mut().push("focus"))
        .with_on_blur(move || on_blur.borrow_mut().push("blur"));

    model.focus();
    assert!(model.has_focus());
    model.blur();
    assert!(!model.has_focus());
    assert_eq!(*events.borrow(), vec!["focus", "blur"]);
}

#[test]
fn test_aria_follows_config_and_selection() {
    let config = SelectConfig::listbox()
        .required()
        .aria_label("Priority")
        .aria_labelledby("priority-heading");
    let (mut model, _) = recording::<String>(config);
    model.set_options(vec!["low".to_string(), "high".to_string()]);

    assert_eq!(
        model.aria(),
        SelectAria {
            role: Some("listbox"),
            label: Some("Priority".to_string()),
            labelledby: Some("priority-heading".to_string()),
            required: true,
            disabled: false,
            invalid: true,
        }
    );

    model.set_selected(Some("high".to_string()));
    assert!(!model.aria().invalid);
}

#[test]
fn test_native_aria_has_no_explicit_role() {
    let (model, _) = recording::<String>(SelectConfig::native().disabled());
    let aria = model.aria();
    assert_eq!(aria.role, None);
    assert!(aria.disabled);
    assert!(!aria.required);
    assert!(!aria.invalid);
}

#[test]
fn test_config_from_json() {
    let config = SelectConfig::from_json(
        r#"{ "kind": "native", "valueKey": "code", "allowClear": true, "required": true, "ariaLabel": "Country" }"#,
    )
    .unwrap();
    assert_eq!(config.kind, SelectKind::Native);
    assert_eq!(config.value_key, "code");
    assert_eq!(config.label_key, "label");
    assert!(config.allow_clear);
    assert!(config.required);
    assert_eq!(config.aria_label.as_deref(), Some("Country"));

    assert!(SelectConfig::from_json(r#"{ "kind": "radio" }"#).is_err());
}
