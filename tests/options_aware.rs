//! Behaviour of the options helper against the Bootstrap registry.

use bootstrap_ui_classes::{AttrValue, Attributes, BootstrapOptions, ClassList, OptionsAware};

fn class<V: Into<AttrValue>>(value: V) -> Attributes {
    Attributes::new().with("class", value)
}

#[test]
fn test_apply_button_styles() {
    let helper = BootstrapOptions;
    assert_eq!(
        helper.apply_button_classes(Attributes::new()),
        class("btn btn-default")
    );

    for style in ["default", "primary", "success", "info", "warning", "danger"] {
        let expected = class(format!("btn-{} btn", style));
        assert_eq!(helper.apply_button_classes(class(style)), expected);
        assert_eq!(
            helper.apply_button_classes(class(format!("btn-{}", style))),
            expected
        );
        assert_eq!(
            helper.apply_button_classes(class(format!("btn {}", style))),
            expected
        );
    }
}

#[test]
fn test_apply_button_styles_after_other_classes() {
    let helper = BootstrapOptions;
    assert_eq!(
        helper.apply_button_classes(class("btn primary")),
        class("btn-primary btn")
    );
    assert_eq!(
        helper.apply_button_classes(class(["btn", "active", "btn-warning"])),
        class("active btn-warning btn")
    );
}

#[test]
fn test_rename_classes() {
    let helper = BootstrapOptions;
    assert_eq!(helper.rename_classes("btn", class("primary")), class("btn-primary"));
    assert_eq!(helper.rename_classes("alert", class("success")), class("alert-success"));
}

#[test]
fn test_has_any_class() {
    let helper = BootstrapOptions;
    assert!(!helper.has_any_class("a", &Attributes::new()));
    assert!(!helper.has_any_class("a", &class("x y z")));

    assert!(helper.has_any_class("a", &class("a b c")));
    assert!(helper.has_any_class("a w", &class("x y z a b c")));
    assert!(helper.has_any_class(["w", "c"], &class(["x", "c"])));
}

#[test]
fn test_inject_classes() {
    let helper = BootstrapOptions;
    assert_eq!(helper.inject_classes("a", Attributes::new()), class("a"));
    assert_eq!(helper.inject_classes("a b c", Attributes::new()), class("a b c"));
    assert_eq!(helper.inject_classes("a", class("x y z")), class("x y z a"));
    assert_eq!(helper.inject_classes("a", class(["x", "y", "z"])), class("x y z a"));
    assert_eq!(helper.inject_classes("a b c", class("x y z")), class("x y z a b c"));
}

#[test]
fn test_overlapping_inject_classes() {
    let helper = BootstrapOptions;
    assert_eq!(
        helper.inject_classes("a b c", class("a b c x y z")),
        class("a b c x y z")
    );
    assert_eq!(helper.inject_classes("a", class("a b c x y z")), class("a b c x y z"));
    assert_eq!(
        helper.inject_classes("a b c", class("a c x y z")),
        class("a c x y z b")
    );
}

#[test]
fn test_skipping_inject_classes() {
    let helper = BootstrapOptions;
    assert_eq!(
        helper.inject_classes("a b c", class("x y z").with("skip", "b")),
        class("x y z a c")
    );
    assert_eq!(
        helper.inject_classes("a b c", class("x y z").with("skip", "m")),
        class("x y z a b c")
    );
    assert_eq!(
        helper.inject_classes_skipping("a b c", class("x y z"), ["a", "c"]),
        class("x y z b")
    );
}

#[test]
fn test_remove_classes() {
    let helper = BootstrapOptions;
    assert_eq!(helper.remove_classes("a", Attributes::new()), class(""));
    assert_eq!(helper.remove_classes("a", class("a")), class(""));
    assert_eq!(helper.remove_classes("a", class("a a a")), class(""));
    assert_eq!(helper.remove_classes("a", class("a b c")), class("b c"));
    assert_eq!(helper.remove_classes("a c", class("a b c")), class("b"));
    assert_eq!(helper.remove_classes("x y z", class("a b c")), class("a b c"));
    assert_eq!(helper.remove_classes("a", class(["a", "b", "c"])), class("b c"));
    assert_eq!(helper.remove_classes(["a", "c"], class(["a", "b", "c"])), class("b"));
}

#[test]
fn test_check_classes() {
    let helper = BootstrapOptions;
    let required: Vec<ClassList> = vec![
        "a".into(),
        "a b c".into(),
        ["a"].into(),
        ["a", "b", "c"].into(),
    ];

    for classes in required {
        assert!(!helper.check_classes(classes.clone(), &Attributes::new()));
        assert!(!helper.check_classes(classes.clone(), &class("x y z")));
        assert!(!helper.check_classes(classes, &class(["x", "y", "z"])));
    }

    assert!(helper.check_classes("a", &class("a")));
    assert!(helper.check_classes("a b c", &class("c b a")));
    assert!(helper.check_classes("a b c", &class(["c", "b", "a"])));
}

#[test]
fn test_gen_class_name() {
    let helper = BootstrapOptions;
    assert_eq!(helper.gen_class_name("btn", "success").as_deref(), Some("btn-success"));
    assert_eq!(helper.gen_class_name("unknown", "primary"), None);
    assert_eq!(helper.gen_class_name("btn", "unknown"), None);
}

#[test]
fn test_gen_all_class_names() {
    let expected = vec![
        "default",
        "primary",
        "success",
        "info",
        "warning",
        "danger",
        "link",
        "xs",
        "sm",
        "lg",
        "btn-default",
        "btn-primary",
        "btn-success",
        "btn-info",
        "btn-warning",
        "btn-danger",
        "btn-link",
        "btn-xs",
        "btn-sm",
        "btn-lg",
    ];

    assert_eq!(BootstrapOptions.gen_all_class_names("btn"), expected);
    assert!(BootstrapOptions.gen_all_class_names("unknown").is_empty());
}

#[test]
fn test_operations_keep_other_attributes() {
    let helper = BootstrapOptions;
    let attrs = class("primary").with("id", "save").with("data-role", ["a", "b"]);

    let result = helper.apply_button_classes(attrs);
    assert_eq!(result.get("id"), Some(&AttrValue::from("save")));
    assert_eq!(result.get("data-role"), Some(&AttrValue::from(["a", "b"])));
    assert_eq!(result.get("class"), Some(&AttrValue::from("btn-primary btn")));
}
