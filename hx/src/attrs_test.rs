use super::*;
use markup::{args, render, tags::div};

fn pair(attr: &Attribute) -> (&str, Option<&str>) {
    (attr.key(), attr.value())
}

#[test]
fn request_helpers() {
    assert_eq!(pair(&hx_get("/a")), ("hx-get", Some("/a")));
    assert_eq!(pair(&hx_post("/a")), ("hx-post", Some("/a")));
    assert_eq!(pair(&hx_put("/a")), ("hx-put", Some("/a")));
    assert_eq!(pair(&hx_delete("/a/1")), ("hx-delete", Some("/a/1")));
    assert_eq!(pair(&hx_patch("/a")), ("hx-patch", Some("/a")));
}

#[test]
fn targeting_helpers() {
    assert_eq!(pair(&hx_target("closest .todo-item")), ("hx-target", Some("closest .todo-item")));
    assert_eq!(pair(&hx_swap("beforeend")), ("hx-swap", Some("beforeend")));
    assert_eq!(pair(&hx_swap_oob("true")), ("hx-swap-oob", Some("true")));
    assert_eq!(pair(&hx_select("#main")), ("hx-select", Some("#main")));
    assert_eq!(pair(&hx_select_oob("#nav")), ("hx-select-oob", Some("#nav")));
}

#[test]
fn parameter_helpers() {
    assert_eq!(pair(&hx_headers(r#"{"X-A":"1"}"#)), ("hx-headers", Some(r#"{"X-A":"1"}"#)));
    assert_eq!(pair(&hx_vals(r#"{"k":"v"}"#)), ("hx-vals", Some(r#"{"k":"v"}"#)));
    assert_eq!(pair(&hx_include("[name=q]")), ("hx-include", Some("[name=q]")));
    assert_eq!(pair(&hx_params("none")), ("hx-params", Some("none")));
    assert_eq!(pair(&hx_encoding("multipart/form-data")), ("hx-encoding", Some("multipart/form-data")));
}

#[test]
fn lifecycle_and_dialog_helpers() {
    assert_eq!(pair(&hx_trigger("every 2s")), ("hx-trigger", Some("every 2s")));
    assert_eq!(pair(&hx_indicator("#spinner")), ("hx-indicator", Some("#spinner")));
    assert_eq!(pair(&hx_disabled_elt("this")), ("hx-disabled-elt", Some("this")));
    assert_eq!(pair(&hx_sync("closest form:abort")), ("hx-sync", Some("closest form:abort")));
    assert_eq!(pair(&hx_confirm("Sure?")), ("hx-confirm", Some("Sure?")));
    assert_eq!(pair(&hx_prompt("Name?")), ("hx-prompt", Some("Name?")));
}

#[test]
fn history_and_transport_helpers() {
    assert_eq!(pair(&hx_push_url("true")), ("hx-push-url", Some("true")));
    assert_eq!(pair(&hx_replace_url("/x")), ("hx-replace-url", Some("/x")));
    assert_eq!(pair(&hx_ext("json-enc")), ("hx-ext", Some("json-enc")));
    assert_eq!(pair(&hx_sse("connect:/events")), ("hx-sse", Some("connect:/events")));
    assert_eq!(pair(&hx_ws("connect:/ws")), ("hx-ws", Some("connect:/ws")));
    assert_eq!(pair(&hx_disinherit("*")), ("hx-disinherit", Some("*")));
}

#[test]
fn boost_is_a_string_literal() {
    assert_eq!(pair(&hx_boost(true)), ("hx-boost", Some("true")));
    assert_eq!(pair(&hx_boost(false)), ("hx-boost", Some("false")));
}

#[test]
fn fixed_flags() {
    assert_eq!(pair(&hx_validate()), ("hx-validate", Some("true")));
    assert_eq!(pair(&hx_preserve()), ("hx-preserve", Some("true")));
}

#[test]
fn helpers_compose_into_markup() {
    let node = div(args![hx_get("/api/todos"), hx_trigger("load"), "Loading..."]).expect("div");
    assert_eq!(render(&node), r#"<div hx-get="/api/todos" hx-trigger="load">Loading...</div>"#);
}

#[test]
fn later_helper_overrides_earlier() {
    let node = div(args![hx_swap("innerHTML"), hx_target("#a"), hx_swap("outerHTML")]).expect("div");
    assert_eq!(render(&node), r##"<div hx-swap="outerHTML" hx-target="#a"></div>"##);
}

#[test]
fn text_helpers_agree_with_registry() {
    use crate::registry::make;

    let cases = [
        (hx_get("/x"), Behavior::Get),
        (hx_target("#x"), Behavior::Target),
        (hx_swap("outerHTML"), Behavior::Swap),
        (hx_trigger("load"), Behavior::Trigger),
        (hx_vals("{}"), Behavior::Vals),
        (hx_push_url("/x"), Behavior::PushUrl),
        (hx_disinherit("*"), Behavior::Disinherit),
    ];
    for (attr, behavior) in cases {
        assert_eq!(behavior.rule(), crate::ValueRule::Raw);
        let expected = make(behavior, attr.value().unwrap_or_default()).unwrap();
        assert_eq!(attr, expected, "{behavior:?}");
    }
}
