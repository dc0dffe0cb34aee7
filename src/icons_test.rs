use super::*;
use markup::attrs::{class, style};
use markup::render;

#[test]
fn icon_is_stroked_svg_with_extra_args() {
    let node = plus(args![class("size-4"), style("margin-right", "6px")]).unwrap();
    let el = node.as_element().unwrap();

    assert_eq!(el.tag(), "svg");
    assert_eq!(el.attr("viewBox"), Some("0 0 24 24"));
    assert_eq!(el.attr("stroke"), Some("currentColor"));
    assert_eq!(el.attr("class"), Some("size-4"));
    assert_eq!(el.attr("style"), Some("margin-right: 6px"));
    assert_eq!(el.children().len(), 2);
}

#[test]
fn icon_renders_shapes_in_order() {
    let out = render(&x(args![]).unwrap());
    assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(out.ends_with(r#"<path d="M18 6 6 18"></path><path d="m6 6 12 12"></path></svg>"#));
}

#[test]
fn every_icon_builds() {
    let all: [fn(std::iter::Empty<Arg>) -> Markup; 17] = [
        zap,
        monitor,
        download,
        list_todo,
        plus,
        trash,
        refresh,
        circle_check,
        arrow_right,
        rocket,
        shield,
        package,
        heart,
        circle,
        x,
        clock,
        rotate_ccw,
    ];
    for icon in all {
        let node = icon(std::iter::empty()).unwrap();
        assert!(!node.as_element().unwrap().children().is_empty());
    }
}
