//! Inline Lucide icons built as `markup` trees.
//!
//! Each icon is a 24x24 stroked SVG. Callers pass extra arguments (class,
//! style declarations) that are applied to the outer `<svg>`.

use markup::attrs::{custom, fill, stroke, stroke_linecap, stroke_linejoin, stroke_width, view_box, xmlns};
use markup::{Arg, Element, Markup, Node, args};

/// One primitive inside an icon: tag plus its attribute pairs.
type Shape = (&'static str, &'static [(&'static str, &'static str)]);

fn build(shapes: &[Shape], extra: impl IntoIterator<Item = Arg>) -> Markup {
    let children = shapes
        .iter()
        .map(|(tag, attrs)| {
            let attrs = attrs.iter().map(|(k, v)| Arg::from(custom(*k, *v)));
            Element::build(*tag, attrs).map(Node::Element)
        })
        .collect::<Result<Vec<Node>, _>>();

    let base = args![
        xmlns("http://www.w3.org/2000/svg"),
        view_box("0 0 24 24"),
        fill("none"),
        stroke("currentColor"),
        stroke_width("2"),
        stroke_linecap("round"),
        stroke_linejoin("round"),
        custom("aria-hidden", "true"),
    ];
    Element::build("svg", base.into_iter().chain(extra).chain([Arg::from(children)]))
        .map(Node::Element)
}

macro_rules! icons {
    ($($name:ident => [$(($tag:literal, [$(($k:literal, $v:literal)),* $(,)?])),* $(,)?]),* $(,)?) => {
        $(
            pub fn $name(extra: impl IntoIterator<Item = Arg>) -> Markup {
                const SHAPES: &[Shape] = &[$(($tag, &[$(($k, $v)),*] as &[(&str, &str)])),*];
                build(SHAPES, extra)
            }
        )*
    };
}

icons! {
    zap => [
        ("polygon", [("points", "13 2 3 14 12 14 11 22 21 10 12 10 13 2")]),
    ],
    monitor => [
        ("rect", [("width", "20"), ("height", "14"), ("x", "2"), ("y", "3"), ("rx", "2")]),
        ("line", [("x1", "8"), ("x2", "16"), ("y1", "21"), ("y2", "21")]),
        ("line", [("x1", "12"), ("x2", "12"), ("y1", "17"), ("y2", "21")]),
    ],
    download => [
        ("path", [("d", "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4")]),
        ("polyline", [("points", "7 10 12 15 17 10")]),
        ("line", [("x1", "12"), ("x2", "12"), ("y1", "15"), ("y2", "3")]),
    ],
    list_todo => [
        ("rect", [("x", "3"), ("y", "5"), ("width", "6"), ("height", "6"), ("rx", "1")]),
        ("path", [("d", "m3 17 2 2 4-4")]),
        ("path", [("d", "M13 6h8")]),
        ("path", [("d", "M13 12h8")]),
        ("path", [("d", "M13 18h8")]),
    ],
    plus => [
        ("path", [("d", "M5 12h14")]),
        ("path", [("d", "M12 5v14")]),
    ],
    trash => [
        ("path", [("d", "M3 6h18")]),
        ("path", [("d", "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6")]),
        ("path", [("d", "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2")]),
        ("line", [("x1", "10"), ("x2", "10"), ("y1", "11"), ("y2", "17")]),
        ("line", [("x1", "14"), ("x2", "14"), ("y1", "11"), ("y2", "17")]),
    ],
    refresh => [
        ("path", [("d", "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8")]),
        ("path", [("d", "M21 3v5h-5")]),
        ("path", [("d", "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16")]),
        ("path", [("d", "M8 16H3v5")]),
    ],
    circle_check => [
        ("circle", [("cx", "12"), ("cy", "12"), ("r", "10")]),
        ("path", [("d", "m9 12 2 2 4-4")]),
    ],
    arrow_right => [
        ("path", [("d", "M5 12h14")]),
        ("path", [("d", "m12 5 7 7-7 7")]),
    ],
    rocket => [
        ("path", [("d", "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z")]),
        ("path", [("d", "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z")]),
        ("path", [("d", "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0")]),
        ("path", [("d", "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5")]),
    ],
    shield => [
        ("path", [("d", "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10")]),
    ],
    package => [
        ("path", [("d", "m7.5 4.27 9 5.15")]),
        ("path", [("d", "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z")]),
        ("path", [("d", "m3.3 7 8.7 5 8.7-5")]),
        ("path", [("d", "M12 22V12")]),
    ],
    heart => [
        ("path", [("d", "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z")]),
    ],
    circle => [
        ("circle", [("cx", "12"), ("cy", "12"), ("r", "10")]),
    ],
    x => [
        ("path", [("d", "M18 6 6 18")]),
        ("path", [("d", "m6 6 12 12")]),
    ],
    clock => [
        ("circle", [("cx", "12"), ("cy", "12"), ("r", "10")]),
        ("polyline", [("points", "12 6 12 12 16 14")]),
    ],
    rotate_ccw => [
        ("path", [("d", "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8")]),
        ("path", [("d", "M3 3v5h5")]),
    ],
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod tests;
