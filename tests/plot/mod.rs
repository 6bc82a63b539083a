use std::fs;

use tempfile::tempdir;

use lpquad::demo::area::square;
use lpquad::integration::Interval;
use lpquad::plot::{area_under_curve, PlotSink};
use lpquad::plot::svg::SvgSink;

#[test]
fn write_svg_file() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("integral.svg");
    let interval = Interval::new(0.0, 2.0).unwrap();
    let figure = area_under_curve(square, "x^2", interval, (-0.5, 2.5)).unwrap();

    SvgSink::create(&path).unwrap().render(&figure).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<polyline class=\"curve\""));
    assert!(svg.contains("<polygon class=\"area\""));
    assert_eq!(svg.matches("class=\"marker\"").count(), 2);
    assert!(svg.contains("Plot of the integral of f(x) = x^2 from 0 to 2"));
    assert!(svg.contains(">x</text>"));
}

#[test]
fn unwritable_location() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("missing").join("integral.svg");
    assert!(SvgSink::create(path).is_err());
}
