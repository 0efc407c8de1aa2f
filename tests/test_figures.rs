//! Cross-figure identities on known geometry.

use planar::{
    Circle, Cylinder, Figure, Line, Parallelogram, Point, Rectangle, Rhombus, Square,
    Triangle, TOLERANCE,
};
use std::f64::consts::PI;

#[test]
fn test_circle_identities() {
    for r in [0.0, 0.5, 1.0, 2.0, 10.0] {
        let c = Circle::new(r).unwrap();
        assert!((c.circumference() - 2.0 * PI * r).abs() < TOLERANCE);
        assert!((Circle::area(&c) - PI * r * r).abs() < TOLERANCE);
        assert!((c.diameter() - 2.0 * c.radius()).abs() < TOLERANCE);
    }
}

#[test]
fn test_rectangle_diagonal_is_pythagorean() {
    for (w, h) in [(0.0, 0.0), (3.0, 4.0), (1.0, 1.0), (7.5, 2.25)] {
        let rect = Rectangle::new(w, h).unwrap();
        let d = rect.diagonal();
        assert!((d * d - (w * w + h * h)).abs() < 1e-9);
    }
}

#[test]
fn test_square_equals_rectangle() {
    for s in [0.0, 1.0, 2.5, 100.0] {
        let square = Square::new(s).unwrap();
        let rect = Rectangle::new(s, s).unwrap();
        assert_eq!(Square::area(&square), Rectangle::area(&rect));
        assert_eq!(Square::perimeter(&square), Rectangle::perimeter(&rect));
        assert_eq!(square.diagonal(), rect.diagonal());
    }
}

#[test]
fn test_triangle_3_4_5() {
    let tri = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
    assert!((tri.area().unwrap() - 6.0).abs() < TOLERANCE);
    assert!((tri.perimeter().unwrap() - 12.0).abs() < TOLERANCE);
}

#[test]
fn test_rhombus_area_modes() {
    let with_diagonals = Rhombus::from_diagonals(5.0, 6.0, 8.0).unwrap();
    assert!((with_diagonals.area().unwrap() - 24.0).abs() < TOLERANCE);

    // Without diagonals or height the area is unanswerable, but the
    // perimeter still works.
    let bare = Rhombus::from_side(5.0).unwrap();
    assert!(bare.area().is_err());
    assert!((Rhombus::perimeter(&bare) - 20.0).abs() < TOLERANCE);
}

#[test]
fn test_point_distance() {
    let origin = Point::new(0.0, 0.0);
    assert!((origin.distance_to_point(&Point::new(3.0, 4.0)) - 5.0).abs() < TOLERANCE);
}

#[test]
fn test_cylinder_volume() {
    let c = Cylinder::new(2.0, 5.0).unwrap();
    assert!((c.volume() - 20.0 * PI).abs() < TOLERANCE);
}

#[test]
fn test_line_measures() {
    let line = Line::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0)).unwrap();
    assert!((line.length() - 5.0).abs() < TOLERANCE);
    assert!((line.slope().unwrap() - 4.0 / 3.0).abs() < TOLERANCE);
}

#[test]
fn test_figure_trait_dispatch() {
    let circle = Circle::new(1.0).unwrap();
    let rect = Rectangle::new(2.0, 3.0).unwrap();
    let square = Square::new(2.0).unwrap();
    let tri = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
    let para = Parallelogram::new(6.0, 4.0, 3.0, None).unwrap();
    let rhombus = Rhombus::from_diagonals(5.0, 6.0, 8.0).unwrap();

    let figures: Vec<&dyn Figure> = vec![&circle, &rect, &square, &tri, &para, &rhombus];
    let areas: Vec<f64> = figures.iter().map(|f| f.area().unwrap()).collect();
    let expected = [PI, 6.0, 4.0, 6.0, 18.0, 24.0];
    for (got, want) in areas.iter().zip(expected) {
        assert!((got - want).abs() < TOLERANCE, "area {got} != {want}");
    }
}

#[test]
fn test_queries_are_idempotent() {
    let tri = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
    assert_eq!(tri.area().unwrap(), tri.area().unwrap());
    assert_eq!(tri.perimeter().unwrap(), tri.perimeter().unwrap());

    let c = Circle::new(2.0).unwrap();
    assert_eq!(Circle::area(&c), Circle::area(&c));

    let cyl = Cylinder::new(2.0, 5.0).unwrap();
    assert_eq!(cyl.volume(), cyl.volume());
    assert_eq!(cyl.surface_area(), cyl.surface_area());
}
