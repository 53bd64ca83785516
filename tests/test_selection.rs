use imageproc::point::Point;
use pagecrop::detection::select::select_candidate;
use pagecrop::{BoundingBox, Contour, SelectMethod};

/// Contour tracing the boundary of an axis-aligned rectangle.
fn rect_contour(x: u32, y: u32, width: u32, height: u32) -> Contour {
    let points = vec![
        Point { x, y },
        Point {
            x: x + width - 1,
            y,
        },
        Point {
            x: x + width - 1,
            y: y + height - 1,
        },
        Point {
            x,
            y: y + height - 1,
        },
    ];
    Contour::from_points(points).expect("rectangle has points")
}

#[test]
fn squarest_prefers_the_square_over_a_larger_strip() {
    let square = rect_contour(0, 0, 100, 100);
    let strip = rect_contour(200, 0, 50, 300);
    assert!(strip.area() > square.area());

    let chosen = select_candidate(&[square, strip], SelectMethod::Squarest).unwrap();
    assert_eq!(
        chosen.bounding_box(),
        BoundingBox {
            x: 0,
            y: 0,
            width: 100,
            height: 100
        }
    );
}

#[test]
fn largest_ignores_shape() {
    let square = rect_contour(0, 0, 100, 100);
    let strip = rect_contour(200, 0, 50, 300);

    let chosen = select_candidate(&[square, strip], SelectMethod::Largest).unwrap();
    assert_eq!(
        chosen.bounding_box(),
        BoundingBox {
            x: 200,
            y: 0,
            width: 50,
            height: 300
        }
    );
}

#[test]
fn selection_does_not_depend_on_input_order() {
    let square = rect_contour(0, 0, 100, 100);
    let strip = rect_contour(200, 0, 50, 300);

    let forward = select_candidate(&[square.clone(), strip.clone()], SelectMethod::Squarest);
    let reversed = select_candidate(&[strip, square], SelectMethod::Squarest);
    assert_eq!(
        forward.unwrap().bounding_box(),
        reversed.unwrap().bounding_box()
    );
}

#[test]
fn only_the_two_largest_contours_are_candidates() {
    // The tiny square is perfectly square but falls outside the top two
    // by area, so the squarest pick must come from the two strips.
    let tiny_square = rect_contour(0, 0, 10, 10);
    let wide_strip = rect_contour(150, 0, 120, 240);
    let thin_strip = rect_contour(300, 0, 50, 300);

    let chosen = select_candidate(
        &[tiny_square, wide_strip.clone(), thin_strip],
        SelectMethod::Squarest,
    )
    .unwrap();
    assert_eq!(chosen.bounding_box(), wide_strip.bounding_box());
}

#[test]
fn ties_go_to_the_larger_candidate() {
    let big_square = rect_contour(0, 0, 100, 100);
    let small_square = rect_contour(150, 0, 50, 50);

    let chosen = select_candidate(
        &[small_square, big_square.clone()],
        SelectMethod::Squarest,
    )
    .unwrap();
    assert_eq!(chosen.bounding_box(), big_square.bounding_box());
}

#[test]
fn single_contour_is_picked_by_both_methods() {
    let only = rect_contour(10, 20, 80, 60);
    for method in [SelectMethod::Squarest, SelectMethod::Largest] {
        let chosen = select_candidate(std::slice::from_ref(&only), method).unwrap();
        assert_eq!(chosen.bounding_box(), only.bounding_box());
    }
}

#[test]
fn empty_input_selects_nothing() {
    assert!(select_candidate(&[], SelectMethod::Squarest).is_none());
    assert!(select_candidate(&[], SelectMethod::Largest).is_none());
}
