extern crate flo_transform;

use flo_transform::*;

fn unit_square() -> Rect {
    Rect::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0))
}

#[test]
fn rotated_square_bounds() {
    let rotate  = Transformation::new(Vector::zero(), Angle::deg(90.0), Angle::zero(), Vector::new(1.0, 1.0));
    let bounds  = rotate.transform_bounds(&unit_square());

    assert!(bounds.is_equal_to(&Rect::new(Vector::new(-1.0, 0.0), Vector::new(0.0, 1.0))), "{:?}", bounds);
}

#[test]
fn bounds_by_matrix() {
    let matrix  = Matrix::rotation(Angle::deg(90.0));
    let bounds  = Transformation::transform_bounds_by(&matrix, &unit_square());

    assert!(bounds.is_equal_to(&Rect::new(Vector::new(-1.0, 0.0), Vector::new(0.0, 1.0))), "{:?}", bounds);
}

#[test]
fn diagonal_rotation_grows_bounds() {
    let rotate  = Transformation::new(Vector::zero(), Angle::deg(45.0), Angle::zero(), Vector::new(1.0, 1.0));
    let bounds  = rotate.transform_bounds(&unit_square());
    let half    = f64::sqrt(2.0) / 2.0;

    assert!(bounds.is_equal_to(&Rect::new(Vector::new(-half, 0.0), Vector::new(half, 2.0*half))), "{:?}", bounds);
    assert!(bounds.width() > 1.0);
}

#[test]
fn translated_scaled_bounds() {
    let transformation  = Transformation::new(Vector::new(10.0, 20.0), Angle::zero(), Angle::zero(), Vector::new(2.0, 3.0));
    let bounds          = transformation.transform_bounds(&Rect::new(Vector::new(1.0, 1.0), Vector::new(2.0, 4.0)));

    assert!(bounds.is_equal_to(&Rect::new(Vector::new(12.0, 23.0), Vector::new(14.0, 32.0))), "{:?}", bounds);
}

#[test]
fn back_transform_bounds_reverses_transform() {
    let transformation  = Transformation::new(Vector::new(5.0, 5.0), Angle::zero(), Angle::zero(), Vector::new(1.0, 1.0));
    let bounds          = transformation.back_transform_bounds(&Rect::new(Vector::new(5.0, 5.0), Vector::new(6.0, 6.0)));

    assert!(bounds.is_equal_to(&unit_square()), "{:?}", bounds);
}

#[test]
fn transformed_bounds_contain_transformed_corners() {
    let transformation  = Transformation::new(Vector::new(-3.0, 8.0), Angle::deg(33.0), Angle::deg(12.0), Vector::new(1.5, 0.5));
    let source          = Rect::new(Vector::new(-2.0, 1.0), Vector::new(4.0, 3.0));
    let bounds          = transformation.transform_bounds(&source);

    let corners         = vec![source.min(), source.max(), Vector::new(source.minx, source.maxy), Vector::new(source.maxx, source.miny)];

    for corner in corners {
        let point = transformation.transform_point(&corner);

        assert!(point.x >= bounds.minx - 1e-9 && point.x <= bounds.maxx + 1e-9);
        assert!(point.y >= bounds.miny - 1e-9 && point.y <= bounds.maxy + 1e-9);
    }
}

#[test]
fn singular_back_transform_bounds_are_invalid() {
    let flat    = Transformation::new(Vector::zero(), Angle::zero(), Angle::zero(), Vector::new(0.0, 0.0));
    let bounds  = flat.back_transform_bounds(&unit_square());

    assert!(!bounds.is_valid());
}

#[test]
fn nan_corner_gives_invalid_bounds() {
    let source  = Rect { minx: f64::NAN, miny: 0.0, maxx: 1.0, maxy: 1.0 };
    let bounds  = Transformation::identity().transform_bounds(&source);

    assert!(!source.is_valid());
    assert!(!bounds.is_valid(), "{:?}", bounds);
}
