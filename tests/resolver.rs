use matlang::{
    Slice, Tensor, ValueError,
    interpreter::evaluator::resolver::{get, get_view},
};
use pretty_assertions::assert_eq;

/// `[[1, 2, 3], [4, 5, 6], 7]`
fn matrix() -> Tensor {
    Tensor::from(vec![Tensor::from(vec![1.0, 2.0, 3.0]),
                      Tensor::from(vec![4.0, 5.0, 6.0]),
                      Tensor::Scalar(7.0)])
}

fn slices(groups: &[&[usize]]) -> Vec<Slice> {
    groups.iter().map(|group| Slice::new(group.to_vec())).collect()
}

#[test]
fn get_without_slices_copies_everything() {
    assert_eq!(get(&matrix(), &[]), Ok(matrix()));
}

#[test]
fn get_walks_one_dimension_per_slice() {
    let m = matrix();

    assert_eq!(get(&m, &slices(&[&[1], &[2]])), Ok(Tensor::Scalar(6.0)));
    assert_eq!(get(&m, &slices(&[&[0], &[2, 0]])).unwrap().to_string(), "[3, 1]");
    assert_eq!(get(&m, &slices(&[&[2, 0]])).unwrap().to_string(), "[7, [1, 2, 3]]");
}

#[test]
fn get_errors() {
    let m = matrix();

    assert_eq!(get(&m, &slices(&[&[3]])),
               Err(ValueError::IndexOutOfBounds { index: 3, size: 3 }));
    assert_eq!(get(&m, &slices(&[&[0], &[0, 5]])),
               Err(ValueError::IndexOutOfBounds { index: 5, size: 3 }));
    assert_eq!(get(&m, &slices(&[&[0, 1], &[0]])), Err(ValueError::SliceNotFinal));
    assert_eq!(get(&m, &slices(&[&[2], &[0]])), Err(ValueError::InvalidDimension));
    assert_eq!(get(&Tensor::Scalar(1.0), &slices(&[&[0]])), Err(ValueError::TypeMismatch));
}

#[test]
fn view_of_single_container_child_covers_its_children() {
    let mut m = matrix();
    let view = get_view(&mut m, &slices(&[&[1]])).unwrap();

    assert_eq!(view.len(), 3);
    assert_eq!(view.to_tensor().to_string(), "[4, 5, 6]");
}

#[test]
fn view_of_single_scalar_child_has_one_position() {
    let mut m = matrix();
    let mut view = get_view(&mut m, &slices(&[&[2]])).unwrap();

    assert_eq!(view.len(), 1);
    view.set(0, Tensor::Scalar(70.0));
    assert_eq!(m.to_string(), "[[1, 2, 3], [4, 5, 6], 70]");
}

#[test]
fn view_writes_reach_the_stored_tensor() {
    let mut m = matrix();
    let mut view = get_view(&mut m, &slices(&[&[0], &[0, 2]])).unwrap();

    view.update(&Tensor::Scalar(0.0)).unwrap();
    assert_eq!(m.to_string(), "[[0, 2, 0], [4, 5, 6], 7]");
}

#[test]
fn view_errors_match_reads() {
    let mut m = matrix();

    assert_eq!(get_view(&mut m, &slices(&[&[9]])).unwrap_err(),
               ValueError::IndexOutOfBounds { index: 9, size: 3 });
    assert_eq!(get_view(&mut m, &slices(&[&[0, 1], &[0]])).unwrap_err(),
               ValueError::SliceNotFinal);
    assert_eq!(get_view(&mut m, &slices(&[&[2], &[0]])).unwrap_err(),
               ValueError::InvalidDimension);
}
