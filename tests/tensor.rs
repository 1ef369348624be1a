use matlang::{
    Slice, Tensor, TensorView, ValueError,
    interpreter::evaluator::{
        arena::TransientArena,
        binary::{add, mul, sub},
    },
};
use pretty_assertions::assert_eq;

fn nested() -> Tensor {
    Tensor::from(vec![Tensor::from(vec![1.0, 2.0]), Tensor::Scalar(3.0)])
}

#[test]
fn display_formats() {
    assert_eq!(Tensor::Scalar(20.0).to_string(), "20");
    assert_eq!(Tensor::Scalar(-1.5).to_string(), "-1.5");
    assert_eq!(nested().to_string(), "[[1, 2], 3]");
    assert_eq!(Tensor::Container(Vec::new()).to_string(), "[]");
}

#[test]
fn size_of_scalar_is_type_mismatch() {
    assert_eq!(nested().size(), Ok(2));
    assert_eq!(Tensor::Scalar(1.0).size(), Err(ValueError::TypeMismatch));
}

#[test]
fn addition_recurses_into_nested_containers() {
    let sum = add(&nested(), &nested()).unwrap();
    assert_eq!(sum.to_string(), "[[2, 4], 6]");

    let difference = sub(&nested(), &nested()).unwrap();
    assert_eq!(difference.to_string(), "[[0, 0], 0]");
}

#[test]
fn addition_never_broadcasts_scalars() {
    assert_eq!(add(&Tensor::Scalar(1.0), &nested()), Err(ValueError::SizeMismatch));
    assert_eq!(sub(&nested(), &Tensor::Scalar(1.0)), Err(ValueError::SizeMismatch));
}

#[test]
fn multiplication_broadcasts_scalars_on_either_side() {
    let k = Tensor::Scalar(10.0);

    assert_eq!(mul(&nested(), &k).unwrap().to_string(), "[[10, 20], 30]");
    assert_eq!(mul(&k, &nested()).unwrap().to_string(), "[[10, 20], 30]");
    assert_eq!(mul(&k, &k), Ok(Tensor::Scalar(100.0)));
}

#[test]
fn multiplying_two_containers_is_type_mismatch() {
    let a = Tensor::from(vec![1.0, 2.0]);
    assert_eq!(mul(&a, &a), Err(ValueError::TypeMismatch));
}

#[test]
fn views_take_part_in_arithmetic() {
    let mut items = vec![Tensor::Scalar(1.0), Tensor::Scalar(2.0), Tensor::Scalar(3.0)];
    let view = TensorView::new(&mut items, Slice::new(vec![2, 0])).unwrap();

    assert_eq!(view.to_tensor().to_string(), "[3, 1]");
    assert_eq!(add(&view, &Tensor::from(vec![10.0, 10.0])).unwrap().to_string(), "[13, 11]");
    assert_eq!(mul(&view, &Tensor::Scalar(2.0)).unwrap().to_string(), "[6, 2]");
}

#[test]
fn view_rejects_out_of_bounds_slices() {
    let mut items = vec![Tensor::Scalar(1.0)];
    let error = TensorView::new(&mut items, Slice::new(vec![0, 1])).unwrap_err();

    assert_eq!(error, ValueError::IndexOutOfBounds { index: 1, size: 1 });
}

#[test]
fn update_with_container_replaces_each_slot() {
    let mut items = vec![Tensor::Scalar(1.0), Tensor::Scalar(2.0), Tensor::Scalar(3.0)];
    let mut view = TensorView::new(&mut items, Slice::new(vec![1, 2])).unwrap();

    view.update(&Tensor::from(vec![Tensor::from(vec![7.0]), Tensor::Scalar(8.0)])).unwrap();
    assert_eq!(Tensor::from(items).to_string(), "[1, [7], 8]");
}

#[test]
fn update_size_mismatch_writes_nothing() {
    let mut items = vec![Tensor::Scalar(1.0), Tensor::Scalar(2.0)];
    let mut view = TensorView::new(&mut items, Slice::full(2)).unwrap();

    assert_eq!(view.update(&Tensor::from(vec![5.0])), Err(ValueError::SizeMismatch));
    assert_eq!(Tensor::from(items).to_string(), "[1, 2]");
}

#[test]
fn scalar_update_skips_container_slots() {
    let mut items = vec![Tensor::from(vec![1.0, 2.0]), Tensor::Scalar(3.0), Tensor::Scalar(4.0)];
    let mut view = TensorView::new(&mut items, Slice::new(vec![0, 1])).unwrap();

    view.update(&Tensor::Scalar(0.0)).unwrap();
    assert_eq!(Tensor::from(items).to_string(), "[[1, 2], 0, 4]");
}

#[test]
fn mul_assign_works_in_place() {
    let mut scalar = Tensor::Scalar(4.0);
    scalar.mul_assign(&Tensor::Scalar(-1.0)).unwrap();
    assert_eq!(scalar, Tensor::Scalar(-4.0));

    let mut container = nested();
    container.mul_assign(&Tensor::Scalar(-1.0)).unwrap();
    assert_eq!(container.to_string(), "[[-1, -2], -3]");

    assert_eq!(container.mul_assign(&nested()), Err(ValueError::TypeMismatch));
}

#[test]
fn arena_slots_survive_take_until_cleared() {
    let mut arena = TransientArena::new();
    let first = arena.alloc(Tensor::Scalar(1.0));
    let second = arena.alloc(nested());

    assert_eq!(arena.take(first), Some(Tensor::Scalar(1.0)));
    assert_eq!(arena.get(first), Some(&Tensor::Scalar(0.0)));
    assert_eq!(arena.get(second), Some(&nested()));
    assert_eq!(arena.len(), 2);

    arena.clear();
    assert!(arena.is_empty());
    assert_eq!(arena.get(second), None);
}
