use super::*;

use proptest::prelude::*;

const SLOTS: usize = 16;

#[derive(Clone, Debug)]
enum Op {
    Push(usize, usize),
    PopLeft(usize),
    RightForLeft(usize),
    LeftForRight(usize),
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let slot = 0..SLOTS;
    let op = prop_oneof![
        4 => (slot.clone(), slot.clone()).prop_map(|(left, right)| Op::Push(left, right)),
        2 => slot.clone().prop_map(Op::PopLeft),
        2 => slot.clone().prop_map(Op::RightForLeft),
        1 => slot.prop_map(Op::LeftForRight),
        1 => Just(Op::Clear),
    ];

    prop::collection::vec(op, 0..=256)
}

proptest! {
    // Drives random op sequences against a vector model. Slot values double
    // as their own indexes so value equality on a looked-up side pins down
    // exactly which arena slot the chain answered.
    #[test]
    fn op_sequence_matches_vec_model(ops in ops_strategy()) {
        let lefts: Vec<usize> = (0..SLOTS).collect();
        let rights: Vec<usize> = (0..SLOTS).collect();
        let mut chain = Chain::new();
        let mut model: Vec<(usize, usize)> = Vec::new();

        for op in ops {
            match op {
                Op::Push(left, right) => {
                    chain.push(&lefts[left], &rights[right]);
                    model.push((left, right));
                }
                Op::PopLeft(left) => {
                    let expected = model
                        .iter()
                        .rposition(|(candidate, _)| *candidate == left)
                        .map(|position| model.remove(position).1);

                    prop_assert_eq!(chain.pop_left(&lefts[left]).copied(), expected);
                }
                Op::RightForLeft(left) => {
                    let expected = model
                        .iter()
                        .rev()
                        .find(|(candidate, _)| *candidate == left)
                        .map(|(_, right)| *right);

                    prop_assert_eq!(chain.right_for_left(&lefts[left]).copied(), expected);
                }
                Op::LeftForRight(right) => {
                    let expected = model
                        .iter()
                        .rev()
                        .find(|(_, candidate)| *candidate == right)
                        .map(|(left, _)| *left);

                    prop_assert_eq!(chain.left_for_right(&rights[right]).copied(), expected);
                }
                Op::Clear => {
                    chain.clear();
                    model.clear();

                    prop_assert!(chain.is_empty());
                }
            }

            prop_assert_eq!(chain.len(), model.len());
        }

        let walked: Vec<(usize, usize)> = chain.iter().map(|(left, right)| (*left, *right)).collect();
        let expected: Vec<(usize, usize)> = model.iter().rev().copied().collect();

        prop_assert_eq!(walked, expected);
    }

    // Pushing one left repeatedly stacks shadows that pop back off in
    // reverse order of pushing.
    #[test]
    fn pops_unwind_pushes(pushed in prop::collection::vec(0..SLOTS, 1..=32)) {
        let left = 0_usize;
        let rights: Vec<usize> = (0..SLOTS).collect();
        let mut chain = Chain::new();

        for right in &pushed {
            chain.push(&left, &rights[*right]);
        }

        for right in pushed.iter().rev() {
            prop_assert_eq!(chain.pop_left(&left).copied(), Some(*right));
        }

        prop_assert_eq!(chain.pop_left(&left), None);
        prop_assert!(chain.is_empty());
    }
}
