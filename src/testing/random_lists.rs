use crate::CircularList;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One step of a random script.
#[derive(Clone, Copy, Debug)]
pub enum Op {
    Append(i32),
    Prepend(i32),
    InsertAt(usize, i32),
    DeleteAt(usize),
    ModifyAt(usize, i32),
    DeleteAllByKey(i32),
}

/// Generates `len` random operations. Values are drawn from a small range so
/// that keyed operations actually hit duplicates.
#[allow(dead_code)]
pub fn random_ops(len: usize, seed: usize) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut ops = Vec::with_capacity(len);

    for _ in 0..len {
        let v = rng.random_range(0..8);
        let i = rng.random_range(0..16);
        let op = match rng.random_range(0..10) {
            0..=2 => Op::Append(v),
            3 | 4 => Op::Prepend(v),
            5 | 6 => Op::InsertAt(i, v),
            7 => Op::DeleteAt(i),
            8 => Op::ModifyAt(i, v),
            _ => Op::DeleteAllByKey(v),
        };
        ops.push(op);
    }

    ops
}

/// Applies `op` to both the list and a `Vec` model of it.
#[allow(dead_code)]
pub fn apply(list: &mut CircularList<i32>, model: &mut Vec<i32>, op: Op) {
    match op {
        Op::Append(v) => {
            list.append(v).unwrap();
            model.push(v);
        }
        Op::Prepend(v) => {
            list.prepend(v).unwrap();
            model.insert(0, v);
        }
        Op::InsertAt(i, v) => {
            list.insert_at(i, v).unwrap();
            model.insert(i.min(model.len()), v);
        }
        Op::DeleteAt(i) => {
            let res = list.delete_at(i);
            if i < model.len() {
                assert!(res.is_ok());
                model.remove(i);
            } else {
                assert!(res.is_err());
            }
        }
        Op::ModifyAt(i, v) => {
            let res = list.modify_at(i, v);
            if i < model.len() {
                assert!(res.is_ok());
                model[i] = v;
            } else {
                assert!(res.is_err());
            }
        }
        Op::DeleteAllByKey(v) => {
            let before = model.len();
            model.retain(|&x| x != v);
            let removed = list.delete_all_by_key(&v, |x, k| x == k);
            match removed {
                Ok(n) => assert_eq!(n, before - model.len()),
                Err(_) => assert_eq!(before, model.len()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debugging::check_ring;

    #[test]
    fn test_random_scripts_match_model() {
        for seed in 0..50 {
            let mut list = CircularList::new();
            let mut model = Vec::new();
            for op in random_ops(200, seed) {
                apply(&mut list, &mut model, op);
                assert!(check_ring(&list), "seed {seed}, after {op:?}");
                assert_eq!(list.len(), model.len());
            }
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);

            let mut backward = Vec::new();
            list.traverse_backward(|v| backward.push(*v));
            let mut expected = model.clone();
            if !expected.is_empty() {
                expected[1..].reverse();
            }
            assert_eq!(backward, expected);
        }
    }

    #[test]
    fn test_random_scripts_are_reproducible() {
        let a = format!("{:?}", random_ops(30, 7));
        let b = format!("{:?}", random_ops(30, 7));
        assert_eq!(a, b);
    }
}
