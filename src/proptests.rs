use proptest::prelude::*;

use crate::CircularList;
use crate::debugging::check_ring;

fn int_equals(data: &i32, key: &i32) -> bool {
    data == key
}

fn build(vals: &[i32]) -> CircularList<i32> {
    let mut list = CircularList::new();
    for &v in vals {
        list.append(v).unwrap();
    }
    list
}

fn to_vec(list: &CircularList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

proptest! {
    #[test]
    fn ring_closes_after_inserts(vals in prop::collection::vec(any::<i32>(), 0..64),
                                 at in prop::collection::vec(0usize..80, 0..64)) {
        let mut list = build(&vals);
        for (i, &index) in at.iter().enumerate() {
            list.insert_at(index, i as i32).unwrap();
        }
        prop_assert!(check_ring(&list));
        prop_assert_eq!(list.len(), vals.len() + at.len());
        prop_assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn prepend_equals_insert_at_zero(vals in prop::collection::vec(any::<i32>(), 0..32), x in any::<i32>()) {
        let mut a = build(&vals);
        let mut b = build(&vals);
        a.prepend(x).unwrap();
        b.insert_at(0, x).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn insert_past_tail_equals_append(vals in prop::collection::vec(any::<i32>(), 0..32),
                                      extra in 0usize..100, x in any::<i32>()) {
        let mut a = build(&vals);
        let mut b = build(&vals);
        a.insert_at(vals.len() + extra, x).unwrap();
        b.append(x).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn retrieve_returns_modified_value(vals in prop::collection::vec(any::<i32>(), 1..32),
                                       pick in any::<prop::sample::Index>(), x in any::<i32>()) {
        let mut list = build(&vals);
        let i = pick.index(vals.len());
        list.modify_at(i, x).unwrap();
        prop_assert_eq!(list.retrieve_at(i), Ok(x));
    }

    #[test]
    fn delete_removes_exactly_one(vals in prop::collection::vec(any::<i32>(), 1..32),
                                  pick in any::<prop::sample::Index>()) {
        let mut list = build(&vals);
        let i = pick.index(vals.len());
        list.delete_at(i).unwrap();

        let mut expected = vals.clone();
        expected.remove(i);
        prop_assert_eq!(to_vec(&list), expected);
        prop_assert!(check_ring(&list));
    }

    #[test]
    fn find_returns_smallest_match(vals in prop::collection::vec(0i32..6, 0..32), key in 0i32..6) {
        let list = build(&vals);
        match vals.iter().position(|&v| v == key) {
            Some(i) => {
                prop_assert_eq!(list.find_match_index(&key, int_equals), Ok(i));
            }
            None => {
                prop_assert!(list.find_match_index(&key, int_equals).is_err());
            }
        }

        let all: Vec<usize> = (0..vals.len()).filter(|&i| vals[i] == key).collect();
        let found = list
            .find_all_indices(&key, int_equals)
            .unwrap()
            .map(|indices| indices.iter().copied().collect::<Vec<_>>())
            .unwrap_or_default();
        prop_assert_eq!(found, all);
    }

    #[test]
    fn delete_all_leaves_no_match(vals in prop::collection::vec(0i32..4, 0..32), key in 0i32..4) {
        let mut list = build(&vals);
        let _ = list.delete_all_by_key(&key, int_equals);
        let expected: Vec<i32> = vals.iter().copied().filter(|&v| v != key).collect();
        prop_assert_eq!(to_vec(&list), expected);
        prop_assert!(check_ring(&list));
    }
}
