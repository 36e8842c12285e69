//! Walks through every list operation on a list of integers.
//! Usage: `RUST_LOG=trace cargo run --example walkthrough`

#[path = "../logging.rs"]
mod logging;

use ring_list::{CircularList, Result};

fn data_compare(data: &i32, key: &i32) -> bool {
    data == key
}

fn print_list(list: &CircularList<i32>) {
    println!("cnt: {}", list.len());
    list.traverse(|v| println!("{}", v));
    println!("====================================================");
}

fn main() -> Result<()> {
    logging::init();

    let mut list = CircularList::with_destructor(|v: i32| log::debug!("released {v}"));
    for v in 1..=10 {
        list.prepend(v)?;
    }
    list.traverse(|v| println!("{}", v));
    list.traverse_backward(|v| println!("{}", v));
    print_list(&list);

    list.insert_at(0, 888)?;
    print_list(&list);

    // clamped to the tail
    list.insert_at(200, 9090)?;
    print_list(&list);

    list.insert_at(7, 77)?;
    print_list(&list);

    list.delete_at(3)?;
    print_list(&list);

    list.modify_at(0, 100)?;
    print_list(&list);

    println!("temp: {}", list.retrieve_at(5)?);
    print_list(&list);

    list.delete_by_key(&100, data_compare)?;
    print_list(&list);

    list.modify_by_key(3, &10, data_compare)?;
    print_list(&list);

    println!("temp: {}", list.retrieve_by_key(&4, data_compare)?);
    print_list(&list);

    let modified = list.modify_all_by_key(9, &3, data_compare)?;
    println!("modified: {}", modified);
    print_list(&list);

    match list.find_all_indices(&9, data_compare)? {
        Some(indices) => {
            println!("cnt: {}", indices.len());
            indices.traverse(|index| println!("index = {}", index));
        }
        None => println!("no match"),
    }
    println!("====================================================");

    let removed = list.delete_all_by_key(&9, data_compare)?;
    println!("removed: {}", removed);
    print_list(&list);

    list.clear();
    println!("cnt: {}", list.len());
    Ok(())
}
