//! Prints a small ring in DOT format.
//! Usage: `cargo run --example draw | dot -Tsvg > ring.svg`

use ring_list::CircularList;
use ring_list::output::draw_list;

fn main() -> ring_list::Result<()> {
    let mut list = CircularList::new();
    for word in ["alpha", "beta", "gamma", "delta"] {
        list.append(word)?;
    }
    list.insert_at(2, "inserted")?;

    print!("{}", draw_list(&list));
    Ok(())
}
