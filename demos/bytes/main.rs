//! Stores fixed-size records as raw bytes.
//! Usage: `cargo run --example bytes`

#[path = "../logging.rs"]
mod logging;

use ring_list::{ByteList, Result};

const RECORD: usize = 8;

fn record(id: u32, score: u32) -> [u8; RECORD] {
    let mut buf = [0; RECORD];
    buf[..4].copy_from_slice(&id.to_le_bytes());
    buf[4..].copy_from_slice(&score.to_le_bytes());
    buf
}

fn id_of(payload: &[u8]) -> u32 {
    u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]])
}

fn score_of(payload: &[u8]) -> u32 {
    u32::from_le_bytes([payload[4], payload[5], payload[6], payload[7]])
}

fn same_id(payload: &[u8], id: &u32) -> bool {
    id_of(payload) == *id
}

fn main() -> Result<()> {
    logging::init();

    let mut list = ByteList::create(RECORD, |payload| {
        log::info!("freeing record {}", id_of(&payload));
    })?;

    for id in 1..=5 {
        list.append(&record(id, id * 10))?;
    }
    list.modify_by_key(&record(3, 99), &3, same_id)?;

    let mut out = [0u8; RECORD];
    list.retrieve_by_key(&mut out, &3, same_id)?;
    println!("record 3 has score {}", score_of(&out));

    if let Err(err) = list.append(&[0; 3]) {
        println!("rejected short record: {}", err);
    }

    list.delete_by_key(&1, same_id)?;
    list.traverse(|payload| println!("{} -> {}", id_of(payload), score_of(payload)));
    Ok(())
}
