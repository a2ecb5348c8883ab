#![no_main]

use libfuzzer_sys::fuzz_target;

use pool_hints::{find_hints, find_move_hints, PoolSimulator};
use pool_types::{Stake, Transcoder, TranscoderAddress};

fn address(tag: u8) -> TranscoderAddress {
    let mut bytes = [0u8; 20];
    bytes[19] = tag;
    TranscoderAddress::new(bytes)
}

fn stake(bytes: &[u8]) -> Stake {
    let mut raw = [0u8; 16];
    raw.copy_from_slice(bytes);
    Stake::new(u128::from_le_bytes(raw))
}

// Fuzz the resolvers with arbitrary, possibly unsorted or duplicated pools.
// Header: old tag, new tag, flags, capacity, delta (16 bytes).
// Body: repeated (tag, stake) records of 17 bytes each.
// Nothing here may panic, whatever the input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }

    let old = address(data[0]);
    let new = address(data[1]);
    let flags = data[2];
    let capacity = data[3] as usize;
    let delta = stake(&data[4..20]);

    let mut pool = Vec::new();
    let mut offset = 20;
    while offset + 17 <= data.len() {
        pool.push(Transcoder::new(address(data[offset]), stake(&data[offset + 1..offset + 17])));
        offset += 17;
    }

    let old = ((flags & 1) != 0).then_some(&old);
    let new = ((flags & 2) != 0).then_some(&new);

    let _ = find_hints(&address(data[0]), &pool);
    let outcome = find_move_hints(old, new, delta, &pool);
    assert!(outcome.projected.len() <= pool.len() + 1);

    let limit = ((flags & 4) != 0).then_some(capacity);
    let mut sim = PoolSimulator::new(pool, limit);
    let _ = sim.apply_move(old, new, delta);
    let _ = sim.decrease_stake(&address(data[1]), delta);
    if let Some(limit) = limit {
        assert!(sim.participants().len() <= limit);
    }
});
