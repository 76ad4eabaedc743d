use rand::Rng;
use robin_map::HashMap;

/// Fills a table to just under its load-factor threshold repeatedly,
/// printing the capacity and load factor settled on at each round.
/// Useful for eyeballing how aggressively the table grows under a
/// sustained insertion workload, without reaching into private
/// per-slot displacement bookkeeping.
fn main() {
    let mut map: HashMap<i32, ()> = HashMap::new();
    assert_eq!(map.len(), 0);

    let mut rng = rand::thread_rng();
    let target_len = 2 << 16;

    for round in 0..50 {
        while map.len() < target_len {
            map.insert(rng.gen(), ());
        }
        println!(
            "round {}: len={} capacity={} load_factor={:.3}",
            round,
            map.len(),
            map.capacity(),
            map.load_factor()
        );
        map.clear();
    }

    println!("final: len={} capacity={}", map.len(), map.capacity());
}
