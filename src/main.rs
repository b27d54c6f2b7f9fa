use rand::{rngs::StdRng, SeedableRng};
use sparse_coords::{generate_pairs, render_lines, Params, SEED};
use std::{
    fs,
    io::{self, BufRead},
};

fn main() {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).unwrap();

    let params = Params::parse(&line).unwrap();

    let mut rng = StdRng::seed_from_u64(SEED);
    let pairs = generate_pairs(&mut rng, params.size, params.pair_count());

    for &(x, _) in &pairs {
        if x > 1600 {
            println!("ARAGGHHHH");
        }
    }

    fs::write(params.file_name(), render_lines(&pairs)).unwrap();
}
