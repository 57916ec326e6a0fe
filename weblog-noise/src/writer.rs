use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::generator::{generate_invalid_log_line, generate_log_line};

pub fn write_log_file(
    path: &Path,
    lines: usize,
    invalid_percent: u8,
    seed: Option<u64>,
) -> std::io::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let invalid_chance = f64::from(invalid_percent.min(100)) / 100.0;

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for _ in 0..lines {
        let line = if rng.random_bool(invalid_chance) {
            generate_invalid_log_line(&mut rng)
        } else {
            generate_log_line(&mut rng)
        };
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
