use std::io::{self, Write};

use markov_gen_core::model::generator::{Generator, MAX_OUTPUT};
use markov_gen_core::model::state_table::StateTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Controlled through RUST_LOG; the generated text itself always
    // goes to stdout, never the logger.
    env_logger::init();

    // Consume stdin to exhaustion: the model is fully built before any
    // output is produced.
    let stdin = io::stdin();
    let table = StateTable::from_reader(stdin.lock())?;
    log::debug!("state table built: {} prefix windows", table.len());

    // Walk the table, writing each token as soon as it is chosen.
    let mut generator = Generator::new(table);
    let mut rng = rand::rng();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let emitted = generator.write_sequence(MAX_OUTPUT, &mut rng, &mut out)?;
    out.flush()?;
    log::debug!("generated {} tokens", emitted);

    Ok(())
}
