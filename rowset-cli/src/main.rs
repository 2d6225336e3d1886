//! End-to-end driver: generate additions, then run every encoding stage

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use rowset_core::{decimal_string_encode, index_encode, one_hot_encode, Alphabet};
use rowset_render::render_dataset;

/// Number of addition rows to generate
const ROW_COUNT: usize = 10;

/// Smallest operand value
const MIN_OPERAND: i64 = 10;

/// Largest operand value
const MAX_OPERAND: i64 = 40;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut stdout = io::stdout().lock();
    let mut rng = rand::thread_rng();

    // Generate a dataset of random additions.
    info!(rows = ROW_COUNT, "generating addition dataset");
    let int_dataset = rowset_synth::additions(&mut rng, ROW_COUNT, MIN_OPERAND, MAX_OPERAND)?;
    render_dataset(&mut stdout, &int_dataset)?;

    // Integers -> decimal strings.
    let string_dataset = decimal_string_encode(&int_dataset)?;
    render_dataset(&mut stdout, &string_dataset)?;

    // Decimal strings -> alphabet indices.
    let alphabet = Alphabet::from("0123456789+ ");
    let index_dataset = index_encode(&string_dataset, &alphabet)?;
    render_dataset(&mut stdout, &index_dataset)?;

    // Alphabet indices -> one-hot vectors.
    let one_hot_dataset = one_hot_encode(&index_dataset, alphabet.len())?;
    render_dataset(&mut stdout, &one_hot_dataset)?;

    stdout.flush()?;
    Ok(())
}
