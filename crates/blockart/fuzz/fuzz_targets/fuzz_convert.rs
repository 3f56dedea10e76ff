#![no_main]

use arbitrary::Arbitrary;
use blockart::{build_grid, compress_row, expand_runs, render, OutputFormat};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).min(64);
    let height = (input.height as usize).min(64);

    // Mismatched buffers must be rejected without panicking
    let Ok(grid) = build_grid(&input.pixels, width, height) else {
        return;
    };

    for row in grid.rows() {
        assert_eq!(expand_runs(&compress_row(row)), row);
    }
    for format in [OutputFormat::Irc, OutputFormat::Raw, OutputFormat::Html] {
        let _ = render(&grid, format);
    }
});
