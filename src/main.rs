#![deny(clippy::all)]
#![forbid(unsafe_code)]

use pixel_life::{run_life, CellAutomata, Error, Life, LifeConfig};

fn main() -> Result<(), Error> {
    env_logger::init();
    println!("\n{}", Life::describe());
    println!("\nControls:\nP: pause\nSPACE: frame by frame\nR: randomize screen\nC: clear screen\nESC: close screen");
    run_life(LifeConfig::default())
}
