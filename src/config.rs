use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "src/rom/sharp pc-1403 ROM.csv";
pub const DEFAULT_OUTPUT: &str = "src/rom/sharp pc-1403 ROM.rom";

/// Where to read the dump from and where to put the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}
