use crate::tasks::find::Find;
use anyhow::{Result, bail};
use pairsum::{GroupConfig, OutputFormat, Value};

/// Arrays from the problem statement.
pub const EXAMPLE_ARRAYS: &[&[Value]] = &[
    &[6, 4, 12, 10, 22, 54, 32, 42, 21, 11],
    &[4, 23, 65, 67, 24, 12, 86],
];

/// Edge cases shown after the problem-statement examples.
pub const ADDITIONAL_TEST_CASES: &[&[Value]] =
    &[&[], &[1, 2, 3], &[5, 5, 5, 5], &[1, 2, 3, 4, 5, 6, 7, 8]];

#[derive(Debug)]
pub struct Examples {}

impl Examples {
    /// Example arrays are numbered from 1.
    pub fn get(id: usize) -> Option<&'static [Value]> {
        id.checked_sub(1)
            .and_then(|idx| EXAMPLE_ARRAYS.get(idx))
            .copied()
    }

    /// Run a single example, or every example followed by the additional
    /// test cases when `id` is `None`.
    pub fn run(id: Option<usize>, format: OutputFormat, config: GroupConfig) -> Result<()> {
        match id {
            Some(id) => {
                let Some(array) = Self::get(id) else {
                    bail!("unrecognised example id: {id} (expected 1..={})", EXAMPLE_ARRAYS.len());
                };

                println!("\nRunning Example {id}:");
                println!("Input: A[] = {array:?}");
                println!("Output:");
                Find::run(array.to_vec(), format, config)?;
            }
            None => {
                println!("\n--- Examples from Problem Statement ---");
                for (idx, array) in EXAMPLE_ARRAYS.iter().enumerate() {
                    println!("\nExample {}:", idx + 1);
                    println!("Input: A[] = {array:?}");
                    println!("Output:");
                    Find::run(array.to_vec(), format, config)?;
                }

                println!("\n--- Additional Test Cases ---");
                for (idx, array) in ADDITIONAL_TEST_CASES.iter().enumerate() {
                    println!("\nTest Case {}: {array:?}", idx + 1);
                    Find::run(array.to_vec(), format, config)?;
                }
            }
        }

        Ok(())
    }
}
