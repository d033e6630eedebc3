use anyhow::Result;
use distinct_window::length_of_longest_substring;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Inputs paired with their expected results.
const CASES: [(&str, usize); 5] = [
  ("abcabcbb", 3),
  ("bbbbb", 1),
  ("pwwkew", 3),
  ("aab", 2),
  ("", 0),
];

fn main() -> Result<()> {
  // RUST_LOG wins; otherwise only warnings and errors.
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
    .with(filter)
    .init();

  let mut mismatches = 0;
  for (input, expected) in CASES {
    let output = length_of_longest_substring(input);
    println!("Input: \"{input}\", Output: {output} (Expected: {expected})");

    if output == expected {
      tracing::debug!(input, output, "case passed");
    } else {
      tracing::error!(input, output, expected, "case failed");
      mismatches += 1;
    }
  }

  if mismatches > 0 {
    anyhow::bail!("{mismatches} of {} cases did not match", CASES.len());
  }
  Ok(())
}
