//! Scroll script parsing.

use infinite_grid::Scroll;

/// Invalid character in a scroll script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
  pub position: usize,
  pub found: char,
}

impl std::fmt::Display for ScriptError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "unexpected '{}' at position {} in scroll script (expected U, D, L or R)",
      self.found, self.position
    )
  }
}

impl std::error::Error for ScriptError {}

/// Parses a string of U/D/L/R steps. Case-insensitive; whitespace is skipped.
pub fn parse(script: &str) -> Result<Vec<Scroll>, ScriptError> {
  script
    .chars()
    .enumerate()
    .filter(|(_, c)| !c.is_whitespace())
    .map(|(position, c)| match c.to_ascii_uppercase() {
      'U' => Ok(Scroll::Up),
      'D' => Ok(Scroll::Down),
      'L' => Ok(Scroll::Left),
      'R' => Ok(Scroll::Right),
      found => Err(ScriptError { position, found }),
    })
    .collect()
}
