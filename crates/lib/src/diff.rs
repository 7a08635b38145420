//! Line diffs between the current and proposed manifest text.
//!
//! Uses a longest-common-subsequence table, which is plenty for files the size
//! of a `package.json`. Removed lines are emitted before added lines within a
//! changed region.

/// One line of a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
  /// Present in both texts.
  Context(String),
  /// Only in the new text.
  Added(String),
  /// Only in the old text.
  Removed(String),
  /// A run of unchanged lines left out of the output.
  Elided(usize),
}

impl DiffLine {
  /// Marker printed before the line (`+`, `-`, or a space).
  pub fn marker(&self) -> &'static str {
    match self {
      DiffLine::Context(_) | DiffLine::Elided(_) => " ",
      DiffLine::Added(_) => "+",
      DiffLine::Removed(_) => "-",
    }
  }

  pub fn is_change(&self) -> bool {
    matches!(self, DiffLine::Added(_) | DiffLine::Removed(_))
  }
}

/// Compute a line diff from `old` to `new`.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
  let old: Vec<&str> = old.lines().collect();
  let new: Vec<&str> = new.lines().collect();

  // lcs[i][j] is the LCS length of old[i..] and new[j..]
  let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
  for i in (0..old.len()).rev() {
    for j in (0..new.len()).rev() {
      lcs[i][j] = if old[i] == new[j] {
        lcs[i + 1][j + 1] + 1
      } else {
        lcs[i + 1][j].max(lcs[i][j + 1])
      };
    }
  }

  let mut lines = Vec::with_capacity(old.len().max(new.len()));
  let (mut i, mut j) = (0, 0);
  while i < old.len() && j < new.len() {
    if old[i] == new[j] {
      lines.push(DiffLine::Context(old[i].to_string()));
      i += 1;
      j += 1;
    } else if lcs[i + 1][j] >= lcs[i][j + 1] {
      lines.push(DiffLine::Removed(old[i].to_string()));
      i += 1;
    } else {
      lines.push(DiffLine::Added(new[j].to_string()));
      j += 1;
    }
  }
  lines.extend(old[i..].iter().map(|l| DiffLine::Removed(l.to_string())));
  lines.extend(new[j..].iter().map(|l| DiffLine::Added(l.to_string())));

  lines
}

/// Returns true if any line differs.
pub fn has_changes(lines: &[DiffLine]) -> bool {
  lines.iter().any(DiffLine::is_change)
}

/// Keep at most `radius` unchanged lines around each change, collapsing the
/// rest into [`DiffLine::Elided`] markers.
pub fn with_context(lines: Vec<DiffLine>, radius: usize) -> Vec<DiffLine> {
  let change_positions: Vec<usize> = lines
    .iter()
    .enumerate()
    .filter(|(_, l)| l.is_change())
    .map(|(idx, _)| idx)
    .collect();

  let near_change = |idx: usize| {
    change_positions
      .iter()
      .any(|&pos| idx.abs_diff(pos) <= radius)
  };

  let mut out = Vec::new();
  let mut elided = 0;
  for (idx, line) in lines.into_iter().enumerate() {
    if line.is_change() || near_change(idx) {
      if elided > 0 {
        out.push(DiffLine::Elided(elided));
        elided = 0;
      }
      out.push(line);
    } else {
      elided += 1;
    }
  }
  if elided > 0 {
    out.push(DiffLine::Elided(elided));
  }

  out
}

/// Render a diff as plain text, one marker-prefixed line per entry.
pub fn render_plain(lines: &[DiffLine]) -> String {
  let mut out = String::new();
  for line in lines {
    match line {
      DiffLine::Context(text) | DiffLine::Added(text) | DiffLine::Removed(text) => {
        out.push_str(line.marker());
        out.push(' ');
        out.push_str(text);
      }
      DiffLine::Elided(count) => out.push_str(&format!("  ... ({} unchanged lines)", count)),
    }
    out.push('\n');
  }
  out
}
