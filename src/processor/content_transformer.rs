//! # Content Transformer Module
//!
//! Line normalization applied to the target content as it is copied below
//! the license header. Every line is emitted with exactly one `\n`; the bytes
//! of the line itself are left alone.

/// Strips the terminator from a raw line and re-terminates it with `\n`.
///
/// A raw line is what `BufRead::read_until(b'\n', ..)` yields: the line bytes
/// followed by an optional `\n`. One `\r` directly before the terminator (or
/// at the end of the final, unterminated line) is treated as part of the
/// terminator.
pub fn normalize_line(line: &mut Vec<u8>) {
  if line.last() == Some(&b'\n') {
    line.pop();
  }
  if line.last() == Some(&b'\r') {
    line.pop();
  }
  line.push(b'\n');
}

/// Normalizes a whole buffer line by line.
///
/// Empty input produces empty output; any other input ends with `\n`.
pub fn normalize_lines(content: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(content.len() + 1);
  let mut line = Vec::new();
  for raw in content.split_inclusive(|b| *b == b'\n') {
    line.clear();
    line.extend_from_slice(raw);
    normalize_line(&mut line);
    out.extend_from_slice(&line);
  }
  out
}
