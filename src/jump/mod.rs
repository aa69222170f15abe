//! Jump target resolution.
//!
//! Turns the raw text of the jump prompt into a concrete line target.
//! A target is either absolute (`"42"` — a one-based line number) or
//! relative (`"+5"` / `"-3"` — an offset from the line the prompt was
//! opened on). Resolution is a pure mapping with no state: the caller
//! re-resolves the full prompt text on every change, always against the
//! same origin line.

/// How a jump target was expressed.
///
/// Callers use this to pick scroll behavior: absolute jumps reveal the
/// target centered in the viewport, relative previews leave the viewport
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// A literal one-based line number.
    Absolute,
    /// A signed offset from the origin line.
    Relative,
}

/// A resolved jump destination.
///
/// `line` is a zero-based index into the document. No upper bound is
/// applied here — the resolver knows nothing about document length, so
/// callers clamp against it when applying the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTarget {
    /// Zero-based destination line.
    pub line: usize,
    /// Absolute or relative classification.
    pub kind: JumpKind,
}

impl JumpTarget {
    /// Whether this target was expressed as a literal line number.
    pub const fn is_absolute(&self) -> bool {
        matches!(self.kind, JumpKind::Absolute)
    }
}

/// Resolve the prompt text against the one-based line the prompt was
/// opened on.
///
/// Returns `None` for empty (or whitespace-only) input — no target yet,
/// the caller should do nothing. Every other input resolves: malformed
/// numeric text falls back to a delta of `0` in the signed branches and
/// to line `1` in the absolute branch, so the function is total over
/// arbitrary strings.
///
/// # Example
///
/// ```
/// use lineleap::jump::{resolve, JumpKind};
///
/// let target = resolve("+5", 10).unwrap();
/// assert_eq!(target.line, 14);
/// assert_eq!(target.kind, JumpKind::Relative);
///
/// let target = resolve("42", 10).unwrap();
/// assert_eq!(target.line, 41);
/// assert_eq!(target.kind, JumpKind::Absolute);
/// ```
pub fn resolve(input: &str, current_line: usize) -> Option<JumpTarget> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // One-based origin to zero-based index.
    let origin = current_line.saturating_sub(1);

    let target = if let Some(rest) = input.strip_prefix('+') {
        // A `usize` parse rejects a negative-looking remainder ("+-3"),
        // so the fallback keeps the delta non-negative and the sum can
        // never land below the origin — no lower clamp needed here.
        let delta = rest.parse::<usize>().unwrap_or(0);
        JumpTarget {
            line: origin.saturating_add(delta),
            kind: JumpKind::Relative,
        }
    } else if let Some(rest) = input.strip_prefix('-') {
        let delta = rest.parse::<usize>().unwrap_or(0);
        JumpTarget {
            line: origin.saturating_sub(delta),
            kind: JumpKind::Relative,
        }
    } else {
        let number = input.parse::<usize>().unwrap_or(1);
        JumpTarget {
            line: number.saturating_sub(1),
            kind: JumpKind::Absolute,
        }
    };

    Some(target)
}
