//! Line/column lookup for diagnostic rendering.
//!
//! Builds a table of line-start offsets once per document for O(log L)
//! lookups.

use yel_ir::Span;

use crate::Diagnostic;

#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineIndex {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(newline_offsets(source.as_bytes()).map(|i| (i + 1) as u32));
        LineIndex { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (idx as u32) + 1
    }

    /// 1-based `(line, column)`, with the column counted in characters.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// `line:col: <diagnostic>`, the compact one-line form.
    pub fn render(&self, source: &str, diagnostic: &Diagnostic) -> String {
        let (line, col) = self.line_col(source, diagnostic.span.start);
        format!("{line}:{col}: {diagnostic}")
    }

    /// Span of the full line containing `offset`, excluding the line break.
    pub fn line_span(&self, source: &str, offset: u32) -> Span {
        let line = self.line(offset) as usize;
        let start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let mut end = self
            .offsets
            .get(line)
            .map_or(source.len() as u32, |next| next - 1);
        if end > start && source.as_bytes().get(end as usize - 1) == Some(&b'\r') {
            end -= 1;
        }
        Span::new(start, end)
    }
}

fn newline_offsets(bytes: &[u8]) -> impl Iterator<Item = usize> + '_ {
    bytes
        .iter()
        .enumerate()
        .filter_map(|(i, &b)| (b == b'\n').then_some(i))
}

#[cfg(test)]
mod tests;
