use crate::domain::models::{Expansion, ExpansionList, RequestSeq};

/// A rendered text element: what the panel shows plus its visible row count.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTarget {
    pub content: String,
    pub rows: usize,
    /// Newest request settled here, success or failure. 0 before any.
    pub settled_seq: RequestSeq,
}

impl Default for TextTarget {
    fn default() -> Self {
        Self {
            content: String::new(),
            rows: 1,
            settled_seq: 0,
        }
    }
}

impl TextTarget {
    pub fn is_stale(&self, seq: RequestSeq) -> bool {
        seq <= self.settled_seq
    }

    /// Marks `seq` as the newest answer for this target. Returns false if a
    /// newer request already settled, in which case the answer is dropped.
    pub fn settle(&mut self, seq: RequestSeq) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.settled_seq = seq;
        true
    }

    /// Shows a single expansion. `rows` is left alone.
    pub fn apply_single(&mut self, seq: RequestSeq, expansion: &Expansion) -> bool {
        if !self.settle(seq) {
            return false;
        }
        self.content = expansion.0.clone();
        true
    }

    /// Shows a list, one expansion per line, and sizes `rows` to fit it.
    pub fn apply_list(&mut self, seq: RequestSeq, list: &ExpansionList) -> bool {
        if !self.settle(seq) {
            return false;
        }
        self.content = list.render_text();
        self.rows = list.len();
        true
    }
}
