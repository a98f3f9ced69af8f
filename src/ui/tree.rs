//! Directory trees drawn with box-drawing characters.
//!
//! ```text
//! .
//! ├── [1:0]a.js
//! └─┬ src/
//!   └── [0:2]b.js
//! ```

use super::theme::{Segment, Theme};

/// A directory in a rendered tree.
///
/// Leaves are drawn before sub-directories, each group in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DirectoryNode {
    pub label: Vec<Segment>,
    pub leaves: Vec<Vec<Segment>>,
    pub children: Vec<DirectoryNode>,
}

#[derive(Clone, Copy)]
enum Entry<'a> {
    Leaf(&'a [Segment]),
    Node(&'a DirectoryNode),
}

impl DirectoryNode {
    pub fn new(label: Vec<Segment>) -> Self {
        Self {
            label,
            leaves: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tree root, labelled `.`.
    pub fn root() -> Self {
        Self::new(vec![Segment::plain(".")])
    }

    pub fn add_leaf(&mut self, label: Vec<Segment>) {
        self.leaves.push(label);
    }

    /// Child directory whose label reads `label`, created on first use.
    pub fn child(&mut self, label: Segment) -> &mut DirectoryNode {
        let pos = self
            .children
            .iter()
            .position(|c| c.label.len() == 1 && c.label[0].text == label.text);
        let idx = match pos {
            Some(idx) => idx,
            None => {
                self.children.push(DirectoryNode::new(vec![label]));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.children.is_empty()
    }

    fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.leaves
            .iter()
            .map(|l| Entry::Leaf(l.as_slice()))
            .chain(self.children.iter().map(Entry::Node))
    }

    /// Draw the tree. Every line starts with `indent`; no trailing newline.
    pub fn render(&self, theme: &Theme, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(indent);
        self.render_into(theme, indent, &mut out);
        out.truncate(out.trim_end().len());
        out
    }

    fn render_into(&self, theme: &Theme, prefix: &str, out: &mut String) {
        out.push_str(&theme.paint_all(&self.label));
        out.push('\n');

        let count = self.leaves.len() + self.children.len();
        for (ix, entry) in self.entries().enumerate() {
            let last = ix + 1 == count;
            let more = matches!(entry, Entry::Node(node) if !node.is_empty());

            out.push_str(prefix);
            out.push(if last { '└' } else { '├' });
            out.push('─');
            out.push(if more { '┬' } else { '─' });
            out.push(' ');

            let child_prefix = format!("{prefix}{} ", if last { ' ' } else { '│' });
            match entry {
                Entry::Leaf(label) => {
                    out.push_str(&theme.paint_all(label));
                    out.push('\n');
                }
                Entry::Node(node) => node.render_into(theme, &child_prefix, out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Vec<Segment> {
        vec![Segment::plain(text)]
    }

    #[test]
    fn root_only() {
        let tree = DirectoryNode::root();
        assert_eq!(tree.render(&Theme::plain(), ""), ".");
    }

    #[test]
    fn leaves_then_children() {
        let mut tree = DirectoryNode::root();
        tree.child(Segment::plain("sub/")).add_leaf(leaf("b.js"));
        tree.add_leaf(leaf("a.js"));

        let expected = "\
.
├── a.js
└─┬ sub/
  └── b.js";
        assert_eq!(tree.render(&Theme::plain(), ""), expected);
    }

    #[test]
    fn non_last_child_draws_vertical_rule() {
        let mut tree = DirectoryNode::root();
        let sub = tree.child(Segment::plain("sub/"));
        sub.add_leaf(leaf("b.js"));
        sub.add_leaf(leaf("c.js"));
        tree.child(Segment::plain("lib/")).add_leaf(leaf("d.js"));

        let expected = "\
.
├─┬ sub/
│ ├── b.js
│ └── c.js
└─┬ lib/
  └── d.js";
        assert_eq!(tree.render(&Theme::plain(), ""), expected);
    }

    #[test]
    fn indent_prefixes_every_line() {
        let mut tree = DirectoryNode::root();
        tree.add_leaf(leaf("a.js"));
        tree.child(Segment::plain("sub/")).add_leaf(leaf("b.js"));

        let rendered = tree.render(&Theme::plain(), "   ");
        assert!(rendered.lines().all(|l| l.starts_with("   ")));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn child_reuses_existing_directory() {
        let mut tree = DirectoryNode::root();
        tree.child(Segment::plain("sub/")).add_leaf(leaf("a.js"));
        tree.child(Segment::plain("sub/")).add_leaf(leaf("b.js"));

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].leaves.len(), 2);
    }

    #[test]
    fn empty_directory_has_no_branch_marker() {
        let mut tree = DirectoryNode::root();
        tree.child(Segment::plain("empty/"));

        assert_eq!(tree.render(&Theme::plain(), ""), ".\n└── empty/");
    }
}
