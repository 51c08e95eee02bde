//! Diagnostic tree printer.
//!
//! Output is meant for humans debugging a pipeline. Nothing downstream
//! parses it.

use std::ops::ControlFlow;

use wordir_ast::{VisitResult, Visitor, Word, walk_chain};

use crate::optimizer::ROOT_DEPTH;
use crate::{Diagnostics, Warning};

const INDENT: &str = ". ";

/// Renders the tree starting at `head` as indented text.
///
/// Each chain starts on a new line indented by one `". "` per nesting level.
/// Content words print as `"content" ` on their chain's line; a group opens
/// a deeper line and, once done, the parent's line resumes on a fresh line.
/// A word with both content and a group prints its content, then the group;
/// older dumps showed only the content of such words.
///
/// Words with neither content nor a group are reported as
/// [`Warning::EmptyWord`] and skipped. The tree is not modified.
///
/// # Example
///
/// ```rust
/// use wordir_ast::Word;
/// use wordir_core::{Diagnostics, dump};
///
/// let head = Word::chain([
///     Word::from_interned(Some("\\b")),
///     Word::group([Word::from_interned(Some("x"))]),
/// ])
/// .unwrap();
///
/// let text = dump(&head, &mut Diagnostics::new());
/// assert_eq!(text, "\n. \"\\b\" \n. . \"x\" \n. ");
/// ```
pub fn dump(head: &Word<'_>, diagnostics: &mut Diagnostics) -> String {
    let mut dumper = Dumper {
        out: String::new(),
        diagnostics,
    };

    dumper.start_line(ROOT_DEPTH);
    let _ = walk_chain(&mut dumper, head, ROOT_DEPTH);
    dumper.out
}

struct Dumper<'d> {
    out: String,
    diagnostics: &'d mut Diagnostics,
}

impl Dumper<'_> {
    fn start_line(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }
}

impl<'a> Visitor<'a> for Dumper<'_> {
    fn visit_word(&mut self, word: &Word<'a>, depth: usize) -> VisitResult {
        if let Some(content) = word.string() {
            self.out.push('"');
            self.out.push_str(content);
            self.out.push_str("\" ");
        } else if !word.has_child() {
            self.diagnostics.warn(Warning::EmptyWord { depth });
        }
        ControlFlow::Continue(())
    }

    fn enter_group(&mut self, depth: usize) -> VisitResult {
        self.start_line(depth);
        ControlFlow::Continue(())
    }

    fn exit_group(&mut self, depth: usize) -> VisitResult {
        self.start_line(depth - 1);
        ControlFlow::Continue(())
    }
}
