//! Comments as GLS comment lines.

use tsgls_common::{CommentRange, get_comment_ranges};
use tsgls_ir::command_names::{COMMENT_BLOCK, COMMENT_BLOCK_END, COMMENT_BLOCK_START, COMMENT_LINE};
use tsgls_ir::{Fragment, IrCommand, Output, Transformation};
use tsgls_syntax::NodeArena;

/// One transformation per comment in the source text, in source order.
pub fn visit_each_comment(arena: &NodeArena) -> Vec<Fragment> {
    let source = arena.source_text.as_str();
    get_comment_ranges(source)
        .iter()
        .map(|comment| Fragment::Transformation(comment_transformation(source, comment)))
        .collect()
}

fn comment_transformation(source: &str, comment: &CommentRange) -> Transformation {
    let lines = comment.body_lines(source);
    let output = if comment.is_multi_line {
        let mut output = Vec::with_capacity(lines.len() + 2);
        output.push(Output::Command(IrCommand::new(COMMENT_BLOCK_START)));
        output.extend(
            lines
                .into_iter()
                .map(|line| Output::Command(IrCommand::new(COMMENT_BLOCK).arg(line))),
        );
        output.push(Output::Command(IrCommand::new(COMMENT_BLOCK_END)));
        output
    } else {
        let text = lines.into_iter().next().unwrap_or_default();
        vec![Output::Command(IrCommand::new(COMMENT_LINE).arg(text))]
    };
    Transformation::new(comment.span(), output)
}
