//! Prompt composer
//!
//! Assembles the single instruction string a backend client executes:
//! operation evidence first, then the TDD ground rules, the
//! operation-specific analysis document, and the response-format
//! contract. The format instructions are always embedded, so backends
//! without mechanical schema enforcement converge on the same verdict
//! shape as the schema-constrained one.

pub mod templates;

use crate::context::{Operation, ValidationContext};
use std::fmt::Write as _;

/// Compose the full validation prompt for one operation.
#[must_use]
pub fn build_prompt(ctx: &ValidationContext) -> String {
    let mut prompt = String::new();

    push_operation(&mut prompt, &ctx.operation);

    prompt.push_str("\n## Latest Test Output\n\n");
    match ctx.test_output.as_deref() {
        Some(output) => {
            let _ = writeln!(prompt, "```\n{output}\n```");
        }
        None => prompt.push_str("No test output has been captured.\n"),
    }

    if let Some(todos) = ctx.todos.as_deref() {
        let _ = writeln!(prompt, "\n## Current Todo List\n\n{todos}");
    }

    prompt.push('\n');
    prompt.push_str(templates::TDD_CORE_PRINCIPLES);
    prompt.push_str("\n\n");
    prompt.push_str(analysis_document(&ctx.operation));
    prompt.push_str("\n\n");
    prompt.push_str(templates::RESPONSE_FORMAT);

    prompt
}

/// Operation-specific analysis instructions
fn analysis_document(operation: &Operation) -> &'static str {
    match operation {
        Operation::Write { .. } => templates::WRITE_ANALYSIS,
        Operation::Edit { .. } => templates::EDIT_ANALYSIS,
        Operation::MultiEdit { .. } => templates::MULTI_EDIT_ANALYSIS,
    }
}

/// Render the operation evidence: kind, file path, and content blocks
fn push_operation(prompt: &mut String, operation: &Operation) {
    let _ = writeln!(
        prompt,
        "## Proposed {} Operation\n\n### File\n\n`{}`",
        operation.kind(),
        operation.file_path()
    );

    match operation {
        Operation::Write { content, .. } => {
            let _ = writeln!(prompt, "\n### New File Content\n\n```\n{content}\n```");
        }
        Operation::Edit {
            old_string,
            new_string,
            ..
        } => {
            let _ = writeln!(prompt, "\n### Old Content\n\n```\n{old_string}\n```");
            let _ = writeln!(prompt, "\n### New Content\n\n```\n{new_string}\n```");
        }
        Operation::MultiEdit { edits, .. } => {
            for (index, edit) in edits.iter().enumerate() {
                let _ = writeln!(
                    prompt,
                    "\n### Edit {}\n\n#### Old Content\n\n```\n{}\n```\n\n#### New Content\n\n```\n{}\n```",
                    index + 1,
                    edit.old_string,
                    edit.new_string
                );
            }
        }
    }
}
