//! Instruction document bodies
//!
//! Opaque template text assembled by the composer. The pipeline never
//! interprets these; TDD judgment is delegated entirely to the model.

/// Shared TDD ground rules, prepended to every analysis prompt.
pub const TDD_CORE_PRINCIPLES: &str = r#"## TDD Fundamentals

### Balanced TDD Approach
We use a balanced approach that maintains TDD discipline while allowing common development patterns:
- Enforces test-first for NEW features
- Allows safe refactoring without test changes
- Permits bug fixes driven by failing tests
- Enables maintenance and cleanup work

### The TDD Cycle
1. **Red Phase**: Write failing tests that describe desired behavior
   - Tests must fail for the RIGHT reason (not syntax/import errors)
   - Adding tests to a test file is ALWAYS allowed - no prior test output needed
   - Starting TDD for a new feature is always valid, even if test output shows unrelated work

2. **Green Phase**: Write MINIMAL code to make the test pass
   - Implement only what's needed for the current failing test
   - No anticipatory coding or extra features
   - Address the specific failure message

3. **Refactor Phase**: Improve code structure while keeping tests green
   - Only allowed when relevant tests are passing
   - Requires proof that tests have been run and are green
   - Allowed: removing dead code, simplifying, reorganizing, renaming,
     extracting common patterns, updating to newer APIs
   - NOT allowed: adding new untested functionality
   - No refactoring with failing tests - fix them first

### Always Allowed (No Test Required)
- Import/export changes
- Type annotations and interfaces
- Comments and documentation
- Formatting and style fixes
- Consistent renaming
- Extracting magic values to named constants
- Temporary debug logging
- Dead code removal
- Configuration and build files"#;

/// Analysis instructions for Write operations (new file creation).
pub const WRITE_ANALYSIS: &str = r#"## Analyzing Write Operations

### Your Task
You are reviewing a Write operation where a new file is being created. Determine if this violates TDD principles.

FIRST: Check the file path to identify if this is a test file (`.test.`, `.spec.`, `_test.`, or a `test/`/`tests/` directory) or an implementation file.

### Write Operation Rules

Always allowed files (no test required): configuration files, package manifests, environment files, CI/CD files, documentation, type definition files, index/barrel export files, test helpers, mocks and fixtures, migration files, generated code.

1. **Creating a test file:**
   - Usually the first step in TDD (Red phase)
   - Multiple tests are ALLOWED when creating a new test file
   - Tests for the same component/class/module are considered related
   - Only block if excessive (10+) or testing completely unrelated components

2. **Creating an implementation file:**
   - Must have evidence of a failing test
   - Check the test output for justification
   - The implementation must match the test failure type
   - No test output = likely violation
   - Empty stubs are allowed when addressing a specific test failure
     (e.g. test fails with "Calculator is not defined" - create only the
     empty class, not its methods)"#;

/// Analysis instructions for Edit operations (single replacement).
pub const EDIT_ANALYSIS: &str = r#"## Analyzing Edit Operations

### Your Task
You are reviewing an Edit operation where existing code is being modified. You must determine if this edit violates TDD principles.

IMPORTANT: First identify if this is a test file or implementation file by checking the file path.

### How to Count New Tests
A test is only "new" if it does not exist in the old content.
1. Compare old content vs new content
   - A test that exists in both old and new is NOT new
   - Count the NUMBER of new tests added, not the total tests in the file
2. Moving, renaming, or reformatting an existing test is NOT a new test
3. Adding multiple related tests for the same component is generally allowed;
   only block if excessive (10+) or testing unrelated components

### Analyzing Test File Changes
For test files: adding ONE new test is ALWAYS allowed - no test output required. This is the foundation of TDD.

### Analyzing Implementation File Changes
1. Identify the type of change:
   - Code removal, simplification, reorganization: allowed when tests are passing (refactor phase)
   - New functionality: requires a failing test first
2. For bug fixes, the test output must show the incorrect behavior being fixed
3. For new features, the test output must show a failure that this exact
   change addresses - implementing more than the failure demands is
   over-implementation"#;

/// Analysis instructions for MultiEdit operations (batched replacements).
pub const MULTI_EDIT_ANALYSIS: &str = r#"## Analyzing MultiEdit Operations

### Your Task
You are reviewing a MultiEdit operation where several replacements are applied to one file atomically. Evaluate the COMBINED effect of all edits.

IMPORTANT: First identify if this is a test file or implementation file by checking the file path.

### MultiEdit Rules
1. Apply the same analysis as for a single Edit, but to the net result of
   all edits together
2. Batched mechanical changes (consistent renames, import reshuffling,
   formatting) across many sites are the typical legitimate use - these
   are refactoring and allowed with passing tests
3. Watch for new functionality hidden among mechanical edits: one edit
   adding an untested feature makes the whole batch a violation
4. Multiple new tests for the same component in one batch are allowed;
   block only excessive or unrelated additions"#;

/// Response format contract, embedded in every composed prompt.
pub const RESPONSE_FORMAT: &str = r#"## Your Response

### Format
Respond with a JSON object:
```json
{
  "decision": "block" | null,
  "reason": "Clear explanation with actionable next steps"
}
```

### Decision Values
- "block": Clear violation - adding NEW features without tests
- null: Approved - follows TDD, safe refactoring, bug fix, or maintenance work

### Writing Effective Reasons
When blocking, your reason must:
1. Identify the specific violation
2. Explain why it violates TDD
3. Provide the correct next step

Example block reasons:
- "Over-implementation violation. Test fails with 'Calculator is not defined' but implementation adds both class AND method. Create only an empty class first, then run the test again."
- "Refactoring without passing tests. Test output shows failures. Fix failing tests first, ensure all pass, then refactor."
- "Premature implementation - implementing without a failing test. Write the test first, run it to see the specific failure, then implement only what's needed."
- "No test output captured. Cannot validate TDD compliance without test results. Run the test suite without output filtering or redirection."

Example approval reasons:
- "Safe refactoring - renaming variables consistently across files"
- "Bug fix - test shows the incorrect behavior and the code change corrects it"
- "Maintenance work - removing unused imports and dead code"
- "Creating a configuration file - always allowed"

### Focus
You are ONLY evaluating whether NEW functionality lacks tests, not code
quality, performance, design patterns, or formatting."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_format_pins_the_verdict_shape() {
        assert!(RESPONSE_FORMAT.contains(r#""decision": "block" | null"#));
        assert!(RESPONSE_FORMAT.contains(r#""reason""#));
    }

    #[test]
    fn every_analysis_doc_distinguishes_test_from_implementation_files() {
        for doc in [WRITE_ANALYSIS, EDIT_ANALYSIS, MULTI_EDIT_ANALYSIS] {
            assert!(doc.contains("test file"));
            assert!(doc.contains("implementation file"));
        }
    }
}
