/// The storage context holding the three namespaces.
///
/// ArSharp has three parallel storage classes (variables, constants, and
/// grand values) with identical mechanics. This module models them as one
/// generic key-value store parameterized by namespace identity, so the
/// declaration and lookup logic exists once instead of three times while the
/// keyspaces stay independent.
///
/// # Responsibilities
/// - Declares the `Namespace` identity enum and its name-extraction offsets.
/// - Stores declared entries, including initializer-less (absent) ones.
/// - Resolves lookups without ever creating entries as a side effect.
pub mod context;
/// The expression evaluator reduces raw expression text to a value.
///
/// ArSharp expressions are not parsed; they are pattern-matched. The
/// evaluator checks a fixed sequence of rules against the raw text (numeric
/// literal, namespace reference, one binary operator at a time) and recurses
/// on the two halves of the first operator it finds. The rule ordering is the
/// semantics: there is no precedence, no associativity, and no failure mode.
///
/// # Responsibilities
/// - Resolves numeric literals and namespace references.
/// - Splits on the first occurrence of each operator, in a fixed order.
/// - Falls back to returning the input text verbatim when nothing matches.
pub mod evaluator;
/// The statement scanner classifies and dispatches program lines.
///
/// The scanner walks the program one line at a time, strips trailing `//`
/// comments, and matches each line against the statement forms by substring
/// containment, in a fixed order. Unrecognized lines are silently skipped;
/// nothing the program text contains can fail the run.
///
/// # Responsibilities
/// - Owns the program text and the storage context for one execution.
/// - Applies the statement checks in their contractual order.
/// - Prints `cout::` payloads to the output sink.
pub mod scanner;
/// The value module defines the runtime data type for evaluation.
///
/// Every ArSharp expression reduces to either a double-precision number or
/// the original, unreduced source text. This module declares that sum type
/// along with the numeric coercion used by arithmetic and the display rules
/// used by `cout::`.
///
/// # Responsibilities
/// - Defines the `Value` enum with its `Number` and `Text` variants.
/// - Coerces text operands to numbers for arithmetic.
/// - Formats values for printing (integral numbers without a fraction).
pub mod value;
