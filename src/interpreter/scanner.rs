use std::io::{self, Write};

use log::debug;

use crate::{
    interpreter::{
        context::{Context, Namespace},
        evaluator::evaluate,
    },
    util::text::strip_affixes,
};

/// The statement scanner: owns one program and its storage context.
///
/// Each line is matched against the statement forms by substring
/// containment, in a fixed order that is part of the language contract:
/// comment stripping, the `s;` skip, `var{`, `const{`, `g[`, `cout::`, and
/// finally the silent no-op. These are containment checks, not anchored
/// prefixes — a `var{` anywhere in a line makes it a variable declaration,
/// even inside what looks like a print statement.
///
/// Executing a program can only fail if the output sink fails; the program
/// text itself cannot produce an error.
pub struct Interpreter {
    code: String,
    context: Context,
}

impl Interpreter {
    /// Creates an interpreter for the given program text (newline-separated
    /// lines). Nothing is executed yet.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(),
               context: Context::new() }
    }

    /// Runs the whole program to completion, printing to stdout.
    ///
    /// # Errors
    /// Returns an error only if writing to stdout fails.
    pub fn execute(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        self.execute_to(&mut handle)
    }

    /// Runs the whole program, printing to the given sink.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    ///
    /// # Examples
    /// ```
    /// use arsharp::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new("g[score]=4*10\ncout::34+8 ::endl");
    /// let mut output = Vec::new();
    /// interpreter.execute_to(&mut output).unwrap();
    ///
    /// assert_eq!(output, b"42\n".to_vec());
    /// ```
    pub fn execute_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for (index, raw) in self.code.lines().enumerate() {
            Self::run_line(&mut self.context, raw, index + 1, out)?;
        }

        Ok(())
    }

    /// The storage context, reflecting every declaration executed so far.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    fn run_line<W: Write>(context: &mut Context,
                          raw: &str,
                          number: usize,
                          out: &mut W)
                          -> io::Result<()> {
        // Everything from the first `//` on is discarded before any check.
        let line = match raw.find("//") {
            Some(position) => &raw[..position],
            None => raw,
        };

        // Legacy comment marker: `s;` anywhere skips the whole line, even
        // when it appears incidentally inside an otherwise valid statement.
        if line.contains("s;") {
            debug!("line {number}: skipped, contains the legacy comment marker \"s;\"");
            return Ok(());
        }

        for namespace in [Namespace::Variable, Namespace::Constant, Namespace::Grand] {
            if line.contains(namespace.marker()) {
                Self::declare(context, line, namespace);
                return Ok(());
            }
        }

        if line.contains("cout::") {
            // Fixed-offset payload extraction: the line is assumed to be
            // exactly `cout::<expr>::endl`. The payload is not trimmed.
            let payload = strip_affixes(line, 6, 7);
            let value = evaluate(payload, context);
            return writeln!(out, "{value}");
        }

        if !line.trim().is_empty() {
            debug!("line {number}: unrecognized, ignored: {line:?}");
        }

        Ok(())
    }

    /// Handles all three declaration forms; only the namespace differs.
    ///
    /// The line splits on its first `=`. The name comes from the left side
    /// via the namespace's fixed offsets; the right side, if present, is
    /// trimmed and evaluated. Without an initializer the name is recorded
    /// with an absent value, which later lookups treat as undeclared.
    fn declare(context: &mut Context, line: &str, namespace: Namespace) {
        let (head, initializer) = match line.split_once('=') {
            Some((head, tail)) => (head, Some(tail)),
            None => (line, None),
        };

        let name = namespace.extract_name(head).to_string();
        let value = initializer.map(|expression| evaluate(expression.trim(), context));
        context.declare(namespace, name, value);
    }
}
