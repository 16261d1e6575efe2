//! Core evaluation logic.

use hashbrown::HashMap;
use smallvec::SmallVec;
use static_assertions::assert_not_impl_any;
use tracing::{debug, trace};

use crate::{
    program::{Body, Function, FunctionId, Line, LineKind, Program, ReferenceId},
    types::{FullType, Type},
    values::{TOO_DEEP, Value},
};

use super::{EvalError, EvaluatorOptions, Invocation, frame::Frame};

/// Evaluator state: the program being run and the memoization cache.
///
/// The cache lives as long as the context and is never pruned. Natives are
/// reference-counted closures, so a context (like its program) stays on the
/// thread that created it.
pub struct Context<'p> {
    program: &'p Program,
    options: EvaluatorOptions,
    cache: HashMap<Invocation, Value>,
}

assert_not_impl_any!(Context<'static>: Send, Sync);

impl<'p> Context<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_options(program, EvaluatorOptions::default())
    }

    pub fn with_options(program: &'p Program, options: EvaluatorOptions) -> Self {
        Self {
            program,
            options,
            cache: HashMap::new(),
        }
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate a root invocation.
    pub fn evaluate(&mut self, invocation: &Invocation) -> Result<Value, EvalError> {
        self.evaluate_at(invocation, 0)
    }

    /// Evaluate `function` applied to `arguments`.
    pub fn call(
        &mut self,
        function: FunctionId,
        arguments: impl IntoIterator<Item = Value>,
    ) -> Result<Value, EvalError> {
        self.evaluate(&Invocation::new(function, arguments))
    }

    /// The memoized result of `invocation`, if it was evaluated before.
    pub fn cached(&self, invocation: &Invocation) -> Option<&Value> {
        self.cache.get(invocation)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub(crate) fn evaluate_at(&mut self, invocation: &Invocation, depth: usize) -> Result<Value, EvalError> {
        if depth > self.options.max_depth {
            debug!(
                function = ?invocation.function,
                depth,
                max_depth = self.options.max_depth,
                "Recursion limit exceeded"
            );
            return Ok(Value::error(TOO_DEEP));
        }

        let program = self.program;
        let function = program
            .get_function(invocation.function)
            .ok_or(EvalError::UnknownFunction(invocation.function))?;

        let cacheable = !function.uncacheable();
        if cacheable {
            if let Some(value) = self.cache.get(invocation) {
                trace!(function = function.name(), depth, "Cache hit");
                return Ok(value.clone());
            }
        }

        if !invocation.is_valid(program) {
            return Err(EvalError::ArityMismatch {
                function: function.name().into(),
                expected: function.arity(),
                found: invocation.arguments.len(),
            });
        }

        let result = match function.body() {
            Body::Native(callback) => callback(invocation.arguments.as_slice()),
            Body::Interpreted(lines) => {
                self.run_body(function, lines, &invocation.arguments, depth)?
            }
        };

        if cacheable {
            trace!(function = function.name(), depth, %result, "Caching result");
            self.cache.insert(invocation.clone(), result.clone());
        }

        Ok(result)
    }

    /// Execute the lines of an interpreted function.
    ///
    /// Returns the value of the first return line that fires, or else the
    /// value of the last assignment.
    fn run_body(
        &mut self,
        function: &'p Function,
        lines: &'p [Line],
        arguments: &[Value],
        depth: usize,
    ) -> Result<Value, EvalError> {
        let mut frame = Frame::new();
        for (&parameter, argument) in function.signature().parameters().iter().zip(arguments) {
            frame.bind(parameter, argument.clone());
        }

        let mut last = None;
        for (index, line) in lines.iter().enumerate() {
            trace!(
                function = function.name(),
                line = index,
                depth,
                "{}",
                self.program.display_line(line)
            );

            match (line.call(), line.kind()) {
                (Some(callee), LineKind::Assignment) => {
                    let value = self.call_line(function, &frame, callee, line.arguments(), depth)?;
                    frame.bind(line.target(), value.clone());
                    last = Some(value);
                }
                (Some(gate), LineKind::ConditionalReturn) => {
                    let verdict = self.call_line(function, &frame, gate, line.arguments(), depth)?;
                    if verdict.is_error() {
                        return Ok(verdict);
                    }
                    if verdict.ty != FullType::single(Type::Boolean) {
                        return Err(EvalError::GateNotBoolean {
                            function: function.name().into(),
                            gate: self.program.function(gate).name().into(),
                            found: verdict.ty,
                        });
                    }
                    if verdict.as_bool() {
                        return self.resolve(function, &frame, line.target());
                    }
                }
                _ => return self.resolve(function, &frame, line.target()),
            }
        }

        last.ok_or_else(|| EvalError::MissingResult {
            function: function.name().into(),
        })
    }

    /// Evaluate the call of a line one level deeper.
    ///
    /// An `Error` argument stands in for the call result without invoking
    /// the callee.
    fn call_line(
        &mut self,
        function: &Function,
        frame: &Frame,
        callee: FunctionId,
        arguments: &[ReferenceId],
        depth: usize,
    ) -> Result<Value, EvalError> {
        let arguments = arguments
            .iter()
            .map(|&argument| self.resolve(function, frame, argument))
            .collect::<Result<SmallVec<[Value; 4]>, _>>()?;

        if let Some(error) = arguments.iter().find(|argument| argument.is_error()) {
            return Ok(error.clone());
        }

        let invocation = Invocation {
            function: callee,
            arguments,
        };
        self.evaluate_at(&invocation, depth + 1)
    }

    /// Literal references resolve from their name; others come from the frame.
    fn resolve(
        &self,
        function: &Function,
        frame: &Frame,
        id: ReferenceId,
    ) -> Result<Value, EvalError> {
        let reference = self.program.reference(id);
        if reference.literal {
            return reference.as_literal().map_err(|source| EvalError::Literal {
                function: function.name().into(),
                source,
            });
        }

        frame
            .lookup(id)
            .cloned()
            .ok_or_else(|| EvalError::UnboundReference {
                function: function.name().into(),
                name: reference.name.clone(),
            })
    }
}
