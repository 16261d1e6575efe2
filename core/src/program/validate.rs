//! Well-formedness checks for function bodies.

use ecow::EcoString;
use hashbrown::HashSet;

use crate::types::{FullType, Type};

use super::{Function, FunctionId, Line, LineKind, Program, ProgramError, ReferenceId};

/// Check `lines` as the body of `function`.
///
/// Every non-literal reference read by a line must be a parameter or the
/// destination of a strictly earlier assignment, every call must match the
/// callee's arity and parameter types, and every way out of the body must
/// produce a value of the declared result type.
pub(crate) fn check_body(
    program: &Program,
    function: &Function,
    lines: &[Line],
) -> Result<(), ProgramError> {
    let mut checker = BodyChecker {
        program,
        function: function.name().into(),
        result_ty: program.reference(function.signature().result()).ty,
        bound: function.signature().parameters().iter().copied().collect(),
    };

    for (index, line) in lines.iter().enumerate() {
        checker.check_line(index, line)?;
    }

    // Past an unconditional return the end of the body is unreachable.
    if lines.iter().any(|line| line.kind() == LineKind::Return) {
        return Ok(());
    }

    // Falling off the end yields the value of the last assignment.
    let last_assignment = lines
        .iter()
        .enumerate()
        .rev()
        .find(|(_, line)| line.kind() == LineKind::Assignment);
    match last_assignment {
        Some((index, line)) => {
            let target = program.reference(line.target());
            checker.expect_type(index, target.name.clone(), checker.result_ty, target.ty)
        }
        None => Err(ProgramError::MissingResult {
            function: checker.function,
        }),
    }
}

struct BodyChecker<'p> {
    program: &'p Program,
    function: EcoString,
    result_ty: FullType,
    bound: HashSet<ReferenceId>,
}

impl BodyChecker<'_> {
    fn check_line(&mut self, index: usize, line: &Line) -> Result<(), ProgramError> {
        for &input in line.inputs() {
            if self.program.get_reference(input).is_none() {
                return Err(ProgramError::UnknownReference(input));
            }
        }

        match (line.call(), line.kind()) {
            (Some(callee), LineKind::Assignment) => {
                let result_ty = self.check_call(index, callee, line.arguments())?;
                let target = self.program.reference(line.target());
                if target.literal {
                    return Err(ProgramError::LiteralDestination {
                        function: self.function.clone(),
                        line: index,
                        name: target.name.clone(),
                    });
                }
                self.expect_type(index, target.name.clone(), result_ty, target.ty)?;
                self.bound.insert(line.target());
            }
            (Some(gate), LineKind::ConditionalReturn) => {
                let gate_ty = self.check_call(index, gate, line.arguments())?;
                let gate_name = self.program.function(gate).name().into();
                self.expect_type(index, gate_name, FullType::single(Type::Boolean), gate_ty)?;
                self.check_returned(index, line.target())?;
            }
            _ => self.check_returned(index, line.target())?,
        }

        Ok(())
    }

    /// Checks a call and returns the callee's result type.
    fn check_call(
        &self,
        index: usize,
        id: FunctionId,
        arguments: &[ReferenceId],
    ) -> Result<FullType, ProgramError> {
        let callee = self
            .program
            .get_function(id)
            .ok_or(ProgramError::UnknownFunction(id))?;

        if arguments.len() != callee.arity() {
            return Err(ProgramError::ArityMismatch {
                function: self.function.clone(),
                line: index,
                callee: callee.name().into(),
                expected: callee.arity(),
                found: arguments.len(),
            });
        }

        for (&argument, &parameter) in arguments.iter().zip(callee.signature().parameters()) {
            self.check_read(index, argument)?;
            let argument = self.program.reference(argument);
            let expected = self.program.reference(parameter).ty;
            self.expect_type(index, argument.name.clone(), expected, argument.ty)?;
        }

        Ok(self.program.reference(callee.signature().result()).ty)
    }

    fn check_returned(&self, index: usize, value: ReferenceId) -> Result<(), ProgramError> {
        self.check_read(index, value)?;
        let reference = self.program.reference(value);
        self.expect_type(index, reference.name.clone(), self.result_ty, reference.ty)
    }

    fn check_read(&self, index: usize, id: ReferenceId) -> Result<(), ProgramError> {
        let reference = self.program.reference(id);
        if reference.literal {
            reference
                .as_literal()
                .map(drop)
                .map_err(|source| ProgramError::Literal {
                    function: self.function.clone(),
                    line: index,
                    source,
                })
        } else if self.bound.contains(&id) {
            Ok(())
        } else {
            Err(ProgramError::UnboundReference {
                function: self.function.clone(),
                line: index,
                name: reference.name.clone(),
            })
        }
    }

    fn expect_type(
        &self,
        index: usize,
        name: EcoString,
        expected: FullType,
        found: FullType,
    ) -> Result<(), ProgramError> {
        if expected == found {
            Ok(())
        } else {
            Err(ProgramError::TypeMismatch {
                function: self.function.clone(),
                line: index,
                name,
                expected,
                found,
            })
        }
    }
}
